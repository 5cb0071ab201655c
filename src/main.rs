#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use vitrine_core::{Gallery, PortfolioContent};

/// Loaded page content, set once at startup
static CONTENT: OnceLock<PortfolioContent> = OnceLock::new();

/// Flattened gallery derived from the content
static GALLERY: OnceLock<Gallery> = OnceLock::new();

/// Directory relative image paths resolve against
static CONTENT_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Whether animations are disabled, set from command line
static REDUCED_MOTION: OnceLock<bool> = OnceLock::new();

/// Get the loaded portfolio content
pub fn content() -> &'static PortfolioContent {
    CONTENT.get_or_init(PortfolioContent::sample)
}

/// Get the flattened, page-ordered gallery
pub fn gallery() -> &'static Gallery {
    GALLERY.get_or_init(|| Gallery::from_content(content()))
}

/// Get the base directory for relative image paths
pub fn content_dir() -> PathBuf {
    CONTENT_DIR
        .get()
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Whether scroll reveals, tilt and smooth scrolling are disabled
pub fn reduced_motion() -> bool {
    REDUCED_MOTION.get().copied().unwrap_or(false)
}

/// Vitrine - Portfolio Viewer
#[derive(Parser, Debug)]
#[command(name = "vitrine-desktop")]
#[command(about = "Vitrine - Single-page portfolio viewer")]
struct Args {
    /// Content file (JSON). Defaults to content.json in the data dir,
    /// falling back to the built-in sample portfolio.
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Disable scroll reveals, card tilt and smooth scrolling
    #[arg(long)]
    reduced_motion: bool,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1180.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let default_path = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vitrine")
        .join("content.json");

    // Explicit flag first, then the data dir copy, then the sample.
    // A broken content file degrades to the sample rather than aborting.
    let (content, source) = match &args.content {
        Some(path) => load_or_sample(path),
        None if default_path.exists() => load_or_sample(&default_path),
        None => {
            tracing::info!("No content file found, using the sample portfolio");
            (PortfolioContent::sample(), None)
        }
    };

    let content_dir = source
        .as_deref()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let image_count: usize = content.sections.iter().map(|s| s.images.len()).sum();
    tracing::info!(
        "Loaded content for '{}': {} sections, {} nav links, {} images",
        content.name,
        content.sections.len(),
        content.nav.len(),
        image_count
    );

    let title = format!("Vitrine - {}", content.name);

    let _ = CONTENT.set(content);
    let _ = CONTENT_DIR.set(content_dir);
    let _ = REDUCED_MOTION.set(args.reduced_motion);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

/// Load a content file, degrading to the sample on any error
fn load_or_sample(path: &Path) -> (PortfolioContent, Option<PathBuf>) {
    match PortfolioContent::load(path) {
        Ok(content) => (content, Some(path.to_path_buf())),
        Err(e) => {
            tracing::warn!("Failed to load {:?}, using the sample portfolio: {}", path, e);
            (PortfolioContent::sample(), None)
        }
    }
}
