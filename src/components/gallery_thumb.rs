//! Gallery Images
//!
//! Thumbnails for the card grids and the full-size viewer image.
//! Remote URLs go straight to the renderer; local files are decoded
//! off the UI thread and delivered as base64 data URIs.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use dioxus::prelude::*;
use vitrine_core::{GalleryImage, VitrineError, VitrineResult};

use crate::context::use_viewer;

/// Longest edge of a grid thumbnail, in pixels
const THUMB_MAX_DIM: u32 = 512;

/// Resolve an image path against the content directory
fn resolve_path(src: &str) -> PathBuf {
    let path = Path::new(src);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        crate::content_dir().join(path)
    }
}

/// Decode a local image, downscale it and re-encode as a PNG data URI
fn thumbnail_data_uri(path: &Path) -> VitrineResult<String> {
    let img = image::open(path)
        .map_err(|e| VitrineError::ImageUnreadable(format!("{}: {}", path.display(), e)))?;
    let thumb = img.thumbnail(THUMB_MAX_DIM, THUMB_MAX_DIM);
    let mut encoded = Vec::new();
    thumb
        .write_to(&mut Cursor::new(&mut encoded), image::ImageFormat::Png)
        .map_err(|e| VitrineError::ImageUnreadable(format!("{}: {}", path.display(), e)))?;
    use base64::Engine;
    let base64 = base64::engine::general_purpose::STANDARD.encode(&encoded);
    Ok(format!("data:image/png;base64,{}", base64))
}

/// Read a local image at original size into a data URI with its real mime
fn full_data_uri(path: &Path) -> VitrineResult<String> {
    let bytes = std::fs::read(path)?;
    let mime = image::guess_format(&bytes)
        .map(|format| format.to_mime_type())
        .map_err(|e| VitrineError::ImageUnreadable(format!("{}: {}", path.display(), e)))?;
    use base64::Engine;
    let base64 = base64::engine::general_purpose::STANDARD.encode(&bytes);
    Ok(format!("data:{};base64,{}", mime, base64))
}

/// One clickable thumbnail in a card's gallery grid
///
/// Clicking opens the fullscreen viewer at the image's position in the
/// page-ordered gallery. A thumbnail with no gallery position renders
/// but ignores clicks.
#[component]
pub fn GalleryThumb(image: GalleryImage, gallery_index: Option<usize>) -> Element {
    let mut viewer = use_viewer();
    let mut src = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let alt = image.description.clone().unwrap_or_default();

    // Load on mount; remote URLs skip the decode path entirely.
    let source = image.clone();
    use_effect(move || {
        let source = source.clone();
        spawn(async move {
            loading.set(true);
            error.set(None);

            if source.is_remote() {
                src.set(Some(source.src));
                loading.set(false);
                return;
            }

            let path = resolve_path(&source.src);
            match tokio::task::spawn_blocking(move || thumbnail_data_uri(&path)).await {
                Ok(Ok(uri)) => {
                    src.set(Some(uri));
                    loading.set(false);
                }
                Ok(Err(e)) => {
                    tracing::warn!("Thumbnail load failed: {}", e);
                    error.set(Some(e.to_string()));
                    loading.set(false);
                }
                Err(e) => {
                    error.set(Some(format!("Image task failed: {}", e)));
                    loading.set(false);
                }
            }
        });
    });

    let label = if alt.is_empty() {
        "Open image".to_string()
    } else {
        format!("Open image: {}", alt)
    };

    rsx! {
        button {
            class: "gallery-thumb",
            "aria-label": "{label}",
            onclick: move |_| {
                if let Some(index) = gallery_index {
                    viewer.write().open(index);
                }
            },
            if loading() {
                div { class: "thumb-placeholder",
                    div { class: "loading-spinner" }
                }
            } else if let Some(err) = error() {
                div { class: "thumb-placeholder error", title: "{err}", "image unavailable" }
            } else if let Some(uri) = src() {
                img { class: "thumb-img", src: "{uri}", alt: "{alt}" }
            }
        }
    }
}

/// Full-size image inside the viewer
///
/// The overlay stays mounted across prev/next, so the entry arrives as
/// a signal; the load effect tracks it and restarts on every swap.
#[component]
pub fn FullImage(image: ReadOnlySignal<GalleryImage>) -> Element {
    let mut src = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    use_effect(move || {
        // Read before spawning; reads inside the task are not tracked.
        let source = image();
        src.set(None);
        error.set(None);
        loading.set(true);
        spawn(async move {
            if source.is_remote() {
                src.set(Some(source.src));
                loading.set(false);
                return;
            }

            let path = resolve_path(&source.src);
            match tokio::task::spawn_blocking(move || full_data_uri(&path)).await {
                Ok(Ok(uri)) => {
                    src.set(Some(uri));
                    loading.set(false);
                }
                Ok(Err(e)) => {
                    tracing::warn!("Viewer image load failed: {}", e);
                    error.set(Some(e.to_string()));
                    loading.set(false);
                }
                Err(e) => {
                    error.set(Some(format!("Image task failed: {}", e)));
                    loading.set(false);
                }
            }
        });
    });

    let alt = image().description.unwrap_or_default();

    rsx! {
        if loading() {
            div { class: "lightbox-loading",
                div { class: "loading-spinner" }
            }
        } else if let Some(err) = error() {
            div { class: "lightbox-error", "{err}" }
        } else if let Some(uri) = src() {
            img { class: "lightbox-image", src: "{uri}", alt: "{alt}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path_keeps_absolute() {
        let abs = if cfg!(windows) { "C:\\img\\a.png" } else { "/img/a.png" };
        assert_eq!(resolve_path(abs), PathBuf::from(abs));
    }

    #[test]
    fn test_resolve_path_joins_relative() {
        let resolved = resolve_path("photos/alley.png");
        assert!(resolved.ends_with("photos/alley.png"));
    }
}
