//! Shared UI state for Vitrine.
//!
//! Provides the interaction state machines to all components via
//! use_context, plus accessors for the content loaded at startup.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| viewer);
//!
//! // In child components
//! let mut viewer = use_viewer();
//! viewer.write().open(3);
//! ```

use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use dioxus::prelude::*;
use vitrine_core::{
    Gallery, Lightbox, PortfolioContent, RevealLatch, SectionHighlighter, SectionId,
};

/// Mounted element handles for the visibility passes.
///
/// Components insert their handles on mount; the home page walks this
/// registry on every gated scroll event to measure rects and feed the
/// highlighter and reveal latch.
#[derive(Clone, Default)]
pub struct MeasureRegistry {
    /// The scroll container the viewport bands are computed against
    pub container: Option<Rc<MountedData>>,
    /// Section elements by id
    pub sections: HashMap<SectionId, Rc<MountedData>>,
    /// Reveal targets by key
    pub reveals: HashMap<String, Rc<MountedData>>,
}

/// Get the portfolio content loaded at startup.
pub fn content() -> &'static PortfolioContent {
    crate::content()
}

/// Get the flattened gallery the viewer navigates.
pub fn gallery() -> &'static Gallery {
    crate::gallery()
}

/// Get the base directory for relative image paths.
pub fn content_dir() -> PathBuf {
    crate::content_dir()
}

/// Whether animations are disabled (set via --reduced-motion).
pub fn reduced_motion() -> bool {
    crate::reduced_motion()
}

/// Hook to access the section highlighter from context.
///
/// The sidebar reads the active section from it; the home page feeds it
/// observation batches and click notifications.
pub fn use_highlighter() -> Signal<SectionHighlighter> {
    use_context::<Signal<SectionHighlighter>>()
}

/// Hook to access the gallery viewer state machine from context.
pub fn use_viewer() -> Signal<Lightbox> {
    use_context::<Signal<Lightbox>>()
}

/// Hook to access the reveal latch from context.
pub fn use_reveal() -> Signal<RevealLatch> {
    use_context::<Signal<RevealLatch>>()
}

/// Hook to access the mobile menu open flag from context.
pub fn use_menu_open() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

/// Hook to access the measurement registry from context.
pub fn use_measure_registry() -> Signal<MeasureRegistry> {
    use_context::<Signal<MeasureRegistry>>()
}
