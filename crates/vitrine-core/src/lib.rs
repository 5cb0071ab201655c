//! Vitrine Core Library
//!
//! State machines and geometry for the Vitrine portfolio viewer.
//!
//! ## Overview
//!
//! Vitrine renders a single-page portfolio: a sidebar that tracks the
//! section you are reading, cards that fade in as they scroll into view,
//! and a fullscreen gallery viewer with keyboard navigation. This crate
//! holds everything that can be reasoned about without a renderer:
//! content loading, visibility math, and the interaction state machines.
//! The desktop app feeds it measured rectangles and input events and
//! renders whatever state comes back.
//!
//! ## Core Principles
//!
//! - **Pure transitions**: every state change is a plain method taking
//!   explicit timestamps, so behavior is unit-testable end to end
//! - **Graceful degradation**: missing sections, dangling nav links and
//!   empty galleries disable the affected feature, never the page
//!
//! ## Quick Start
//!
//! ```
//! use std::time::Instant;
//! use vitrine_core::{PortfolioContent, SectionHighlighter, VisibilitySample};
//!
//! let content = PortfolioContent::sample();
//! let mut highlighter = SectionHighlighter::new(content.resolved_section_ids());
//!
//! highlighter.observe(
//!     &[VisibilitySample::new("about", 0.8), VisibilitySample::new("projects", 0.2)],
//!     Instant::now(),
//! );
//! assert_eq!(highlighter.active().map(|id| id.as_str()), Some("about"));
//! ```

pub mod content;
pub mod error;
pub mod gallery;
pub mod highlight;
pub mod lightbox;
pub mod motion;
pub mod reveal;
pub mod visibility;

// Re-exports
pub use content::{GalleryImage, InfoItem, NavLink, PortfolioContent, Section, SectionId};
pub use error::{VitrineError, VitrineResult};
pub use gallery::{Gallery, GalleryEntry};
pub use highlight::{SectionHighlighter, VisibilitySample, SUPPRESS_WINDOW};
pub use lightbox::{Lightbox, ViewerState};
pub use motion::{
    stagger_delay, FrameGate, ScrollDirection, ScrollWatcher, Tilt, FRAME_INTERVAL,
};
pub use reveal::RevealLatch;
pub use visibility::{
    is_intersecting, visibility_ratio, Band, ElementRect, REVEAL_THRESHOLD, SECTION_BAND_INSET,
};
