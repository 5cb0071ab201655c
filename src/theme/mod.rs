//! Theme for Vitrine
//!
//! Global stylesheet injected at the app root, plus the palette
//! constants it is built from.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
