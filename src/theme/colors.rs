//! Color constants for the Vitrine theme
//!
//! Rust-side mirror of the CSS custom properties in the global
//! stylesheet. Quiet gallery-dark palette with a single brass accent.

#![allow(dead_code)]

// === INK (Backgrounds) ===
pub const INK: &str = "#101014";
pub const SURFACE: &str = "#18181f";
pub const SURFACE_HOVER: &str = "#20202a";
pub const BORDER: &str = "#2a2a35";

// === BRASS (Accent) ===
pub const BRASS: &str = "#c9a227";
pub const BRASS_SOFT: &str = "rgba(201, 162, 39, 0.25)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#ececf1";
pub const TEXT_SECONDARY: &str = "rgba(236, 236, 241, 0.72)";
pub const TEXT_MUTED: &str = "rgba(236, 236, 241, 0.45)";

// === SEMANTIC ===
pub const DANGER: &str = "#e2556a";
