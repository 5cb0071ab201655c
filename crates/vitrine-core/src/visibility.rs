//! Viewport visibility geometry
//!
//! Pure overlap math between element rectangles and horizontal viewport
//! bands. The app measures client rects asynchronously and feeds them
//! through here; everything in this module is synchronous and testable
//! without a renderer.

/// Fraction of the viewport height trimmed off the top and bottom of the
/// band used for section highlighting. A section counts as visible only
/// inside the middle 60% of the viewport.
pub const SECTION_BAND_INSET: f64 = 0.20;

/// Pixels trimmed off the bottom of the band used for reveal animations,
/// so elements start animating slightly before they fully enter view.
pub const REVEAL_BOTTOM_INSET_PX: f64 = 50.0;

/// Minimum visibility ratio at which a reveal target animates in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// An element rectangle in viewport coordinates
///
/// `top` is the distance from the viewport top edge (negative when the
/// element has scrolled past it).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRect {
    pub top: f64,
    pub height: f64,
}

impl ElementRect {
    /// Create a rect from its top edge and height
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Bottom edge in viewport coordinates
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// A horizontal band of the viewport, in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub top: f64,
    pub bottom: f64,
}

impl Band {
    /// The band sections are highlighted against: the viewport with 20%
    /// trimmed off the top and bottom.
    pub fn section(viewport_height: f64) -> Self {
        let inset = viewport_height * SECTION_BAND_INSET;
        Self {
            top: inset,
            bottom: viewport_height - inset,
        }
    }

    /// The band reveal targets animate against: the viewport with 50px
    /// trimmed off the bottom.
    pub fn reveal(viewport_height: f64) -> Self {
        Self {
            top: 0.0,
            bottom: (viewport_height - REVEAL_BOTTOM_INSET_PX).max(0.0),
        }
    }

    /// Band height, never negative
    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }
}

/// Fraction of `rect` that overlaps `band`, in `[0, 1]`
///
/// Zero-height rects have ratio 0, so they never count as visible.
pub fn visibility_ratio(rect: ElementRect, band: Band) -> f64 {
    if rect.height <= 0.0 {
        return 0.0;
    }
    let overlap_top = rect.top.max(band.top);
    let overlap_bottom = rect.bottom().min(band.bottom);
    let overlap = (overlap_bottom - overlap_top).max(0.0);
    (overlap / rect.height).clamp(0.0, 1.0)
}

/// Whether any part of `rect` overlaps `band`
pub fn is_intersecting(rect: ElementRect, band: Band) -> bool {
    visibility_ratio(rect, band) > 0.0
}
