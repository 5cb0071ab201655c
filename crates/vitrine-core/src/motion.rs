//! Scroll and pointer motion helpers
//!
//! Frame gating for scroll handlers, scroll direction tracking, the 3D
//! card tilt math, and staggered animation delays. All pure; the app
//! wires these to real pointer and scroll events.

use std::time::{Duration, Instant};

/// Minimum spacing between processed scroll events, roughly one frame
/// at 60Hz.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Divisor applied to pointer offsets when computing tilt angles.
pub const TILT_DIVISOR: f64 = 10.0;

/// Per-item delay step for staggered reveal animations, in seconds.
pub const STAGGER_STEP_SECS: f64 = 0.1;

/// Rate limiter that lets at most one event through per frame interval
///
/// Scroll events arrive much faster than they are worth processing;
/// everything inside an interval after a processed event is dropped.
#[derive(Debug, Clone)]
pub struct FrameGate {
    interval: Duration,
    last: Option<Instant>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::with_interval(FRAME_INTERVAL)
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Try to pass an event through the gate
    ///
    /// The first event always passes; later ones pass only when a full
    /// interval has elapsed since the last passed event.
    pub fn try_pass(&mut self, now: Instant) -> bool {
        let pass = match self.last {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        };
        if pass {
            self.last = Some(now);
        }
        pass
    }
}

impl Default for FrameGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Which way the page moved since the last scroll sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Tracks scroll position between samples and reports direction
#[derive(Debug, Clone, Default)]
pub struct ScrollWatcher {
    last_y: f64,
}

impl ScrollWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scroll offset and report the direction of travel
    ///
    /// An unchanged offset reports `Up`, matching a handler that only
    /// reacts to downward movement.
    pub fn observe(&mut self, y: f64) -> ScrollDirection {
        let direction = if y > self.last_y {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        self.last_y = y;
        direction
    }

    /// Last recorded offset
    pub fn last_offset(&self) -> f64 {
        self.last_y
    }
}

/// A 3D tilt derived from the pointer position over a card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Tilt for a pointer at `(x, y)` within a card of the given size
    ///
    /// The card leans toward the pointer: below center pitches the top
    /// away, left of center yaws the right edge away.
    pub fn at(x: f64, y: f64, width: f64, height: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            rotate_x: (y - center_y) / TILT_DIVISOR,
            rotate_y: (center_x - x) / TILT_DIVISOR,
        }
    }

    /// The neutral tilt applied when the pointer leaves
    pub fn rest() -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
        }
    }

    /// Whether this is the neutral tilt
    pub fn is_rest(&self) -> bool {
        self.rotate_x == 0.0 && self.rotate_y == 0.0
    }

    /// CSS transform for this tilt
    ///
    /// The rest tilt keeps an explicit zero transform rather than none,
    /// so leaving the card animates back through the same property.
    pub fn transform(&self) -> String {
        if self.is_rest() {
            "perspective(1000px) rotateX(0deg) rotateY(0deg) translateZ(0px)".to_string()
        } else {
            format!(
                "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) translateZ(10px)",
                self.rotate_x, self.rotate_y
            )
        }
    }
}

/// Animation delay for the item at `index`, as a CSS duration
///
/// Items later in the page start their reveal later, producing the
/// cascade effect. The index counts items across the whole page.
pub fn stagger_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * STAGGER_STEP_SECS)
}
