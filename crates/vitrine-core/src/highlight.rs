//! Active-section tracking for the sidebar
//!
//! Exactly one nav link is highlighted at a time: the section most
//! visible inside the middle band of the viewport. Clicking a link
//! activates it immediately and suppresses visibility updates for a
//! short window, so the smooth scroll that follows cannot flicker the
//! highlight through every section it passes.

use std::time::{Duration, Instant};

use crate::content::SectionId;

/// How long visibility updates are ignored after a nav click.
pub const SUPPRESS_WINDOW: Duration = Duration::from_millis(1000);

/// One measured section from an observation pass
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilitySample {
    pub id: SectionId,
    pub ratio: f64,
}

impl VisibilitySample {
    pub fn new(id: impl Into<SectionId>, ratio: f64) -> Self {
        Self {
            id: id.into(),
            ratio,
        }
    }
}

/// Highlighter input mode
#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    /// Following visibility observations
    Ambient,
    /// Ignoring observations until the deadline passes
    Suppressed { until: Instant },
}

/// Tracks which section the sidebar should highlight
#[derive(Debug, Clone)]
pub struct SectionHighlighter {
    sections: Vec<SectionId>,
    active: Option<SectionId>,
    mode: Mode,
}

impl SectionHighlighter {
    /// Create a highlighter over the given sections, in document order
    ///
    /// With no sections the highlighter is inert: nothing ever becomes
    /// active and clicks are ignored.
    pub fn new(sections: Vec<SectionId>) -> Self {
        Self {
            sections,
            active: None,
            mode: Mode::Ambient,
        }
    }

    /// The currently highlighted section, if any
    pub fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    /// Whether `id` is the highlighted section
    pub fn is_active(&self, id: &SectionId) -> bool {
        self.active.as_ref() == Some(id)
    }

    /// Whether observations are currently being ignored
    pub fn is_suppressed(&self, now: Instant) -> bool {
        match self.mode {
            Mode::Ambient => false,
            Mode::Suppressed { until } => now < until,
        }
    }

    /// Record a nav link click
    ///
    /// The clicked section becomes active in the same update that opens
    /// the suppression window, so there is no frame where the old
    /// highlight lingers. Clicks on unknown sections are ignored.
    pub fn note_click(&mut self, target: &SectionId, now: Instant) -> bool {
        if !self.sections.contains(target) {
            tracing::debug!(section = %target, "ignoring click on untracked section");
            return false;
        }
        self.active = Some(target.clone());
        self.mode = Mode::Suppressed {
            until: now + SUPPRESS_WINDOW,
        };
        tracing::debug!(section = %target, "nav click, suppressing observations");
        true
    }

    /// Feed one batch of visibility samples
    ///
    /// Returns `true` when the active section changed. The batch winner
    /// is the intersecting sample with the highest ratio; on exact ties
    /// the earliest sample in the batch wins. A batch with nothing
    /// intersecting leaves the current highlight in place.
    pub fn observe(&mut self, samples: &[VisibilitySample], now: Instant) -> bool {
        if self.sections.is_empty() {
            return false;
        }
        match self.mode {
            Mode::Suppressed { until } if now < until => return false,
            Mode::Suppressed { .. } => {
                self.mode = Mode::Ambient;
            }
            Mode::Ambient => {}
        }

        let mut winner: Option<&VisibilitySample> = None;
        for sample in samples {
            if sample.ratio <= 0.0 {
                continue;
            }
            if !self.sections.contains(&sample.id) {
                continue;
            }
            match winner {
                Some(best) if sample.ratio > best.ratio => winner = Some(sample),
                Some(_) => {}
                None => winner = Some(sample),
            }
        }

        match winner {
            Some(sample) if self.active.as_ref() != Some(&sample.id) => {
                tracing::trace!(section = %sample.id, ratio = sample.ratio, "active section changed");
                self.active = Some(sample.id.clone());
                true
            }
            _ => false,
        }
    }
}
