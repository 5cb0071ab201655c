//! Fullscreen image viewer state
//!
//! The viewer is a two-state machine: closed, or open at an image index.
//! Navigation wraps circularly, so next from the last image lands on the
//! first. All transitions are guarded by the current state; navigation
//! and close requests while closed are ignored.

/// Viewer state: closed, or open showing one gallery image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerState {
    Closed,
    Open { index: usize },
}

/// State machine for the fullscreen gallery viewer
#[derive(Debug, Clone)]
pub struct Lightbox {
    len: usize,
    state: ViewerState,
}

impl Lightbox {
    /// Create a closed viewer over a gallery of `len` images
    ///
    /// With an empty gallery the viewer is inert and never opens.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            state: ViewerState::Closed,
        }
    }

    /// Number of images the viewer navigates over
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the gallery behind the viewer is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current state
    pub fn state(&self) -> ViewerState {
        self.state
    }

    /// Whether the viewer is showing an image
    ///
    /// While this is true the page behind the overlay must not scroll.
    pub fn is_open(&self) -> bool {
        matches!(self.state, ViewerState::Open { .. })
    }

    /// Index of the displayed image, if open
    pub fn current(&self) -> Option<usize> {
        match self.state {
            ViewerState::Open { index } => Some(index),
            ViewerState::Closed => None,
        }
    }

    /// Open the viewer at `index`
    ///
    /// Out-of-range indices are ignored, which also covers the empty
    /// gallery. Returns `true` when the viewer opened.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.len {
            tracing::debug!(index, len = self.len, "ignoring open past gallery end");
            return false;
        }
        self.state = ViewerState::Open { index };
        true
    }

    /// Close the viewer; a no-op when already closed
    pub fn close(&mut self) {
        self.state = ViewerState::Closed;
    }

    /// Advance to the next image, wrapping to the first after the last
    ///
    /// Ignored while closed. Returns the new index when it moved.
    pub fn next(&mut self) -> Option<usize> {
        match self.state {
            ViewerState::Open { index } => {
                let next = (index + 1) % self.len;
                self.state = ViewerState::Open { index: next };
                Some(next)
            }
            ViewerState::Closed => None,
        }
    }

    /// Step to the previous image, wrapping to the last before the first
    ///
    /// Ignored while closed. Returns the new index when it moved.
    pub fn prev(&mut self) -> Option<usize> {
        match self.state {
            ViewerState::Open { index } => {
                let prev = (index + self.len - 1) % self.len;
                self.state = ViewerState::Open { index: prev };
                Some(prev)
            }
            ViewerState::Closed => None,
        }
    }

    /// Position label ("3 / 7") for the open viewer, one-based
    pub fn counter_label(&self) -> Option<String> {
        self.current()
            .map(|index| format!("{} / {}", index + 1, self.len))
    }
}
