//! Gallery lightbox navigation
//!
//! The lightbox position logic as a pure state machine: clamped index
//! arithmetic over a fixed-size image list. No wrapping at the edges; the
//! edge buttons simply disappear there.

/// Horizontal gallery scroll step: item width plus gap, in pixels.
pub const SCROLL_STEP: i32 = 320;

/// Navigation intents the lightbox reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Prev,
    Next,
    Close,
}

/// Map a keyboard key to a navigation action while the lightbox is open.
#[must_use]
pub fn action_for_key(key: &str) -> Option<NavAction> {
    match key {
        "ArrowLeft" => Some(NavAction::Prev),
        "ArrowRight" => Some(NavAction::Next),
        "Escape" => Some(NavAction::Close),
        _ => None,
    }
}

/// Scroll delta for the horizontal gallery strip buttons.
#[must_use]
pub const fn scroll_delta(towards_end: bool) -> i32 {
    if towards_end {
        SCROLL_STEP
    } else {
        -SCROLL_STEP
    }
}

/// Lightbox position within a gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryNav {
    index: usize,
    count: usize,
}

impl GalleryNav {
    /// Open the lightbox on `index` within a gallery of `count` images.
    ///
    /// Returns `None` for an empty gallery or an out-of-range index.
    #[must_use]
    pub const fn open(count: usize, index: usize) -> Option<Self> {
        if count == 0 || index >= count {
            None
        } else {
            Some(Self { index, count })
        }
    }

    /// Current zero-based position
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of images in the gallery
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Whether a previous image exists (drives the prev button)
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.index > 0
    }

    /// Whether a next image exists (drives the next button)
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.index + 1 < self.count
    }

    /// Step to the previous image; reports whether the index moved.
    pub fn prev(&mut self) -> bool {
        if self.has_prev() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Step to the next image; reports whether the index moved.
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Apply a navigation action; `Close` never moves the index.
    pub fn apply(&mut self, action: NavAction) -> bool {
        match action {
            NavAction::Prev => self.prev(),
            NavAction::Next => self.next(),
            NavAction::Close => false,
        }
    }

    /// Position label, e.g. `3 / 7`.
    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.count)
    }
}
