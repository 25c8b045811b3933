//! Transient view state.
//!
//! Plain structs driven by event handlers and timers; components keep them
//! in signals for as long as they are mounted.

/// How long a pressed CTA or feature card stays pressed before acting.
pub const PRESS_FEEDBACK_MS: u64 = 150;
/// Click flash on testimonial cards.
pub const CLICK_FEEDBACK_MS: u64 = 200;
/// Detail sheet slide-out.
pub const CLOSE_ANIMATION_MS: u64 = 200;
/// Delay between hiding the sheet and forgetting the selection.
pub const CLEAR_SELECTION_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetPhase {
    Closed,
    Open,
    Closing,
}

/// Which feature detail sheet is showing.
///
/// Closing takes two steps: the sheet animates out for
/// [`CLOSE_ANIMATION_MS`], then the selection is kept for another
/// [`CLEAR_SELECTION_MS`] so the content does not vanish mid-transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureFocus {
    selected: Option<&'static str>,
    open: bool,
    closing: bool,
}

impl FeatureFocus {
    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    pub fn phase(&self) -> SheetPhase {
        match (self.open, self.closing) {
            (false, _) => SheetPhase::Closed,
            (true, false) => SheetPhase::Open,
            (true, true) => SheetPhase::Closing,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_closing(&self) -> bool {
        self.open && self.closing
    }

    /// Body scroll is locked while the sheet is on screen.
    pub fn locks_scroll(&self) -> bool {
        self.open
    }

    pub fn open(&mut self, id: &'static str) {
        self.selected = Some(id);
        self.open = true;
        self.closing = false;
    }

    /// Starts the close animation. False if nothing to close or already
    /// closing, so repeated Escape presses schedule one close only.
    pub fn request_close(&mut self) -> bool {
        if !self.open || self.closing {
            return false;
        }
        self.closing = true;
        true
    }

    /// End of the close animation: hide the sheet.
    pub fn finish_close(&mut self) {
        if self.closing {
            self.open = false;
            self.closing = false;
        }
    }

    /// Forgets the selection unless a sheet was reopened meanwhile.
    pub fn clear_selection(&mut self) {
        if !self.open {
            self.selected = None;
        }
    }
}

/// Press feedback shared by a group of buttons or cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PressState {
    pressed: Option<&'static str>,
}

impl PressState {
    pub fn press(&mut self, id: &'static str) {
        self.pressed = Some(id);
    }

    pub fn release(&mut self) {
        self.pressed = None;
    }

    pub fn is_pressed(&self, id: &str) -> bool {
        self.pressed == Some(id)
    }

    pub fn pressed(&self) -> Option<&'static str> {
        self.pressed
    }
}

/// Keys that dismiss the detail sheet.
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

/// Keys that activate a focusable card.
pub fn is_activate_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}
