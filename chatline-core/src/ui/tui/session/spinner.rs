//! The typing indicator shown while a request is in flight.

use std::time::Instant;

use crate::config::constants::ui;

/// Spinner animation frames (braille pattern).
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Animated placeholder rendered at the end of the transcript between
/// request dispatch and response arrival. At most one instance exists; the
/// session owns exactly this state.
#[derive(Clone, Debug)]
pub(crate) struct TypingSpinner {
    is_active: bool,
    frame_index: usize,
    last_update: Instant,
}

impl TypingSpinner {
    pub fn new() -> Self {
        Self {
            is_active: false,
            frame_index: 0,
            last_update: Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.is_active = true;
        self.frame_index = 0;
        self.last_update = Instant::now();
    }

    pub fn stop(&mut self) {
        self.is_active = false;
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Advance the animation; returns true when a redraw is warranted.
    pub fn update(&mut self) -> bool {
        if self.is_active
            && self.last_update.elapsed().as_millis() >= u128::from(ui::SPINNER_INTERVAL_MS)
        {
            self.frame_index = (self.frame_index + 1) % SPINNER_FRAMES.len();
            self.last_update = Instant::now();
            return true;
        }
        false
    }

    pub fn frame(&self) -> &'static str {
        SPINNER_FRAMES[self.frame_index]
    }
}

impl Default for TypingSpinner {
    fn default() -> Self {
        Self::new()
    }
}
