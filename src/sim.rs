//! Mouse + keyboard stand-in for a tracked hand.
//!
//! The cursor's height over the window is the hand closure (top = closed,
//! bottom = open) and the pinch key closes thumb and middle finger. Samples go
//! through the same [`GestureInterpreter`](aura_core::GestureInterpreter) as a
//! real tracker would feed, so clap and pinch detection behave identically.

use aura_core::HandSample;

use crate::constants::{SIM_PINCH_CLOSED, SIM_PINCH_OPEN};

#[derive(Clone, Debug, Default)]
pub struct SimulatedHand {
    present: bool,
    tension: f32,
    pinching: bool,
}

impl SimulatedHand {
    /// Cursor moved to `y` pixels down a viewport `height` pixels tall.
    pub fn set_cursor(&mut self, y: f64, height: u32) {
        let h = height.max(1) as f64;
        self.tension = (1.0 - (y / h).clamp(0.0, 1.0)) as f32;
        self.present = true;
    }

    pub fn set_present(&mut self, present: bool) {
        self.present = present;
    }

    pub fn set_pinching(&mut self, pinching: bool) {
        self.pinching = pinching;
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Current observation, `None` while the cursor is outside the window.
    pub fn sample(&self) -> Option<HandSample> {
        self.present.then(|| HandSample {
            tension: self.tension,
            pinch_distance: if self.pinching {
                SIM_PINCH_CLOSED
            } else {
                SIM_PINCH_OPEN
            },
        })
    }
}
