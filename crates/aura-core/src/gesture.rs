//! Hand-gesture interpretation.
//!
//! The tracker that finds hand landmarks lives outside this crate. What comes
//! in is one [`HandSample`] per observation (or `None` when no hand is
//! visible), and what goes out is a [`GestureSignals`] value the stage can
//! apply directly: a continuous tension plus two edge-triggered events.
//!
//! * **Clap**: tension jumps from below 0.35 to above 0.8 between two
//!   consecutive observations (an open hand snapping shut).
//! * **Advance shape**: thumb tip and middle fingertip closer than 0.05
//!   (normalized image units), at most once per 1.5 s.

use glam::Vec3;

use crate::constants::*;

pub const LANDMARK_COUNT: usize = 21;
pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;
pub const FINGERTIPS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// The 21 landmarks of one tracked hand.
pub type HandLandmarks = [Vec3; LANDMARK_COUNT];

/// Hand closure in \[0, 1\] from the mean fingertip reach relative to palm length.
pub fn tension_from_landmarks(hand: &HandLandmarks) -> f32 {
    let wrist = hand[WRIST];
    let palm = wrist.distance(hand[MIDDLE_MCP]);
    if palm <= f32::EPSILON {
        return 0.0;
    }
    let reach = FINGERTIPS
        .iter()
        .map(|&i| wrist.distance(hand[i]))
        .sum::<f32>()
        / FINGERTIPS.len() as f32;
    let ratio = reach / palm;
    ((HAND_OPEN_RATIO - ratio) / (HAND_OPEN_RATIO - HAND_CLOSED_RATIO)).clamp(0.0, 1.0)
}

pub fn pinch_distance(hand: &HandLandmarks) -> f32 {
    hand[THUMB_TIP].distance(hand[MIDDLE_TIP])
}

/// Reduced observation of one hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandSample {
    pub tension: f32,
    pub pinch_distance: f32,
}

impl HandSample {
    pub fn from_landmarks(hand: &HandLandmarks) -> Self {
        Self {
            tension: tension_from_landmarks(hand),
            pinch_distance: pinch_distance(hand),
        }
    }
}

/// Fires on an open-to-closed jump between consecutive observations.
#[derive(Clone, Debug, Default)]
pub struct ClapDetector {
    previous: f32,
}

impl ClapDetector {
    pub fn observe(&mut self, tension: f32) -> bool {
        let fired = self.previous < CLAP_FROM_BELOW && tension > CLAP_TO_ABOVE;
        self.previous = tension;
        fired
    }
}

/// Fires when the pinch closes, then stays quiet for the cooldown.
#[derive(Clone, Debug)]
pub struct PinchDetector {
    cooldown_until: f64,
}

impl Default for PinchDetector {
    fn default() -> Self {
        Self {
            cooldown_until: f64::NEG_INFINITY,
        }
    }
}

impl PinchDetector {
    pub fn observe(&mut self, distance: f32, now_sec: f64) -> bool {
        if distance < PINCH_THRESHOLD && now_sec > self.cooldown_until {
            self.cooldown_until = now_sec + PINCH_COOLDOWN_SEC;
            return true;
        }
        false
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSignals {
    pub tracking: bool,
    pub tension: f32,
    pub clap: bool,
    pub advance_shape: bool,
}

#[derive(Clone, Debug, Default)]
pub struct GestureInterpreter {
    clap: ClapDetector,
    pinch: PinchDetector,
}

impl GestureInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpret one observation taken at `now_sec`.
    ///
    /// With no hand in view the result is a relaxed, untracked signal: tension
    /// 0 and no events.
    pub fn observe(&mut self, sample: Option<HandSample>, now_sec: f64) -> GestureSignals {
        let Some(sample) = sample else {
            return GestureSignals::default();
        };
        let tension = sample.tension.clamp(0.0, 1.0);
        let clap = self.clap.observe(tension);
        let advance_shape = self.pinch.observe(sample.pinch_distance, now_sec);
        if clap {
            log::debug!("[gesture] clap");
        }
        if advance_shape {
            log::debug!("[gesture] pinch");
        }
        GestureSignals {
            tracking: true,
            tension,
            clap,
            advance_shape,
        }
    }
}
