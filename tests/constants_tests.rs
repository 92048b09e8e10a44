// Host-side tests for constants and their mathematical relationships.

use aura::constants::*;
use aura_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn per_frame_rates_are_fractions() {
    assert!(MORPH_STEP_PER_FRAME > 0.0 && MORPH_STEP_PER_FRAME <= 1.0);
    assert!(TENSION_SMOOTHING > 0.0 && TENSION_SMOOTHING < 1.0);
    assert!(EXPLOSION_DECAY > 0.0 && EXPLOSION_DECAY < 1.0);
    assert!(EXPLOSION_SNAP_EPSILON > 0.0 && EXPLOSION_SNAP_EPSILON < 1.0);

    // whole number of frames per transition
    let frames = 1.0 / MORPH_STEP_PER_FRAME;
    assert!((frames - frames.round()).abs() < 1e-4);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn trail_falloffs_stay_positive_for_default_copies() {
    let last = (DEFAULT_TRAIL_COPIES - 1) as f32;
    assert!(1.0 - last * TRAIL_OPACITY_FALLOFF > 0.0);
    assert!(1.0 - last * TRAIL_SIZE_FALLOFF > 0.0);
    assert!(1.0 - last * TRAIL_CONTRACTION > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gesture_thresholds_are_ordered() {
    assert!(HAND_OPEN_RATIO > HAND_CLOSED_RATIO);
    assert!(CLAP_FROM_BELOW < CLAP_TO_ABOVE);
    assert!(PINCH_THRESHOLD > 0.0);
    assert!(PINCH_COOLDOWN_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_amplitudes_have_logical_relationships() {
    // an explosion should throw particles further than an open hand
    assert!(EXPLOSION_EXPANSION > OPEN_EXPANSION);
    assert!(SHIMMER_AMPLITUDE < BREATHE_AMPLITUDE);
    assert!(HEARTBEAT_BLEND >= 0.0 && HEARTBEAT_BLEND <= 1.0);
    assert!(HEARTBEAT_SHARPNESS >= 1);
    assert!(SCALE_MIN > 0.0 && SCALE_MIN + SCALE_SPAN <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn viewer_constants_are_sane() {
    assert!(ROTATION_SPEED > 0.0);
    assert!((0.0..=1.0).contains(&LOCKED_TENSION));
    assert!(SIM_PINCH_CLOSED < PINCH_THRESHOLD);
    assert!(SIM_PINCH_OPEN > PINCH_THRESHOLD);
    assert!(CLEAR_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
}
