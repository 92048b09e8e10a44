// Shared choreography tuning constants used by the core and the viewer.

// Arena defaults
pub const DEFAULT_BASE_COUNT: usize = 4000;
pub const DEFAULT_TRAIL_COPIES: usize = 5;

// Per-frame stepping (assumes a ~60 fps cadence, not delta-time corrected)
pub const MORPH_STEP_PER_FRAME: f32 = 0.025; // ~40 frames per transition
pub const TENSION_SMOOTHING: f32 = 0.1; // smoothed += (target - smoothed) * k
pub const EXPLOSION_DECAY: f32 = 0.1; // energy += (0 - energy) * k
pub const EXPLOSION_SNAP_EPSILON: f32 = 0.01; // below this energy snaps to 0

// Per-particle attributes
pub const SCALE_MIN: f32 = 0.5;
pub const SCALE_SPAN: f32 = 0.5;

// Motion layer
pub const TRAIL_TIME_LAG: f32 = 0.05; // seconds of noise-time lag per trail copy
pub const TRAIL_CONTRACTION: f32 = 0.05; // radial contraction per trail copy when open
pub const BREATHE_SPEED: f32 = 1.5;
pub const BREATHE_AMPLITUDE: f32 = 0.03;
pub const SHIMMER_SPEED: f32 = 3.0;
pub const SHIMMER_AMPLITUDE: f32 = 0.015;
pub const NOISE_POSITION_SCALE: f32 = 0.5;
pub const NOISE_TIME_SCALE: f32 = 0.2;
pub const NOISE_AMPLITUDE: f32 = 0.5;
pub const DRIFT_PULSE_SPEED: f32 = 2.0;
pub const DRIFT_PULSE_AMPLITUDE: f32 = 0.1;
pub const OPEN_EXPANSION: f32 = 4.0;
pub const EXPLOSION_EXPANSION: f32 = 8.0;
pub const HEARTBEAT_SPEED: f32 = 4.0;
pub const HEARTBEAT_SHARPNESS: i32 = 3; // exponent applied to the raised sine
pub const HEARTBEAT_SCALE: f32 = 0.15;
pub const HEARTBEAT_BLEND: f32 = 0.5;
pub const HEARTBEAT_SIZE_BOOST: f32 = 0.5;
pub const DEGENERATE_RADIUS: f32 = 0.001; // below this a point has no radial direction

// Point sprite sizing
pub const POINT_SIZE_BASE: f32 = 40.0;
pub const OPEN_SIZE_GAIN: f32 = 2.0;
pub const BREATHE_SIZE_GAIN: f32 = 0.5;
pub const TRAIL_SIZE_FALLOFF: f32 = 0.15;
pub const TRAIL_OPACITY_FALLOFF: f32 = 0.2;

// Gesture interpretation
pub const HAND_OPEN_RATIO: f32 = 1.8; // mean fingertip reach / palm length, open hand
pub const HAND_CLOSED_RATIO: f32 = 0.8; // same ratio for a fist
pub const CLAP_FROM_BELOW: f32 = 0.35;
pub const CLAP_TO_ABOVE: f32 = 0.8;
pub const PINCH_THRESHOLD: f32 = 0.05; // normalized landmark units
pub const PINCH_COOLDOWN_SEC: f64 = 1.5;
