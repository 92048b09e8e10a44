// Viewer tuning constants. Choreography constants live in `aura_core::constants`.

pub const WINDOW_TITLE: &str = "Aura (native)";

// Keyboard rotation, radians per frame while an arrow key is held
pub const ROTATION_SPEED: f32 = 0.08;

// Tension pinned while the lock is engaged (fully closed)
pub const LOCKED_TENSION: f32 = 1.0;

// Simulated hand: pinch distance reported while the pinch key is held / released
pub const SIM_PINCH_CLOSED: f32 = 0.0;
pub const SIM_PINCH_OPEN: f32 = 1.0;

// Background clear colour
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.01];
