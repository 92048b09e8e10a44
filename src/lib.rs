//! Control surface of the native viewer: key mapping, the stage that turns
//! input into choreographer calls, the simulated hand and runtime settings.
//!
//! Everything here is platform-free so it can be tested on the host; the
//! winit/wgpu glue lives in the binary.

pub mod constants;
pub mod controls;
pub mod settings;
pub mod sim;
pub mod stage;

pub use controls::*;
pub use settings::Settings;
pub use sim::SimulatedHand;
pub use stage::Stage;
