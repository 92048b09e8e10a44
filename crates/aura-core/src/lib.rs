pub mod choreographer;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod gesture;
pub mod glyphs;
pub mod motion;
pub mod noise;
pub mod palette;
pub mod shape;
pub mod state;
pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

pub use choreographer::*;
pub use config::*;
pub use constants::*;
pub use gesture::{GestureInterpreter, GestureSignals, HandSample};
pub use motion::{ComposedSlot, FrameUniforms, MotionLayers, ParticleInstance, RenderBuffer};
pub use palette::{palette_color, ColorOption, PALETTE};
pub use shape::*;
pub use state::*;
