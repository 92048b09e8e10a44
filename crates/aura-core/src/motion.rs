//! Final per-slot placement: the motion layers stacked on top of the morph.
//!
//! Given a slot's interpolated base position `p`, with `open = 1 - tension`,
//! the layers apply in this order:
//!
//! 1. breathing + shimmer along the radial direction (always on);
//! 2. coherent-noise turbulence scaled by `open`, sampled at a time that lags
//!    by trail index so later copies draw a comet tail;
//! 3. radial expansion `open * 4 + explosion * 8` plus a slow drifting pulse;
//! 4. heartbeat: a 50% blend toward a snappy radial pulse of `p`;
//! 5. trail contraction `1 - trail * 0.05 * open`.
//!
//! Point size and opacity fall off with the trail index. Sizes are in
//! "pixels at unit depth"; the renderer divides by view depth.

use std::f32::consts::TAU;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::constants::*;
use crate::noise::simplex3;

/// GLSL-style `mix`: exact at both ends (`t == 0` gives `a`, `t == 1` gives `b`).
#[inline]
pub fn mix(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a * (1.0 - t) + b * t
}

/// Global parameters shared by every slot in a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameUniforms {
    pub time: f32,
    pub tension: f32,
    pub explosion: f32,
    pub morph: f32,
    pub heartbeat: bool,
}

impl FrameUniforms {
    #[inline]
    pub fn open_amount(&self) -> f32 {
        1.0 - self.tension
    }
}

/// Switches for the time-dependent layers. Expansion, explosion and the
/// trail contraction are not optional.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotionLayers {
    pub breathing: bool,
    pub turbulence: bool,
    pub heartbeat: bool,
}

impl Default for MotionLayers {
    fn default() -> Self {
        Self {
            breathing: true,
            turbulence: true,
            heartbeat: true,
        }
    }
}

impl MotionLayers {
    pub const NONE: MotionLayers = MotionLayers {
        breathing: false,
        turbulence: false,
        heartbeat: false,
    };
}

/// Fixed attributes of one slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotAttributes {
    pub start: Vec3,
    pub target: Vec3,
    pub seed: f32,
    pub scale: f32,
    pub trail: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComposedSlot {
    pub position: Vec3,
    pub size: f32,
    pub opacity: f32,
}

/// Sharp, asymmetric heartbeat in \[0, 1\].
#[inline]
pub fn heartbeat_pulse(time: f32) -> f32 {
    ((time * HEARTBEAT_SPEED).sin() * 0.5 + 0.5)
        .max(0.0)
        .powi(HEARTBEAT_SHARPNESS)
}

#[inline]
pub fn trail_opacity(trail: u32) -> f32 {
    (1.0 - trail as f32 * TRAIL_OPACITY_FALLOFF).max(0.0)
}

pub fn compose_slot(
    slot: &SlotAttributes,
    uniforms: &FrameUniforms,
    layers: MotionLayers,
) -> ComposedSlot {
    let base = mix(slot.start, slot.target, uniforms.morph);
    let open = uniforms.open_amount();
    let trail = slot.trail as f32;
    let lag_time = uniforms.time - trail * TRAIL_TIME_LAG;

    let dir = if base.length() < DEGENERATE_RADIUS {
        Vec3::Y
    } else {
        base.normalize()
    };

    let breathe = if layers.breathing {
        (uniforms.time * BREATHE_SPEED + slot.seed * TAU).sin() * BREATHE_AMPLITUDE
    } else {
        0.0
    };
    let shimmer = if layers.breathing {
        (uniforms.time * SHIMMER_SPEED + slot.seed * 2.0 * TAU).sin() * SHIMMER_AMPLITUDE
    } else {
        0.0
    };
    let subtle = dir * (breathe + shimmer);

    let (turbulence, drift) = if layers.turbulence {
        let sample = base * NOISE_POSITION_SCALE + Vec3::splat(lag_time * NOISE_TIME_SCALE);
        (
            simplex3(sample) * open,
            (lag_time * DRIFT_PULSE_SPEED).sin() * DRIFT_PULSE_AMPLITUDE * open,
        )
    } else {
        (0.0, 0.0)
    };

    let expansion = open * OPEN_EXPANSION + uniforms.explosion * EXPLOSION_EXPANSION;
    let mut position = base + subtle + dir * (turbulence * NOISE_AMPLITUDE);
    position += dir * (expansion + drift);

    let mut size_pulse = 1.0 + breathe * BREATHE_SIZE_GAIN;
    if uniforms.heartbeat && layers.heartbeat {
        let beat = heartbeat_pulse(uniforms.time);
        let pulsed = base * (1.0 + beat * HEARTBEAT_SCALE) + subtle;
        position = mix(position, pulsed, HEARTBEAT_BLEND);
        size_pulse += beat * HEARTBEAT_SIZE_BOOST;
    }

    position *= 1.0 - trail * TRAIL_CONTRACTION * open;

    let size = slot.scale
        * POINT_SIZE_BASE
        * (1.0 + open * OPEN_SIZE_GAIN)
        * size_pulse
        * (1.0 - trail * TRAIL_SIZE_FALLOFF).max(0.0);

    ComposedSlot {
        position,
        size,
        opacity: trail_opacity(slot.trail),
    }
}

/// One point sprite as uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub opacity: f32,
    pub _pad: [f32; 3],
}

impl ParticleInstance {
    #[inline]
    pub fn set(&mut self, composed: &ComposedSlot) {
        self.position = composed.position.to_array();
        self.size = composed.size;
        self.opacity = composed.opacity;
    }
}

/// Per-frame output of the choreographer, reused across frames.
#[derive(Clone, Debug)]
pub struct RenderBuffer {
    instances: Vec<ParticleInstance>,
    pub color: Vec3,
    pub glow: Vec3,
}

impl RenderBuffer {
    pub fn new(slot_count: usize) -> Self {
        Self {
            instances: vec![ParticleInstance::default(); slot_count],
            color: Vec3::ONE,
            glow: Vec3::ONE,
        }
    }

    pub(crate) fn ensure_len(&mut self, len: usize) {
        if self.instances.len() != len {
            self.instances.resize(len, ParticleInstance::default());
        }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn instances(&self) -> &[ParticleInstance] {
        &self.instances
    }

    pub(crate) fn instances_mut(&mut self) -> &mut [ParticleInstance] {
        &mut self.instances
    }

    pub fn position(&self, slot: usize) -> Vec3 {
        Vec3::from(self.instances[slot].position)
    }

    pub fn size(&self, slot: usize) -> f32 {
        self.instances[slot].size
    }

    pub fn opacity(&self, slot: usize) -> f32 {
        self.instances[slot].opacity
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}
