//! Slot arena and per-frame animation state.
//!
//! Every base particle is replicated into `trail_copies` slots laid out
//! contiguously (`base * trail_copies + trail`). All buffers are sized once in
//! [`Choreographer::new`]; shape changes and frames only overwrite them.

use glam::Vec3;
use rand::prelude::*;

use crate::config::{ChoreographerConfig, ConfigError};
use crate::constants::*;
use crate::geometry;
use crate::motion::{self, mix, FrameUniforms, MotionLayers, RenderBuffer, SlotAttributes};
use crate::shape::ShapeKind;

/// Smoothed animation parameters, advanced once per rendered frame.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    pub elapsed_time: f32,
    /// 0 = at the start positions, 1 = settled on the targets.
    pub morph_progress: f32,
    pub explosion_energy: f32,
    pub smoothed_tension: f32,
    pub heartbeat_active: bool,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            elapsed_time: 0.0,
            morph_progress: 1.0,
            explosion_energy: 0.0,
            smoothed_tension: 0.0,
            heartbeat_active: false,
        }
    }
}

/// Snapshot of the external signals for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Hand closure, 0 = open, 1 = closed.
    pub tension: f32,
    /// Renderer clock in seconds.
    pub elapsed_time: f32,
}

struct SlotArena {
    start: Vec<Vec3>,
    target: Vec<Vec3>,
    seeds: Vec<f32>,
    scales: Vec<f32>,
    trails: Vec<u32>,
    /// One point per base particle, reused by every regeneration.
    scratch: Vec<Vec3>,
}

pub struct Choreographer {
    arena: SlotArena,
    state: AnimationState,
    active: ShapeKind,
    base_count: usize,
    trail_copies: usize,
    rng: StdRng,
}

impl Choreographer {
    pub fn new(config: ChoreographerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let slots = config.slot_count();
        let mut choreographer = Self {
            arena: SlotArena {
                start: vec![Vec3::ZERO; slots],
                target: vec![Vec3::ZERO; slots],
                seeds: vec![0.0; slots],
                scales: vec![0.0; slots],
                trails: vec![0; slots],
                scratch: vec![Vec3::ZERO; config.base_count],
            },
            state: AnimationState {
                heartbeat_active: config.shape == ShapeKind::NameComposite,
                ..AnimationState::default()
            },
            active: config.shape,
            base_count: config.base_count,
            trail_copies: config.trail_copies,
            rng,
        };
        choreographer.populate(config.shape);
        log::info!(
            "[choreo] {} particles x {} trails = {} slots, shape {}",
            config.base_count,
            config.trail_copies,
            slots,
            config.shape
        );
        Ok(choreographer)
    }

    /// Convenience for `new` with the given shape and counts and no fixed seed.
    pub fn initialize(
        shape: ShapeKind,
        base_count: usize,
        trail_copies: usize,
    ) -> Result<Self, ConfigError> {
        Self::new(ChoreographerConfig {
            shape,
            base_count,
            trail_copies,
            seed: None,
        })
    }

    fn populate(&mut self, shape: ShapeKind) {
        let arena = &mut self.arena;
        geometry::generate_into(shape, &mut arena.scratch, &mut self.rng);
        let trails = self.trail_copies;
        for (base, &p) in arena.scratch.iter().enumerate() {
            let seed: f32 = self.rng.gen();
            let scale = SCALE_MIN + self.rng.gen::<f32>() * SCALE_SPAN;
            for trail in 0..trails {
                let idx = base * trails + trail;
                arena.start[idx] = p;
                arena.target[idx] = p;
                arena.seeds[idx] = seed;
                arena.scales[idx] = scale;
                arena.trails[idx] = trail as u32;
            }
        }
    }

    /// Begin morphing toward `shape`. Returns `false` (and changes nothing)
    /// when `shape` is already active.
    ///
    /// The morph restarts from wherever the slots are currently drawn, so
    /// interrupting a transition in flight does not snap.
    pub fn request_shape_change(&mut self, shape: ShapeKind) -> bool {
        if shape == self.active {
            return false;
        }
        let morph = self.state.morph_progress;
        let arena = &mut self.arena;
        for (start, target) in arena.start.iter_mut().zip(arena.target.iter()) {
            *start = mix(*start, *target, morph);
        }

        geometry::generate_into(shape, &mut arena.scratch, &mut self.rng);
        for (chunk, &p) in arena
            .target
            .chunks_exact_mut(self.trail_copies)
            .zip(arena.scratch.iter())
        {
            chunk.fill(p);
        }

        log::debug!(
            "[choreo] shape {} -> {} (interrupted at morph {:.3})",
            self.active,
            shape,
            morph
        );
        self.state.morph_progress = 0.0;
        self.active = shape;
        true
    }

    /// Start an explosion burst at full energy; retriggering mid-decay resets it.
    pub fn trigger_explosion(&mut self) {
        self.state.explosion_energy = 1.0;
        log::debug!("[choreo] explosion");
    }

    /// Step the animation state by one frame.
    pub fn advance(&mut self, input: FrameInput) {
        let s = &mut self.state;
        s.elapsed_time = input.elapsed_time;

        let mut morph = (s.morph_progress + MORPH_STEP_PER_FRAME).min(1.0);
        // absorb accumulated rounding so the final step lands exactly on 1
        if 1.0 - morph < MORPH_STEP_PER_FRAME * 0.5 {
            morph = 1.0;
        }
        s.morph_progress = morph;

        let target = input.tension.clamp(0.0, 1.0);
        s.smoothed_tension = (s.smoothed_tension + (target - s.smoothed_tension) * TENSION_SMOOTHING)
            .clamp(0.0, 1.0);

        if s.explosion_energy > 0.0 {
            s.explosion_energy += (0.0 - s.explosion_energy) * EXPLOSION_DECAY;
            if s.explosion_energy < EXPLOSION_SNAP_EPSILON {
                s.explosion_energy = 0.0;
            }
        }

        s.heartbeat_active = self.active == ShapeKind::NameComposite;
    }

    /// Fill `out` with the final per-slot positions, sizes and opacities for
    /// the current frame.
    pub fn compose_into(&self, out: &mut RenderBuffer, layers: MotionLayers) {
        let uniforms = self.uniforms();
        let arena = &self.arena;
        out.ensure_len(arena.start.len());
        for (i, instance) in out.instances_mut().iter_mut().enumerate() {
            let slot = SlotAttributes {
                start: arena.start[i],
                target: arena.target[i],
                seed: arena.seeds[i],
                scale: arena.scales[i],
                trail: arena.trails[i],
            };
            instance.set(&motion::compose_slot(&slot, &uniforms, layers));
        }
    }

    pub fn uniforms(&self) -> FrameUniforms {
        FrameUniforms {
            time: self.state.elapsed_time,
            tension: self.state.smoothed_tension,
            explosion: self.state.explosion_energy,
            morph: self.state.morph_progress,
            heartbeat: self.state.heartbeat_active,
        }
    }

    pub fn active_shape(&self) -> ShapeKind {
        self.active
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn base_count(&self) -> usize {
        self.base_count
    }

    pub fn trail_copies(&self) -> usize {
        self.trail_copies
    }

    pub fn slot_count(&self) -> usize {
        self.arena.start.len()
    }

    #[inline]
    pub fn slot_index(&self, base: usize, trail: usize) -> usize {
        base * self.trail_copies + trail
    }

    /// `(base, trail)` identity of a flat slot index.
    #[inline]
    pub fn slot_identity(&self, slot: usize) -> (usize, usize) {
        (slot / self.trail_copies, slot % self.trail_copies)
    }

    pub fn slot(&self, slot: usize) -> SlotAttributes {
        let arena = &self.arena;
        SlotAttributes {
            start: arena.start[slot],
            target: arena.target[slot],
            seed: arena.seeds[slot],
            scale: arena.scales[slot],
            trail: arena.trails[slot],
        }
    }

    /// Position of `slot` along its current morph, before any motion layer.
    pub fn interpolated_position(&self, slot: usize) -> Vec3 {
        mix(
            self.arena.start[slot],
            self.arena.target[slot],
            self.state.morph_progress,
        )
    }

    pub fn start_positions(&self) -> &[Vec3] {
        &self.arena.start
    }

    pub fn target_positions(&self) -> &[Vec3] {
        &self.arena.target
    }

    pub fn random_seeds(&self) -> &[f32] {
        &self.arena.seeds
    }

    pub fn scale_factors(&self) -> &[f32] {
        &self.arena.scales
    }

    pub fn trail_offsets(&self) -> &[u32] {
        &self.arena.trails
    }
}
