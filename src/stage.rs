//! High-level scene state and the per-frame hand-off to the choreographer.
//!
//! The stage holds what the user has selected (shape, colour, rotation,
//! tension lock) plus the latest gesture readings. Once per frame
//! [`Stage::drive`] pushes that snapshot into the choreographer; nothing else
//! in the viewer touches the particle buffers.

use aura_core::{
    palette_color, Choreographer, ColorOption, FrameInput, GestureInterpreter, GestureSignals,
    HandSample, MotionLayers, SceneRotation, ShapeKind,
};
use smallvec::SmallVec;

use crate::constants::{LOCKED_TENSION, ROTATION_SPEED};
use crate::controls::{Command, Layer, RotateKey};
use crate::sim::SimulatedHand;

pub struct Stage {
    pub shape: ShapeKind,
    pub color_index: usize,
    pub tension: f32,
    pub tension_locked: bool,
    /// Bumped once per clap; the choreographer explodes when it changes.
    pub explosion_counter: u64,
    pub rotation: SceneRotation,
    pub layers: MotionLayers,
    pub hand: SimulatedHand,
    pub quit_requested: bool,
    held: SmallVec<[RotateKey; 4]>,
    applied_explosions: u64,
    gestures: GestureInterpreter,
}

impl Stage {
    pub fn new(shape: ShapeKind) -> Self {
        Self {
            shape,
            color_index: aura_core::palette::DEFAULT_COLOR_INDEX,
            tension: 0.0,
            tension_locked: false,
            explosion_counter: 0,
            rotation: SceneRotation::default(),
            layers: MotionLayers::default(),
            hand: SimulatedHand::default(),
            quit_requested: false,
            held: SmallVec::new(),
            applied_explosions: 0,
            gestures: GestureInterpreter::new(),
        }
    }

    pub fn color(&self) -> &'static ColorOption {
        palette_color(self.color_index)
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SelectShape(shape) => self.shape = shape,
            Command::SelectColor(index) => {
                self.color_index = index;
                log::info!("[stage] colour {}", self.color().name);
            }
            Command::ToggleTensionLock => {
                self.tension_locked = !self.tension_locked;
                if self.tension_locked {
                    self.tension = LOCKED_TENSION;
                }
                log::info!("[stage] tension locked: {}", self.tension_locked);
            }
            Command::Clap => self.explosion_counter += 1,
            Command::Pinch => self.hand.set_pinching(true),
            Command::ToggleLayer(layer) => {
                let flag = match layer {
                    Layer::Breathing => &mut self.layers.breathing,
                    Layer::Turbulence => &mut self.layers.turbulence,
                    Layer::Heartbeat => &mut self.layers.heartbeat,
                };
                *flag = !*flag;
                log::info!("[stage] {:?} layer: {}", layer, *flag);
            }
            Command::Quit => self.quit_requested = true,
        }
    }

    /// Undo the held part of a command when its key is released.
    pub fn release(&mut self, command: Command) {
        if command == Command::Pinch {
            self.hand.set_pinching(false);
        }
    }

    pub fn press_rotate(&mut self, key: RotateKey) {
        if !self.held.contains(&key) {
            self.held.push(key);
        }
    }

    pub fn release_rotate(&mut self, key: RotateKey) {
        self.held.retain(|k| *k != key);
    }

    /// Step the rotation by one frame for every held arrow key.
    pub fn tick_rotation(&mut self) {
        for key in &self.held {
            match key {
                RotateKey::Left => self.rotation.0.y -= ROTATION_SPEED,
                RotateKey::Right => self.rotation.0.y += ROTATION_SPEED,
                RotateKey::Up => self.rotation.0.x -= ROTATION_SPEED,
                RotateKey::Down => self.rotation.0.x += ROTATION_SPEED,
            }
        }
    }

    /// Fold one hand observation into the stage.
    pub fn observe_hand(&mut self, sample: Option<HandSample>, now_sec: f64) -> GestureSignals {
        let signals = self.gestures.observe(sample, now_sec);
        if !self.tension_locked {
            self.tension = signals.tension;
        }
        if signals.clap {
            self.explosion_counter += 1;
        }
        if signals.advance_shape {
            self.shape = self.shape.next();
            log::info!("[stage] pinch -> {}", self.shape);
        }
        signals
    }

    /// Push this frame's snapshot into the choreographer and advance it.
    pub fn drive(&mut self, choreographer: &mut Choreographer, elapsed_time: f32) {
        if choreographer.active_shape() != self.shape {
            choreographer.request_shape_change(self.shape);
        }
        if self.explosion_counter != self.applied_explosions {
            self.applied_explosions = self.explosion_counter;
            choreographer.trigger_explosion();
        }
        choreographer.advance(FrameInput {
            tension: self.tension,
            elapsed_time,
        });
    }
}
