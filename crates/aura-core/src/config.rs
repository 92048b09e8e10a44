use crate::constants::{DEFAULT_BASE_COUNT, DEFAULT_TRAIL_COPIES};
use crate::shape::ShapeKind;

/// Construction parameters for a [`Choreographer`](crate::Choreographer).
#[derive(Clone, Debug, PartialEq)]
pub struct ChoreographerConfig {
    pub shape: ShapeKind,
    pub base_count: usize,
    pub trail_copies: usize,
    /// Fixed seed for reproducible clouds; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ChoreographerConfig {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Sphere,
            base_count: DEFAULT_BASE_COUNT,
            trail_copies: DEFAULT_TRAIL_COPIES,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("base particle count must be at least 1")]
    ZeroBaseCount,
    #[error("trail copies must be at least 1")]
    ZeroTrailCopies,
    #[error("{base_count} particles x {trail_copies} trails overflows the slot index")]
    TooManySlots {
        base_count: usize,
        trail_copies: usize,
    },
}

impl ChoreographerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_count == 0 {
            return Err(ConfigError::ZeroBaseCount);
        }
        if self.trail_copies == 0 {
            return Err(ConfigError::ZeroTrailCopies);
        }
        // trail offsets are stored as u32
        if self.trail_copies > u32::MAX as usize
            || self.base_count.checked_mul(self.trail_copies).is_none()
        {
            return Err(ConfigError::TooManySlots {
                base_count: self.base_count,
                trail_copies: self.trail_copies,
            });
        }
        Ok(())
    }

    pub fn slot_count(&self) -> usize {
        self.base_count.saturating_mul(self.trail_copies)
    }
}
