//! Runtime settings read from `AURA_*` environment variables.

use anyhow::Context;
use aura_core::{ChoreographerConfig, ShapeKind};

pub const ENV_SHAPE: &str = "AURA_SHAPE";
pub const ENV_PARTICLES: &str = "AURA_PARTICLES";
pub const ENV_TRAILS: &str = "AURA_TRAILS";
pub const ENV_SEED: &str = "AURA_SEED";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Settings {
    pub choreographer: ChoreographerConfig,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable source; unset variables keep
    /// their defaults, malformed ones are an error naming the variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = ChoreographerConfig::default();
        if let Some(raw) = lookup(ENV_SHAPE) {
            config.shape = raw
                .parse::<ShapeKind>()
                .with_context(|| format!("invalid {ENV_SHAPE}"))?;
        }
        if let Some(raw) = lookup(ENV_PARTICLES) {
            config.base_count = raw
                .trim()
                .parse()
                .with_context(|| format!("invalid {ENV_PARTICLES}: `{raw}`"))?;
        }
        if let Some(raw) = lookup(ENV_TRAILS) {
            config.trail_copies = raw
                .trim()
                .parse()
                .with_context(|| format!("invalid {ENV_TRAILS}: `{raw}`"))?;
        }
        if let Some(raw) = lookup(ENV_SEED) {
            config.seed = Some(
                raw.trim()
                    .parse()
                    .with_context(|| format!("invalid {ENV_SEED}: `{raw}`"))?,
            );
        }
        config.validate().context("invalid particle settings")?;
        Ok(Self {
            choreographer: config,
        })
    }
}
