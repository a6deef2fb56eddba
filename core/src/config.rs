//! Run configuration for driving an engine headlessly.

use crate::{
    error::{ImpelError, ImpelResult},
    kind::ProcessorKind,
    registry::ProcessorRegistry,
    types::ImpelTime,
};
use serde::{Deserialize, Serialize};

/// Roughly 60 frames per second.
pub const DEFAULT_DELTA_TIME: ImpelTime = 16;
pub const DEFAULT_FRAMES: u64 = 600;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RunConfig {
    pub frames:      u64,
    pub delta_time:  ImpelTime,
    /// Kind names to acquire before the first frame.
    pub kinds:       Vec<String>,
    /// Reset the engine and re-acquire `kinds` every n frames.
    pub reset_every: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames:      DEFAULT_FRAMES,
            delta_time:  DEFAULT_DELTA_TIME,
            kinds:       vec![
                ProcessorKind::SMOOTH.name().to_string(),
                ProcessorKind::OVERSHOOT.name().to_string(),
            ],
            reset_every: None,
        }
    }
}

impl RunConfig {
    /// Load a run configuration from a JSON file.
    pub fn load(path: &str) -> ImpelResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> ImpelResult<Self> {
        let config: RunConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ImpelResult<()> {
        if self.reset_every == Some(0) {
            return Err(ImpelError::InvalidConfig {
                reason: "reset_every must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Map the configured kind names onto registered kinds.
    pub fn resolve_kinds(&self, registry: &ProcessorRegistry) -> ImpelResult<Vec<ProcessorKind>> {
        self.kinds
            .iter()
            .map(|name| {
                registry
                    .kind_by_name(name)
                    .ok_or_else(|| ImpelError::UnknownKind { kind: name.clone() })
            })
            .collect()
    }
}
