//! Snapshot of an engine's observable state.
//!
//! Captures which kinds are live and how far the clock has run. It does
//! not capture processor internals; those are opaque to the engine.

use crate::{
    error::ImpelResult,
    kind::ProcessorKind,
    types::Frame,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EngineSnapshot {
    pub frame:      Frame,
    pub elapsed:    i64,
    /// Sorted by name.
    pub live_kinds: Vec<ProcessorKind>,
}

impl EngineSnapshot {
    pub fn to_json(&self) -> ImpelResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
