//! impel: a runtime engine that owns one processor per registered kind
//! and advances all of them once per simulation frame.
//!
//! Typical use:
//!   1. Build a `ProcessorRegistry`, let each kind module register
//!      itself, then seal it with `into_shared()`.
//!   2. Create an `ImpelEngine` per logical scope from the shared registry.
//!   3. Ask the engine for the processors you need, call
//!      `advance_frame()` once per tick, and `reset()` on teardown.

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod kind;
pub mod processor;
pub mod registry;
pub mod snapshot;
pub mod types;

pub use crate::engine::ImpelEngine;
pub use crate::error::{ImpelError, ImpelResult};
pub use crate::kind::ProcessorKind;
pub use crate::processor::{ImpelProcessor, ProcessorType};
pub use crate::registry::{ProcessorFunctions, ProcessorRegistry};
pub use crate::types::ImpelTime;
