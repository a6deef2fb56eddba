//! Processor trait.
//!
//! RULE: A processor owns one kind of time-driven simulation state.
//! The engine calls advance_frame() on every live processor once per
//! frame. It never looks inside a processor beyond that call.

use crate::{kind::ProcessorKind, types::ImpelTime};
use std::any::Any;

/// The contract every processor must fulfill.
pub trait ImpelProcessor: Send {
    /// Called once per frame by the engine.
    ///
    /// Errors are the processor's own business; there is no channel back
    /// to the engine.
    fn advance_frame(&mut self, delta_time: ImpelTime);

    /// For typed access by callers and tests.
    /// The engine itself never downcasts.
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A processor type that knows its kind and how to build itself.
///
/// Implementing this lets a processor module register itself with
/// `ProcessorRegistry::register::<P>()` and be fetched with
/// `ImpelEngine::processor_as::<P>()`.
pub trait ProcessorType: ImpelProcessor + Default + 'static {
    const KIND: ProcessorKind;
}
