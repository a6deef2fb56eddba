//! The processor engine.
//!
//! RULES:
//!   - At most one processor per kind lives in an engine.
//!   - Processors are created on first request, from the registry.
//!   - advance_frame() advances every live processor exactly once.
//!   - Order across kinds is unspecified. A processor must not depend
//!     on another kind's output from the same frame; such dependencies
//!     see the previous frame's output.
//!   - reset() destroys every live processor through its kind's
//!     registered destroy function.

use crate::{
    clock::FrameClock,
    error::{ImpelError, ImpelResult},
    kind::ProcessorKind,
    processor::{ImpelProcessor, ProcessorType},
    registry::ProcessorRegistry,
    snapshot::EngineSnapshot,
    types::{Frame, ImpelTime},
};
use std::collections::HashMap;
use std::sync::Arc;

pub struct ImpelEngine {
    pub clock:  FrameClock,
    registry:   Arc<ProcessorRegistry>,
    processors: HashMap<ProcessorKind, Box<dyn ImpelProcessor>>,
}

impl ImpelEngine {
    pub fn new(registry: Arc<ProcessorRegistry>) -> Self {
        Self {
            clock:      FrameClock::new(),
            registry,
            processors: HashMap::new(),
        }
    }

    pub fn registry(&self) -> &ProcessorRegistry {
        &self.registry
    }

    /// Return the processor for `kind`, creating it on first request.
    ///
    /// Returns `None` if `kind` is not registered. The engine is left
    /// untouched in that case.
    pub fn processor(&mut self, kind: ProcessorKind) -> Option<&mut dyn ImpelProcessor> {
        if !self.processors.contains_key(&kind) {
            let Some(functions) = self.registry.lookup(kind) else {
                log::warn!("requested unregistered processor kind '{kind}'");
                return None;
            };
            let processor = (functions.create)();
            log::debug!("created processor '{kind}'");
            self.processors.insert(kind, processor);
        }

        let processor: &mut dyn ImpelProcessor = &mut **self.processors.get_mut(&kind)?;
        Some(processor)
    }

    /// Like `processor()`, but an unregistered kind is an error.
    pub fn try_processor(&mut self, kind: ProcessorKind) -> ImpelResult<&mut dyn ImpelProcessor> {
        self.processor(kind).ok_or_else(|| ImpelError::UnknownKind {
            kind: kind.name().to_string(),
        })
    }

    /// Typed version of `processor()` keyed by `P::KIND`.
    ///
    /// Returns `None` if the kind is unregistered, or if it was
    /// registered with functions that build a different type.
    pub fn processor_as<P: ProcessorType>(&mut self) -> Option<&mut P> {
        self.processor(P::KIND)?.as_any_mut().downcast_mut::<P>()
    }

    /// The live processor for `kind`, without creating one.
    pub fn get(&self, kind: ProcessorKind) -> Option<&dyn ImpelProcessor> {
        let processor: &dyn ImpelProcessor = &**self.processors.get(&kind)?;
        Some(processor)
    }

    pub fn contains(&self, kind: ProcessorKind) -> bool {
        self.processors.contains_key(&kind)
    }

    /// Kinds with a live processor, sorted by name.
    pub fn live_kinds(&self) -> Vec<ProcessorKind> {
        let mut kinds: Vec<_> = self.processors.keys().copied().collect();
        kinds.sort();
        kinds
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Advance every live processor by `delta_time`. Single pass.
    pub fn advance_frame(&mut self, delta_time: ImpelTime) -> Frame {
        let frame = self.clock.advance(delta_time);

        // TODO: run several passes once processors can depend on other
        // kinds' output within the same frame.
        for processor in self.processors.values_mut() {
            processor.advance_frame(delta_time);
        }

        log::trace!(
            "frame={frame} delta={delta_time} processors={}",
            self.processors.len()
        );
        frame
    }

    /// Advance `frames` frames of `delta_time` each.
    pub fn run_frames(&mut self, frames: u64, delta_time: ImpelTime) {
        for _ in 0..frames {
            self.advance_frame(delta_time);
        }
    }

    /// Destroy every live processor and zero the clock.
    /// Kinds can be requested again afterwards.
    pub fn reset(&mut self) {
        for (kind, processor) in self.processors.drain() {
            // The registry is frozen, so the functions that created this
            // processor are still registered.
            match self.registry.lookup(kind) {
                Some(functions) => (functions.destroy)(processor),
                None => {
                    log::error!("no destroy function for live processor '{kind}'; dropping it");
                    drop(processor);
                }
            }
            log::debug!("destroyed processor '{kind}'");
        }
        self.clock.reset();
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            frame:      self.clock.frame,
            elapsed:    self.clock.elapsed,
            live_kinds: self.live_kinds(),
        }
    }
}

impl Drop for ImpelEngine {
    fn drop(&mut self) {
        self.reset();
    }
}
