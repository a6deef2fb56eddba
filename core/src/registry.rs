//! Processor kind registry.
//!
//! Maps each processor kind to the pair of functions that create and
//! destroy its instances. Every kind module registers itself here during
//! startup. The finished registry is frozen with `into_shared()` and
//! handed to engines, so registration always completes before any engine
//! asks for a kind, and entries are never removed.

use crate::{
    kind::ProcessorKind,
    processor::{ImpelProcessor, ProcessorType},
};
use std::collections::HashMap;
use std::sync::Arc;

pub type CreateFn = fn() -> Box<dyn ImpelProcessor>;
pub type DestroyFn = fn(Box<dyn ImpelProcessor>);

/// The create/destroy pair registered for one kind.
#[derive(Clone, Copy, Debug)]
pub struct ProcessorFunctions {
    pub create: CreateFn,
    pub destroy: DestroyFn,
}

impl ProcessorFunctions {
    pub fn new(create: CreateFn, destroy: DestroyFn) -> Self {
        Self { create, destroy }
    }

    /// Default-construct `P` on create, drop it on destroy.
    pub fn of<P: ProcessorType>() -> Self {
        Self {
            create: create_default::<P>,
            destroy: drop::<Box<dyn ImpelProcessor>>,
        }
    }
}

fn create_default<P: ProcessorType>() -> Box<dyn ImpelProcessor> {
    Box::new(P::default())
}

#[derive(Default)]
pub struct ProcessorRegistry {
    functions: HashMap<ProcessorKind, ProcessorFunctions>,
}

impl ProcessorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the functions for `kind`. A second registration for the
    /// same kind replaces the first.
    pub fn register_kind(&mut self, kind: ProcessorKind, functions: ProcessorFunctions) {
        if self.functions.insert(kind, functions).is_some() {
            log::warn!("processor kind '{kind}' registered twice; keeping the latest functions");
        } else {
            log::debug!("registered processor kind '{kind}'");
        }
    }

    /// Register a processor type under its own kind.
    pub fn register<P: ProcessorType>(&mut self) -> &mut Self {
        self.register_kind(P::KIND, ProcessorFunctions::of::<P>());
        self
    }

    pub fn lookup(&self, kind: ProcessorKind) -> Option<&ProcessorFunctions> {
        self.functions.get(&kind)
    }

    pub fn contains(&self, kind: ProcessorKind) -> bool {
        self.functions.contains_key(&kind)
    }

    /// Find a registered kind from its name, e.g. one read from config.
    pub fn kind_by_name(&self, name: &str) -> Option<ProcessorKind> {
        self.functions.keys().copied().find(|kind| kind.name() == name)
    }

    /// All registered kinds, sorted by name.
    pub fn kinds(&self) -> Vec<ProcessorKind> {
        let mut kinds: Vec<_> = self.functions.keys().copied().collect();
        kinds.sort();
        kinds
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// End the registration phase. Engines share the returned handle.
    pub fn into_shared(self) -> Arc<Self> {
        log::debug!("processor registry sealed with {} kind(s)", self.len());
        Arc::new(self)
    }
}
