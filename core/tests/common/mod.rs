//! Counting processors shared by the integration tests.
//!
//! Every create, advance and destroy is written to a thread-local log so
//! tests running in parallel never see each other's processors.

#![allow(dead_code)]

use impel_core::{
    ImpelProcessor, ImpelTime, ProcessorFunctions, ProcessorKind, ProcessorRegistry,
    ProcessorType,
};
use std::any::Any;
use std::cell::RefCell;
use std::sync::Arc;

/// Never registered by `registry()`.
pub const UNREGISTERED: ProcessorKind = ProcessorKind::new("gamma");

#[derive(Debug, Default)]
struct Log {
    next_id:   u32,
    created:   Vec<(ProcessorKind, u32)>,
    advanced:  Vec<(ProcessorKind, u32, ImpelTime)>,
    destroyed: Vec<(ProcessorKind, u32)>,
}

thread_local! {
    static LOG: RefCell<Log> = RefCell::new(Log::default());
}

pub fn clear_log() {
    LOG.with(|log| *log.borrow_mut() = Log::default());
}

pub fn created() -> Vec<(ProcessorKind, u32)> {
    LOG.with(|log| log.borrow().created.clone())
}

pub fn advanced() -> Vec<(ProcessorKind, u32, ImpelTime)> {
    LOG.with(|log| log.borrow().advanced.clone())
}

pub fn destroyed() -> Vec<(ProcessorKind, u32)> {
    LOG.with(|log| log.borrow().destroyed.clone())
}

/// Identity and bookkeeping carried by every counting processor.
#[derive(Debug)]
pub struct Probe {
    pub kind:    ProcessorKind,
    pub id:      u32,
    pub elapsed: i64,
}

impl Probe {
    fn new(kind: ProcessorKind) -> Self {
        let id = LOG.with(|log| {
            let mut log = log.borrow_mut();
            log.next_id += 1;
            let id = log.next_id;
            log.created.push((kind, id));
            id
        });
        Self { kind, id, elapsed: 0 }
    }

    fn advance(&mut self, delta_time: ImpelTime) {
        self.elapsed += i64::from(delta_time);
        LOG.with(|log| log.borrow_mut().advanced.push((self.kind, self.id, delta_time)));
    }
}

#[derive(Debug)]
pub struct Alpha(pub Probe);

impl Default for Alpha {
    fn default() -> Self {
        Self(Probe::new(Self::KIND))
    }
}

impl ImpelProcessor for Alpha {
    fn advance_frame(&mut self, delta_time: ImpelTime) {
        self.0.advance(delta_time);
    }

    fn as_any(&self) -> &dyn Any { self }
    fn as_any_mut(&mut self) -> &mut dyn Any { self }
}

impl ProcessorType for Alpha {
    const KIND: ProcessorKind = ProcessorKind::new("alpha");
}

#[derive(Debug)]
pub struct Beta(pub Probe);

impl Default for Beta {
    fn default() -> Self {
        Self(Probe::new(Self::KIND))
    }
}

impl ImpelProcessor for Beta {
    fn advance_frame(&mut self, delta_time: ImpelTime) {
        self.0.advance(delta_time);
    }

    fn as_any(&self) -> &dyn Any { self }
    fn as_any_mut(&mut self) -> &mut dyn Any { self }
}

impl ProcessorType for Beta {
    const KIND: ProcessorKind = ProcessorKind::new("beta");
}

/// The probe of any counting processor.
pub fn probe(processor: &dyn ImpelProcessor) -> &Probe {
    let any = processor.as_any();
    if let Some(alpha) = any.downcast_ref::<Alpha>() {
        &alpha.0
    } else if let Some(beta) = any.downcast_ref::<Beta>() {
        &beta.0
    } else {
        panic!("not a counting processor")
    }
}

pub fn create_alpha() -> Box<dyn ImpelProcessor> {
    Box::new(Alpha::default())
}

pub fn create_beta() -> Box<dyn ImpelProcessor> {
    Box::new(Beta::default())
}

/// Destroy function that records which instance it released.
pub fn destroy_counted(processor: Box<dyn ImpelProcessor>) {
    let probe = probe(processor.as_ref());
    let entry = (probe.kind, probe.id);
    LOG.with(|log| log.borrow_mut().destroyed.push(entry));
}

/// A sealed registry with `alpha` and `beta` registered, and a fresh log.
pub fn registry() -> Arc<ProcessorRegistry> {
    let _ = env_logger::builder().is_test(true).try_init();
    clear_log();

    let mut registry = ProcessorRegistry::new();
    registry.register_kind(Alpha::KIND, ProcessorFunctions::new(create_alpha, destroy_counted));
    registry.register_kind(Beta::KIND, ProcessorFunctions::new(create_beta, destroy_counted));
    registry.into_shared()
}
