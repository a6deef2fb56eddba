//! Demonstration processors driven by the runner.
//!
//! Each drives a single scalar from 0 toward a target of 1. They exist to
//! give the engine something to advance; real processors live elsewhere.

use impel_core::{ImpelProcessor, ImpelTime, ProcessorKind, ProcessorRegistry, ProcessorType};
use std::any::Any;

/// Register every processor kind the runner knows about.
pub fn register_all(registry: &mut ProcessorRegistry) {
    registry
        .register::<SmoothProcessor>()
        .register::<OvershootProcessor>();
}

fn seconds(delta_time: ImpelTime) -> f64 {
    f64::from(delta_time) / 1000.0
}

/// Exponential approach: halves the distance to the target every half-life.
#[derive(Debug, Clone)]
pub struct SmoothProcessor {
    pub value:     f64,
    pub target:    f64,
    pub half_life: f64, // seconds
}

impl Default for SmoothProcessor {
    fn default() -> Self {
        Self { value: 0.0, target: 1.0, half_life: 0.25 }
    }
}

impl ImpelProcessor for SmoothProcessor {
    fn advance_frame(&mut self, delta_time: ImpelTime) {
        if delta_time <= 0 {
            return;
        }
        let remaining = 0.5f64.powf(seconds(delta_time) / self.half_life);
        self.value = self.target + (self.value - self.target) * remaining;
    }

    fn as_any(&self) -> &dyn Any { self }
    fn as_any_mut(&mut self) -> &mut dyn Any { self }
}

impl ProcessorType for SmoothProcessor {
    const KIND: ProcessorKind = ProcessorKind::SMOOTH;
}

/// Under-damped spring, integrated with semi-implicit Euler.
#[derive(Debug, Clone)]
pub struct OvershootProcessor {
    pub value:     f64,
    pub velocity:  f64,
    pub target:    f64,
    pub stiffness: f64,
    pub damping:   f64,
    /// Largest value seen so far.
    pub peak:      f64,
}

impl Default for OvershootProcessor {
    fn default() -> Self {
        Self {
            value:     0.0,
            velocity:  0.0,
            target:    1.0,
            stiffness: 120.0,
            damping:   8.0,
            peak:      0.0,
        }
    }
}

impl ImpelProcessor for OvershootProcessor {
    fn advance_frame(&mut self, delta_time: ImpelTime) {
        if delta_time <= 0 {
            return;
        }
        let dt = seconds(delta_time);
        let accel = self.stiffness * (self.target - self.value) - self.damping * self.velocity;
        self.velocity += accel * dt;
        self.value += self.velocity * dt;
        self.peak = self.peak.max(self.value);
    }

    fn as_any(&self) -> &dyn Any { self }
    fn as_any_mut(&mut self) -> &mut dyn Any { self }
}

impl ProcessorType for OvershootProcessor {
    const KIND: ProcessorKind = ProcessorKind::OVERSHOOT;
}
