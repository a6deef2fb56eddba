//! Frame clock: counts frames and the simulation time passed through the engine.

use crate::types::{Frame, ImpelTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrameClock {
    pub frame:   Frame,
    /// Sum of every delta handed to the engine, in milliseconds.
    pub elapsed: i64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame. Returns the new frame number.
    pub fn advance(&mut self, delta_time: ImpelTime) -> Frame {
        self.frame += 1;
        self.elapsed += i64::from(delta_time);
        self.frame
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
