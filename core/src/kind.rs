//! Processor kind identifiers.
//!
//! A kind is a stable string tag. Kinds form an open set: any module can
//! declare its own `const` kind without the engine changing. The kinds
//! shipped with the project are listed here as associated constants.

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProcessorKind(&'static str);

impl ProcessorKind {
    /// Curve-based animation driver.
    pub const SMOOTH: ProcessorKind = ProcessorKind::new("smooth");
    /// Spring-based driver that overshoots its target.
    pub const OVERSHOOT: ProcessorKind = ProcessorKind::new("overshoot");

    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ProcessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for ProcessorKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}
