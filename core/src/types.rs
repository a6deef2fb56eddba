//! Shared primitive types used across the engine.

/// A simulation-time delta in milliseconds.
///
/// The engine only forwards it; what a zero or negative delta means is
/// up to each processor.
pub type ImpelTime = i32;

/// A frame number. Frame 0 means no frame has been advanced yet.
pub type Frame = u64;
