//! Core data structures used throughout the engine.
//!
//! This includes scene objects and their transforms.

pub mod object;
pub mod transform;

pub use object::*;
pub use transform::*;
