//! Data that can be attached to a scene object next to its drawable.

pub mod camera;
pub mod light;

pub use camera::*;
pub use light::*;
