#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
pub mod engine;
pub mod sketch;
pub mod utils;
pub mod windowing;

pub use engine::*;
pub use sketch::{Sketch, SketchConfig};
pub use windowing::*;

pub use ::log;
pub use ::tokio;

#[cfg(feature = "derive")]
pub use ::env_logger;

#[cfg(feature = "derive")]
pub use ::orrery_macros;

#[cfg(feature = "derive")]
pub use ::orrery_macros::OrreryApp;
