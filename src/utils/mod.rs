pub mod animation;
pub mod color;
pub mod frame_counter;

pub use color::*;
pub use frame_counter::*;
