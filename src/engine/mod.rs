pub mod assets;
pub mod components;
pub mod core;
pub mod drawables;
pub mod prefabs;
pub mod world;

pub use self::world::World;
