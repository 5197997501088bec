//! Prefabricated objects that can be easily spawned into a [`World`](crate::World).
//!
//! Prefabs create scene objects with common configurations such as a camera, a
//! wireframe cube or the lights of the sketch.

pub mod camera;
pub mod cube;
pub mod light;
pub mod prefab;
pub mod star;

pub use prefab::Prefab;

pub use camera::CameraPrefab;
pub use cube::CubePrefab;
pub use light::{AmbientLightPrefab, DirectionalLightPrefab};
pub use star::StarPrefab;
