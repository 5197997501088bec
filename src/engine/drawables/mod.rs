pub mod drawable;
pub mod material;
pub mod mesh_renderer;

pub use drawable::*;
pub use material::*;
pub use mesh_renderer::*;
