use crate::assets::{Mesh, ModelHandle};
use crate::drawables::Material;

/// Procedural geometry plus the material it is drawn with.
#[derive(Debug, Clone)]
pub struct MeshRenderer {
    pub mesh: Mesh,
    pub material: Material,
}

impl MeshRenderer {
    pub fn new(mesh: Mesh, material: Material) -> Self {
        MeshRenderer { mesh, material }
    }
}

/// An imported model attached to the scene.
///
/// The model data is shared with the loader's table; opacity lives here so toggling
/// it never mutates the loaded asset.
#[derive(Debug, Clone)]
pub struct ModelRenderer {
    pub identifier: String,
    pub model: ModelHandle,
    pub opacity: f32,
    pub transparent: bool,
}

impl ModelRenderer {
    pub fn new<S: Into<String>>(identifier: S, model: ModelHandle) -> Self {
        ModelRenderer {
            identifier: identifier.into(),
            model,
            opacity: 1.0,
            transparent: false,
        }
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
        self.transparent = true;
    }
}
