use crate::drawables::{MeshRenderer, ModelRenderer};

/// What a host renderer draws for a scene object.
#[derive(Debug, Clone)]
pub enum Drawable {
    Mesh(MeshRenderer),
    Model(ModelRenderer),
}

impl Drawable {
    pub fn as_model(&self) -> Option<&ModelRenderer> {
        match self {
            Drawable::Model(model) => Some(model),
            Drawable::Mesh(_) => None,
        }
    }

    pub fn as_model_mut(&mut self) -> Option<&mut ModelRenderer> {
        match self {
            Drawable::Model(model) => Some(model),
            Drawable::Mesh(_) => None,
        }
    }

    pub fn as_mesh(&self) -> Option<&MeshRenderer> {
        match self {
            Drawable::Mesh(mesh) => Some(mesh),
            Drawable::Model(_) => None,
        }
    }
}

impl From<MeshRenderer> for Drawable {
    fn from(renderer: MeshRenderer) -> Self {
        Drawable::Mesh(renderer)
    }
}

impl From<ModelRenderer> for Drawable {
    fn from(renderer: ModelRenderer) -> Self {
        Drawable::Model(renderer)
    }
}
