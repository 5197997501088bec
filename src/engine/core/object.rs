use crate::components::{Camera, Light};
use crate::core::Transform;
use crate::drawables::Drawable;

#[derive(Debug, Copy, Clone, Eq, Ord, PartialOrd, PartialEq, Hash)]
#[repr(transparent)]
pub struct ObjectId(pub usize);

/// One node of the scene graph.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    pub children: Vec<ObjectId>,
    pub parent: Option<ObjectId>,
    pub transform: Transform,
    pub drawable: Option<Drawable>,
    pub camera: Option<Camera>,
    pub light: Option<Light>,
}

impl SceneObject {
    pub(crate) fn new(id: ObjectId, name: String) -> Self {
        SceneObject {
            id,
            name,
            children: vec![],
            parent: None,
            transform: Transform::new(),
            drawable: None,
            camera: None,
            light: None,
        }
    }

    pub fn set_drawable<D: Into<Drawable>>(&mut self, drawable: D) {
        self.drawable = Some(drawable.into());
    }

    /// Identifier of the imported model drawn by this object, if any.
    pub fn model_identifier(&self) -> Option<&str> {
        self.drawable
            .as_ref()
            .and_then(Drawable::as_model)
            .map(|model| model.identifier.as_str())
    }
}
