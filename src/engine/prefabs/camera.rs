use crate::World;
use crate::components::Camera;
use crate::core::ObjectId;
use crate::prefabs::prefab::Prefab;

pub struct CameraPrefab {
    pub width: u32,
    pub height: u32,
}

impl CameraPrefab {
    pub const fn new(width: u32, height: u32) -> Self {
        CameraPrefab { width, height }
    }
}

impl Prefab for CameraPrefab {
    fn prefab_name(&self) -> &'static str {
        "Camera"
    }

    fn build(&self, world: &mut World) -> ObjectId {
        let obj = world.new_object("Camera");
        if let Some(o) = world.get_object_mut(obj) {
            o.camera = Some(Camera::with_surface(self.width, self.height));
        }
        obj
    }
}
