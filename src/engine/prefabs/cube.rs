use crate::World;
use crate::assets::Mesh;
use crate::core::ObjectId;
use crate::drawables::{Material, MeshRenderer};
use crate::prefabs::prefab::Prefab;

pub const CUBE_COLOR: u32 = 0x0077ff;

pub struct CubePrefab {
    pub size: f32,
    pub color: u32,
}

impl Default for CubePrefab {
    fn default() -> Self {
        CubePrefab {
            size: 1.0,
            color: CUBE_COLOR,
        }
    }
}

impl Prefab for CubePrefab {
    #[inline]
    fn prefab_name(&self) -> &'static str {
        "Cube"
    }

    fn build(&self, world: &mut World) -> ObjectId {
        let renderer = MeshRenderer::new(
            Mesh::cube(self.size),
            Material::wireframe("Cube Material", self.color),
        );

        let cube = world.new_object("Cube");
        if let Some(o) = world.get_object_mut(cube) {
            o.set_drawable(renderer);
        }

        cube
    }
}
