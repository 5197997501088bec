use crate::World;
use crate::assets::Mesh;
use crate::core::ObjectId;
use crate::drawables::{Material, MeshRenderer};
use crate::prefabs::prefab::Prefab;
use crate::utils::WHITE;
use nalgebra::Vector3;

/// A small white wireframe icosahedron.
pub struct StarPrefab {
    pub position: Vector3<f32>,
    pub scale: f32,
}

impl StarPrefab {
    pub fn new(position: Vector3<f32>, scale: f32) -> Self {
        StarPrefab { position, scale }
    }
}

impl Prefab for StarPrefab {
    fn prefab_name(&self) -> &'static str {
        "Star"
    }

    fn build(&self, world: &mut World) -> ObjectId {
        let star = world.new_object("Star");
        if let Some(o) = world.get_object_mut(star) {
            o.set_drawable(MeshRenderer::new(
                Mesh::icosahedron(1.0),
                Material::wireframe("Star Material", WHITE),
            ));
            o.transform.set_uniform_local_scale(self.scale);
            o.transform.set_local_position_vec(self.position);
        }
        star
    }
}
