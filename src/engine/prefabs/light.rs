use crate::World;
use crate::components::Light;
use crate::core::ObjectId;
use crate::prefabs::prefab::Prefab;
use nalgebra::Vector3;

pub struct DirectionalLightPrefab {
    pub color: u32,
    pub intensity: f32,
    pub position: Vector3<f32>,
}

impl Default for DirectionalLightPrefab {
    fn default() -> Self {
        DirectionalLightPrefab {
            color: 0xffffff,
            intensity: 1.0,
            position: Vector3::new(5.0, 10.0, 7.5),
        }
    }
}

impl Prefab for DirectionalLightPrefab {
    fn prefab_name(&self) -> &'static str {
        "Directional Light"
    }

    fn build(&self, world: &mut World) -> ObjectId {
        let obj = world.new_object(self.prefab_name());
        if let Some(o) = world.get_object_mut(obj) {
            o.light = Some(Light::directional(self.color, self.intensity));
            o.transform.set_local_position_vec(self.position);
        }
        obj
    }
}

pub struct AmbientLightPrefab {
    pub color: u32,
    pub intensity: f32,
}

impl Default for AmbientLightPrefab {
    fn default() -> Self {
        AmbientLightPrefab {
            color: 0x404040,
            intensity: 1.0,
        }
    }
}

impl Prefab for AmbientLightPrefab {
    fn prefab_name(&self) -> &'static str {
        "Ambient Light"
    }

    fn build(&self, world: &mut World) -> ObjectId {
        let obj = world.new_object(self.prefab_name());
        if let Some(o) = world.get_object_mut(obj) {
            o.light = Some(Light::ambient(self.color, self.intensity));
        }
        obj
    }
}
