use crate::utils::hex_to_rgb;
use bon::Builder;
use nalgebra::Vector3;

/// Surface description a host renderer uses to draw a procedural mesh.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct Material {
    pub name: String,
    #[builder(default = Vector3::new(0.7, 0.7, 0.7))]
    pub color: Vector3<f32>,
    #[builder(default = false)]
    pub wireframe: bool,
    #[builder(default = 1.0)]
    pub opacity: f32,
    #[builder(default = false)]
    pub transparent: bool,
}

impl Material {
    pub fn wireframe<S: Into<String>>(name: S, hex: u32) -> Material {
        Material::builder()
            .name(name.into())
            .color(hex_to_rgb(hex))
            .wireframe(true)
            .build()
    }
}
