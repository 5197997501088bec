use crate::utils::hex_to_rgb;
use nalgebra::Vector3;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LightType {
    /// Parallel rays along the direction from the light's position towards the origin.
    Directional,
    /// Uniform light from everywhere.
    Ambient,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub kind: LightType,
    pub color: Vector3<f32>,
    pub intensity: f32,
}

impl Light {
    pub fn directional(hex: u32, intensity: f32) -> Self {
        Light {
            kind: LightType::Directional,
            color: hex_to_rgb(hex),
            intensity,
        }
    }

    pub fn ambient(hex: u32, intensity: f32) -> Self {
        Light {
            kind: LightType::Ambient,
            color: hex_to_rgb(hex),
            intensity,
        }
    }
}
