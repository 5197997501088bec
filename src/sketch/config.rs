use crate::assets::{DEFAULT_ASSET_ROOT, DEFAULT_MODEL_EXTENSION};
use crate::utils::animation::REFERENCE_FRAME_RATE;
use bon::Builder;
use nalgebra::Vector3;
use std::path::PathBuf;

pub const DEFAULT_MODELS: [&str; 3] = ["basketball", "hoop", "spaceshuttle"];
pub const DEFAULT_ORBITER: &str = "spaceshuttle";

/// Fixed placement applied to one imported model after the scatter.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct ModelOverride {
    #[builder(into)]
    pub identifier: String,
    pub scale: Option<f32>,
    pub position: Option<Vector3<f32>>,
    pub rotation: Option<Vector3<f32>>,
}

fn default_models() -> Vec<String> {
    DEFAULT_MODELS.iter().map(|s| s.to_string()).collect()
}

fn default_overrides() -> Vec<ModelOverride> {
    vec![
        ModelOverride::builder().identifier("hoop").scale(3.0).build(),
        ModelOverride::builder()
            .identifier(DEFAULT_ORBITER)
            .scale(0.002)
            .position(Vector3::new(0.0, 5.0, 0.0))
            .rotation(Vector3::new(0.0, 5.0, 0.0))
            .build(),
    ]
}

/// Everything tunable about the sketch scene. Rates are in radians per second.
#[derive(Debug, Clone, Builder)]
pub struct SketchConfig {
    #[builder(default = PathBuf::from(DEFAULT_ASSET_ROOT), into)]
    pub asset_root: PathBuf,
    #[builder(default = DEFAULT_MODEL_EXTENSION.to_string(), into)]
    pub model_extension: String,
    #[builder(default = default_models())]
    pub models: Vec<String>,

    #[builder(default = 100)]
    pub star_count: usize,
    /// Edge length of the cube the stars are scattered in.
    #[builder(default = 100.0)]
    pub star_spread: f32,
    #[builder(default = 0.2)]
    pub star_scale: f32,
    #[builder(default = 0.1 * REFERENCE_FRAME_RATE)]
    pub star_spin_rate: f32,

    #[builder(default = 0.01 * REFERENCE_FRAME_RATE)]
    pub cube_spin_rate: f32,

    #[builder(default = 10.0)]
    pub camera_distance: f32,

    #[builder(default = DEFAULT_ORBITER.to_string(), into)]
    pub orbiter: String,
    #[builder(default = 5.0)]
    pub orbit_radius: f32,
    #[builder(default = 0.01 * REFERENCE_FRAME_RATE)]
    pub orbit_speed: f32,

    #[builder(default = 0.3)]
    pub model_scale: f32,
    /// Loaded models get a random offset in `[-model_scatter, model_scatter]`.
    #[builder(default = 3.0)]
    pub model_scatter: f32,
    #[builder(default = default_overrides())]
    pub overrides: Vec<ModelOverride>,

    /// Seeds star and model placement. Unseeded runs differ every time.
    pub seed: Option<u64>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        SketchConfig::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_sketch() {
        let config = SketchConfig::default();
        assert_eq!(config.models, ["basketball", "hoop", "spaceshuttle"]);
        assert_eq!(config.star_count, 100);
        assert_eq!(config.asset_root, PathBuf::from("assets"));
        assert!((config.star_spin_rate - 6.0).abs() < 1e-5);
        assert!((config.cube_spin_rate - 0.6).abs() < 1e-5);
        assert_eq!(config.overrides.len(), 2);
        assert_eq!(config.overrides[0].scale, Some(3.0));
        assert_eq!(config.seed, None);
    }
}
