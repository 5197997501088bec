//! The demo scene: a spinning wireframe cube in a field of stars, plus imported models
//! that are only touched once their whole batch has loaded.

mod config;

pub use config::*;

use crate::assets::error::AssetNotFoundErr;
use crate::assets::{
    AssetError, AssetLoader, AssetLocator, AssetSource, BatchReport, GltfFileSource,
};
use crate::core::ObjectId;
use crate::prefabs::{AmbientLightPrefab, CubePrefab, DirectionalLightPrefab, StarPrefab};
use crate::utils::animation::{Opacity, Orbit, ToggleSpin, scatter, spin};
use crate::{AppState, DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH, HostEvent, UiAction, World};
use futures::FutureExt;
use log::{debug, error, info, warn};
use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::sync::Arc;
use tokio::task::JoinHandle;

pub struct Sketch<S: AssetSource = GltfFileSource> {
    config: SketchConfig,
    loader: Arc<AssetLoader<S>>,
    batch: Option<JoinHandle<Result<BatchReport, AssetError>>>,
    rng: StdRng,

    camera: Option<ObjectId>,
    cube: Option<ObjectId>,
    stars: Vec<ObjectId>,

    cube_spin: ToggleSpin,
    orbit: Orbit,
    opacity: Opacity,
    transformed: bool,
}

impl Default for Sketch {
    fn default() -> Self {
        Sketch::new(SketchConfig::default())
    }
}

impl Sketch {
    pub fn new(config: SketchConfig) -> Self {
        Sketch::with_source(config, GltfFileSource)
    }
}

impl<S: AssetSource> Sketch<S> {
    pub fn with_source(config: SketchConfig, source: S) -> Self {
        let locator = AssetLocator::new(&config.asset_root, &config.model_extension);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let rate = config.cube_spin_rate;

        Sketch {
            loader: Arc::new(AssetLoader::with_locator(source, locator)),
            batch: None,
            rng,
            camera: None,
            cube: None,
            stars: Vec::new(),
            cube_spin: ToggleSpin::new(Vector3::new(rate, rate, 0.0)),
            orbit: Orbit::new(config.orbit_radius, config.orbit_speed),
            opacity: Opacity::default(),
            transformed: false,
            config,
        }
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn loader(&self) -> &Arc<AssetLoader<S>> {
        &self.loader
    }

    pub fn camera(&self) -> Option<ObjectId> {
        self.camera
    }

    pub fn cube(&self) -> Option<ObjectId> {
        self.cube
    }

    pub fn stars(&self) -> &[ObjectId] {
        &self.stars
    }

    pub fn cube_rotation_enabled(&self) -> bool {
        self.cube_spin.enabled
    }

    pub fn imported_opacity(&self) -> f32 {
        self.opacity.0
    }

    pub fn orbit(&self) -> &Orbit {
        &self.orbit
    }

    /// Whether the loaded models were placed already.
    pub fn is_transformed(&self) -> bool {
        self.transformed
    }

    pub fn handle_action(&mut self, world: &mut World, action: UiAction) {
        debug!("UI action {action}");
        match action {
            UiAction::ToggleCubeRotation => self.cube_spin = self.cube_spin.toggled(),
            UiAction::ToggleImportedOpacity => {
                self.opacity = self.opacity.toggled();
                let ids: Vec<ObjectId> = world.model_objects().map(|(_, obj)| obj).collect();
                for id in ids {
                    if let Some(renderer) = world
                        .get_object_mut(id)
                        .and_then(|o| o.drawable.as_mut())
                        .and_then(|d| d.as_model_mut())
                    {
                        renderer.set_opacity(self.opacity.0);
                    }
                }
            }
        }
    }

    /// Updates the camera's aspect ratio. Zero-sized surfaces are ignored.
    pub fn resize(&mut self, world: &mut World, width: u32, height: u32) {
        let Some(camera) = self
            .camera
            .and_then(|id| world.get_object_mut(id))
            .and_then(|o| o.camera.as_mut())
        else {
            return;
        };

        if !camera.resize(width, height) {
            debug!("Ignoring resize to {width}x{height}");
        }
    }

    fn spawn_scene(&mut self, world: &mut World) {
        let camera = world.new_camera(DEFAULT_SURFACE_WIDTH, DEFAULT_SURFACE_HEIGHT);
        if let Some(o) = world.get_object_mut(camera) {
            o.transform
                .set_local_position(0.0, 0.0, self.config.camera_distance);
        }
        self.camera = Some(camera);

        self.cube = Some(world.spawn(&CubePrefab::default()));

        self.stars = (0..self.config.star_count)
            .map(|_| {
                let position = scatter(&mut self.rng, self.config.star_spread);
                world.spawn(&StarPrefab::new(position, self.config.star_scale))
            })
            .collect();

        world.spawn(&DirectionalLightPrefab::default());
        world.spawn(&AmbientLightPrefab::default());
    }

    fn spin_objects(&mut self, world: &mut World, dt: f32) {
        let star_rate = self.config.star_spin_rate;
        let star_rate = Vector3::new(star_rate, star_rate, 0.0);
        for star in &self.stars {
            if let Some(o) = world.get_object_mut(*star) {
                let rotation = spin(*o.transform.euler_rotation(), star_rate, dt);
                o.transform.set_euler_rotation_vec(rotation);
            }
        }

        if let Some(o) = self.cube.and_then(|id| world.get_object_mut(id)) {
            let rotation = self.cube_spin.step(*o.transform.euler_rotation(), dt);
            o.transform.set_euler_rotation_vec(rotation);
        }
    }

    fn move_orbiter(&mut self, world: &mut World, dt: f32) {
        let Some(o) = world
            .model_object(&self.config.orbiter)
            .and_then(|id| world.get_object_mut(id))
        else {
            return;
        };

        let pose = self.orbit.pose();
        o.transform.set_local_position_vec(pose.position);
        let rotation = *o.transform.euler_rotation();
        o.transform
            .set_euler_rotation(rotation.x, pose.yaw, rotation.z);

        self.orbit = self.orbit.advanced(dt);
    }

    /// Scatters every loaded model, then applies the configured overrides.
    fn place_models(&mut self, world: &mut World) -> Result<(), AssetError> {
        let mut models: Vec<(String, ObjectId)> = world
            .model_objects()
            .map(|(id, obj)| (id.to_string(), obj))
            .collect();
        models.sort();

        let scatter = self.config.model_scatter;
        for (_, obj) in &models {
            let offset = (self.rng.r#gen::<f32>() - 0.5) * 2.0 * scatter;
            if let Some(o) = world.get_object_mut(*obj) {
                o.transform.set_uniform_local_scale(self.config.model_scale);
                o.transform.set_local_position(offset, offset, offset);
                o.transform.set_euler_rotation(offset, offset, offset);
            }
        }

        for placement in &self.config.overrides {
            let identifier = placement.identifier.as_str();
            self.loader.get(identifier)?;
            let o = world
                .model_object(identifier)
                .and_then(|id| world.get_object_mut(id))
                .ok_or_else(|| AssetNotFoundErr { identifier }.build())?;

            if let Some(scale) = placement.scale {
                o.transform.set_uniform_local_scale(scale);
            }
            if let Some(position) = placement.position {
                o.transform.set_local_position_vec(position);
            }
            if let Some(rotation) = placement.rotation {
                o.transform.set_euler_rotation_vec(rotation);
            }
        }

        info!("Placed {} models", models.len());
        Ok(())
    }

    fn poll_batch(&mut self) {
        let Some(batch) = self.batch.as_mut() else {
            return;
        };
        let Some(outcome) = batch.now_or_never() else {
            return;
        };
        self.batch = None;

        match outcome {
            Ok(Ok(report)) => debug!("Batch finished as {:?}", report.state()),
            Ok(Err(e)) => error!("{e}"),
            Err(e) => error!("Model loading task failed: {e}"),
        }
    }
}

impl<S: AssetSource> AppState for Sketch<S> {
    fn init(&mut self, world: &mut World) -> Result<(), Box<dyn Error>> {
        self.spawn_scene(world);
        self.batch = Some(
            self.loader
                .spawn_batch(self.config.models.clone(), world.model_sink()),
        );
        Ok(())
    }

    fn update(&mut self, world: &mut World) -> Result<(), Box<dyn Error>> {
        let dt = world.delta_time().as_secs_f32();
        self.poll_batch();

        self.spin_objects(world, dt);

        if !self.loader.is_ready() {
            return Ok(());
        }
        world.attach_pending_models();

        self.move_orbiter(world, dt);

        if !self.transformed {
            self.transformed = true;
            self.place_models(world)?;
        }

        Ok(())
    }

    fn on_event(&mut self, world: &mut World, event: &HostEvent) -> Result<(), Box<dyn Error>> {
        match event {
            HostEvent::Click(callback) => match UiAction::from_callback(callback) {
                Some(action) => self.handle_action(world, action),
                None => warn!("No UI action named {callback:?}"),
            },
            HostEvent::Resize { width, height } => self.resize(world, *width, *height),
            HostEvent::Shutdown => {}
        }
        Ok(())
    }

    fn destroy(&mut self, _world: &mut World) -> Result<(), Box<dyn Error>> {
        if let Some(batch) = self.batch.take() {
            batch.abort();
        }
        Ok(())
    }
}
