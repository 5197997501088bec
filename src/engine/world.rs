//! The [`World`] struct stores and updates all scene objects. Its use is to manage any
//! "raw" scene data, store and provide access to the objects in an intended way.
//!
//! It maintains the scene graph and frame timing, and it is the consuming scene of the
//! model loader: loaded models are queued through [`World::model_sink`] and become scene
//! objects when [`World::attach_pending_models`] runs on the frame thread.

use crate::assets::ModelAttachment;
use crate::core::{ObjectId, SceneObject};
use crate::drawables::ModelRenderer;
use crate::prefabs::{CameraPrefab, Prefab};
use itertools::Itertools;
use log::{debug, info, warn};
use nalgebra::Affine3;
use std::collections::HashMap;
use std::sync::mpsc;
use std::time::{Duration, Instant};

/// Central structure representing the running scene.
///
/// The world is an ordinary owned value; whoever drives the frames hands it to the code
/// that needs it.
pub struct World {
    pub objects: HashMap<ObjectId, SceneObject>,
    pub children: Vec<ObjectId>,
    pub active_camera: Option<ObjectId>,

    models: HashMap<String, ObjectId>,
    attachment_tx: mpsc::Sender<ModelAttachment>,
    attachment_rx: mpsc::Receiver<ModelAttachment>,

    start_time: Instant,
    delta_time: Duration,
    last_frame_time: Instant,
    requested_shutdown: bool,
    next_object_id: ObjectId,
}

impl Default for World {
    fn default() -> Self {
        World::new()
    }
}

impl World {
    /// Create a new, empty, clean-slate world.
    pub fn new() -> World {
        let (attachment_tx, attachment_rx) = mpsc::channel();

        World {
            objects: HashMap::new(),
            children: vec![],
            active_camera: None,
            models: HashMap::new(),
            attachment_tx,
            attachment_rx,
            start_time: Instant::now(),
            delta_time: Duration::default(),
            last_frame_time: Instant::now(),
            requested_shutdown: false,
            next_object_id: ObjectId(0),
        }
    }

    pub fn get_object(&self, obj: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&obj)
    }

    pub fn get_object_mut(&mut self, obj: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(&obj)
    }

    pub fn new_object<S: Into<String>>(&mut self, name: S) -> ObjectId {
        let id = self.next_object_id;
        self.next_object_id.0 += 1;

        self.objects.insert(id, SceneObject::new(id, name.into()));

        id
    }

    /// Spawns a camera for a surface of the given size and makes it the active camera
    /// if there is none yet.
    pub fn new_camera(&mut self, width: u32, height: u32) -> ObjectId {
        let camera = CameraPrefab::new(width, height).build(self);

        if self.active_camera.is_none() {
            self.add_child(camera);
            self.active_camera = Some(camera);
        }

        camera
    }

    /// Adds an object to the scene root, detaching it from its previous parent.
    pub fn add_child(&mut self, obj: ObjectId) {
        if !self.objects.contains_key(&obj) {
            warn!("Tried to add unknown object {obj:?} to the scene");
            return;
        }
        self.unlink(obj);
        self.children.push(obj);
    }

    /// Parents `child` under `parent`, like grouping objects so they move as a unit.
    pub fn attach_child(&mut self, parent: ObjectId, child: ObjectId) {
        if parent == child || !self.objects.contains_key(&parent) || !self.objects.contains_key(&child) {
            warn!("Invalid parenting of {child:?} under {parent:?}");
            return;
        }
        self.unlink(child);
        if let Some(p) = self.objects.get_mut(&parent) {
            p.children.push(child);
        }
        if let Some(c) = self.objects.get_mut(&child) {
            c.parent = Some(parent);
        }
    }

    pub fn spawn<P: Prefab>(&mut self, prefab: &P) -> ObjectId {
        prefab.spawn(self)
    }

    /// Advances frame timing. Call once per frame before running frame logic.
    pub fn update(&mut self) {
        self.tick_delta_time();
    }

    pub fn find_object_by_name(&self, name: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .find(|(_, o)| o.name == name)
            .map(|o| *o.0)
    }

    /// Model-local to world matrix, following the parent chain.
    pub fn global_matrix(&self, obj: ObjectId) -> Option<Affine3<f32>> {
        let mut chain = vec![];
        let mut current = Some(obj);
        while let Some(id) = current {
            let o = self.objects.get(&id)?;
            chain.push(o.transform.full_matrix());
            current = o.parent;
        }

        Some(chain.into_iter().rev().fold(Affine3::identity(), |acc, m| acc * *m))
    }

    pub fn print_objects(&self) {
        info!("{} objects in world.", self.objects.len());
        self.print_objects_rec(&self.children, 0)
    }

    fn print_objects_rec(&self, children: &[ObjectId], i: usize) {
        for child in children.iter().filter_map(|c| self.objects.get(c)) {
            info!("{}- {}", "  ".repeat(i), &child.name);
            info!(
                "{}-> Has Drawable: {}",
                "  ".repeat(i + 1),
                child.drawable.is_some()
            );
            self.print_objects_rec(&child.children, i + 1);
        }
    }

    fn tick_delta_time(&mut self) {
        self.delta_time = self.last_frame_time.elapsed();
        self.last_frame_time = Instant::now();
    }

    pub fn delta_time(&self) -> Duration {
        self.delta_time
    }

    pub fn start_time(&self) -> &Instant {
        &self.start_time
    }

    pub fn time(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Removes an object and everything parented under it.
    pub fn delete_object(&mut self, object: ObjectId) {
        self.unlink(object);

        let mut pending = vec![object];
        while let Some(id) = pending.pop() {
            if let Some(obj) = self.objects.remove(&id) {
                pending.extend(obj.children);
            }
            self.models.retain(|_, o| *o != id);
            if self.active_camera == Some(id) {
                self.active_camera = None;
            }
        }
    }

    fn unlink(&mut self, obj: ObjectId) {
        if let Some((pos, _)) = self.children.iter().find_position(|c| **c == obj) {
            self.children.remove(pos);
        }

        let parent = self.objects.get_mut(&obj).and_then(|o| o.parent.take());
        if let Some(parent) = parent.and_then(|p| self.objects.get_mut(&p)) {
            parent.children.retain(|c| *c != obj);
        }
    }

    /// Where the model loader sends the models of a completed batch.
    pub fn model_sink(&self) -> mpsc::Sender<ModelAttachment> {
        self.attachment_tx.clone()
    }

    /// Turns every queued model into a scene object. Each identifier is attached once;
    /// repeated attachments of the same identifier are dropped.
    pub fn attach_pending_models(&mut self) -> usize {
        let pending: Vec<ModelAttachment> = self.attachment_rx.try_iter().collect();
        let mut attached = 0;

        for ModelAttachment { identifier, model } in pending {
            if self.models.contains_key(&identifier) {
                warn!("Model {identifier:?} is already part of the scene");
                continue;
            }

            let obj = self.new_object(identifier.clone());
            if let Some(o) = self.objects.get_mut(&obj) {
                o.set_drawable(ModelRenderer::new(identifier.clone(), model));
            }
            self.add_child(obj);
            debug!("Attached model {identifier:?} as {obj:?}");

            self.models.insert(identifier, obj);
            attached += 1;
        }

        attached
    }

    /// The scene object showing the given imported model.
    pub fn model_object(&self, identifier: &str) -> Option<ObjectId> {
        self.models.get(identifier).copied()
    }

    pub fn model_objects(&self) -> impl Iterator<Item = (&str, ObjectId)> {
        self.models.iter().map(|(id, obj)| (id.as_str(), *obj))
    }

    pub fn shutdown(&mut self) {
        self.requested_shutdown = true;
    }

    pub fn is_shutting_down(&self) -> bool {
        self.requested_shutdown
    }
}
