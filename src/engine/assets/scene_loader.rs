//! Decodes glTF / GLB bytes into a [`Model`].

use crate::assets::error::{NoSceneErr, ParseErr, SourceError};
use crate::assets::{Model, ModelNode, ModelPrimitive};
use gltf::{self, Document, Node, buffer::Data as BufferData, mesh};
use log::{trace, warn};
use nalgebra::{Quaternion, UnitQuaternion, Vector3, Vector4};
use snafu::{OptionExt, ResultExt};
use std::path::Path;

pub struct GltfScene {
    pub doc: Document,
    pub buffers: Vec<BufferData>,
}

impl GltfScene {
    /// Parses a binary (`.glb`) or JSON (`.gltf`) document. External buffer URIs are
    /// not resolved, only embedded and `data:` buffers.
    pub fn from_slice(bytes: &[u8], path: &Path) -> Result<Self, SourceError> {
        let (doc, buffers, _images) = gltf::import_slice(bytes).context(ParseErr { path })?;
        Ok(Self { doc, buffers })
    }
}

pub struct SceneLoader;

impl SceneLoader {
    pub fn load_buffer(name: &str, bytes: &[u8], path: &Path) -> Result<Model, SourceError> {
        let scene = GltfScene::from_slice(bytes, path)?;
        Self::load_from_scene(name, &scene, path)
    }

    pub fn load_from_scene(
        name: &str,
        gltf_scene: &GltfScene,
        path: &Path,
    ) -> Result<Model, SourceError> {
        let doc = &gltf_scene.doc;

        let root_scene = doc
            .default_scene()
            .or_else(|| doc.scenes().next())
            .context(NoSceneErr { path })?;

        let nodes = root_scene
            .nodes()
            .map(|node| load_node(gltf_scene, node))
            .collect();

        let model = Model::new(name, nodes);
        trace!(
            "Decoded model {name:?}: {} primitives, {} vertices",
            model.primitive_count(),
            model.vertex_count()
        );

        Ok(model)
    }
}

fn load_node(scene: &GltfScene, node: Node) -> ModelNode {
    let mut model_node = ModelNode::new(node.name().unwrap_or("Unnamed"));

    let (p, r, s) = node.transform().decomposed();
    model_node.translation = Vector3::from(p);
    model_node.rotation = UnitQuaternion::from_quaternion(Quaternion::from(r));
    model_node.scale = Vector3::from(s);

    if let Some(mesh) = node.mesh() {
        model_node.primitives = load_primitives(scene, mesh);
    }

    model_node.children = node
        .children()
        .map(|child| load_node(scene, child))
        .collect();

    model_node
}

fn load_primitives(scene: &GltfScene, gltf_mesh: gltf::Mesh) -> Vec<ModelPrimitive> {
    let get_buf = |b: gltf::Buffer| -> Option<&[u8]> { Some(&scene.buffers[b.index()].0) };

    let mut primitives = Vec::new();
    for prim in gltf_mesh.primitives() {
        if prim.mode() != mesh::Mode::Triangles {
            warn!("Non-triangle primitive encountered; skipping.");
            continue;
        }

        let reader = prim.reader(get_buf);
        let Some(positions) = reader.read_positions() else {
            warn!("Primitive without positions encountered; skipping.");
            continue;
        };

        let positions: Vec<Vector3<f32>> = positions.map(Vector3::from).collect();
        let indices = reader.read_indices().map(|ind| ind.into_u32().collect());
        let base_color = prim
            .material()
            .pbr_metallic_roughness()
            .base_color_factor();

        primitives.push(ModelPrimitive {
            positions,
            indices,
            base_color: Vector4::from(base_color),
        });
    }
    primitives
}
