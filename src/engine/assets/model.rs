use nalgebra::{UnitQuaternion, Vector3, Vector4};
use std::fmt::{Debug, Formatter};
use std::ops::Deref;
use std::sync::Arc;

/// Plain-old-data of one imported model.
#[derive(Debug, Clone)]
pub struct Model {
    pub name: String,
    pub nodes: Vec<ModelNode>,
}

#[derive(Debug, Clone)]
pub struct ModelNode {
    pub name: String,
    pub translation: Vector3<f32>,
    pub rotation: UnitQuaternion<f32>,
    pub scale: Vector3<f32>,
    pub primitives: Vec<ModelPrimitive>,
    pub children: Vec<ModelNode>,
}

#[derive(Debug, Clone)]
pub struct ModelPrimitive {
    pub positions: Vec<Vector3<f32>>,
    pub indices: Option<Vec<u32>>,
    /// RGBA base color factor of the primitive's material.
    pub base_color: Vector4<f32>,
}

impl Model {
    pub fn new<S: Into<String>>(name: S, nodes: Vec<ModelNode>) -> Self {
        Model {
            name: name.into(),
            nodes,
        }
    }

    pub fn empty<S: Into<String>>(name: S) -> Self {
        Model::new(name, Vec::new())
    }

    pub fn into_handle(self) -> ModelHandle {
        ModelHandle(Arc::new(self))
    }

    /// Iterates over every node of the model, depth first.
    pub fn walk(&self) -> impl Iterator<Item = &ModelNode> {
        let mut stack: Vec<&ModelNode> = self.nodes.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    pub fn primitive_count(&self) -> usize {
        self.walk().map(|n| n.primitives.len()).sum()
    }

    pub fn vertex_count(&self) -> usize {
        self.walk()
            .flat_map(|n| &n.primitives)
            .map(|p| p.positions.len())
            .sum()
    }
}

impl ModelNode {
    pub fn new<S: Into<String>>(name: S) -> Self {
        ModelNode {
            name: name.into(),
            translation: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
            scale: Vector3::new(1.0, 1.0, 1.0),
            primitives: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// Shared, read-only reference to a loaded [`Model`].
///
/// Cloning a handle is cheap; the loader's table and every scene object the model
/// is attached to point at the same data.
#[derive(Clone)]
pub struct ModelHandle(Arc<Model>);

impl ModelHandle {
    pub fn ptr_eq(&self, other: &ModelHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for ModelHandle {
    type Target = Model;

    fn deref(&self) -> &Model {
        &self.0
    }
}

impl Debug for ModelHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ModelHandle({:?})", self.0.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_with_points(name: &str, points: usize) -> ModelNode {
        let mut node = ModelNode::new(name);
        node.primitives.push(ModelPrimitive {
            positions: vec![Vector3::zeros(); points],
            indices: None,
            base_color: Vector4::new(1.0, 1.0, 1.0, 1.0),
        });
        node
    }

    #[test]
    fn walk_is_depth_first() {
        let mut root = node_with_points("root", 3);
        root.children.push(node_with_points("child", 6));
        let model = Model::new("tree", vec![root, node_with_points("sibling", 3)]);

        let names: Vec<_> = model.walk().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["root", "child", "sibling"]);
        assert_eq!(model.primitive_count(), 3);
        assert_eq!(model.vertex_count(), 12);
    }

    #[test]
    fn handles_share_data() {
        let a = Model::empty("hoop").into_handle();
        let b = a.clone();
        let c = Model::empty("hoop").into_handle();
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&c));
        assert_eq!(b.name, "hoop");
    }
}
