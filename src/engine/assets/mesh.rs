use nalgebra::Vector3;

/// Procedural geometry in plain vertex form.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub positions: Vec<Vector3<f32>>,
    pub indices: Option<Vec<u32>>,
}

#[derive(Debug, Clone)]
pub struct MeshBuilder {
    positions: Vec<Vector3<f32>>,
    indices: Option<Vec<u32>>,
    scale: f32,
}

impl MeshBuilder {
    pub fn new(positions: Vec<Vector3<f32>>) -> Self {
        MeshBuilder {
            positions,
            indices: None,
            scale: 1.0,
        }
    }

    pub fn with_indices(mut self, indices: Vec<u32>) -> Self {
        self.indices = Some(indices);
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn build(self) -> Mesh {
        let scale = self.scale;
        Mesh {
            positions: self.positions.into_iter().map(|p| p * scale).collect(),
            indices: self.indices,
        }
    }
}

impl From<MeshBuilder> for Mesh {
    fn from(builder: MeshBuilder) -> Self {
        builder.build()
    }
}

const CUBE_IDX: [u32; 36] = [
    0, 2, 3, 0, 3, 1, // -z
    4, 5, 7, 4, 7, 6, // +z
    0, 4, 6, 0, 6, 2, // -x
    1, 3, 7, 1, 7, 5, // +x
    0, 1, 5, 0, 5, 4, // -y
    2, 6, 7, 2, 7, 3, // +y
];

const ICOSAHEDRON_IDX: [u32; 60] = [
    0, 11, 5, 0, 5, 1, 0, 1, 7, 0, 7, 10, 0, 10, 11, //
    1, 5, 9, 5, 11, 4, 11, 10, 2, 10, 7, 6, 7, 1, 8, //
    3, 9, 4, 3, 4, 2, 3, 2, 6, 3, 6, 8, 3, 8, 9, //
    4, 9, 5, 2, 4, 11, 6, 2, 10, 8, 6, 7, 9, 8, 1,
];

impl Mesh {
    pub fn builder(positions: Vec<Vector3<f32>>) -> MeshBuilder {
        MeshBuilder::new(positions)
    }

    /// Axis aligned box centered on the origin with an edge length of `size`.
    pub fn cube(size: f32) -> Mesh {
        // vertex i sits at the corner (x, y, z) = bits (0, 1, 2) of i
        let positions = (0..8u32)
            .map(|i| {
                Vector3::new(
                    (i & 1) as f32 - 0.5,
                    ((i >> 1) & 1) as f32 - 0.5,
                    ((i >> 2) & 1) as f32 - 0.5,
                )
            })
            .collect();

        Mesh::builder(positions)
            .with_indices(CUBE_IDX.to_vec())
            .with_scale(size)
            .build()
    }

    /// Regular icosahedron with all vertices at `radius` from the origin.
    pub fn icosahedron(radius: f32) -> Mesh {
        let t = (1.0 + 5.0f32.sqrt()) / 2.0;
        #[rustfmt::skip]
        let corners = [
            (-1.0, t, 0.0), (1.0, t, 0.0), (-1.0, -t, 0.0), (1.0, -t, 0.0),
            (0.0, -1.0, t), (0.0, 1.0, t), (0.0, -1.0, -t), (0.0, 1.0, -t),
            (t, 0.0, -1.0), (t, 0.0, 1.0), (-t, 0.0, -1.0), (-t, 0.0, 1.0),
        ];
        let positions = corners
            .iter()
            .map(|&(x, y, z)| Vector3::new(x, y, z).normalize())
            .collect();

        Mesh::builder(positions)
            .with_indices(ICOSAHEDRON_IDX.to_vec())
            .with_scale(radius)
            .build()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len() / 3,
            None => self.positions.len() / 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn edge_uses(mesh: &Mesh) -> HashMap<(u32, u32), usize> {
        let mut edges = HashMap::new();
        for tri in mesh.indices.as_ref().unwrap().chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                *edges.entry((a.min(b), a.max(b))).or_insert(0) += 1;
            }
        }
        edges
    }

    #[test]
    fn cube_is_closed() {
        let cube = Mesh::cube(2.0);
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.triangle_count(), 12);
        for p in &cube.positions {
            assert_eq!(p.abs(), Vector3::new(1.0, 1.0, 1.0));
        }
        assert!(edge_uses(&cube).values().all(|&uses| uses == 2));
    }

    #[test]
    fn icosahedron_is_regular_and_closed() {
        let ico = Mesh::icosahedron(3.0);
        assert_eq!(ico.vertex_count(), 12);
        assert_eq!(ico.triangle_count(), 20);
        for p in &ico.positions {
            assert!((p.norm() - 3.0).abs() < 1e-5);
        }

        let edges = edge_uses(&ico);
        assert_eq!(edges.len(), 30);
        assert!(edges.values().all(|&uses| uses == 2));
    }
}
