use nalgebra::{Affine3, Scale3, Translation3, UnitQuaternion, Vector3};

/// Stores the translation, rotation and scale of a [`SceneObject`](crate::core::SceneObject).
///
/// Rotation is kept as Euler angles in radians, applied in X, Y, Z order, so per-axis
/// increments accumulate the way a host engine expects. The combined matrix is cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    pos: Vector3<f32>,
    euler: Vector3<f32>,
    scale: Vector3<f32>,
    compound_mat: Affine3<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Transform::new()
    }
}

impl Transform {
    /// Creates a transform at the origin with no rotation and a uniform scale of `1.0`.
    pub fn new() -> Self {
        Transform {
            pos: Vector3::zeros(),
            euler: Vector3::zeros(),
            scale: Vector3::new(1.0, 1.0, 1.0),
            compound_mat: Affine3::identity(),
        }
    }

    /// Sets the local position of the transform.
    #[inline]
    pub fn set_local_position(&mut self, x: f32, y: f32, z: f32) {
        self.set_local_position_vec(Vector3::new(x, y, z));
    }

    /// Sets the local position using a vector.
    pub fn set_local_position_vec(&mut self, position: Vector3<f32>) {
        self.pos = position;
        self.recalculate_combined_matrix();
    }

    /// Returns a reference to the local position vector.
    pub fn local_position(&self) -> &Vector3<f32> {
        &self.pos
    }

    /// Adds the given offset to the local position.
    pub fn translate(&mut self, other: Vector3<f32>) {
        self.pos += other;
        self.recalculate_combined_matrix();
    }

    #[inline]
    pub fn set_euler_rotation(&mut self, x: f32, y: f32, z: f32) {
        self.set_euler_rotation_vec(Vector3::new(x, y, z));
    }

    pub fn set_euler_rotation_vec(&mut self, angles: Vector3<f32>) {
        self.euler = angles;
        self.recalculate_combined_matrix();
    }

    pub fn euler_rotation(&self) -> &Vector3<f32> {
        &self.euler
    }

    /// Adds the given angles (radians) to the Euler rotation.
    pub fn rotate_euler(&mut self, delta: Vector3<f32>) {
        self.euler += delta;
        self.recalculate_combined_matrix();
    }

    /// Returns the local rotation as a quaternion.
    pub fn local_rotation(&self) -> UnitQuaternion<f32> {
        UnitQuaternion::from_axis_angle(&Vector3::x_axis(), self.euler.x)
            * UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.euler.y)
            * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), self.euler.z)
    }

    /// Sets the local scale using three independent factors.
    pub fn set_nonuniform_local_scale(&mut self, scale: Vector3<f32>) {
        self.scale = scale;
        self.recalculate_combined_matrix();
    }

    /// Sets the local scale uniformly.
    pub fn set_uniform_local_scale(&mut self, factor: f32) {
        self.set_nonuniform_local_scale(Vector3::new(factor, factor, factor));
    }

    /// Returns a reference to the local scale vector.
    pub fn local_scale(&self) -> &Vector3<f32> {
        &self.scale
    }

    fn recalculate_combined_matrix(&mut self) {
        self.compound_mat = Affine3::from_matrix_unchecked(
            Translation3::from(self.pos).to_homogeneous()
                * self.local_rotation().to_homogeneous()
                * Scale3::from(self.scale).to_homogeneous(),
        );
    }

    /// Returns a reference to the combined transformation matrix.
    pub fn full_matrix(&self) -> &Affine3<f32> {
        &self.compound_mat
    }

    /// Returns the forward direction relative to the parent.
    pub fn local_forward(&self) -> Vector3<f32> {
        self.local_rotation() * Vector3::new(0.0, 0.0, -1.0)
    }
}
