use nalgebra::{Matrix4, Perspective3};

pub const DEFAULT_FOV_DEGREES: f32 = 75.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 1000.0;

/// Perspective camera settings. Where the camera is comes from its object's transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    fov_degrees: f32,
    near: f32,
    far: f32,
    aspect: f32,
    projection: Perspective3<f32>,
}

impl Camera {
    pub fn new(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Camera {
            fov_degrees,
            near,
            far,
            aspect,
            projection: Perspective3::new(aspect, fov_degrees.to_radians(), near, far),
        }
    }

    pub fn with_surface(width: u32, height: u32) -> Self {
        let mut camera = Camera::new(DEFAULT_FOV_DEGREES, 1.0, DEFAULT_NEAR, DEFAULT_FAR);
        camera.resize(width, height);
        camera
    }

    /// Follows a change of the render surface size. Degenerate sizes are ignored and
    /// reported as `false`.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.aspect = width as f32 / height as f32;
        self.projection = Perspective3::new(self.aspect, self.fov_degrees.to_radians(), self.near, self.far);
        true
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn projection(&self) -> &Perspective3<f32> {
        &self.projection
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection.to_homogeneous()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::with_surface(800, 600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_aspect() {
        let mut camera = Camera::with_surface(800, 600);
        assert!((camera.aspect() - 800.0 / 600.0).abs() < f32::EPSILON);

        assert!(camera.resize(1920, 1080));
        assert!((camera.projection().aspect() - 1920.0 / 1080.0).abs() < 1e-5);
    }

    #[test]
    fn zero_height_is_ignored() {
        let mut camera = Camera::with_surface(800, 600);
        let before = camera.clone();
        assert!(!camera.resize(800, 0));
        assert_eq!(camera, before);
    }
}
