//! Per-frame scene motion as plain functions of `(state, elapsed seconds)`.
//!
//! Rates are per second. The sketch's motion was first tuned per frame, so its defaults
//! are per-frame values scaled by [`REFERENCE_FRAME_RATE`].

use nalgebra::Vector3;
use rand::Rng;
use std::f32::consts::FRAC_PI_2;

pub const REFERENCE_FRAME_RATE: f32 = 60.0;

/// Adds `rate * dt` to a set of Euler angles.
pub fn spin(rotation: Vector3<f32>, rate: Vector3<f32>, dt: f32) -> Vector3<f32> {
    rotation + rate * dt
}

/// Random point in the axis aligned cube of edge `extent` centered on the origin.
pub fn scatter<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> Vector3<f32> {
    Vector3::new(
        (rng.r#gen::<f32>() - 0.5) * extent,
        (rng.r#gen::<f32>() - 0.5) * extent,
        (rng.r#gen::<f32>() - 0.5) * extent,
    )
}

/// Spin that can be switched on and off.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ToggleSpin {
    pub enabled: bool,
    pub rate: Vector3<f32>,
}

impl ToggleSpin {
    pub fn new(rate: Vector3<f32>) -> Self {
        ToggleSpin {
            enabled: true,
            rate,
        }
    }

    pub fn toggled(self) -> Self {
        ToggleSpin {
            enabled: !self.enabled,
            ..self
        }
    }

    pub fn step(&self, rotation: Vector3<f32>, dt: f32) -> Vector3<f32> {
        if self.enabled {
            spin(rotation, self.rate, dt)
        } else {
            rotation
        }
    }
}

/// Circular orbit in the xz-plane around the origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Orbit {
    pub time: f32,
    pub radius: f32,
    /// Radians per second.
    pub speed: f32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrbitPose {
    pub position: Vector3<f32>,
    /// Rotation about the y axis, keeps the orbiter facing along its path.
    pub yaw: f32,
}

impl Orbit {
    pub fn new(radius: f32, speed: f32) -> Self {
        Orbit {
            time: 0.0,
            radius,
            speed,
        }
    }

    pub fn pose(&self) -> OrbitPose {
        OrbitPose {
            position: Vector3::new(
                self.time.sin() * self.radius,
                0.0,
                self.time.cos() * self.radius,
            ),
            yaw: self.time + FRAC_PI_2,
        }
    }

    pub fn advanced(self, dt: f32) -> Self {
        Orbit {
            time: self.time + self.speed * dt,
            ..self
        }
    }
}

/// Opacity of the imported models, either fully opaque or fully transparent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Opacity(pub f32);

impl Default for Opacity {
    fn default() -> Self {
        Opacity(1.0)
    }
}

impl Opacity {
    pub fn toggled(self) -> Self {
        if self.0 == 1.0 { Opacity(0.0) } else { Opacity(1.0) }
    }
}
