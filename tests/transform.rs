use nalgebra::{UnitQuaternion, Vector3};
use orrery::core::Transform;

#[test]
fn local_position_and_translation() {
    let mut t = Transform::new();
    assert_eq!(*t.local_position(), Vector3::new(0.0, 0.0, 0.0));
    t.set_local_position_vec(Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(*t.local_position(), Vector3::new(1.0, 2.0, 3.0));
    t.translate(Vector3::new(1.0, -1.0, 0.5));
    assert_eq!(*t.local_position(), Vector3::new(2.0, 1.0, 3.5));
}

#[test]
fn euler_rotation_and_scale() {
    let mut t = Transform::new();
    t.set_euler_rotation(0.0, 1.0, 0.0);
    let rot = UnitQuaternion::from_euler_angles(0.0, 1.0, 0.0);
    assert!(t.local_rotation().angle_to(&rot) < 1e-6);

    t.rotate_euler(Vector3::new(0.5, 0.5, 0.0));
    assert_eq!(*t.euler_rotation(), Vector3::new(0.5, 1.5, 0.0));

    t.set_uniform_local_scale(2.0);
    assert_eq!(*t.local_scale(), Vector3::new(2.0, 2.0, 2.0));
}

#[test]
fn matrix_applies_scale_then_rotation_then_translation() {
    let mut t = Transform::new();
    t.set_uniform_local_scale(2.0);
    t.set_euler_rotation(0.0, std::f32::consts::FRAC_PI_2, 0.0);
    t.set_local_position(0.0, 5.0, 0.0);

    let p = t.full_matrix() * nalgebra::Point3::new(1.0, 0.0, 0.0);
    assert!((p.coords - Vector3::new(0.0, 5.0, -2.0)).norm() < 1e-5);
}

#[test]
fn forward_follows_yaw() {
    let mut t = Transform::new();
    assert_eq!(t.local_forward(), Vector3::new(0.0, 0.0, -1.0));
    t.set_euler_rotation(0.0, std::f32::consts::PI, 0.0);
    assert!((t.local_forward() - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-5);
}
