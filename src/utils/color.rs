use nalgebra::Vector3;

/// Converts a `0xRRGGBB` color into linear-ish RGB components in `0.0..=1.0`.
pub fn hex_to_rgb(hex: u32) -> Vector3<f32> {
    Vector3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

pub const WHITE: u32 = 0xffffff;
