// Copyright @yucwang 2026

use super::constants::{Float, Vector3f};

pub const GAMMA: Float = 2.2;

/// Clamps to [0, 1]; NaN maps to 0.
pub fn clamp01(x: Float) -> Float {
    if x > 0.0 {
        x.min(1.0)
    } else {
        0.0
    }
}

pub fn clamp_rgb(rgb: &Vector3f) -> Vector3f {
    rgb.map(clamp01)
}

/// Gamma-encodes a linear channel and rounds it to 8 bits.
pub fn to_byte(x: Float) -> u8 {
    (clamp01(x).powf(1.0 / GAMMA) * 255.0 + 0.5) as u8
}
