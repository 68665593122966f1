// Copyright @yucwang 2023

use super::constants::{ INV_PI, INV_FOUR_PI, PI, Float, Vector2f, Vector3f };

/// Cosine-weighted direction around +z.
pub fn sample_cosine_hemisphere(u: &Vector2f) -> Vector3f {
    let z: Float = u.x.sqrt();
    let r: Float = (1.0 - z * z).sqrt();
    let phi: Float = 2.0 * PI * u.y;

    Vector3f::new(r * phi.cos(), r * phi.sin(), z)
}

pub fn sample_cosine_hemisphere_pdf(cos_theta: Float) -> Float {
    cos_theta * INV_PI
}

/// Uniform direction over the whole unit sphere.
pub fn sample_uniform_sphere(u: &Vector2f) -> Vector3f {
    let z: Float = 2.0 * u.x - 1.0;
    let r: Float = (1.0 - z * z).sqrt();
    let phi: Float = 2.0 * PI * u.y;

    Vector3f::new(r * phi.cos(), r * phi.sin(), z)
}

/// Area density of a uniform sample on a sphere of the given radius.
pub fn sample_uniform_sphere_pdf(radius: Float) -> Float {
    INV_FOUR_PI / (radius * radius)
}

// Maps [0, 1) to a triangle distribution over [-1, 1).
pub fn sample_tent(u: Float) -> Float {
    let r = 2.0 * u;
    if r < 1.0 {
        r.sqrt() - 1.0
    } else {
        1.0 - (2.0 - r).sqrt()
    }
}
