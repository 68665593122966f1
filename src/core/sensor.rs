// Copyright @yucwang 2026

use crate::math::constants::Vector2f;
use crate::math::ray::Ray3f;

pub trait Sensor: Sync {
    /// Primary ray through a film position in [0, 1]^2, with v = 0 at the
    /// bottom edge of the image.
    fn sample_ray(&self, u: &Vector2f) -> Ray3f;
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn describe(&self) -> String {
        String::from("Sensor")
    }
}
