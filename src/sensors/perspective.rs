// Copyright @yucwang 2026

use crate::core::sensor::Sensor;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::ray::Ray3f;

// Half extent of the film plane at unit distance, vertically.
pub const FILM_SCALE: Float = 0.5135;

/// Pinhole camera. The film spans `cx` horizontally and `cy` vertically at
/// unit distance along the viewing direction.
pub struct PerspectiveCamera {
    origin: Vector3f,
    forward: Vector3f,
    cx: Vector3f,
    cy: Vector3f,
    width: usize,
    height: usize,
}

impl PerspectiveCamera {
    pub fn new(origin: Vector3f,
               direction: Vector3f,
               width: usize,
               height: usize) -> Self {
        let forward = direction.normalize();
        let cx = Vector3f::new(width as Float * FILM_SCALE / height as Float, 0.0, 0.0);
        let cy = cx.cross(&forward).normalize() * FILM_SCALE;

        Self {
            origin,
            forward,
            cx,
            cy,
            width,
            height,
        }
    }

    /// Camera looking into the Cornell box through its open front.
    pub fn cornell_box(width: usize, height: usize) -> Self {
        Self::new(Vector3f::new(50.0, 52.0, 295.6),
                  Vector3f::new(0.0, -0.042612, -1.0),
                  width,
                  height)
    }

    pub fn origin(&self) -> Vector3f {
        self.origin
    }

    pub fn forward(&self) -> Vector3f {
        self.forward
    }
}

impl Sensor for PerspectiveCamera {
    fn sample_ray(&self, u: &Vector2f) -> Ray3f {
        let d = self.cx * (u.x - 0.5) + self.cy * (u.y - 0.5) + self.forward;
        Ray3f::new(self.origin, d.normalize())
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn describe(&self) -> String {
        format!("PerspectiveCamera {}x{} at ({}, {}, {})",
                self.width, self.height, self.origin.x, self.origin.y, self.origin.z)
    }
}
