// Copyright @yucwang 2026

use crate::core::bsdf::BSDF;
use crate::math::constants::{ EPSILON, Float, PI, Vector3f };
use crate::math::ray::Ray3f;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Sphere {
    radius: Float,
    center: Vector3f,
    emission: Vector3f,
    material: Arc<BSDF>,
}

impl Sphere {
    pub fn new(radius: Float, center: Vector3f, emission: Vector3f, material: Arc<BSDF>) -> Self {
        Self { radius, center, emission, material }
    }

    pub fn radius(&self) -> Float {
        self.radius
    }

    pub fn center(&self) -> Vector3f {
        self.center
    }

    pub fn emission(&self) -> Vector3f {
        self.emission
    }

    pub fn material(&self) -> &BSDF {
        &self.material
    }

    pub fn is_emitter(&self) -> bool {
        self.emission.iter().any(|c| *c > 0.0)
    }

    pub fn surface_area(&self) -> Float {
        4.0 * PI * self.radius * self.radius
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, p: &Vector3f) -> Vector3f {
        (p - self.center).normalize()
    }

    /// Closest root of |o + t d - c|^2 = r^2 beyond `EPSILON`. Assumes a unit
    /// direction.
    pub fn ray_intersection_t(&self, ray: &Ray3f) -> Option<Float> {
        let op = self.center - ray.origin();
        let b = op.dot(&ray.dir());
        let det = b * b - op.dot(&op) + self.radius * self.radius;
        if det < 0.0 {
            return None;
        }

        let det = det.sqrt();
        let near = b - det;
        if near > EPSILON {
            return Some(near);
        }
        let far = b + det;
        if far > EPSILON {
            Some(far)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn unit_sphere() -> Sphere {
        let material = Arc::new(BSDF::diffuse(Vector3f::new(0.5, 0.5, 0.5)));
        Sphere::new(1.0, Vector3f::new(0.0, 0.0, 5.0), Vector3f::zeros(), material)
    }

    #[test]
    fn test_sphere_hit_from_outside() {
        let sphere = unit_sphere();
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, 1.0));
        let t = sphere.ray_intersection_t(&ray).expect("expected intersection");
        assert_abs_diff_eq!(t, 4.0, epsilon = 1e-12);

        let n = sphere.normal_at(&ray.at(t));
        assert_abs_diff_eq!(n, Vector3f::new(0.0, 0.0, -1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_sphere_hit_from_inside() {
        let sphere = unit_sphere();
        let ray = Ray3f::new(Vector3f::new(0.0, 0.0, 5.0), Vector3f::new(1.0, 0.0, 0.0));
        let t = sphere.ray_intersection_t(&ray).expect("expected intersection");
        assert_abs_diff_eq!(t, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere();
        let away = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0));
        assert!(sphere.ray_intersection_t(&away).is_none());

        let beside = Ray3f::new(Vector3f::new(2.0, 0.0, 0.0), Vector3f::new(0.0, 0.0, 1.0));
        assert!(sphere.ray_intersection_t(&beside).is_none());
    }

    #[test]
    fn test_sphere_ignores_self_hit() {
        // Leaving the surface outward: the only root is at t = 0.
        let sphere = unit_sphere();
        let ray = Ray3f::new(Vector3f::new(0.0, 0.0, 4.0), Vector3f::new(0.0, 0.0, -1.0));
        assert!(sphere.ray_intersection_t(&ray).is_none());
    }

    #[test]
    fn test_emitter_flag() {
        let sphere = unit_sphere();
        assert!(!sphere.is_emitter());
        let light = Sphere::new(1.0, Vector3f::zeros(), Vector3f::new(0.0, 1.0, 0.0),
                                Arc::new(BSDF::diffuse(Vector3f::zeros())));
        assert!(light.is_emitter());
        assert_abs_diff_eq!(light.surface_area(), 4.0 * PI, epsilon = 1e-12);
    }
}
