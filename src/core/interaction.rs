// Copyright @yucwang 2023

use crate::math::constants::{ Float, Vector3f };
use crate::math::ray::Ray3f;
use crate::shapes::sphere::Sphere;

/// Nearest hit along a ray: distance and index of the primitive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hit {
    pub t: Float,
    pub id: usize,
}

/// Local shading geometry at a hit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceIntersection {
    p: Vector3f,
    normal: Vector3f,
    wo: Vector3f,
    t: Float,
    id: usize,
}

impl SurfaceIntersection {
    /// The normal is flipped so that it lies in the hemisphere of `wo`.
    pub fn new(ray: &Ray3f, hit: Hit, sphere: &Sphere) -> Self {
        let p = ray.at(hit.t);
        let wo = (-ray.dir()).normalize();
        let mut normal = sphere.normal_at(&p);
        if normal.dot(&wo) < 0.0 {
            normal = -normal;
        }

        Self { p, normal, wo, t: hit.t, id: hit.id }
    }

    pub fn p(&self) -> Vector3f {
        self.p
    }

    pub fn normal(&self) -> Vector3f {
        self.normal
    }

    pub fn wo(&self) -> Vector3f {
        self.wo
    }

    pub fn t(&self) -> Float {
        self.t
    }

    pub fn id(&self) -> usize {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bsdf::BSDF;
    use std::sync::Arc;

    #[test]
    fn test_normal_faces_outgoing_direction() {
        let sphere = Sphere::new(1.0, Vector3f::zeros(), Vector3f::zeros(),
                                 Arc::new(BSDF::diffuse(Vector3f::new(1.0, 1.0, 1.0))));

        let outside = Ray3f::new(Vector3f::new(0.0, 0.0, -3.0), Vector3f::new(0.0, 0.0, 1.0));
        let t = sphere.ray_intersection_t(&outside).unwrap();
        let si = SurfaceIntersection::new(&outside, Hit { t, id: 3 }, &sphere);
        assert_eq!(si.normal(), Vector3f::new(0.0, 0.0, -1.0));
        assert_eq!(si.wo(), Vector3f::new(0.0, 0.0, -1.0));
        assert_eq!(si.id(), 3);

        let inside = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 1.0, 0.0));
        let t = sphere.ray_intersection_t(&inside).unwrap();
        let si = SurfaceIntersection::new(&inside, Hit { t, id: 0 }, &sphere);
        assert_eq!(si.normal(), Vector3f::new(0.0, -1.0, 0.0));
        assert!(si.normal().dot(&si.wo()) >= 0.0);
        assert_eq!(si.t(), 1.0);
    }
}
