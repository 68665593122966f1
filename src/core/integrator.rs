// Copyright @yucwang 2026

use crate::core::rng::WorkerRng;
use crate::core::scene::Scene;
use crate::math::constants::Vector3f;
use crate::math::ray::Ray3f;

pub trait Integrator: Sync {
    /// Radiance arriving along a primary ray, drawing from the caller's own
    /// random stream.
    fn radiance(&self, scene: &Scene, ray: &Ray3f, rng: &mut WorkerRng) -> Vector3f;
}
