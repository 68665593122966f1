// Copyright @yucwang 2026

use crate::core::emitter::EmitterSample;
use crate::core::rng::WorkerRng;
use crate::math::constants::{Vector2f, Vector3f};
use crate::math::warp::{sample_uniform_sphere, sample_uniform_sphere_pdf};
use crate::shapes::sphere::Sphere;

/// Spherical area light, referring to a primitive of the scene by index.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AreaEmitter {
    primitive_id: usize,
}

impl AreaEmitter {
    pub fn new(primitive_id: usize) -> Self {
        Self { primitive_id }
    }

    pub fn primitive_id(&self) -> usize {
        self.primitive_id
    }

    /// Uniform point on the sphere surface. Consumes two random numbers.
    pub fn sample(&self, sphere: &Sphere, rng: &mut WorkerRng) -> EmitterSample {
        Self::sample_position(sphere, &rng.next_2d())
    }

    pub fn sample_position(sphere: &Sphere, u: &Vector2f) -> EmitterSample {
        let n: Vector3f = sample_uniform_sphere(u).normalize();
        let p = sphere.center() + n * sphere.radius();

        EmitterSample::new(p, n, sample_uniform_sphere_pdf(sphere.radius()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bsdf::BSDF;
    use crate::core::rng::RandomSource;
    use crate::math::constants::{Float, PI};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::sync::Arc;

    fn light() -> Sphere {
        Sphere::new(5.0, Vector3f::new(50.0, 70.0, 81.6), Vector3f::new(50.0, 50.0, 50.0),
                    Arc::new(BSDF::diffuse(Vector3f::zeros())))
    }

    #[test]
    fn test_samples_lie_on_surface() {
        let sphere = light();
        let emitter = AreaEmitter::new(7);
        assert_eq!(emitter.primitive_id(), 7);

        let mut rng = RandomSource::init(1).unwrap().into_streams().remove(0);
        for _ in 0..1000 {
            let sample = emitter.sample(&sphere, &mut rng);
            assert_abs_diff_eq!((sample.p - sphere.center()).norm(), 5.0, epsilon = 1e-9);
            assert_abs_diff_eq!(sample.n.norm(), 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(sample.n, sphere.normal_at(&sample.p), epsilon = 1e-9);
            assert_relative_eq!(sample.pdf, 1.0 / (4.0 * PI * 25.0), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_samples_are_uniform_over_area() {
        // Uniform area sampling: the mean position is the centre and each
        // hemisphere receives half the samples.
        let sphere = light();
        let mut rng = RandomSource::with_seed(1, 99).unwrap().into_streams().remove(0);
        let count = 20_000;
        let mut mean = Vector3f::zeros();
        let mut upper = 0usize;
        for _ in 0..count {
            let sample = AreaEmitter::new(0).sample(&sphere, &mut rng);
            mean += sample.n;
            if sample.n.y > 0.0 {
                upper += 1;
            }
        }
        mean /= count as Float;
        assert_abs_diff_eq!(mean, Vector3f::zeros(), epsilon = 0.03);
        assert_abs_diff_eq!(upper as Float / count as Float, 0.5, epsilon = 0.02);
    }
}
