// Copyright @yucwang 2023

use crate::core::rng::WorkerRng;
use crate::materials::lambertian_diffuse::LambertianDiffuseBSDF;
use crate::materials::specular_reflection::SpecularReflectionBSDF;
use crate::math::constants::{ Float, Vector3f };

// Definitions of types used in BSDF sampling and eval
// processes
pub type BSDFValue = Vector3f;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BSDFSampleRecord {
    pub wi: Vector3f,
    pub pdf: Float,
}

impl Default for BSDFSampleRecord {
    fn default() -> Self {
        Self {
            wi: Vector3f::zeros(),
            pdf: 0.0,
        }
    }
}

impl BSDFSampleRecord {
    pub fn new(wi: Vector3f, pdf: Float) -> Self {
        Self { wi, pdf }
    }
}

/// Reflectance models available to the scene. All directions are in world
/// space; `n` faces `o`, `o` points away from the surface and `i` is the
/// direction light arrives from.
#[derive(Debug, Clone, PartialEq)]
pub enum BSDF {
    Diffuse(LambertianDiffuseBSDF),
    Specular(SpecularReflectionBSDF),
}

impl BSDF {
    pub fn diffuse(kd: Vector3f) -> Self {
        BSDF::Diffuse(LambertianDiffuseBSDF::new(kd))
    }

    pub fn specular(ks: Vector3f) -> Self {
        BSDF::Specular(SpecularReflectionBSDF::new(ks))
    }

    pub fn name(&self) -> &'static str {
        match self {
            BSDF::Diffuse(_) => "diffuse",
            BSDF::Specular(_) => "specular",
        }
    }

    pub fn eval(&self, n: &Vector3f, o: &Vector3f, i: &Vector3f) -> BSDFValue {
        match self {
            BSDF::Diffuse(bsdf) => bsdf.eval(n, o, i),
            BSDF::Specular(bsdf) => bsdf.eval(n, o, i),
        }
    }

    /// Draws an incident direction. Only the diffuse model consumes random
    /// numbers (two, in order).
    pub fn sample(&self, n: &Vector3f, o: &Vector3f, rng: &mut WorkerRng) -> BSDFSampleRecord {
        match self {
            BSDF::Diffuse(bsdf) => bsdf.sample(n, o, &rng.next_2d()),
            BSDF::Specular(bsdf) => bsdf.sample(n, o),
        }
    }

    /// A specular model is a Dirac delta and cannot be light sampled.
    pub fn is_specular(&self) -> bool {
        match self {
            BSDF::Diffuse(_) => false,
            BSDF::Specular(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::RandomSource;

    #[test]
    fn test_bsdf_dispatch() {
        let diffuse = BSDF::diffuse(Vector3f::new(0.5, 0.5, 0.5));
        let specular = BSDF::specular(Vector3f::new(0.9, 0.9, 0.9));
        assert!(!diffuse.is_specular());
        assert!(specular.is_specular());
        assert_eq!(diffuse.name(), "diffuse");
        assert_eq!(specular.name(), "specular");
    }

    #[test]
    fn test_specular_sample_consumes_no_randomness() {
        let specular = BSDF::specular(Vector3f::new(1.0, 1.0, 1.0));
        let n = Vector3f::new(0.0, 0.0, 1.0);
        let o = Vector3f::new(1.0, 0.0, 1.0).normalize();

        let mut streams = RandomSource::init(1).unwrap().into_streams();
        let mut reference = streams[0].clone();
        let record = specular.sample(&n, &o, &mut streams[0]);
        assert_eq!(record.pdf, 1.0);
        assert_eq!(streams[0].next(), reference.next());
    }

    #[test]
    fn test_diffuse_sample_consumes_two_numbers() {
        let diffuse = BSDF::diffuse(Vector3f::new(1.0, 1.0, 1.0));
        let n = Vector3f::new(0.0, 1.0, 0.0);
        let o = n;

        let mut streams = RandomSource::init(1).unwrap().into_streams();
        let mut reference = streams[0].clone();
        diffuse.sample(&n, &o, &mut streams[0]);
        reference.next();
        reference.next();
        assert_eq!(streams[0].next(), reference.next());
    }
}
