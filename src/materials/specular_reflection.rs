// Copyright @yucwang 2026

use crate::core::bsdf::{BSDFSampleRecord, BSDFValue};
use crate::math::constants::Vector3f;

/// Mirror direction of `o` about `n`.
pub fn reflect(n: &Vector3f, o: &Vector3f) -> Vector3f {
    n * (2.0 * n.dot(o)) - o
}

/// Ideal mirror. The lobe is a delta, so `eval` is non-zero only for the
/// exact direction returned by `sample`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecularReflectionBSDF {
    specular_reflectance: Vector3f,
}

impl SpecularReflectionBSDF {
    pub fn new(specular_reflectance: Vector3f) -> Self {
        Self { specular_reflectance }
    }

    pub fn specular_reflectance(&self) -> Vector3f {
        self.specular_reflectance
    }

    pub fn eval(&self, n: &Vector3f, o: &Vector3f, i: &Vector3f) -> BSDFValue {
        if *i == reflect(n, o) {
            self.specular_reflectance / n.dot(i)
        } else {
            Vector3f::zeros()
        }
    }

    pub fn sample(&self, n: &Vector3f, o: &Vector3f) -> BSDFSampleRecord {
        BSDFSampleRecord::new(reflect(n, o), 1.0)
    }
}
