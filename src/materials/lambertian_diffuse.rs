// Copyright @yucwang 2023

use crate::core::bsdf::{BSDFSampleRecord, BSDFValue};
use crate::math::constants::{ INV_PI, Vector2f, Vector3f };
use crate::math::frame::Frame;
use crate::math::warp::{ sample_cosine_hemisphere, sample_cosine_hemisphere_pdf };

#[derive(Debug, Clone, PartialEq)]
pub struct LambertianDiffuseBSDF {
    color: Vector3f
}

impl LambertianDiffuseBSDF {
    pub fn new(rgb: Vector3f) -> Self {
        Self {
            color: rgb,
        }
    }

    pub fn color(&self) -> Vector3f {
        self.color
    }

    pub fn eval(&self, _n: &Vector3f, _o: &Vector3f, _i: &Vector3f) -> BSDFValue {
        self.color * INV_PI
    }

    pub fn sample(&self, n: &Vector3f, _o: &Vector3f, u: &Vector2f) -> BSDFSampleRecord {
        let frame = Frame::from_normal(n);
        let wi = frame.from_local(&sample_cosine_hemisphere(u));

        BSDFSampleRecord::new(wi, sample_cosine_hemisphere_pdf(wi.dot(n)))
    }
}
