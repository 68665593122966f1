// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector3f};

/// A point drawn on an emitter's surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EmitterSample {
    /// Sampled position.
    pub p: Vector3f,
    /// Outward unit normal at `p`.
    pub n: Vector3f,
    /// Density with respect to surface area.
    pub pdf: Float,
}

impl EmitterSample {
    pub fn new(p: Vector3f, n: Vector3f, pdf: Float) -> Self {
        Self { p, n, pdf }
    }
}
