// Copyright 2020 @TwoCookingMice

use super::constants::{Float, Vector3f};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray3f {
    origin: Vector3f,
    dir: Vector3f,
}

impl Ray3f {
    /// The direction is stored as given; callers normalize it first.
    pub fn new(o: Vector3f, d: Vector3f) -> Self {
        Self { origin: o, dir: d }
    }

    pub fn origin(&self) -> Vector3f {
        self.origin
    }

    pub fn dir(&self) -> Vector3f {
        self.dir
    }

    pub fn at(&self, t: Float) -> Vector3f {
        self.origin + self.dir * t
    }
}

/* Tests for Ray */
