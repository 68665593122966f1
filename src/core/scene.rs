// Copyright @yucwang 2026

use crate::core::bsdf::BSDF;
use crate::core::interaction::Hit;
use crate::emitters::area::AreaEmitter;
use crate::math::constants::{ FLOAT_MAX, Vector3f };
use crate::math::ray::Ray3f;
use crate::shapes::sphere::Sphere;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    Empty,
    MissingLight(usize),
    LightNotEmissive(usize),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Empty => write!(f, "scene has no primitives"),
            SceneError::MissingLight(id) => write!(f, "light index {} is out of range", id),
            SceneError::LightNotEmissive(id) => write!(f, "primitive {} has no emission", id),
        }
    }
}

impl std::error::Error for SceneError {}

/// Immutable list of spheres with one designated area light.
pub struct Scene {
    objects: Vec<Sphere>,
    light: AreaEmitter,
}

impl Scene {
    pub fn new(objects: Vec<Sphere>, light_id: usize) -> Result<Self, SceneError> {
        if objects.is_empty() {
            return Err(SceneError::Empty);
        }
        let light = objects.get(light_id).ok_or(SceneError::MissingLight(light_id))?;
        if !light.is_emitter() {
            return Err(SceneError::LightNotEmissive(light_id));
        }

        Ok(Self { objects, light: AreaEmitter::new(light_id) })
    }

    /// The closed box with a diffuse ball, a mirror ball and a small
    /// spherical light near the ceiling.
    pub fn cornell_box() -> Self {
        let left_wall = Arc::new(BSDF::diffuse(Vector3f::new(0.75, 0.25, 0.25)));
        let right_wall = Arc::new(BSDF::diffuse(Vector3f::new(0.25, 0.25, 0.75)));
        let other_wall = Arc::new(BSDF::diffuse(Vector3f::new(0.75, 0.75, 0.75)));
        let black_surface = Arc::new(BSDF::diffuse(Vector3f::zeros()));
        let bright_surface = Arc::new(BSDF::diffuse(Vector3f::new(0.9, 0.9, 0.9)));
        let mirror = Arc::new(BSDF::specular(Vector3f::new(0.999, 0.999, 0.999)));

        let none = Vector3f::zeros();
        let objects = vec![
            Sphere::new(1e5, Vector3f::new(1e5 + 1.0, 40.8, 81.6), none, left_wall),
            Sphere::new(1e5, Vector3f::new(-1e5 + 99.0, 40.8, 81.6), none, right_wall),
            Sphere::new(1e5, Vector3f::new(50.0, 40.8, 1e5), none, other_wall.clone()),
            Sphere::new(1e5, Vector3f::new(50.0, 1e5, 81.6), none, other_wall.clone()),
            Sphere::new(1e5, Vector3f::new(50.0, -1e5 + 81.6, 81.6), none, other_wall),
            Sphere::new(16.5, Vector3f::new(27.0, 16.5, 47.0), none, bright_surface),
            Sphere::new(16.5, Vector3f::new(73.0, 16.5, 78.0), none, mirror),
            Sphere::new(5.0, Vector3f::new(50.0, 70.0, 81.6), Vector3f::new(50.0, 50.0, 50.0), black_surface),
        ];

        Self { objects, light: AreaEmitter::new(7) }
    }

    pub fn objects(&self) -> &[Sphere] {
        &self.objects
    }

    pub fn object(&self, id: usize) -> &Sphere {
        &self.objects[id]
    }

    pub fn emitter(&self) -> &AreaEmitter {
        &self.light
    }

    pub fn light(&self) -> &Sphere {
        &self.objects[self.light.primitive_id()]
    }

    /// Nearest hit by linear scan in reverse index order. On equal distance
    /// the primitive tested first keeps the hit.
    pub fn intersect(&self, ray: &Ray3f) -> Option<Hit> {
        let mut nearest: Option<Hit> = None;
        let mut t_max = FLOAT_MAX;
        for (id, sphere) in self.objects.iter().enumerate().rev() {
            if let Some(t) = sphere.ray_intersection_t(ray) {
                if t < t_max {
                    t_max = t;
                    nearest = Some(Hit { t, id });
                }
            }
        }

        nearest
    }
}
