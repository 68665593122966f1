// Copyright @yucwang 2026

use crate::core::bsdf::BSDF;
use crate::core::integrator::Integrator;
use crate::core::interaction::SurfaceIntersection;
use crate::core::rng::WorkerRng;
use crate::core::scene::Scene;
use crate::math::constants::{Float, Vector3f};
use crate::math::ray::Ray3f;

/// Path termination policy.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RussianRoulette {
    /// Paths at or below this depth always continue.
    pub depth_threshold: u32,
    /// Continuation probability beyond the threshold.
    pub survival_probability: Float,
    /// Hard stop for the recursion.
    pub max_depth: u32,
}

impl Default for RussianRoulette {
    fn default() -> Self {
        Self {
            depth_threshold: 5,
            survival_probability: 0.9,
            max_depth: 512,
        }
    }
}

impl RussianRoulette {
    pub fn continuation_probability(&self, depth: u32) -> Float {
        if depth <= self.depth_threshold {
            1.0
        } else {
            self.survival_probability
        }
    }
}

/// Whether the emission of the designated light counts at the next hit.
/// After a diffuse bounce the light was already reached by next-event
/// estimation, so hitting it again must not add its emission a second time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Emission {
    Include,
    SkipLight,
}

/// Next-event estimation at diffuse hits, pure recursion through mirrors,
/// Russian roulette beyond a fixed depth.
pub struct PathIntegrator {
    roulette: RussianRoulette,
}

impl Default for PathIntegrator {
    fn default() -> Self {
        Self::new()
    }
}

impl PathIntegrator {
    pub fn new() -> Self {
        Self { roulette: RussianRoulette::default() }
    }

    pub fn with_roulette(roulette: RussianRoulette) -> Self {
        Self { roulette }
    }

    pub fn roulette(&self) -> &RussianRoulette {
        &self.roulette
    }

    pub fn received_radiance(&self,
                             scene: &Scene,
                             ray: &Ray3f,
                             depth: u32,
                             emission: Emission,
                             rng: &mut WorkerRng) -> Vector3f {
        if depth > self.roulette.max_depth {
            return Vector3f::zeros();
        }

        let hit = match scene.intersect(ray) {
            Some(h) => h,
            None => return Vector3f::zeros(),
        };
        let object = scene.object(hit.id);
        let si = SurfaceIntersection::new(ray, hit, object);

        let le = if emission == Emission::SkipLight && hit.id == scene.emitter().primitive_id() {
            Vector3f::zeros()
        } else {
            object.emission()
        };

        let bsdf = object.material();
        if !bsdf.is_specular() {
            return le + self.reflect_radiance(scene, &si, bsdf, depth, rng);
        }

        // Delta lobe: no light sampling, follow the mirror direction only.
        let n = si.normal();
        let o = si.wo();
        let record = bsdf.sample(&n, &o, rng);
        let p = self.roulette.continuation_probability(depth);
        if rng.next() >= p {
            return le;
        }

        let next = Ray3f::new(si.p(), record.wi);
        let li = self.received_radiance(scene, &next, depth + 1, Emission::Include, rng);
        let weight = n.dot(&record.wi) / (record.pdf * p);

        le + bsdf.eval(&n, &o, &record.wi).component_mul(&li) * weight
    }

    /// Reflected radiance at a non-specular hit: direct light plus one
    /// sampled indirect bounce.
    pub fn reflect_radiance(&self,
                            scene: &Scene,
                            si: &SurfaceIntersection,
                            bsdf: &BSDF,
                            depth: u32,
                            rng: &mut WorkerRng) -> Vector3f {
        let x = si.p();
        let n = si.normal();
        let o = si.wo();

        let mut radiance = self.direct_radiance(scene, si, bsdf, rng);

        let p = self.roulette.continuation_probability(depth);
        if rng.next() < p {
            let record = bsdf.sample(&n, &o, rng);
            if record.pdf > 0.0 {
                let next = Ray3f::new(x, record.wi);
                let li = self.received_radiance(scene, &next, depth + 1, Emission::SkipLight, rng);
                let weight = n.dot(&record.wi) / (record.pdf * p);
                radiance += bsdf.eval(&n, &o, &record.wi).component_mul(&li) * weight;
            }
        }

        radiance
    }

    fn direct_radiance(&self,
                       scene: &Scene,
                       si: &SurfaceIntersection,
                       bsdf: &BSDF,
                       rng: &mut WorkerRng) -> Vector3f {
        let emitter = scene.emitter();
        let light = scene.light();
        let sample = emitter.sample(light, rng);

        let x = si.p();
        let n = si.normal();
        let to_light = sample.p - x;
        let dist2 = to_light.norm_squared();
        if dist2 <= 0.0 {
            return Vector3f::zeros();
        }
        let wi = to_light / dist2.sqrt();

        let mut ny = sample.n;
        if ny.dot(&-wi) < 0.0 {
            ny = -ny;
        }
        let cos_x = n.dot(&wi);
        let cos_y = ny.dot(&-wi);
        if cos_x <= 0.0 || cos_y <= 0.0 {
            return Vector3f::zeros();
        }
        if !Self::mutually_visible(scene, x, si.id(), sample.p, emitter.primitive_id(), &wi) {
            return Vector3f::zeros();
        }

        let geometry = cos_x * cos_y / dist2;
        light.emission().component_mul(&bsdf.eval(&n, &si.wo(), &wi)) * (geometry / sample.pdf)
    }

    /// Both the shadow ray towards the light and the ray back from the light
    /// must land on the expected primitives.
    fn mutually_visible(scene: &Scene,
                        x: Vector3f,
                        x_id: usize,
                        y: Vector3f,
                        light_id: usize,
                        wi: &Vector3f) -> bool {
        let from_light = scene.intersect(&Ray3f::new(y, -wi));
        let to_light = scene.intersect(&Ray3f::new(x, *wi));

        match (from_light, to_light) {
            (Some(back), Some(forward)) => back.id == x_id && forward.id == light_id,
            _ => false,
        }
    }
}

impl Integrator for PathIntegrator {
    fn radiance(&self, scene: &Scene, ray: &Ray3f, rng: &mut WorkerRng) -> Vector3f {
        self.received_radiance(scene, ray, 1, Emission::Include, rng)
    }
}
