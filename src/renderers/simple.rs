// Copyright @yucwang 2021

use crate::core::integrator::Integrator;
use crate::core::rng::{RandomSource, WorkerRng};
use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::tonemap::clamp_rgb;
use crate::math::warp::sample_tent;
use indicatif::{ProgressBar, ProgressStyle};
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

pub use super::renderer::Renderer;

// Each pixel is split into SUBPIXELS x SUBPIXELS strata.
const SUBPIXELS: usize = 2;

/// Row-parallel renderer: a fixed pool of workers claims image rows one at a
/// time and sends finished rows back to the calling thread.
pub struct SimpleRenderer {
    integrator: Box<dyn Integrator>,
    samples_per_subpixel: u32,
    seed: u64,
    workers: NonZeroUsize,
    show_progress: bool,
}

impl Renderer for SimpleRenderer {
    fn render(&self, scene: &Scene, sensor: &dyn Sensor) -> Bitmap {
        let width = sensor.width();
        let height = sensor.height();
        if width == 0 || height == 0 {
            return Bitmap::new(0, 0);
        }

        let progress = self.progress_bar(height);
        let next_row = AtomicUsize::new(0);
        let streams = RandomSource::for_workers(self.workers, self.seed).into_streams();
        let (tx, rx) = mpsc::channel::<(usize, Vec<Vector3f>)>();
        let mut image = Bitmap::new(width, height);

        thread::scope(|scope| {
            for mut rng in streams {
                let tx = tx.clone();
                let next_row = &next_row;
                scope.spawn(move || {
                    let mut rows = 0usize;
                    loop {
                        let y = next_row.fetch_add(1, Ordering::Relaxed);
                        if y >= height {
                            break;
                        }

                        rng.begin_row(y);
                        let row = self.render_row(scene, sensor, y, &mut rng);
                        if tx.send((y, row)).is_err() {
                            break;
                        }
                        rows += 1;
                    }
                    log::debug!("worker {} rendered {} rows", rng.id(), rows);
                });
            }

            drop(tx);
            for (y, row) in rx.iter() {
                // Film rows count from the bottom, image rows from the top.
                image.set_row(height - 1 - y, &row);
                progress.inc(1);
            }
        });
        progress.finish_and_clear();

        image
    }
}

impl SimpleRenderer {
    pub fn new(integrator: Box<dyn Integrator>, samples_per_subpixel: u32, seed: u64) -> Self {
        let workers = thread::available_parallelism()
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            integrator,
            samples_per_subpixel: samples_per_subpixel.max(1),
            seed,
            workers,
            show_progress: true,
        }
    }

    pub fn with_workers(mut self, workers: NonZeroUsize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn workers(&self) -> usize {
        self.workers.get()
    }

    pub fn samples_per_pixel(&self) -> u32 {
        self.samples_per_subpixel * (SUBPIXELS * SUBPIXELS) as u32
    }

    fn progress_bar(&self, rows: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let progress = ProgressBar::new(rows as u64);
        progress.set_style(
            ProgressStyle::with_template("Rendering ({msg}) [{elapsed_precise}] {bar:40.cyan/blue} {percent:>3}%")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        progress.set_message(format!("{} spp", self.samples_per_pixel()));
        progress
    }

    /// Renders film row `y`. Each sub-pixel averages tent-jittered samples
    /// and is clamped before it is weighted into the pixel.
    pub fn render_row(&self, scene: &Scene, sensor: &dyn Sensor, y: usize, rng: &mut WorkerRng) -> Vec<Vector3f> {
        let width = sensor.width() as Float;
        let height = sensor.height() as Float;
        let inv_spp = 1.0 / self.samples_per_subpixel as Float;
        let subpixel_weight = 1.0 / (SUBPIXELS * SUBPIXELS) as Float;

        let mut row = vec![Vector3f::zeros(); sensor.width()];
        for (x, pixel) in row.iter_mut().enumerate() {
            for sy in 0..SUBPIXELS {
                for sx in 0..SUBPIXELS {
                    let mut radiance = Vector3f::zeros();
                    for _ in 0..self.samples_per_subpixel {
                        let dx = sample_tent(rng.next());
                        let dy = sample_tent(rng.next());
                        let film = Vector2f::new(
                            ((sx as Float + 0.5 + dx) / SUBPIXELS as Float + x as Float) / width,
                            ((sy as Float + 0.5 + dy) / SUBPIXELS as Float + y as Float) / height,
                        );
                        let ray = sensor.sample_ray(&film);
                        radiance += self.integrator.radiance(scene, &ray, rng) * inv_spp;
                    }
                    *pixel += clamp_rgb(&radiance) * subpixel_weight;
                }
            }
        }

        row
    }
}
