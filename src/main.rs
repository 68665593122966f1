// Copyright 2020 TwoCookingMice

use lumen::core::settings::RenderSettings;
use lumen::core::scene::Scene;
use lumen::core::sensor::Sensor;
use lumen::integrators::path::PathIntegrator;
use lumen::io::ppm;
use lumen::renderers::simple::{ SimpleRenderer, Renderer };
use lumen::sensors::perspective::PerspectiveCamera;

use std::env;
use std::process;
use std::time::Instant;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let settings = match RenderSettings::from_args(&args) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Usage: lumen [SAMPLES_PER_PIXEL]");
            process::exit(2);
        }
    };

    let scene = Scene::cornell_box();
    let sensor = PerspectiveCamera::cornell_box(settings.width, settings.height);

    let mut renderer = SimpleRenderer::new(Box::new(PathIntegrator::new()),
                                           settings.samples_per_subpixel,
                                           settings.seed);
    if let Some(workers) = settings.workers {
        renderer = renderer.with_workers(workers);
    }

    log::info!("{} with {} objects, {} spp, {} workers.",
               sensor.describe(),
               scene.objects().len(),
               renderer.samples_per_pixel(),
               renderer.workers());

    let start = Instant::now();
    let image = renderer.render(&scene, &sensor);
    log::info!("Rendered {}x{} in {:.2?}.", image.width(), image.height(), start.elapsed());

    if let Err(e) = ppm::write_ppm_to_file(&image, &settings.output) {
        log::error!("Failed to write {}: {}", settings.output.display(), e);
        process::exit(1);
    }
}
