use lumen::core::rng::RandomSource;
use lumen::core::scene::Scene;
use lumen::core::settings::RenderSettings;
use lumen::integrators::path::PathIntegrator;
use lumen::math::tonemap::to_byte;
use lumen::renderers::simple::SimpleRenderer;
use lumen::sensors::perspective::PerspectiveCamera;
use std::env;
use std::num::NonZeroUsize;

// Re-renders the row holding one pixel exactly as the full render does, so
// the printed value is the one written to image.ppm.
fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <x> <y> [samples_per_pixel]", args[0]);
        std::process::exit(1);
    }

    let x: usize = args[1].parse().unwrap_or(0);
    let y: usize = args[2].parse().unwrap_or(0);
    let settings = match RenderSettings::from_args(&args[3..]) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    if x >= settings.width || y >= settings.height {
        eprintln!("Pixel out of bounds: ({}, {}) for size {}x{}", x, y, settings.width, settings.height);
        std::process::exit(2);
    }

    let scene = Scene::cornell_box();
    let sensor = PerspectiveCamera::cornell_box(settings.width, settings.height);
    let renderer = SimpleRenderer::new(Box::new(PathIntegrator::new()),
                                       settings.samples_per_subpixel,
                                       settings.seed)
        .with_progress(false);

    // Image rows count from the top, film rows from the bottom.
    let film_y = settings.height - 1 - y;
    let mut streams = RandomSource::for_workers(NonZeroUsize::MIN, settings.seed).into_streams();
    let rng = &mut streams[0];
    rng.begin_row(film_y);
    let row = renderer.render_row(&scene, &sensor, film_y, rng);
    let pixel = row[x];

    println!(
        "pixel ({}, {}) spp={} -> R {:.6}, G {:.6}, B {:.6} ({} {} {})",
        x, y, renderer.samples_per_pixel(), pixel.x, pixel.y, pixel.z,
        to_byte(pixel.x), to_byte(pixel.y), to_byte(pixel.z)
    );
}
