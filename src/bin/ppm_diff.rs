use image::RgbImage;
use std::process;

fn read_rgb(path: &str) -> RgbImage {
    match image::open(path) {
        Ok(image) => image.to_rgb8(),
        Err(e) => {
            eprintln!("failed to read {}: {}", path, e);
            process::exit(1);
        }
    }
}

fn luminance(rgb: (f64, f64, f64)) -> f64 {
    0.2126 * rgb.0 + 0.7152 * rgb.1 + 0.0722 * rgb.2
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <image_a.ppm> <image_b.ppm>", args[0]);
        process::exit(1);
    }

    let a = read_rgb(&args[1]);
    let b = read_rgb(&args[2]);

    if a.dimensions() != b.dimensions() {
        eprintln!("Size mismatch: {}x{} vs {}x{}", a.width(), a.height(), b.width(), b.height());
        process::exit(2);
    }

    let mut sum_abs = (0.0f64, 0.0f64, 0.0f64);
    let mut max_abs = (0u8, 0u8, 0u8);
    let mut sum_luma_abs = 0.0f64;

    for (pa, pb) in a.pixels().zip(b.pixels()) {
        let [ar, ag, ab] = pa.0;
        let [br, bg, bb] = pb.0;
        let dr = ar.abs_diff(br);
        let dg = ag.abs_diff(bg);
        let db = ab.abs_diff(bb);
        sum_abs.0 += dr as f64;
        sum_abs.1 += dg as f64;
        sum_abs.2 += db as f64;
        max_abs.0 = max_abs.0.max(dr);
        max_abs.1 = max_abs.1.max(dg);
        max_abs.2 = max_abs.2.max(db);

        let la = luminance((ar as f64, ag as f64, ab as f64));
        let lb = luminance((br as f64, bg as f64, bb as f64));
        sum_luma_abs += (la - lb).abs();
    }

    let n = (a.width() as f64 * a.height() as f64).max(1.0);
    println!("Mean abs diff: R {:.6}, G {:.6}, B {:.6}",
        sum_abs.0 / n, sum_abs.1 / n, sum_abs.2 / n);
    println!("Max abs diff:  R {}, G {}, B {}",
        max_abs.0, max_abs.1, max_abs.2);
    println!("Mean abs luminance diff: {:.6}", sum_luma_abs / n);
    println!("Identical: {}", a == b);
}
