/* Copyright 2020 @TwoCookingMice */

use crate::math::bitmap::Bitmap;
use crate::math::tonemap::to_byte;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes `image` as a plain-text (P3) PPM. Pixels are gamma-encoded and
/// emitted top row first, each as "r g b " with a trailing space.
pub fn write_ppm<W: Write>(out: &mut W, image: &Bitmap) -> io::Result<()> {
    write!(out, "P3\n{} {}\n255\n", image.width(), image.height())?;
    for pixel in image.pixels() {
        write!(out, "{} {} {} ", to_byte(pixel.x), to_byte(pixel.y), to_byte(pixel.z))?;
    }
    Ok(())
}

// Write PPM Image to file
pub fn write_ppm_to_file<P: AsRef<Path>>(image: &Bitmap, file_path: P) -> io::Result<()> {
    let file_path = file_path.as_ref();
    log::info!("Starting writing PPM image: {}.", file_path.display());

    let mut out = BufWriter::new(File::create(file_path)?);
    write_ppm(&mut out, image)?;
    out.flush()?;

    log::info!("PPM written to: {}.", file_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::constants::Vector3f;

    #[test]
    fn test_write_ppm_layout() {
        let mut image = Bitmap::new(2, 1);
        image[(0, 0)] = Vector3f::new(0.0, 1.0, 0.5);
        image[(1, 0)] = Vector3f::new(-1.0, 4.0, f64::NAN);

        let mut out = Vec::new();
        write_ppm(&mut out, &image).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "P3\n2 1\n255\n0 255 186 0 255 0 ");
    }

    #[test]
    fn test_write_ppm_token_count() {
        let image = Bitmap::new(3, 2);
        let mut out = Vec::new();
        write_ppm(&mut out, &image).unwrap();

        let text = String::from_utf8(out).unwrap();
        let body = text.strip_prefix("P3\n3 2\n255\n").unwrap();
        let values: Vec<u32> = body.split_whitespace().map(|v| v.parse().unwrap()).collect();
        assert_eq!(values.len(), 3 * 2 * 3);
        assert!(values.iter().all(|v| *v == 0));
    }

    #[test]
    fn test_write_ppm_to_file_and_decode() {
        let path = std::env::temp_dir().join(format!("lumen_ppm_test_{}.ppm", std::process::id()));
        let mut bitmap = Bitmap::new(2, 2);
        bitmap[(1, 0)] = Vector3f::new(1.0, 0.0, 0.0);
        write_ppm_to_file(&bitmap, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (2, 2));
        assert_eq!(decoded.get_pixel(1, 0).0, [255, 0, 0]);
        assert_eq!(decoded.get_pixel(0, 1).0, [0, 0, 0]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_ppm_to_missing_directory_fails() {
        let path = std::env::temp_dir().join("lumen_no_such_dir").join("image.ppm");
        assert!(write_ppm_to_file(&Bitmap::new(1, 1), &path).is_err());
    }
}
