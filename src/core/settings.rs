// Copyright @yucwang 2026

use crate::core::rng::MASTER_SEED;

use std::fmt;
use std::num::{NonZeroUsize, ParseIntError};
use std::path::PathBuf;

pub const DEFAULT_WIDTH: usize = 480;
pub const DEFAULT_HEIGHT: usize = 360;
pub const DEFAULT_SAMPLES_PER_SUBPIXEL: u32 = 16;
pub const DEFAULT_OUTPUT: &str = "image.ppm";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    InvalidSampleCount(String),
    TooFewSamples(u32),
}

impl From<ParseIntError> for SettingsError {
    fn from(err: ParseIntError) -> Self {
        SettingsError::InvalidSampleCount(err.to_string())
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::InvalidSampleCount(reason) => {
                write!(f, "sample count is not a non-negative integer: {}", reason)
            }
            SettingsError::TooFewSamples(samples) => {
                write!(f, "{} samples per pixel is fewer than one per sub-pixel (need at least 4)", samples)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub width: usize,
    pub height: usize,
    pub samples_per_subpixel: u32,
    pub seed: u64,
    pub workers: Option<NonZeroUsize>,
    pub output: PathBuf,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            samples_per_subpixel: DEFAULT_SAMPLES_PER_SUBPIXEL,
            seed: MASTER_SEED,
            workers: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl RenderSettings {
    /// Builds settings from the command line, program name excluded.
    ///
    /// A single argument is the total sample count per pixel, split over the
    /// four sub-pixels. Any other argument count keeps the default.
    pub fn from_args(args: &[String]) -> Result<Self, SettingsError> {
        let mut settings = Self::default();
        if let [samples] = args {
            let samples: u32 = samples.trim().parse()?;
            if samples < 4 {
                return Err(SettingsError::TooFewSamples(samples));
            }
            settings.samples_per_subpixel = samples / 4;
        }

        Ok(settings)
    }

    pub fn samples_per_pixel(&self) -> u32 {
        self.samples_per_subpixel * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_defaults_without_arguments() {
        let settings = RenderSettings::from_args(&[]).unwrap();
        assert_eq!(settings, RenderSettings::default());
        assert_eq!(settings.width, 480);
        assert_eq!(settings.height, 360);
        assert_eq!(settings.samples_per_subpixel, 16);
        assert_eq!(settings.seed, MASTER_SEED);
        assert_eq!(settings.output, PathBuf::from("image.ppm"));
    }

    #[test]
    fn test_single_argument_is_divided_by_four() {
        assert_eq!(RenderSettings::from_args(&args(&["16"])).unwrap().samples_per_subpixel, 4);
        assert_eq!(RenderSettings::from_args(&args(&["4"])).unwrap().samples_per_subpixel, 1);
        assert_eq!(RenderSettings::from_args(&args(&["1023"])).unwrap().samples_per_subpixel, 255);
    }

    #[test]
    fn test_extra_arguments_keep_default() {
        let settings = RenderSettings::from_args(&args(&["40", "80"])).unwrap();
        assert_eq!(settings.samples_per_subpixel, 16);
        assert_eq!(settings.samples_per_pixel(), 64);
    }

    #[test]
    fn test_invalid_arguments_rejected() {
        assert!(matches!(
            RenderSettings::from_args(&args(&["many"])),
            Err(SettingsError::InvalidSampleCount(_))
        ));
        assert!(matches!(
            RenderSettings::from_args(&args(&["-8"])),
            Err(SettingsError::InvalidSampleCount(_))
        ));
        assert_eq!(
            RenderSettings::from_args(&args(&["3"])),
            Err(SettingsError::TooFewSamples(3))
        );
        assert_eq!(
            RenderSettings::from_args(&args(&["0"])),
            Err(SettingsError::TooFewSamples(0))
        );
    }
}
