/* Copyright 2020 @Yuchen Wong */

use nalgebra as na;

pub type Float = f64;

pub type Vector2f = na::Vector2<Float>;
pub type Vector3f = na::Vector3<Float>;

// Minimum hit distance, keeps secondary rays off their own surface.
pub const EPSILON: Float = 1e-4;
pub const PI: Float = std::f64::consts::PI;
pub const INV_PI: Float = std::f64::consts::FRAC_1_PI;
pub const INV_FOUR_PI: Float = 0.25 * std::f64::consts::FRAC_1_PI;
pub const FLOAT_MAX: Float = 1e20;
