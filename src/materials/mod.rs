// Copyright @yucwang 2023

pub mod lambertian_diffuse;
pub mod specular_reflection;
