// Copyright @yucwang 2023

use crate::math::constants::Vector3f;

/// Orthonormal basis; `z` is the shading normal.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    pub x: Vector3f,
    pub y: Vector3f,
    pub z: Vector3f
}

impl Default for Frame {
    fn default() -> Self {
        Frame {
            x: Vector3f::new(1.0, 0.0, 0.0),
            y: Vector3f::new(0.0, 1.0, 0.0),
            z: Vector3f::new(0.0, 0.0, 1.0)
        }
    }
}

impl Frame {
    pub fn new(new_x: Vector3f, new_y: Vector3f, new_z: Vector3f) -> Frame {
        Frame {
            x: new_x,
            y: new_y,
            z: new_z
        }
    }

    /// Builds a frame around a unit normal. The helper axis switches when the
    /// normal is close to the x axis.
    pub fn from_normal(n: &Vector3f) -> Frame {
        let helper = if n.x.abs() > 0.1 {
            Vector3f::new(0.0, 1.0, 0.0)
        } else {
            Vector3f::new(1.0, 0.0, 0.0)
        };
        let x = helper.cross(n).normalize();
        let y = n.cross(&x);

        Frame::new(x, y, *n)
    }

    pub fn to_local(&self, v: &Vector3f) -> Vector3f {
        Vector3f::new(v.dot(&self.x), v.dot(&self.y), v.dot(&self.z))
    }

    pub fn from_local(&self, v: &Vector3f) -> Vector3f {
        self.x * v.x + self.y * v.y + self.z * v.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_frame_is_orthonormal() {
        let normals = [
            Vector3f::new(0.0, 0.0, 1.0),
            Vector3f::new(1.0, 0.0, 0.0),
            Vector3f::new(-0.3, 0.8, 0.2).normalize(),
        ];
        for n in normals.iter() {
            let frame = Frame::from_normal(n);
            assert_abs_diff_eq!(frame.x.norm(), 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(frame.y.norm(), 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(frame.x.dot(&frame.y), 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(frame.x.dot(&frame.z), 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(frame.y.dot(&frame.z), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_frame_local_world_roundtrip() {
        let frame = Frame::from_normal(&Vector3f::new(0.6, 0.0, 0.8));
        let v = Vector3f::new(0.2, -0.5, 0.7);
        let back = frame.from_local(&frame.to_local(&v));
        assert_abs_diff_eq!(back, v, epsilon = 1e-12);
        assert_eq!(frame.from_local(&Vector3f::new(0.0, 0.0, 1.0)), frame.z);
    }
}
