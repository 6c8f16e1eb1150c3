//! Axis selection and planar rotation about the bounding-box center

use crate::error::{Error, Result};
use crate::point::{Point3d, Vector3d};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A principal axis of the cloud's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in coordinate order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Coordinate index of this axis within a point
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The two coordinate indices spanning the plane rotated around this axis
    ///
    /// Rotating around X turns the Y-Z plane, around Y the X-Z plane and
    /// around Z the X-Y plane.
    pub fn plane(self) -> (usize, usize) {
        match self {
            Axis::X => (1, 2),
            Axis::Y => (0, 2),
            Axis::Z => (0, 1),
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        Axis::ALL
            .get(index)
            .copied()
            .ok_or_else(|| Error::InvalidAxis(format!("axis index {} is out of range 0..3", index)))
    }
}

impl FromStr for Axis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "x" | "0" => Ok(Axis::X),
            "y" | "1" => Ok(Axis::Y),
            "z" | "2" => Ok(Axis::Z),
            other => Err(Error::InvalidAxis(format!("unknown axis '{}'", other))),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// A rotation within one coordinate plane around a fixed pivot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneRotation {
    axes: (usize, usize),
    pivot: (f64, f64),
    sin: f64,
    cos: f64,
}

impl PlaneRotation {
    /// Build a rotation around `axis` pivoting on the center of `extent`
    pub fn new(angle_degrees: f64, axis: Axis, extent: &Vector3d) -> Self {
        let (a, b) = axis.plane();
        let (sin, cos) = angle_degrees.to_radians().sin_cos();
        Self {
            axes: (a, b),
            pivot: (extent[a] / 2.0, extent[b] / 2.0),
            sin,
            cos,
        }
    }

    /// Pivot coordinates on the rotation plane
    pub fn pivot(&self) -> (f64, f64) {
        self.pivot
    }

    /// Rotate a single point in place
    pub fn apply(&self, point: &mut Point3d) {
        let (a, b) = self.axes;
        let (ca, cb) = self.pivot;

        let pa = point[a] - ca;
        let pb = point[b] - cb;

        point[a] = pa * self.cos - pb * self.sin + ca;
        point[b] = pa * self.sin + pb * self.cos + cb;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_axis_planes() {
        assert_eq!(Axis::X.plane(), (1, 2));
        assert_eq!(Axis::Y.plane(), (0, 2));
        assert_eq!(Axis::Z.plane(), (0, 1));
    }

    #[test]
    fn test_axis_parsing() {
        assert_eq!("x".parse::<Axis>().unwrap(), Axis::X);
        assert_eq!("Y".parse::<Axis>().unwrap(), Axis::Y);
        assert_eq!(" 2 ".parse::<Axis>().unwrap(), Axis::Z);
        assert!(matches!("w".parse::<Axis>(), Err(Error::InvalidAxis(_))));
    }

    #[test]
    fn test_axis_from_index() {
        assert_eq!(Axis::try_from(0).unwrap(), Axis::X);
        assert_eq!(Axis::try_from(2).unwrap(), Axis::Z);
        assert!(matches!(Axis::try_from(3), Err(Error::InvalidAxis(_))));
    }

    #[test]
    fn test_quarter_turn_about_pivot() {
        let extent = Vector3d::new(2.0, 2.0, 0.0);
        let rotation = PlaneRotation::new(90.0, Axis::Z, &extent);
        assert_eq!(rotation.pivot(), (1.0, 1.0));

        let mut point = Point3d::new(2.0, 0.0, 0.0);
        rotation.apply(&mut point);
        assert_abs_diff_eq!(point.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(point.y, 2.0, epsilon = 1e-12);
        assert_eq!(point.z, 0.0);
    }

    #[test]
    fn test_third_axis_untouched() {
        let extent = Vector3d::new(4.0, 6.0, 8.0);
        let rotation = PlaneRotation::new(33.0, Axis::X, &extent);

        let mut point = Point3d::new(1.5, 2.0, 3.0);
        rotation.apply(&mut point);
        assert_eq!(point.x, 1.5);
    }
}
