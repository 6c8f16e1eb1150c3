//! Point types and related functionality

use nalgebra::{Point2, Point3, Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// A 2D vector with double precision components
pub type Vector2d = Vector2<f64>;

/// An integer screen coordinate produced by projection
pub type ScreenPoint = Point2<i64>;

/// RGB color used by the bundled renderer and color policies
pub type Rgb = [u8; 3];

/// A point with an opaque color payload
///
/// The color is never read by the geometry pipeline; it only travels with the
/// position through normalization, rotation and sorting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColoredPoint<C = Rgb> {
    pub position: Point3d,
    pub color: C,
}

impl<C> ColoredPoint<C> {
    pub fn new(position: Point3d, color: C) -> Self {
        Self { position, color }
    }
}

impl<C: Default> From<Point3d> for ColoredPoint<C> {
    fn from(position: Point3d) -> Self {
        Self {
            position,
            color: C::default(),
        }
    }
}

impl<C: Default> Default for ColoredPoint<C> {
    fn default() -> Self {
        Self {
            position: Point3d::origin(),
            color: C::default(),
        }
    }
}
