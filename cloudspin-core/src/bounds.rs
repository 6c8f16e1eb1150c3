//! Axis-aligned bounds used by normalization

use crate::point::{Point3d, Vector3d};
use serde::{Deserialize, Serialize};

/// How the minimum and maximum corners are seeded before scanning the points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsMode {
    /// Seed both corners at the origin, so the box always contains `(0, 0, 0)`.
    ///
    /// A cloud lying entirely in the positive octant keeps its offset from the
    /// origin after normalization and its extent reaches back to zero.
    #[default]
    ZeroSeeded,
    /// Seed both corners from the first point, giving the tightest box.
    Tight,
}

/// Minimum and maximum corners of a set of points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point3d,
    pub max: Point3d,
}

impl Bounds {
    /// Compute bounds over `points`, returning `None` when there are none
    pub fn from_points<'a, I>(points: I, mode: BoundsMode) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3d>,
    {
        let mut points = points.into_iter().peekable();
        let seed = match mode {
            BoundsMode::ZeroSeeded => Point3d::origin(),
            BoundsMode::Tight => **points.peek()?,
        };

        let mut min = seed;
        let mut max = seed;
        let mut seen = false;

        for p in points {
            seen = true;
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);

            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        seen.then_some(Self { min, max })
    }

    /// Size of the box along each axis
    pub fn extent(&self) -> Vector3d {
        self.max - self.min
    }

    /// Center of the box
    pub fn center(&self) -> Point3d {
        nalgebra::center(&self.min, &self.max)
    }

    /// Whether `point` lies inside the box, boundaries included
    pub fn contains(&self, point: &Point3d) -> bool {
        (0..3).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }
}
