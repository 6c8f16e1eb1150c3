//! Point cloud container with normalization, rotation and depth ordering

use crate::bounds::Bounds;
use crate::config::{CloudConfig, ProjectionConfig};
use crate::error::{Error, Result};
use crate::point::*;
use crate::projection::{Projection, Viewport};
use crate::traits::ColorPolicy;
use crate::transform::{Axis, PlaneRotation};
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;
use std::ops::Index;
use tracing::{debug, trace, warn};

/// A normalized point cloud kept in back-to-front drawing order
///
/// Points are shifted into the non-negative octant at construction. Every
/// effective [`rotate`](PointCloud::rotate) leaves them sorted by ascending
/// `(z, x, y)`, which is the order a painter's-algorithm renderer draws them in.
#[derive(Debug, Clone, Serialize)]
pub struct PointCloud<C = Rgb> {
    points: Vec<ColoredPoint<C>>,
    extent: Vector3d,
    config: CloudConfig,
}

impl<C> PointCloud<C> {
    /// Create a cloud from colored points and normalize it
    pub fn from_points(points: Vec<ColoredPoint<C>>, config: CloudConfig) -> Result<Self> {
        config.validate()?;
        if points.is_empty() {
            return Err(Error::EmptyCloud);
        }
        if let Some(bad) = points
            .iter()
            .position(|p| !p.position.iter().all(|c| c.is_finite()))
        {
            return Err(Error::InvalidData(format!(
                "point {} has a non-finite coordinate",
                bad
            )));
        }

        let mut cloud = Self {
            points,
            extent: Vector3d::zeros(),
            config,
        };
        cloud.normalize();
        Ok(cloud)
    }

    /// Shift every point so the bounding box's minimum corner sits at the origin
    ///
    /// Runs once during construction; the recorded extent is the rotation
    /// pivot for the lifetime of the cloud.
    fn normalize(&mut self) {
        let Some(bounds) = Bounds::from_points(self.points.iter().map(|p| &p.position), self.config.bounds)
        else {
            return;
        };

        let shift = bounds.min.coords;
        for point in &mut self.points {
            point.position -= shift;
        }
        self.extent = bounds.extent();

        debug!(
            points = self.points.len(),
            mode = ?self.config.bounds,
            "normalized cloud, extent ({}, {}, {})",
            self.extent.x,
            self.extent.y,
            self.extent.z
        );
    }

    /// Rotate every point around `axis` by `angle_degrees`, then restore depth order
    ///
    /// The pivot is the center of the bounding box recorded at normalization on
    /// the rotated plane. A zero angle returns without touching the points or
    /// their order.
    pub fn rotate(&mut self, angle_degrees: f64, axis: Axis) {
        if angle_degrees == 0.0 {
            return;
        }
        if !angle_degrees.is_finite() {
            warn!("ignoring non-finite rotation angle {}", angle_degrees);
            return;
        }

        let rotation = PlaneRotation::new(angle_degrees, axis, &self.extent);
        for point in &mut self.points {
            rotation.apply(&mut point.position);
        }
        self.sort_back_to_front();

        trace!(angle_degrees, %axis, "rotated cloud");
    }

    fn sort_back_to_front(&mut self) {
        self.points
            .sort_by(|a, b| depth_order(&a.position, &b.position));
    }

    /// Whether the points are currently in `(z, x, y)` order
    pub fn is_depth_sorted(&self) -> bool {
        self.points
            .windows(2)
            .all(|w| depth_order(&w[0].position, &w[1].position) != Ordering::Greater)
    }

    /// Recolor every point using `policy`
    pub fn assign_colors<P: ColorPolicy<C> + ?Sized>(&mut self, policy: &P) {
        let extent = self.extent;
        for point in &mut self.points {
            point.color = policy.color_for(&point.position, &extent);
        }
    }

    /// Project a single point to screen space
    pub fn project(&self, point: &ColoredPoint<C>, viewport: Viewport) -> ScreenPoint {
        self.projection(viewport).project(&point.position)
    }

    /// Projection parameters for this cloud and `viewport`
    pub fn projection(&self, viewport: Viewport) -> Projection {
        Projection::new(&self.config.projection, &self.extent, viewport)
    }

    /// Project every point, in cloud order
    pub fn project_all(&self, viewport: Viewport) -> Vec<ScreenPoint> {
        let projection = self.projection(viewport);
        self.points
            .iter()
            .map(|p| projection.project(&p.position))
            .collect()
    }

    /// Replace the projection parameters
    pub fn set_projection(&mut self, projection: ProjectionConfig) -> Result<()> {
        projection.validate()?;
        self.config.projection = projection;
        Ok(())
    }

    /// Bounding-box size recorded at normalization
    pub fn extent(&self) -> Vector3d {
        self.extent
    }

    /// Center of the normalized bounding box, the rotation pivot
    pub fn center(&self) -> Point3d {
        Point3d::from(self.extent / 2.0)
    }

    pub fn config(&self) -> &CloudConfig {
        &self.config
    }

    pub fn scale(&self) -> f64 {
        self.config.projection.scale
    }

    /// Points in drawing order
    pub fn points(&self) -> &[ColoredPoint<C>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed cloud
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColoredPoint<C>> {
        self.points.iter()
    }

    /// Consume the cloud, returning its points in drawing order
    pub fn into_points(self) -> Vec<ColoredPoint<C>> {
        self.points
    }
}

impl<C: Default> PointCloud<C> {
    /// Create a cloud from bare positions with default colors
    pub fn from_positions<I>(positions: I, config: CloudConfig) -> Result<Self>
    where
        I: IntoIterator<Item = Point3d>,
    {
        let points = positions.into_iter().map(ColoredPoint::from).collect();
        Self::from_points(points, config)
    }
}

impl<C: Sync> PointCloud<C> {
    /// Project every point in parallel, preserving cloud order
    pub fn par_project_all(&self, viewport: Viewport) -> Vec<ScreenPoint> {
        let projection = self.projection(viewport);
        self.points
            .par_iter()
            .map(|p| projection.project(&p.position))
            .collect()
    }
}

/// Back-to-front order: ascending z, then x, then y
pub fn depth_order(a: &Point3d, b: &Point3d) -> Ordering {
    a.z.total_cmp(&b.z)
        .then_with(|| a.x.total_cmp(&b.x))
        .then_with(|| a.y.total_cmp(&b.y))
}

impl<C> Index<usize> for PointCloud<C> {
    type Output = ColoredPoint<C>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<C> IntoIterator for PointCloud<C> {
    type Item = ColoredPoint<C>;
    type IntoIter = std::vec::IntoIter<ColoredPoint<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, C> IntoIterator for &'a PointCloud<C> {
    type Item = &'a ColoredPoint<C>;
    type IntoIter = std::slice::Iter<'a, ColoredPoint<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
