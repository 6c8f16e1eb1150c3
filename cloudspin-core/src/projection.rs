//! Orthographic projection of cloud points into integer screen space

use crate::config::ProjectionConfig;
use crate::point::{Point3d, ScreenPoint, Vector2d, Vector3d};
use serde::{Deserialize, Serialize};

/// Target surface dimensions; a zero dimension disables centering on that axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A viewport that centers on neither axis
    pub fn uncentered() -> Self {
        Self::default()
    }
}

/// Projection parameters resolved against a cloud's extent and a viewport
///
/// Built once per frame and shared by every point of that frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    scale: f64,
    shear: Vector2d,
    offset: Vector2d,
    centering: Vector2d,
}

impl Projection {
    pub fn new(config: &ProjectionConfig, extent: &Vector3d, viewport: Viewport) -> Self {
        let centering = Vector2d::new(
            centering_margin(viewport.width, extent.x, config.scale),
            centering_margin(viewport.height, extent.y, config.scale),
        );
        Self {
            scale: config.scale,
            shear: config.shear,
            offset: config.offset,
            centering,
        }
    }

    /// Margin added on each side to center the cloud, per axis
    pub fn centering(&self) -> Vector2d {
        self.centering
    }

    /// Offset plus centering, added after scaling
    pub fn translation(&self) -> Vector2d {
        self.offset + self.centering
    }

    /// Project a position, truncating toward zero
    pub fn project(&self, position: &Point3d) -> ScreenPoint {
        let scaled = position.coords * self.scale;
        let translation = self.translation();
        let x = scaled.x - scaled.z * self.shear.x + translation.x;
        let y = scaled.y - scaled.z * self.shear.y + translation.y;
        ScreenPoint::new(x as i64, y as i64)
    }
}

fn centering_margin(viewport: u32, extent: f64, scale: f64) -> f64 {
    if viewport == 0 {
        0.0
    } else {
        (f64::from(viewport) - extent * scale) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncentered_projection() {
        let config = ProjectionConfig::new(1.0);
        let projection = Projection::new(&config, &Vector3d::new(2.0, 2.0, 0.0), Viewport::uncentered());
        assert_eq!(projection.project(&Point3d::new(2.0, 2.0, 0.0)), ScreenPoint::new(2, 2));
    }

    #[test]
    fn test_truncates_toward_zero() {
        let config = ProjectionConfig::new(1.0).with_offset(-5.0, 0.0);
        let projection = Projection::new(&config, &Vector3d::zeros(), Viewport::uncentered());
        assert_eq!(projection.project(&Point3d::new(3.7, 1.9, 0.0)), ScreenPoint::new(-1, 1));
        assert_eq!(projection.project(&Point3d::new(4.2, 0.2, 0.0)), ScreenPoint::new(0, 0));
    }

    #[test]
    fn test_exact_fit_adds_no_margin() {
        let config = ProjectionConfig::new(3.0);
        let extent = Vector3d::new(100.0, 50.0, 10.0);
        let projection = Projection::new(&config, &extent, Viewport::new(300, 150));
        assert_eq!(projection.centering(), Vector2d::zeros());
    }

    #[test]
    fn test_larger_viewport_centers() {
        let config = ProjectionConfig::new(2.0).with_offset(1.0, 1.0);
        let extent = Vector3d::new(100.0, 50.0, 10.0);
        let projection = Projection::new(&config, &extent, Viewport::new(800, 600));
        assert_eq!(projection.centering(), Vector2d::new(300.0, 250.0));
        assert_eq!(projection.translation(), Vector2d::new(301.0, 251.0));
        assert_eq!(projection.project(&Point3d::origin()), ScreenPoint::new(301, 251));
    }

    #[test]
    fn test_single_axis_centering() {
        let config = ProjectionConfig::new(1.0);
        let extent = Vector3d::new(10.0, 10.0, 0.0);
        let projection = Projection::new(&config, &extent, Viewport::new(0, 30));
        assert_eq!(projection.centering(), Vector2d::new(0.0, 10.0));
    }

    #[test]
    fn test_shear_uses_scaled_depth() {
        let config = ProjectionConfig::new(2.0).with_shear(0.5, 0.25);
        let projection = Projection::new(&config, &Vector3d::zeros(), Viewport::uncentered());
        // scaled (8, 8, 4): x = 8 - 4 * 0.5, y = 8 - 4 * 0.25
        assert_eq!(projection.project(&Point3d::new(4.0, 4.0, 2.0)), ScreenPoint::new(6, 7));
    }
}
