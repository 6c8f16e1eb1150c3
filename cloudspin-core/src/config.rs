//! Cloud and projection configuration

use crate::bounds::BoundsMode;
use crate::error::{Error, Result};
use crate::point::Vector2d;
use serde::{Deserialize, Serialize};

/// Default uniform scale applied before projection
pub const DEFAULT_SCALE: f64 = 3.0;

/// Parameters of the orthographic screen projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Uniform scale applied to x, y and z; must be positive
    pub scale: f64,
    /// Screen translation added after scaling
    pub offset: Vector2d,
    /// Per-axis shear applied to the scaled depth: `sx -= z * shear.x`
    pub shear: Vector2d,
}

impl ProjectionConfig {
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.offset = Vector2d::new(x, y);
        self
    }

    pub fn with_shear(mut self, x: f64, y: f64) -> Self {
        self.shear = Vector2d::new(x, y);
        self
    }

    /// Check that the scale is positive and every parameter is finite
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(Error::InvalidData(format!(
                "projection scale must be positive, got {}",
                self.scale
            )));
        }
        if !self.offset.iter().chain(self.shear.iter()).all(|v| v.is_finite()) {
            return Err(Error::InvalidData(
                "projection offset and shear must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            offset: Vector2d::zeros(),
            shear: Vector2d::zeros(),
        }
    }
}

/// Configuration fixed when a cloud is constructed
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CloudConfig {
    pub bounds: BoundsMode,
    pub projection: ProjectionConfig,
}

impl CloudConfig {
    pub fn with_bounds(mut self, bounds: BoundsMode) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_projection(mut self, projection: ProjectionConfig) -> Self {
        self.projection = projection;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.projection.validate()
    }
}
