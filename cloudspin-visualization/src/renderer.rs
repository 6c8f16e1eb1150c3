//! Software painter's-algorithm renderer

use cloudspin_core::{Error, PointCloud, Result, Rgb, Viewport};
use image::RgbImage;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Output surface settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Side length of the square drawn for each point, in pixels
    pub point_size: u32,
    pub background: Rgb,
    /// Center the cloud on both axes of the surface
    pub center: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            point_size: 3,
            background: [0, 0, 0],
            center: true,
        }
    }
}

/// Draws a cloud as filled squares in its back-to-front order
///
/// Points later in the cloud overwrite earlier ones, so a depth-sorted cloud
/// renders nearer points on top.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    config: RenderConfig,
}

impl FrameRenderer {
    pub fn new(config: RenderConfig) -> Result<Self> {
        if config.width == 0 || config.height == 0 {
            return Err(Error::InvalidData(format!(
                "render surface must be non-empty, got {}x{}",
                config.width, config.height
            )));
        }
        if config.point_size == 0 {
            return Err(Error::InvalidData("point size must be at least 1".to_string()));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Viewport handed to the projection
    pub fn viewport(&self) -> Viewport {
        if self.config.center {
            Viewport::new(self.config.width, self.config.height)
        } else {
            Viewport::uncentered()
        }
    }

    /// Render a cloud into a new image
    pub fn render<C>(&self, cloud: &PointCloud<C>) -> RgbImage
    where
        C: Copy + Into<Rgb>,
    {
        let mut image = RgbImage::new(self.config.width, self.config.height);
        self.render_into(cloud, &mut image);
        image
    }

    /// Clear `image` to the background and draw every point onto it
    pub fn render_into<C>(&self, cloud: &PointCloud<C>, image: &mut RgbImage)
    where
        C: Copy + Into<Rgb>,
    {
        let background = image::Rgb(self.config.background);
        for pixel in image.pixels_mut() {
            *pixel = background;
        }

        let projection = cloud.projection(self.viewport());
        let mut drawn = 0usize;
        for point in cloud {
            let screen = projection.project(&point.position);
            if self.fill_square(image, screen.x, screen.y, image::Rgb(point.color.into())) {
                drawn += 1;
            }
        }

        debug!("Drew {} of {} points", drawn, cloud.len());
    }

    /// Fill a square with its top-left corner at `(x, y)`, clipped to the image
    fn fill_square(&self, image: &mut RgbImage, x: i64, y: i64, color: image::Rgb<u8>) -> bool {
        let size = i64::from(self.config.point_size);
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(size).min(i64::from(image.width()));
        let y1 = y.saturating_add(size).min(i64::from(image.height()));
        if x0 >= x1 || y0 >= y1 {
            return false;
        }

        for py in y0..y1 {
            for px in x0..x1 {
                image.put_pixel(px as u32, py as u32, color);
            }
        }
        true
    }
}
