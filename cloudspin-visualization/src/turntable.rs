//! Frame sequences of a cloud rotating around one axis

use crate::renderer::FrameRenderer;
use cloudspin_core::{Axis, Error, PointCloud, Result, Rgb};
use image::RgbImage;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// How many frames to produce and how far to turn between them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurntableConfig {
    pub frames: usize,
    pub step_degrees: f64,
    pub axis: Axis,
}

impl Default for TurntableConfig {
    fn default() -> Self {
        Self {
            frames: 1,
            step_degrees: 0.3,
            axis: Axis::Z,
        }
    }
}

/// Renders a frame, rotates the cloud by one step, and repeats
pub struct Turntable {
    renderer: FrameRenderer,
    config: TurntableConfig,
}

impl Turntable {
    pub fn new(renderer: FrameRenderer, config: TurntableConfig) -> Self {
        Self { renderer, config }
    }

    /// Hand every rendered frame to `sink`
    ///
    /// Frame 0 shows the cloud as given; the cloud is rotated after each frame
    /// and is left at its final orientation.
    pub fn run<C, F>(&self, cloud: &mut PointCloud<C>, mut sink: F) -> Result<()>
    where
        C: Copy + Into<Rgb>,
        F: FnMut(usize, &RgbImage) -> Result<()>,
    {
        let mut image = RgbImage::new(self.renderer.config().width, self.renderer.config().height);
        for frame in 0..self.config.frames {
            self.renderer.render_into(cloud, &mut image);
            sink(frame, &image)?;
            cloud.rotate(self.config.step_degrees, self.config.axis);
        }
        Ok(())
    }

    /// Write frames as `frame_0000.png`, `frame_0001.png`, ... into `out_dir`
    pub fn save_frames<C, P>(&self, cloud: &mut PointCloud<C>, out_dir: P) -> Result<Vec<PathBuf>>
    where
        C: Copy + Into<Rgb>,
        P: AsRef<Path>,
    {
        let out_dir = out_dir.as_ref();
        fs::create_dir_all(out_dir)?;

        let mut written = Vec::with_capacity(self.config.frames);
        self.run(cloud, |frame, image| {
            let path = out_dir.join(frame_file_name(frame));
            image
                .save(&path)
                .map_err(|e| Error::Render(format!("failed to write {}: {}", path.display(), e)))?;
            debug!("Wrote {}", path.display());
            written.push(path);
            Ok(())
        })?;

        info!(
            "Saved {} frames to {} ({} degrees per frame around {})",
            written.len(),
            out_dir.display(),
            self.config.step_degrees,
            self.config.axis
        );
        Ok(written)
    }
}

/// File name of a numbered frame
pub fn frame_file_name(frame: usize) -> String {
    format!("frame_{:04}.png", frame)
}
