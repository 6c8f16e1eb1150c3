//! Visualization for cloudspin point clouds
//!
//! Renders clouds the way a painter's-algorithm display would, without a
//! window or event loop:
//! - Filled-square point rendering into an RGB image
//! - Color policies (fixed color, axis gradients)
//! - Turntable sequences saved as numbered PNG frames

pub mod coloring;
pub mod renderer;
pub mod turntable;

pub use coloring::*;
pub use renderer::*;
pub use turntable::*;

use cloudspin_core::{Error, PointCloud, Result, Rgb};
use std::path::Path;

/// Render a single frame of `cloud` and save it as a PNG
pub fn save_png<C, P>(cloud: &PointCloud<C>, config: RenderConfig, path: P) -> Result<()>
where
    C: Copy + Into<Rgb>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let image = FrameRenderer::new(config)?.render(cloud);
    image
        .save(path)
        .map_err(|e| Error::Render(format!("failed to write {}: {}", path.display(), e)))
}
