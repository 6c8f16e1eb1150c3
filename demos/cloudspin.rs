//! cloudspin - render a point cloud file to PNG frames
//!
//! Loads a `;`-delimited point file, normalizes it, and writes a turntable
//! sequence of painter's-algorithm frames, rotating the cloud between frames.
//!
//! ```text
//! cloudspin points.txt --out frames --frames 120 --step 3 --axis y
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use cloudspin_core::{Axis, BoundsMode, CloudConfig, PointCloud, ProjectionConfig, DEFAULT_SCALE};
use cloudspin_io::{load_cloud, save_cloud, Delimiter, RecordFormat};
use cloudspin_visualization::{
    AxisGradient, FrameRenderer, RenderConfig, Turntable, TurntableConfig, DEFAULT_COLORING,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Coloring {
    /// Every point white
    Fixed,
    /// Shade points by depth
    Depth,
}

/// Render a point cloud to a sequence of PNG frames
#[derive(Parser, Debug)]
#[command(name = "cloudspin")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Point file, one `x; y; z` record per line
    input: PathBuf,

    /// Directory for the rendered frames
    #[arg(short, long, default_value = "output")]
    out: PathBuf,

    /// Number of frames to render
    #[arg(short, long, default_value_t = 1)]
    frames: usize,

    /// Rotation between frames, in degrees
    #[arg(short, long, default_value_t = 0.3)]
    step: f64,

    /// Rotation axis (x, y or z)
    #[arg(short, long, default_value = "z")]
    axis: Axis,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Uniform projection scale
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    scale: f64,

    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    offset_x: f64,

    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    offset_y: f64,

    /// Side length of each drawn point, in pixels
    #[arg(long, default_value_t = 3)]
    point_size: u32,

    /// Do not center the cloud in the frame
    #[arg(long)]
    no_center: bool,

    /// Seed the bounding box from the points instead of the origin
    #[arg(long)]
    tight_bounds: bool,

    /// Field delimiter of the input file
    #[arg(long, default_value = "semicolon")]
    delimiter: Delimiter,

    #[arg(long, value_enum, default_value_t = Coloring::Fixed)]
    coloring: Coloring,

    /// Also write the final point positions to this file
    #[arg(long)]
    dump: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let bounds = if args.tight_bounds {
        BoundsMode::Tight
    } else {
        BoundsMode::ZeroSeeded
    };
    let config = CloudConfig::default().with_bounds(bounds).with_projection(
        ProjectionConfig::new(args.scale).with_offset(args.offset_x, args.offset_y),
    );
    let format = RecordFormat::new(args.delimiter);

    let mut cloud: PointCloud = load_cloud(&args.input, format, config)
        .with_context(|| format!("failed to load {}", args.input.display()))?;

    match args.coloring {
        Coloring::Fixed => cloud.assign_colors(&DEFAULT_COLORING),
        Coloring::Depth => cloud.assign_colors(&AxisGradient::depth_shade()),
    }

    let renderer = FrameRenderer::new(RenderConfig {
        width: args.width,
        height: args.height,
        point_size: args.point_size,
        background: [0, 0, 0],
        center: !args.no_center,
    })?;
    let turntable = Turntable::new(
        renderer,
        TurntableConfig {
            frames: args.frames,
            step_degrees: args.step,
            axis: args.axis,
        },
    );

    let written = turntable
        .save_frames(&mut cloud, &args.out)
        .with_context(|| format!("failed to render frames into {}", args.out.display()))?;

    if let Some(dump) = &args.dump {
        save_cloud(&cloud, dump, format).with_context(|| format!("failed to write {}", dump.display()))?;
    }

    info!("Rendered {} frames of {} points", written.len(), cloud.len());
    Ok(())
}
