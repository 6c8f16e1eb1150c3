//! I/O operations for cloudspin point clouds
//!
//! Reads and writes the delimited text record format, and builds normalized
//! [`PointCloud`]s from record files in one step. Loading is all-or-nothing: a
//! single malformed line fails the whole load and no cloud is produced.

pub mod records;

pub use records::*;

use cloudspin_core::{CloudConfig, Point3d, PointCloud, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::{debug, info};

/// Read every position from a record file
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_positions<P: AsRef<Path>>(path: P, format: RecordFormat) -> Result<Vec<Point3d>> {
    debug!("Reading {} delimited records", format.delimiter);
    let positions = RecordReader::open(&path, format)?.read_all()?;
    debug!("Read {} records", positions.len());
    Ok(positions)
}

/// Load a record file and build a normalized cloud with default colors
pub fn load_cloud<C, P>(path: P, format: RecordFormat, config: CloudConfig) -> Result<PointCloud<C>>
where
    C: Default,
    P: AsRef<Path>,
{
    let positions = read_positions(&path, format)?;
    let cloud = PointCloud::from_positions(positions, config)?;
    let extent = cloud.extent();
    info!(
        "Loaded {} points from {}, extent ({}, {}, {})",
        cloud.len(),
        path.as_ref().display(),
        extent.x,
        extent.y,
        extent.z
    );
    Ok(cloud)
}

/// Write a cloud's current positions, in drawing order, to a record file
pub fn save_cloud<C, P: AsRef<Path>>(cloud: &PointCloud<C>, path: P, format: RecordFormat) -> Result<()> {
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    RecordWriter::write_points(&mut writer, cloud.iter().map(|p| &p.position), format)?;
    info!("Saved {} points to {}", cloud.len(), path.as_ref().display());
    Ok(())
}
