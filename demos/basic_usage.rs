//! Basic usage example for cloudspin
//!
//! This example walks through the core pipeline:
//! - Building a cloud from records
//! - Normalization
//! - Rotating and depth ordering
//! - Projecting to screen coordinates

use cloudspin_core::{Axis, CloudConfig, PointCloud, ProjectionConfig, Viewport};
use cloudspin_io::{parse_str, RecordFormat};
use cloudspin_visualization::DEFAULT_COLORING;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cloudspin Basic Usage Example");
    println!("=============================");

    let records = "0; 0; 0\n2; 0; 0\n0; 2; 0\n-1; 1; 3\n";
    let positions = parse_str(records, RecordFormat::default())?;
    println!("Parsed {} records", positions.len());

    let config = CloudConfig::default().with_projection(ProjectionConfig::new(10.0).with_offset(5.0, 5.0));
    let mut cloud: PointCloud = PointCloud::from_positions(positions, config)?;
    cloud.assign_colors(&DEFAULT_COLORING);

    let extent = cloud.extent();
    println!("\nNormalized extent: ({}, {}, {})", extent.x, extent.y, extent.z);
    for (i, p) in cloud.iter().enumerate() {
        println!("  point {}: ({:.3}, {:.3}, {:.3})", i, p.position.x, p.position.y, p.position.z);
    }

    println!("\nRotating 90 degrees around z:");
    cloud.rotate(90.0, Axis::Z);
    for (i, p) in cloud.iter().enumerate() {
        println!("  point {}: ({:.3}, {:.3}, {:.3})", i, p.position.x, p.position.y, p.position.z);
    }
    println!("Depth sorted: {}", cloud.is_depth_sorted());

    println!("\nProjected into a 200x100 viewport:");
    for (i, screen) in cloud.project_all(Viewport::new(200, 100)).iter().enumerate() {
        println!("  point {}: ({}, {})", i, screen.x, screen.y);
    }

    println!("\nExample completed successfully!");
    Ok(())
}
