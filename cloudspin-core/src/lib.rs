//! Core data structures for cloudspin
//!
//! This crate holds the geometric pipeline behind painter's-algorithm point
//! cloud rendering: normalization into the non-negative octant, rotation about
//! the cloud's own center, back-to-front depth ordering and orthographic
//! projection into integer screen coordinates.

pub mod bounds;
pub mod config;
pub mod error;
pub mod point;
pub mod point_cloud;
pub mod projection;
pub mod traits;
pub mod transform;

pub use bounds::*;
pub use config::*;
pub use error::*;
pub use point::*;
pub use point_cloud::*;
pub use projection::*;
pub use traits::*;
pub use transform::*;
