//! Core traits for cloudspin

use crate::point::{Point3d, Vector3d};

/// Assigns a color to each point of a normalized cloud
///
/// The cloud stores whatever the policy returns and never reads it back.
pub trait ColorPolicy<C> {
    /// Color for the point at `position` in a cloud of size `extent`
    fn color_for(&self, position: &Point3d, extent: &Vector3d) -> C;
}

impl<C, F> ColorPolicy<C> for F
where
    F: Fn(&Point3d, &Vector3d) -> C,
{
    fn color_for(&self, position: &Point3d, extent: &Vector3d) -> C {
        self(position, extent)
    }
}
