//! Color policies for point clouds

use cloudspin_core::{Axis, ColorPolicy, Point3d, Rgb, Vector3d};

/// Every point gets the same color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedColor(pub Rgb);

/// White points
pub const DEFAULT_COLORING: FixedColor = FixedColor([255, 255, 255]);

impl ColorPolicy<Rgb> for FixedColor {
    fn color_for(&self, _position: &Point3d, _extent: &Vector3d) -> Rgb {
        self.0
    }
}

/// Linear blend from `start` at coordinate 0 to `end` at the extent along `axis`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisGradient {
    pub axis: Axis,
    pub start: Rgb,
    pub end: Rgb,
}

impl AxisGradient {
    pub fn new(axis: Axis, start: Rgb, end: Rgb) -> Self {
        Self { axis, start, end }
    }

    /// Bright near points fading into dark far points
    pub fn depth_shade() -> Self {
        Self::new(Axis::Z, [255, 255, 255], [40, 40, 40])
    }
}

impl ColorPolicy<Rgb> for AxisGradient {
    fn color_for(&self, position: &Point3d, extent: &Vector3d) -> Rgb {
        let i = self.axis.index();
        let t = if extent[i] > 0.0 {
            (position[i] / extent[i]).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let mut color = [0u8; 3];
        for (c, (s, e)) in color.iter_mut().zip(self.start.iter().zip(self.end.iter())) {
            let s = f64::from(*s);
            let e = f64::from(*e);
            *c = (s + (e - s) * t).round() as u8;
        }
        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_color() {
        let color = DEFAULT_COLORING.color_for(&Point3d::new(1.0, 2.0, 3.0), &Vector3d::new(4.0, 4.0, 4.0));
        assert_eq!(color, [255, 255, 255]);
    }

    #[test]
    fn test_gradient_endpoints() {
        let gradient = AxisGradient::new(Axis::Y, [0, 0, 0], [200, 100, 50]);
        let extent = Vector3d::new(1.0, 10.0, 1.0);
        assert_eq!(gradient.color_for(&Point3d::new(0.0, 0.0, 0.0), &extent), [0, 0, 0]);
        assert_eq!(gradient.color_for(&Point3d::new(0.0, 10.0, 0.0), &extent), [200, 100, 50]);
        assert_eq!(gradient.color_for(&Point3d::new(0.0, 5.0, 0.0), &extent), [100, 50, 25]);
    }

    #[test]
    fn test_gradient_flat_axis() {
        let gradient = AxisGradient::depth_shade();
        let color = gradient.color_for(&Point3d::new(1.0, 1.0, 0.0), &Vector3d::new(2.0, 2.0, 0.0));
        assert_eq!(color, gradient.start);
    }
}
