use egui::Color32;

use super::Element;
use crate::element::common::{self, Extent, Point};
use crate::element::ShapeKind;
use crate::error::ShapeError;
use crate::renderer::{Canvas, Primitive};

/// Axis-aligned ellipse; `major` runs along x and `minor` along y
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ellipse {
    center: Point,
    major: i32,
    minor: i32,
}

impl Ellipse {
    pub fn new(center: Point, major: i32, minor: i32) -> Self {
        debug_assert!(major >= 0 && minor >= 0, "negative semi-axis {major}x{minor}");
        Self {
            center,
            major,
            minor,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn major(&self) -> i32 {
        self.major
    }

    pub fn minor(&self) -> i32 {
        self.minor
    }
}

impl Element for Ellipse {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
    }

    fn extent(&self) -> Extent {
        Extent {
            min: self.center.translated(-self.major, -self.minor),
            max: self.center.translated(self.major, self.minor),
        }
    }

    fn hit_test(&self, pos: Point, tolerance: i32) -> bool {
        // A flattened ellipse is the segment (or point) it collapsed into
        if self.major == 0 || self.minor == 0 {
            let extent = self.extent();
            return common::near_line_segment(pos, extent.min, extent.max, tolerance);
        }

        let outer = common::normalized_ellipse_distance(
            pos,
            self.center,
            f64::from(self.major + tolerance),
            f64::from(self.minor + tolerance),
        );
        if outer > 1.0 {
            return false;
        }

        if self.major <= tolerance || self.minor <= tolerance {
            return true;
        }
        let inner = common::normalized_ellipse_distance(
            pos,
            self.center,
            f64::from(self.major - tolerance),
            f64::from(self.minor - tolerance),
        );
        inner >= 1.0
    }

    fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.center.translated(dx, dy), self.major, self.minor)
    }

    fn validate(&self, tolerance: i32) -> Result<(), ShapeError> {
        let axis = self.major.min(self.minor);
        if axis <= tolerance {
            return Err(ShapeError::Degenerate {
                kind: ShapeKind::Ellipse,
                extent: axis,
                tolerance,
            });
        }
        Ok(())
    }

    fn draw(&self, canvas: &mut dyn Canvas, color: Color32) {
        canvas.draw_primitive(
            Primitive::Ellipse {
                center: self.center,
                major: self.major,
                minor: self.minor,
            },
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_band() {
        let ellipse = Ellipse::new(Point::new(0, 0), 100, 50);
        assert!(ellipse.hit_test(Point::new(100, 0), 10));
        assert!(ellipse.hit_test(Point::new(0, 55), 10));
        assert!(!ellipse.hit_test(Point::new(0, 0), 10));
        assert!(!ellipse.hit_test(Point::new(0, 70), 10));
    }

    #[test]
    fn test_zero_axis_degrades_to_segment() {
        let flat = Ellipse::new(Point::new(0, 0), 40, 0);
        assert!(flat.hit_test(Point::new(20, 5), 10));
        assert!(!flat.hit_test(Point::new(20, 15), 10));

        let dot = Ellipse::new(Point::new(0, 0), 0, 0);
        assert!(dot.hit_test(Point::new(3, 3), 10));
        assert!(!dot.hit_test(Point::new(20, 0), 10));
    }
}
