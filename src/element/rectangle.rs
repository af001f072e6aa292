use egui::Color32;

use super::Element;
use crate::element::common::{Extent, Point};
use crate::element::ShapeKind;
use crate::error::ShapeError;
use crate::renderer::{Canvas, Primitive};

/// Axis-aligned rectangle stored as the two corners it was built from.
///
/// The corners are not normalized: `lower_left` may lie to the right of
/// `upper_right`. Use [`Element::extent`] for ordered bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rectangle {
    lower_left: Point,
    upper_right: Point,
}

impl Rectangle {
    pub fn new(lower_left: Point, upper_right: Point) -> Self {
        Self {
            lower_left,
            upper_right,
        }
    }

    pub fn lower_left(&self) -> Point {
        self.lower_left
    }

    pub fn upper_right(&self) -> Point {
        self.upper_right
    }

    /// Shorter side length, shared with text boxes for size rejection
    pub(crate) fn min_side(&self) -> i32 {
        let extent = self.extent();
        extent.width().min(extent.height())
    }

    /// Span `anchor` and `dragged` while keeping which stored corner holds
    /// each coordinate. `anchor` must share one coordinate per axis with a corner.
    pub(crate) fn respanned(&self, anchor: Point, dragged: Point) -> Self {
        let (ll_x, ur_x) = if self.lower_left.x == anchor.x {
            (anchor.x, dragged.x)
        } else {
            (dragged.x, anchor.x)
        };
        let (ll_y, ur_y) = if self.lower_left.y == anchor.y {
            (anchor.y, dragged.y)
        } else {
            (dragged.y, anchor.y)
        };
        Self::new(Point::new(ll_x, ll_y), Point::new(ur_x, ur_y))
    }
}

impl Element for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn extent(&self) -> Extent {
        Extent::from_corners(self.lower_left, self.upper_right)
    }

    fn hit_test(&self, pos: Point, tolerance: i32) -> bool {
        self.extent().contains(pos, tolerance)
    }

    fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.lower_left.translated(dx, dy),
            self.upper_right.translated(dx, dy),
        )
    }

    fn validate(&self, tolerance: i32) -> Result<(), ShapeError> {
        let side = self.min_side();
        if side <= tolerance {
            return Err(ShapeError::Degenerate {
                kind: ShapeKind::Rectangle,
                extent: side,
                tolerance,
            });
        }
        Ok(())
    }

    fn draw(&self, canvas: &mut dyn Canvas, color: Color32) {
        canvas.draw_primitive(
            Primitive::Rectangle(self.lower_left, self.upper_right),
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_grows_by_tolerance() {
        let rect = Rectangle::new(Point::new(100, 80), Point::new(20, 10));
        assert!(rect.hit_test(Point::new(10, 0), 10));
        assert!(rect.hit_test(Point::new(60, 40), 10));
        assert!(!rect.hit_test(Point::new(111, 40), 10));
    }

    #[test]
    fn test_respanned_keeps_corner_roles() {
        let rect = Rectangle::new(Point::new(100, 10), Point::new(20, 80));
        let resized = rect.respanned(Point::new(20, 10), Point::new(140, 90));
        assert_eq!(resized.lower_left(), Point::new(140, 10));
        assert_eq!(resized.upper_right(), Point::new(20, 90));
    }
}
