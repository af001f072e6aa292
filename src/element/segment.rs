use egui::Color32;

use super::Element;
use crate::element::common::{self, Extent, Point};
use crate::element::ShapeKind;
use crate::error::ShapeError;
use crate::renderer::{Canvas, Primitive};

/// Straight line between the two points the user dragged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    left: Point,
    right: Point,
}

impl Segment {
    pub fn new(left: Point, right: Point) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> Point {
        self.left
    }

    pub fn right(&self) -> Point {
        self.right
    }
}

impl Element for Segment {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Segment
    }

    fn extent(&self) -> Extent {
        Extent::from_corners(self.left, self.right)
    }

    fn hit_test(&self, pos: Point, tolerance: i32) -> bool {
        common::near_line_segment(pos, self.left, self.right, tolerance)
    }

    fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.left.translated(dx, dy), self.right.translated(dx, dy))
    }

    fn validate(&self, tolerance: i32) -> Result<(), ShapeError> {
        let length = self.left.manhattan_distance(self.right);
        if length <= tolerance {
            return Err(ShapeError::Degenerate {
                kind: ShapeKind::Segment,
                extent: length,
                tolerance,
            });
        }
        Ok(())
    }

    fn draw(&self, canvas: &mut dyn Canvas, color: Color32) {
        canvas.draw_primitive(Primitive::Segment(self.left, self.right), color);
    }
}
