use egui::Color32;

use super::Element;
use crate::element::common::{Extent, Point};
use crate::element::ShapeKind;
use crate::error::ShapeError;
use crate::renderer::{Canvas, Primitive};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle {
    center: Point,
    radius: i32,
}

impl Circle {
    pub fn new(center: Point, radius: i32) -> Self {
        debug_assert!(radius >= 0, "negative radius {radius}");
        Self { center, radius }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }
}

impl Element for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn extent(&self) -> Extent {
        Extent {
            min: self.center.translated(-self.radius, -self.radius),
            max: self.center.translated(self.radius, self.radius),
        }
    }

    // Only the outline is selectable
    fn hit_test(&self, pos: Point, tolerance: i32) -> bool {
        (pos.distance(self.center) - f64::from(self.radius)).abs() <= f64::from(tolerance)
    }

    fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.center.translated(dx, dy), self.radius)
    }

    fn validate(&self, tolerance: i32) -> Result<(), ShapeError> {
        if self.radius <= tolerance {
            return Err(ShapeError::Degenerate {
                kind: ShapeKind::Circle,
                extent: self.radius,
                tolerance,
            });
        }
        Ok(())
    }

    fn draw(&self, canvas: &mut dyn Canvas, color: Color32) {
        canvas.draw_primitive(
            Primitive::Circle {
                center: self.center,
                radius: self.radius,
            },
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annulus_hit_test() {
        let circle = Circle::new(Point::new(100, 100), 50);
        assert!(circle.hit_test(Point::new(150, 100), 10));
        assert!(circle.hit_test(Point::new(160, 100), 10));
        assert!(circle.hit_test(Point::new(140, 100), 10));
        assert!(!circle.hit_test(Point::new(161, 100), 10));
        // The filled center is not part of the outline
        assert!(!circle.hit_test(Point::new(100, 100), 10));
    }
}
