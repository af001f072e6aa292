use std::fmt;

use egui::Pos2;
use serde::{Deserialize, Serialize};

// Common constants for all shape kinds
pub const FINDRULE_VARIATION: i32 = 10;
pub const TEXT_MAX_LENGTH: usize = 255;

/// Integer point in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Round an egui position to the nearest integer point
    pub fn from_pos2(pos: Pos2) -> Self {
        Self::new(pos.x.round() as i32, pos.y.round() as i32)
    }

    pub fn to_pos2(self) -> Pos2 {
        Pos2::new(self.x as f32, self.y as f32)
    }

    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Midpoint with integer truncation toward zero
    pub fn midpoint(self, other: Point) -> Self {
        Self::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }

    pub fn manhattan_distance(self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn sqr_distance(self, other: Point) -> i64 {
        let dx = i64::from(self.x - other.x);
        let dy = i64::from(self.y - other.y);
        dx * dx + dy * dy
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.sqr_distance(other) as f64).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned extent of a shape: `min` is never greater than `max` on either axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub min: Point,
    pub max: Point,
}

impl Extent {
    /// Normalize two arbitrary corners with min/max
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        self.min.midpoint(self.max)
    }

    /// Inclusive containment after growing every side by `margin`
    pub fn contains(&self, pos: Point, margin: i32) -> bool {
        pos.x >= self.min.x - margin
            && pos.x <= self.max.x + margin
            && pos.y >= self.min.y - margin
            && pos.y <= self.max.y + margin
    }
}

/// Distance test against the segment `start..end`, extended by `tolerance` past both ends
pub(crate) fn near_line_segment(pos: Point, start: Point, end: Point, tolerance: i32) -> bool {
    let dx = f64::from(end.x - start.x);
    let dy = f64::from(end.y - start.y);
    let px = f64::from(pos.x - start.x);
    let py = f64::from(pos.y - start.y);
    let tolerance = f64::from(tolerance);

    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        return (px * px + py * py).sqrt() <= tolerance;
    }

    let perpendicular = (dx * py - dy * px).abs() / len;
    let projection = (dx * px + dy * py) / len;
    perpendicular <= tolerance && projection >= -tolerance && projection <= len + tolerance
}

/// `(dx / a)^2 + (dy / b)^2` for a point relative to an ellipse center
pub(crate) fn normalized_ellipse_distance(pos: Point, center: Point, a: f64, b: f64) -> f64 {
    let dx = f64::from(pos.x - center.x) / a;
    let dy = f64::from(pos.y - center.y) / b;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_truncates() {
        assert_eq!(Point::new(0, 0).midpoint(Point::new(5, 7)), Point::new(2, 3));
        assert_eq!(Point::new(-5, 0).midpoint(Point::new(0, 0)), Point::new(-2, 0));
    }

    #[test]
    fn test_extent_normalizes_corners() {
        let extent = Extent::from_corners(Point::new(30, 5), Point::new(10, 25));
        assert_eq!(extent.min, Point::new(10, 5));
        assert_eq!(extent.max, Point::new(30, 25));
        assert_eq!(extent.width(), 20);
        assert_eq!(extent.height(), 20);
    }

    #[test]
    fn test_near_line_segment_projection_bounds() {
        let start = Point::new(0, 0);
        let end = Point::new(100, 0);
        assert!(near_line_segment(Point::new(50, 10), start, end, 10));
        assert!(!near_line_segment(Point::new(50, 11), start, end, 10));
        assert!(near_line_segment(Point::new(-10, 0), start, end, 10));
        assert!(!near_line_segment(Point::new(-11, 0), start, end, 10));
        assert!(near_line_segment(Point::new(110, 0), start, end, 10));
    }
}
