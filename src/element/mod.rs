use std::fmt;

use egui::Color32;

// Concrete shape kinds
pub(crate) mod common;
mod circle;
mod ellipse;
mod rectangle;
mod segment;
mod text;

pub use circle::Circle;
pub use common::{Extent, FINDRULE_VARIATION, Point, TEXT_MAX_LENGTH};
pub use ellipse::Ellipse;
pub use rectangle::Rectangle;
pub use segment::Segment;
pub use text::{FontSpec, Text, TextStyle};

use crate::error::ShapeError;
use crate::renderer::Canvas;

/// Common trait that all shape kinds implement
pub trait Element {
    /// Get the kind tag for this shape
    fn kind(&self) -> ShapeKind;

    /// Ordered bounding extent
    fn extent(&self) -> Extent;

    /// Find rule: does `pos` count as "on" this shape within `tolerance`
    fn hit_test(&self, pos: Point, tolerance: i32) -> bool;

    /// Copy of the shape moved by the given delta
    fn translated(&self, dx: i32, dy: i32) -> Self
    where
        Self: Sized;

    /// Reject shapes whose size is at or below `tolerance`
    fn validate(&self, tolerance: i32) -> Result<(), ShapeError>;

    /// Draw the shape in a single color
    fn draw(&self, canvas: &mut dyn Canvas, color: Color32);
}

/// Tag for the fixed set of shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Segment,
    Rectangle,
    Circle,
    Ellipse,
    Text,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Segment,
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Ellipse,
        ShapeKind::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Segment => "segment",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Text => "text",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shape with its kind-specific payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Segment(Segment),
    Rectangle(Rectangle),
    Circle(Circle),
    Ellipse(Ellipse),
    Text(Text),
}

impl Element for Shape {
    fn kind(&self) -> ShapeKind {
        match self {
            Shape::Segment(s) => s.kind(),
            Shape::Rectangle(r) => r.kind(),
            Shape::Circle(c) => c.kind(),
            Shape::Ellipse(e) => e.kind(),
            Shape::Text(t) => t.kind(),
        }
    }

    fn extent(&self) -> Extent {
        match self {
            Shape::Segment(s) => s.extent(),
            Shape::Rectangle(r) => r.extent(),
            Shape::Circle(c) => c.extent(),
            Shape::Ellipse(e) => e.extent(),
            Shape::Text(t) => t.extent(),
        }
    }

    fn hit_test(&self, pos: Point, tolerance: i32) -> bool {
        match self {
            Shape::Segment(s) => s.hit_test(pos, tolerance),
            Shape::Rectangle(r) => r.hit_test(pos, tolerance),
            Shape::Circle(c) => c.hit_test(pos, tolerance),
            Shape::Ellipse(e) => e.hit_test(pos, tolerance),
            Shape::Text(t) => t.hit_test(pos, tolerance),
        }
    }

    fn translated(&self, dx: i32, dy: i32) -> Self {
        match self {
            Shape::Segment(s) => Shape::Segment(s.translated(dx, dy)),
            Shape::Rectangle(r) => Shape::Rectangle(r.translated(dx, dy)),
            Shape::Circle(c) => Shape::Circle(c.translated(dx, dy)),
            Shape::Ellipse(e) => Shape::Ellipse(e.translated(dx, dy)),
            Shape::Text(t) => Shape::Text(t.translated(dx, dy)),
        }
    }

    fn validate(&self, tolerance: i32) -> Result<(), ShapeError> {
        match self {
            Shape::Segment(s) => s.validate(tolerance),
            Shape::Rectangle(r) => r.validate(tolerance),
            Shape::Circle(c) => c.validate(tolerance),
            Shape::Ellipse(e) => e.validate(tolerance),
            Shape::Text(t) => t.validate(tolerance),
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas, color: Color32) {
        match self {
            Shape::Segment(s) => s.draw(canvas, color),
            Shape::Rectangle(r) => r.draw(canvas, color),
            Shape::Circle(c) => c.draw(canvas, color),
            Shape::Ellipse(e) => e.draw(canvas, color),
            Shape::Text(t) => t.draw(canvas, color),
        }
    }
}

/// Factory functions for creating shapes from a pointer drag
pub mod factory {
    use super::*;

    /// Build the shape a drag from `start` to `end` describes, without size checks.
    ///
    /// Used for live previews while the pointer is still moving.
    pub fn preview(kind: ShapeKind, start: Point, end: Point, style: &TextStyle) -> Result<Shape, ShapeError> {
        let shape = match kind {
            ShapeKind::Segment => Shape::Segment(Segment::new(start, end)),
            ShapeKind::Rectangle => Shape::Rectangle(Rectangle::new(start, end)),
            ShapeKind::Circle => {
                let center = start.midpoint(end);
                let radius = (center.sqr_distance(end) as f64).sqrt() as i32;
                Shape::Circle(Circle::new(center, radius))
            }
            ShapeKind::Ellipse => {
                let center = start.midpoint(end);
                Shape::Ellipse(Ellipse::new(
                    center,
                    (end.x - center.x).abs(),
                    (end.y - center.y).abs(),
                ))
            }
            ShapeKind::Text => Shape::Text(Text::new(
                Rectangle::new(start, end),
                style.content.clone(),
                style.font,
            )?),
        };
        Ok(shape)
    }

    /// Build and validate the shape for a finished drag
    pub fn from_drag(
        kind: ShapeKind,
        start: Point,
        end: Point,
        style: &TextStyle,
        tolerance: i32,
    ) -> Result<Shape, ShapeError> {
        let shape = preview(kind, start, end, style)?;
        shape.validate(tolerance)?;
        Ok(shape)
    }

    pub fn create_segment(left: Point, right: Point) -> Shape {
        Shape::Segment(Segment::new(left, right))
    }

    pub fn create_rectangle(lower_left: Point, upper_right: Point) -> Shape {
        Shape::Rectangle(Rectangle::new(lower_left, upper_right))
    }

    pub fn create_circle(center: Point, radius: i32) -> Shape {
        Shape::Circle(Circle::new(center, radius))
    }

    pub fn create_ellipse(center: Point, major: i32, minor: i32) -> Shape {
        Shape::Ellipse(Ellipse::new(center, major, minor))
    }

    pub fn create_text(
        lower_left: Point,
        upper_right: Point,
        content: impl Into<String>,
        font: FontSpec,
    ) -> Result<Shape, ShapeError> {
        Ok(Shape::Text(Text::new(
            Rectangle::new(lower_left, upper_right),
            content,
            font,
        )?))
    }
}
