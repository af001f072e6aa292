use egui::Color32;
use serde::{Deserialize, Serialize};

use super::Element;
use super::rectangle::Rectangle;
use crate::element::common::{Extent, Point, TEXT_MAX_LENGTH};
use crate::element::ShapeKind;
use crate::error::ShapeError;
use crate::renderer::Canvas;

/// Character cell size used to paint a text box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSpec {
    pub width: i32,
    pub height: i32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            width: 8,
            height: 16,
        }
    }
}

/// Content and font given to newly drawn text boxes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub content: String,
    pub font: FontSpec,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            content: "TEXT".to_owned(),
            font: FontSpec::default(),
        }
    }
}

/// Labeled text box; the whole box is the click target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    position: Rectangle,
    content: String,
    font: FontSpec,
}

impl Text {
    pub fn new(position: Rectangle, content: impl Into<String>, font: FontSpec) -> Result<Self, ShapeError> {
        let content = content.into();
        let len = content.chars().count();
        if len > TEXT_MAX_LENGTH {
            return Err(ShapeError::TextTooLong {
                len,
                max: TEXT_MAX_LENGTH,
            });
        }
        Ok(Self {
            position,
            content,
            font,
        })
    }

    pub fn position(&self) -> &Rectangle {
        &self.position
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn font(&self) -> FontSpec {
        self.font
    }

    /// Same content and font in a new box
    pub(crate) fn with_position(&self, position: Rectangle) -> Self {
        Self {
            position,
            content: self.content.clone(),
            font: self.font,
        }
    }
}

impl Element for Text {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Text
    }

    fn extent(&self) -> Extent {
        self.position.extent()
    }

    fn hit_test(&self, pos: Point, _tolerance: i32) -> bool {
        self.extent().contains(pos, 0)
    }

    fn translated(&self, dx: i32, dy: i32) -> Self {
        self.with_position(self.position.translated(dx, dy))
    }

    fn validate(&self, tolerance: i32) -> Result<(), ShapeError> {
        let side = self.position.min_side();
        if side <= tolerance {
            return Err(ShapeError::Degenerate {
                kind: ShapeKind::Text,
                extent: side,
                tolerance,
            });
        }
        Ok(())
    }

    fn draw(&self, canvas: &mut dyn Canvas, color: Color32) {
        canvas.paint_text(
            self.position.lower_left(),
            self.position.upper_right(),
            &self.content,
            self.font,
            color,
            Color32::TRANSPARENT,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_length_limit() {
        let position = Rectangle::new(Point::new(0, 0), Point::new(50, 50));
        let long = "x".repeat(TEXT_MAX_LENGTH + 1);
        assert_eq!(
            Text::new(position.clone(), long, FontSpec::default()),
            Err(ShapeError::TextTooLong {
                len: TEXT_MAX_LENGTH + 1,
                max: TEXT_MAX_LENGTH
            })
        );
        assert!(Text::new(position, "x".repeat(TEXT_MAX_LENGTH), FontSpec::default()).is_ok());
    }

    #[test]
    fn test_box_hit_has_no_margin() {
        let text = Text::new(
            Rectangle::new(Point::new(10, 10), Point::new(60, 40)),
            "label",
            FontSpec::default(),
        )
        .unwrap();
        assert!(text.hit_test(Point::new(10, 40), 10));
        assert!(!text.hit_test(Point::new(9, 40), 10));
    }
}
