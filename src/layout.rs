//! Screen layout: a menu strip on the left holding the mode buttons, and the
//! drawing canvas filling the rest of the screen.

use std::fmt;

use crate::element::Point;
use crate::error::LayoutError;

pub const SCREEN_MIN_WIDTH: i32 = 640;
pub const SCREEN_MIN_HEIGHT: i32 = 480;
pub const MENU_MIN_WIDTH: i32 = 240;
pub const MENU_MAX_WIDTH: i32 = 360;

pub const BUTTON_COUNT: usize = 7;
pub const LOGO_TEXT: &str = "CADET";

/// Which part of the screen a pointer position falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Menu,
    Canvas,
}

/// Menu buttons, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    Segment,
    Rectangle,
    Circle,
    Ellipse,
    Text,
    Clear,
    Exit,
}

impl ButtonId {
    pub const ALL: [ButtonId; BUTTON_COUNT] = [
        ButtonId::Segment,
        ButtonId::Rectangle,
        ButtonId::Circle,
        ButtonId::Ellipse,
        ButtonId::Text,
        ButtonId::Clear,
        ButtonId::Exit,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn default_label(self) -> &'static str {
        match self {
            ButtonId::Segment => "SEGMENT",
            ButtonId::Rectangle => "RECTANGLE",
            ButtonId::Circle => "CIRCLE",
            ButtonId::Ellipse => "ELLIPSE",
            ButtonId::Text => "TEXT",
            ButtonId::Clear => "CLEAR",
            ButtonId::Exit => "EXIT",
        }
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ButtonRect {
    min: Point,
    width: i32,
    height: i32,
}

/// Menu and button geometry derived from the screen size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    screen_width: i32,
    screen_height: i32,
    menu_width: i32,
    padding_width: i32,
    padding_height: i32,
    buttons: [ButtonRect; BUTTON_COUNT],
}

impl Layout {
    pub fn new(screen_width: i32, screen_height: i32) -> Result<Self, LayoutError> {
        if screen_width < SCREEN_MIN_WIDTH || screen_height < SCREEN_MIN_HEIGHT {
            return Err(LayoutError::ScreenTooSmall {
                width: screen_width,
                height: screen_height,
                min_width: SCREEN_MIN_WIDTH,
                min_height: SCREEN_MIN_HEIGHT,
            });
        }
        Ok(Self::compute(screen_width, screen_height))
    }

    /// Layout for the smallest supported screen
    pub fn minimum() -> Self {
        Self::compute(SCREEN_MIN_WIDTH, SCREEN_MIN_HEIGHT)
    }

    fn compute(screen_width: i32, screen_height: i32) -> Self {
        let mut menu_width = (screen_width / 4).clamp(MENU_MIN_WIDTH, MENU_MAX_WIDTH);
        if menu_width % 2 != 0 {
            if screen_width % 4 != 0 {
                menu_width += 1;
            } else {
                menu_width -= 1;
            }
        }

        let padding_width = menu_width / 10;
        let padding_height = screen_height / 50;
        let width = round_up_even(menu_width - 2 * padding_width);
        let height = round_up_even(screen_height / 10 - 2 * padding_height);

        let buttons = std::array::from_fn(|i| ButtonRect {
            min: Point::new(padding_width, screen_height * (i as i32 + 2) / 10 + padding_height),
            width,
            height,
        });

        Self {
            screen_width,
            screen_height,
            menu_width,
            padding_width,
            padding_height,
            buttons,
        }
    }

    pub fn screen_width(&self) -> i32 {
        self.screen_width
    }

    pub fn screen_height(&self) -> i32 {
        self.screen_height
    }

    pub fn menu_width(&self) -> i32 {
        self.menu_width
    }

    /// Screen x of the first canvas column
    pub fn canvas_origin(&self) -> Point {
        Point::new(self.menu_width + 1, 0)
    }

    pub fn canvas_width(&self) -> i32 {
        self.screen_width - self.menu_width
    }

    pub fn logo_position(&self) -> Point {
        Point::new(self.padding_width, self.screen_height / 10)
    }

    pub fn classify_region(&self, x: i32) -> Region {
        if x <= self.menu_width {
            Region::Menu
        } else {
            Region::Canvas
        }
    }

    /// Button under a screen position, edges inclusive
    pub fn resolve_menu_button(&self, x: i32, y: i32) -> Option<ButtonId> {
        ButtonId::ALL.into_iter().find(|id| {
            let rect = &self.buttons[id.index()];
            x >= rect.min.x
                && x <= rect.min.x + rect.width
                && y >= rect.min.y
                && y <= rect.min.y + rect.height
        })
    }

    /// Screen bounds of a button as (min, max)
    pub fn button_rect(&self, id: ButtonId) -> (Point, Point) {
        let rect = &self.buttons[id.index()];
        (rect.min, rect.min.translated(rect.width, rect.height))
    }

    pub fn map_pointer_to_canvas(&self, raw: Point) -> Point {
        let origin = self.canvas_origin();
        raw.translated(-origin.x, -origin.y)
    }

    pub fn padding(&self) -> (i32, i32) {
        (self.padding_width, self.padding_height)
    }
}

fn round_up_even(value: i32) -> i32 {
    if value % 2 != 0 { value + 1 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_small_screens() {
        assert_eq!(
            Layout::new(639, 800),
            Err(LayoutError::ScreenTooSmall {
                width: 639,
                height: 800,
                min_width: SCREEN_MIN_WIDTH,
                min_height: SCREEN_MIN_HEIGHT,
            })
        );
        assert!(Layout::new(640, 479).is_err());
        assert!(Layout::new(640, 480).is_ok());
    }

    #[test]
    fn test_menu_width_clamped_and_even() {
        assert_eq!(Layout::minimum().menu_width(), MENU_MIN_WIDTH);
        assert_eq!(Layout::new(2000, 1000).unwrap().menu_width(), MENU_MAX_WIDTH);
        // 1284 / 4 = 321, and 1284 is a multiple of four
        assert_eq!(Layout::new(1284, 800).unwrap().menu_width(), 320);
        // 1286 / 4 = 321, and 1286 is not
        assert_eq!(Layout::new(1286, 800).unwrap().menu_width(), 322);
    }

    #[test]
    fn test_regions_split_at_menu_edge() {
        let layout = Layout::new(1280, 800).unwrap();
        assert_eq!(layout.menu_width(), 320);
        assert_eq!(layout.classify_region(320), Region::Menu);
        assert_eq!(layout.classify_region(321), Region::Canvas);
        assert_eq!(layout.map_pointer_to_canvas(Point::new(321, 40)), Point::new(0, 40));
    }

    #[test]
    fn test_button_geometry() {
        let layout = Layout::new(1280, 800).unwrap();
        assert_eq!(layout.padding(), (32, 16));
        // Height 80 - 32 = 48, width 320 - 64 = 256
        assert_eq!(
            layout.button_rect(ButtonId::Segment),
            (Point::new(32, 176), Point::new(288, 224))
        );
        assert_eq!(layout.button_rect(ButtonId::Exit).0, Point::new(32, 656));
    }

    #[test]
    fn test_resolve_menu_button_inclusive() {
        let layout = Layout::new(1280, 800).unwrap();
        assert_eq!(layout.resolve_menu_button(32, 176), Some(ButtonId::Segment));
        assert_eq!(layout.resolve_menu_button(288, 224), Some(ButtonId::Segment));
        assert_eq!(layout.resolve_menu_button(31, 176), None);
        assert_eq!(layout.resolve_menu_button(100, 250), None);
        assert_eq!(layout.resolve_menu_button(100, 500), Some(ButtonId::Text));
        assert_eq!(layout.resolve_menu_button(100, 600), Some(ButtonId::Clear));
    }
}
