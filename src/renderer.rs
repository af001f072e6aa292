use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};

use crate::config::EditorConfig;
use crate::element::{Element, FontSpec, Point};
use crate::layout::{ButtonId, LOGO_TEXT, Layout};
use crate::scene::Scene;

const OUTLINE_WIDTH: f32 = 1.0;
const ELLIPSE_SEGMENTS: usize = 72;

/// A single-color drawing primitive in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Segment(Point, Point),
    /// Outline spanning two arbitrary corners
    Rectangle(Point, Point),
    Circle { center: Point, radius: i32 },
    Ellipse { center: Point, major: i32, minor: i32 },
    /// Filled circle, used for assist handles
    Disc { center: Point, radius: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    Active,
    #[default]
    Inactive,
}

/// Output surface the editor draws through.
///
/// Drawing is immediate: each call adds to whatever the canvas already shows
/// until [`Canvas::clear_canvas`] wipes it.
pub trait Canvas {
    fn draw_primitive(&mut self, primitive: Primitive, color: Color32);

    fn paint_text(
        &mut self,
        start: Point,
        end: Point,
        text: &str,
        font: FontSpec,
        text_color: Color32,
        fill_color: Color32,
    );

    fn clear_canvas(&mut self);

    fn set_button_state(&mut self, button: ButtonId, state: ButtonState);

    fn set_button_label(&mut self, button: ButtonId, label: &str);
}

/// Wipe the canvas and draw every node in storage order
pub fn redraw_all(scene: &Scene, canvas: &mut dyn Canvas, color: Color32) {
    canvas.clear_canvas();
    for (_, shape) in scene.iter() {
        shape.draw(canvas, color);
    }
}

/// One recorded canvas command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Primitive {
        primitive: Primitive,
        color: Color32,
    },
    Text {
        start: Point,
        end: Point,
        text: String,
        font: FontSpec,
        text_color: Color32,
        fill_color: Color32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonVisual {
    pub label: String,
    pub state: ButtonState,
}

/// Retained canvas: records draw commands and button visuals so the egui
/// frontend can replay them every frame.
#[derive(Debug, Clone)]
pub struct Renderer {
    ops: Vec<DrawOp>,
    buttons: Vec<ButtonVisual>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            buttons: ButtonId::ALL
                .iter()
                .map(|id| ButtonVisual {
                    label: id.default_label().to_owned(),
                    state: ButtonState::Inactive,
                })
                .collect(),
        }
    }

    /// Commands recorded since the last clear
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn button(&self, id: ButtonId) -> &ButtonVisual {
        &self.buttons[id.index()]
    }

    /// Replay the display list onto `painter`; `origin` is the screen position of canvas (0, 0)
    pub fn paint_canvas(&self, painter: &Painter, origin: Pos2) {
        let offset = origin.to_vec2();
        let at = |point: Point| point.to_pos2() + offset;

        for op in &self.ops {
            match op {
                DrawOp::Primitive { primitive, color } => {
                    let stroke = Stroke::new(OUTLINE_WIDTH, *color);
                    match *primitive {
                        Primitive::Segment(a, b) => {
                            painter.line_segment([at(a), at(b)], stroke);
                        }
                        Primitive::Rectangle(a, b) => {
                            painter.rect_stroke(Rect::from_two_pos(at(a), at(b)), 0.0, stroke);
                        }
                        Primitive::Circle { center, radius } => {
                            painter.circle_stroke(at(center), radius as f32, stroke);
                        }
                        Primitive::Ellipse { center, major, minor } => {
                            painter.add(egui::Shape::closed_line(
                                ellipse_outline(at(center), major as f32, minor as f32),
                                stroke,
                            ));
                        }
                        Primitive::Disc { center, radius } => {
                            painter.circle_filled(at(center), radius as f32, *color);
                        }
                    }
                }
                DrawOp::Text {
                    start,
                    end,
                    text,
                    font,
                    text_color,
                    fill_color,
                } => {
                    let rect = Rect::from_two_pos(at(*start), at(*end));
                    if *fill_color != Color32::TRANSPARENT {
                        painter.rect_filled(rect, 0.0, *fill_color);
                    }
                    painter.text(
                        rect.left_top(),
                        Align2::LEFT_TOP,
                        text,
                        FontId::monospace(font.height as f32),
                        *text_color,
                    );
                }
            }
        }
    }

    /// Paint the menu background and buttons at their layout positions
    pub fn paint_menu(&self, painter: &Painter, layout: &Layout, config: &EditorConfig) {
        let menu = Rect::from_min_size(
            Pos2::ZERO,
            Vec2::new(layout.menu_width() as f32, layout.screen_height() as f32),
        );
        painter.rect_filled(menu, 0.0, config.colors.menu_background);
        painter.text(
            layout.logo_position().to_pos2(),
            Align2::LEFT_TOP,
            LOGO_TEXT,
            FontId::proportional(config.button_font_size * 2.0),
            config.colors.button_inactive_fg.into(),
        );

        for id in ButtonId::ALL {
            let visual = self.button(id);
            let (min, max) = layout.button_rect(id);
            let rect = Rect::from_min_max(min.to_pos2(), max.to_pos2());
            let (fill, fg) = match visual.state {
                ButtonState::Active => (config.colors.button_active_fill, config.colors.button_active_fg),
                ButtonState::Inactive => (config.colors.button_inactive_fill, config.colors.button_inactive_fg),
            };
            painter.rect_filled(rect, 0.0, fill);
            painter.rect_stroke(rect, 0.0, Stroke::new(OUTLINE_WIDTH, fg));
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                &visual.label,
                FontId::proportional(config.button_font_size),
                fg.into(),
            );
        }
    }
}

impl Canvas for Renderer {
    fn draw_primitive(&mut self, primitive: Primitive, color: Color32) {
        self.ops.push(DrawOp::Primitive { primitive, color });
    }

    fn paint_text(
        &mut self,
        start: Point,
        end: Point,
        text: &str,
        font: FontSpec,
        text_color: Color32,
        fill_color: Color32,
    ) {
        self.ops.push(DrawOp::Text {
            start,
            end,
            text: text.to_owned(),
            font,
            text_color,
            fill_color,
        });
    }

    fn clear_canvas(&mut self) {
        self.ops.clear();
    }

    fn set_button_state(&mut self, button: ButtonId, state: ButtonState) {
        self.buttons[button.index()].state = state;
    }

    fn set_button_label(&mut self, button: ButtonId, label: &str) {
        label.clone_into(&mut self.buttons[button.index()].label);
    }
}

fn ellipse_outline(center: Pos2, major: f32, minor: f32) -> Vec<Pos2> {
    (0..ELLIPSE_SEGMENTS)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / ELLIPSE_SEGMENTS as f32;
            Pos2::new(center.x + major * angle.cos(), center.y + minor * angle.sin())
        })
        .collect()
}
