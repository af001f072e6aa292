use egui::Color32;
use log::{debug, info, warn};

use crate::element::{Element, Point, ShapeKind, factory};
use crate::input::PointerEvent;
use crate::layout::Region;
use crate::renderer::redraw_all;
use crate::state::NextMode;
use crate::tools::{ModeContext, Step, Tool};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawShapeState {
    /// Waiting for a left press on the canvas
    Waiting,
    /// Following the pointer from `start` after the press
    Tracking { start: Point, current: Point },
}

/// Draws one shape of a fixed kind per press-drag-release
#[derive(Debug, Clone)]
pub struct DrawShapeTool {
    kind: ShapeKind,
    state: DrawShapeState,
}

impl DrawShapeTool {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            state: DrawShapeState::Waiting,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn state(&self) -> DrawShapeState {
        self.state
    }

    fn paint_preview(&self, ctx: &mut ModeContext<'_>, start: Point, end: Point) {
        let color: Color32 = ctx.config.colors.shape.into();
        redraw_all(ctx.scene, ctx.canvas, color);
        match factory::preview(self.kind, start, end, &ctx.config.text) {
            Ok(shape) => shape.draw(ctx.canvas, color),
            Err(err) => debug!("No preview for {}: {}", self.kind, err),
        }
    }

    fn finish(&mut self, start: Point, end: Point, ctx: &mut ModeContext<'_>) {
        match factory::from_drag(self.kind, start, end, &ctx.config.text, ctx.config.tolerance) {
            Ok(shape) => match ctx.scene.insert(shape) {
                Ok(node) => info!("Created {} {:?} from {} to {}", self.kind, node, start, end),
                Err(err) => warn!("Failed to store {}: {}", self.kind, err),
            },
            Err(err) => debug!("Discarded drag: {}", err),
        }
        self.state = DrawShapeState::Waiting;
        redraw_all(ctx.scene, ctx.canvas, ctx.config.colors.shape.into());
    }
}

impl Tool for DrawShapeTool {
    fn name(&self) -> &'static str {
        "DrawShape"
    }

    fn activate(&mut self, _ctx: &mut ModeContext<'_>) {
        self.state = DrawShapeState::Waiting;
        debug!("Drawing {} shapes", self.kind);
    }

    fn deactivate(&mut self, _ctx: &mut ModeContext<'_>) {
        self.state = DrawShapeState::Waiting;
    }

    fn on_pointer_down(&mut self, event: &PointerEvent, ctx: &mut ModeContext<'_>) -> Step {
        if !event.is_left() || self.state != DrawShapeState::Waiting {
            return Step::Continue;
        }

        let position = event.position;
        match ctx.layout.classify_region(position.x) {
            Region::Menu => match ctx.layout.resolve_menu_button(position.x, position.y) {
                Some(button) => {
                    let next = NextMode::from_button(button);
                    // Pressing the active drawing button again turns drawing off
                    if next == NextMode::Drawing(self.kind) {
                        Step::Exit(NextMode::Selection)
                    } else {
                        Step::Exit(next)
                    }
                }
                None => Step::Continue,
            },
            Region::Canvas => {
                let start = ctx.layout.map_pointer_to_canvas(position);
                self.state = DrawShapeState::Tracking {
                    start,
                    current: start,
                };
                self.paint_preview(ctx, start, start);
                Step::Continue
            }
        }
    }

    fn on_pointer_move(&mut self, event: &PointerEvent, ctx: &mut ModeContext<'_>) -> Step {
        if let DrawShapeState::Tracking { start, .. } = self.state {
            let current = ctx.layout.map_pointer_to_canvas(event.position);
            self.state = DrawShapeState::Tracking { start, current };
            self.paint_preview(ctx, start, current);
        }
        Step::Continue
    }

    fn on_pointer_up(&mut self, event: &PointerEvent, ctx: &mut ModeContext<'_>) -> Step {
        let DrawShapeState::Tracking { start, .. } = self.state else {
            return Step::Continue;
        };
        if !event.is_left() {
            return Step::Continue;
        }

        let end = ctx.layout.map_pointer_to_canvas(event.position);
        self.finish(start, end, ctx);
        Step::Exit(NextMode::Drawing(self.kind))
    }

    fn current_state_name(&self) -> &'static str {
        match self.state {
            DrawShapeState::Waiting => "Waiting",
            DrawShapeState::Tracking { .. } => "Tracking",
        }
    }
}
