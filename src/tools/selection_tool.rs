use log::debug;

use crate::geometry::shape_at;
use crate::input::PointerEvent;
use crate::layout::Region;
use crate::state::NextMode;
use crate::tools::{ModeContext, Step, Tool};

/// Idle mode: a left click picks a shape to edit or a menu button
#[derive(Debug, Clone, Default)]
pub struct SelectionTool;

impl SelectionTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for SelectionTool {
    fn name(&self) -> &'static str {
        "Selection"
    }

    fn on_pointer_down(&mut self, event: &PointerEvent, ctx: &mut ModeContext<'_>) -> Step {
        if !event.is_left() {
            return Step::Continue;
        }

        let position = event.position;
        match ctx.layout.classify_region(position.x) {
            Region::Menu => match ctx.layout.resolve_menu_button(position.x, position.y) {
                Some(button) => Step::Exit(NextMode::from_button(button)),
                None => Step::Continue,
            },
            Region::Canvas => {
                let cursor = ctx.layout.map_pointer_to_canvas(position);
                match shape_at(ctx.scene, cursor, ctx.config.tolerance) {
                    Some(node) => {
                        debug!("Selected {:?} at {}", node, cursor);
                        Step::Edit { node, cursor }
                    }
                    None => Step::Continue,
                }
            }
        }
    }

    fn on_pointer_move(&mut self, _event: &PointerEvent, _ctx: &mut ModeContext<'_>) -> Step {
        Step::Continue
    }

    fn on_pointer_up(&mut self, _event: &PointerEvent, _ctx: &mut ModeContext<'_>) -> Step {
        Step::Continue
    }

    fn current_state_name(&self) -> &'static str {
        "Idle"
    }
}
