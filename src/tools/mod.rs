use crate::config::EditorConfig;
use crate::element::Point;
use crate::input::{PointerEvent, Transition};
use crate::layout::Layout;
use crate::renderer::Canvas;
use crate::scene::{NodeId, Scene};
use crate::state::NextMode;

/// Outcome of feeding one pointer event to a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Keep feeding events to the same tool
    Continue,
    /// Start editing `node`; `cursor` is the canvas point that picked it
    Edit { node: NodeId, cursor: Point },
    /// Leave the current mode
    Exit(NextMode),
}

/// Everything a tool may read or change while handling an event
pub struct ModeContext<'a> {
    pub scene: &'a mut Scene,
    pub canvas: &'a mut dyn Canvas,
    pub layout: &'a Layout,
    pub config: &'a EditorConfig,
}

/// Tool trait implemented by every interaction mode
pub trait Tool {
    fn name(&self) -> &'static str;

    /// Called when the tool becomes current
    fn activate(&mut self, _ctx: &mut ModeContext<'_>) {}

    /// Called when the tool stops being current
    fn deactivate(&mut self, _ctx: &mut ModeContext<'_>) {}

    fn on_pointer_down(&mut self, event: &PointerEvent, ctx: &mut ModeContext<'_>) -> Step;

    fn on_pointer_move(&mut self, event: &PointerEvent, ctx: &mut ModeContext<'_>) -> Step;

    fn on_pointer_up(&mut self, event: &PointerEvent, ctx: &mut ModeContext<'_>) -> Step;

    fn current_state_name(&self) -> &'static str;
}

mod draw_shape_tool;
mod edit_tool;
mod selection_tool;

pub use draw_shape_tool::{DrawShapeState, DrawShapeTool};
pub use edit_tool::{EditState, EditTool};
pub use selection_tool::SelectionTool;

/// Enum over all tools, so the context can own the current one by value
#[derive(Debug, Clone)]
pub enum ToolType {
    Selection(SelectionTool),
    DrawShape(DrawShapeTool),
    Edit(EditTool),
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Selection(tool) => tool.name(),
            Self::DrawShape(tool) => tool.name(),
            Self::Edit(tool) => tool.name(),
        }
    }

    fn activate(&mut self, ctx: &mut ModeContext<'_>) {
        match self {
            Self::Selection(tool) => tool.activate(ctx),
            Self::DrawShape(tool) => tool.activate(ctx),
            Self::Edit(tool) => tool.activate(ctx),
        }
    }

    fn deactivate(&mut self, ctx: &mut ModeContext<'_>) {
        match self {
            Self::Selection(tool) => tool.deactivate(ctx),
            Self::DrawShape(tool) => tool.deactivate(ctx),
            Self::Edit(tool) => tool.deactivate(ctx),
        }
    }

    fn on_pointer_down(&mut self, event: &PointerEvent, ctx: &mut ModeContext<'_>) -> Step {
        match self {
            Self::Selection(tool) => tool.on_pointer_down(event, ctx),
            Self::DrawShape(tool) => tool.on_pointer_down(event, ctx),
            Self::Edit(tool) => tool.on_pointer_down(event, ctx),
        }
    }

    fn on_pointer_move(&mut self, event: &PointerEvent, ctx: &mut ModeContext<'_>) -> Step {
        match self {
            Self::Selection(tool) => tool.on_pointer_move(event, ctx),
            Self::DrawShape(tool) => tool.on_pointer_move(event, ctx),
            Self::Edit(tool) => tool.on_pointer_move(event, ctx),
        }
    }

    fn on_pointer_up(&mut self, event: &PointerEvent, ctx: &mut ModeContext<'_>) -> Step {
        match self {
            Self::Selection(tool) => tool.on_pointer_up(event, ctx),
            Self::DrawShape(tool) => tool.on_pointer_up(event, ctx),
            Self::Edit(tool) => tool.on_pointer_up(event, ctx),
        }
    }

    fn current_state_name(&self) -> &'static str {
        match self {
            Self::Selection(tool) => tool.current_state_name(),
            Self::DrawShape(tool) => tool.current_state_name(),
            Self::Edit(tool) => tool.current_state_name(),
        }
    }
}

impl ToolType {
    /// Route an event to the handler for its transition
    pub fn handle_event(&mut self, event: &PointerEvent, ctx: &mut ModeContext<'_>) -> Step {
        match event.transition {
            Transition::Down => self.on_pointer_down(event, ctx),
            Transition::Move => self.on_pointer_move(event, ctx),
            Transition::Up => self.on_pointer_up(event, ctx),
        }
    }

    pub fn as_edit_tool(&self) -> Option<&EditTool> {
        match self {
            Self::Edit(tool) => Some(tool),
            _ => None,
        }
    }
}
