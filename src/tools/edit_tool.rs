use log::{debug, info, warn};

use crate::element::{Element, Point, Shape};
use crate::geometry::{node_contains, shape_at};
use crate::input::PointerEvent;
use crate::layout::{ButtonId, Region};
use crate::renderer::{ButtonState, redraw_all};
use crate::scene::NodeId;
use crate::state::NextMode;
use crate::tools::{ModeContext, Step, Tool};
use crate::widgets::{AssistHandles, ResizeAnchor};

const DELETE_LABEL: &str = "DELETE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    /// Handles shown, waiting for a press
    Hovering,
    /// Dragging a handle; `preview` is the shape as it would be committed
    Resizing {
        anchor: ResizeAnchor,
        original: Shape,
        preview: Shape,
    },
    /// Dragging the whole shape; `cursor` is the last canvas pointer position
    Moving {
        cursor: Point,
        preview: Shape,
    },
}

/// Edits one scene node: resize by handle, move by body, promote, delete
#[derive(Debug, Clone)]
pub struct EditTool {
    node: NodeId,
    handles: Option<AssistHandles>,
    state: EditState,
    /// Click that selected the node, consumed by the first move or press
    entry_cursor: Option<Point>,
}

impl EditTool {
    pub fn new(node: NodeId, entry_cursor: Option<Point>) -> Self {
        Self {
            node,
            handles: None,
            state: EditState::Hovering,
            entry_cursor,
        }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn handles(&self) -> Option<&AssistHandles> {
        self.handles.as_ref()
    }

    fn refresh_handles(&mut self, ctx: &ModeContext<'_>) {
        self.handles = ctx.scene.get(self.node).map(AssistHandles::compute);
    }

    /// Scene in the shape color, the edited node highlighted, then either the
    /// drag preview or the assist handles on top
    fn repaint(&self, ctx: &mut ModeContext<'_>) {
        let colors = &ctx.config.colors;
        redraw_all(ctx.scene, ctx.canvas, colors.shape.into());
        if let Some(shape) = ctx.scene.get(self.node) {
            shape.draw(ctx.canvas, colors.edit.into());
        }
        match &self.state {
            EditState::Hovering => {
                if let Some(handles) = &self.handles {
                    handles.draw(ctx.canvas, ctx.config.assist_radius, colors.assist.into());
                }
            }
            EditState::Resizing { preview, .. } | EditState::Moving { preview, .. } => {
                preview.draw(ctx.canvas, colors.shape.into());
            }
        }
    }

    fn back_to_hovering(&mut self, ctx: &mut ModeContext<'_>) {
        self.state = EditState::Hovering;
        self.refresh_handles(ctx);
        self.repaint(ctx);
    }

    fn start_move(&mut self, cursor: Point, ctx: &ModeContext<'_>) -> bool {
        match ctx.scene.get(self.node) {
            Some(shape) => {
                self.state = EditState::Moving {
                    cursor,
                    preview: shape.clone(),
                };
                true
            }
            None => false,
        }
    }

    fn press_in_menu(&mut self, event: &PointerEvent, ctx: &mut ModeContext<'_>) -> Step {
        let position = event.position;
        match ctx.layout.resolve_menu_button(position.x, position.y) {
            Some(ButtonId::Clear) => {
                match ctx.scene.remove(self.node) {
                    Ok(shape) => info!("Deleted {} {:?}", shape.kind(), self.node),
                    Err(err) => warn!("Failed to delete {:?}: {}", self.node, err),
                }
                Step::Exit(NextMode::Selection)
            }
            Some(button) => Step::Exit(NextMode::from_button(button)),
            None => Step::Continue,
        }
    }

    fn press_in_canvas(&mut self, event: &PointerEvent, ctx: &mut ModeContext<'_>) -> Step {
        let cursor = ctx.layout.map_pointer_to_canvas(event.position);
        let tolerance = ctx.config.tolerance;

        if event.is_right() {
            if node_contains(ctx.scene, self.node, cursor, tolerance) {
                if let Err(err) = ctx.scene.promote(self.node) {
                    warn!("Failed to promote {:?}: {}", self.node, err);
                }
                return Step::Exit(NextMode::Selection);
            }
            return Step::Continue;
        }
        if !event.is_left() {
            return Step::Continue;
        }

        let handle = self
            .handles
            .as_ref()
            .and_then(|handles| handles.hit_test(cursor, tolerance));
        if let Some(handle) = handle {
            let Some(shape) = ctx.scene.get(self.node) else {
                return Step::Exit(NextMode::Selection);
            };
            if let Some(anchor) = ResizeAnchor::for_handle(shape, handle) {
                debug!("Resizing {:?} from handle {}", self.node, handle.index());
                let original = shape.clone();
                self.state = EditState::Resizing {
                    anchor,
                    preview: anchor.apply(&original, cursor),
                    original,
                };
                self.repaint(ctx);
                return Step::Continue;
            }
        }

        if node_contains(ctx.scene, self.node, cursor, tolerance) {
            if self.start_move(cursor, ctx) {
                self.repaint(ctx);
            }
            return Step::Continue;
        }

        match shape_at(ctx.scene, cursor, tolerance) {
            Some(next) => {
                debug!("Switching edit from {:?} to {:?}", self.node, next);
                self.node = next;
                self.back_to_hovering(ctx);
                Step::Continue
            }
            None => Step::Exit(NextMode::Selection),
        }
    }

    fn track_resize(&mut self, event: &PointerEvent, ctx: &mut ModeContext<'_>) -> Step {
        let EditState::Resizing {
            anchor, original, ..
        } = &self.state
        else {
            return Step::Continue;
        };

        let cursor = ctx.layout.map_pointer_to_canvas(event.position);
        let resized = anchor.apply(original, cursor);

        if event.is_up() && event.is_left() {
            match resized.validate(ctx.config.tolerance) {
                Ok(()) => match ctx.scene.replace(self.node, resized) {
                    Ok(()) => info!("Resized {:?}", self.node),
                    Err(err) => {
                        warn!("Failed to resize {:?}: {}", self.node, err);
                        return Step::Exit(NextMode::Selection);
                    }
                },
                Err(err) => debug!("Reverted resize of {:?}: {}", self.node, err),
            }
            self.back_to_hovering(ctx);
            return Step::Continue;
        }

        if let EditState::Resizing { preview, .. } = &mut self.state {
            *preview = resized;
        }
        self.repaint(ctx);
        Step::Continue
    }

    fn track_move(&mut self, event: &PointerEvent, ctx: &mut ModeContext<'_>) -> Step {
        if ctx.layout.classify_region(event.position.x) == Region::Menu {
            debug!("Move of {:?} aborted in menu", self.node);
            self.back_to_hovering(ctx);
            return Step::Continue;
        }

        let EditState::Moving { cursor, preview } = &mut self.state else {
            return Step::Continue;
        };
        let next = ctx.layout.map_pointer_to_canvas(event.position);
        *preview = preview.translated(next.x - cursor.x, next.y - cursor.y);
        *cursor = next;

        if event.is_up() {
            let moved = preview.clone();
            if let Err(err) = ctx.scene.replace(self.node, moved) {
                warn!("Failed to move {:?}: {}", self.node, err);
                return Step::Exit(NextMode::Selection);
            }
            info!("Moved {:?}", self.node);
            self.back_to_hovering(ctx);
            return Step::Continue;
        }

        self.repaint(ctx);
        Step::Continue
    }

    /// Translate the node by the delta from `from` to the hovering pointer and commit it
    fn hover_move(&mut self, from: Point, event: &PointerEvent, ctx: &mut ModeContext<'_>) -> Step {
        if ctx.layout.classify_region(event.position.x) == Region::Menu {
            return Step::Continue;
        }
        let Some(shape) = ctx.scene.get(self.node) else {
            return Step::Exit(NextMode::Selection);
        };
        let to = ctx.layout.map_pointer_to_canvas(event.position);
        let moved = shape.translated(to.x - from.x, to.y - from.y);
        if let Err(err) = ctx.scene.replace(self.node, moved) {
            warn!("Failed to move {:?}: {}", self.node, err);
            return Step::Exit(NextMode::Selection);
        }
        info!("Moved {:?} by hover from {} to {}", self.node, from, to);
        self.back_to_hovering(ctx);
        Step::Continue
    }

    fn handle(&mut self, event: &PointerEvent, ctx: &mut ModeContext<'_>) -> Step {
        if !ctx.scene.contains(self.node) {
            return Step::Exit(NextMode::Selection);
        }

        // The selecting click stays pending until the next press
        if event.is_down() {
            self.entry_cursor = None;
        }
        if event.is_move() && self.state == EditState::Hovering {
            if let Some(entry) = self.entry_cursor.take() {
                if event.button.is_none() {
                    return self.hover_move(entry, event, ctx);
                }
                if self.start_move(entry, ctx) {
                    return self.track_move(event, ctx);
                }
            }
        }

        match self.state {
            EditState::Resizing { .. } => self.track_resize(event, ctx),
            EditState::Moving { .. } => self.track_move(event, ctx),
            EditState::Hovering => {
                if !event.is_down() {
                    return Step::Continue;
                }
                match ctx.layout.classify_region(event.position.x) {
                    Region::Menu => self.press_in_menu(event, ctx),
                    Region::Canvas => self.press_in_canvas(event, ctx),
                }
            }
        }
    }
}

impl Tool for EditTool {
    fn name(&self) -> &'static str {
        "Edit"
    }

    fn activate(&mut self, ctx: &mut ModeContext<'_>) {
        ctx.canvas.set_button_label(ButtonId::Clear, DELETE_LABEL);
        ctx.canvas.set_button_state(ButtonId::Clear, ButtonState::Inactive);
        self.state = EditState::Hovering;
        self.refresh_handles(ctx);
        self.repaint(ctx);
        debug!("Editing {:?}", self.node);
    }

    fn deactivate(&mut self, ctx: &mut ModeContext<'_>) {
        ctx.canvas
            .set_button_label(ButtonId::Clear, ButtonId::Clear.default_label());
        ctx.canvas.set_button_state(ButtonId::Clear, ButtonState::Inactive);
        self.state = EditState::Hovering;
        self.handles = None;
    }

    fn on_pointer_down(&mut self, event: &PointerEvent, ctx: &mut ModeContext<'_>) -> Step {
        self.handle(event, ctx)
    }

    fn on_pointer_move(&mut self, event: &PointerEvent, ctx: &mut ModeContext<'_>) -> Step {
        self.handle(event, ctx)
    }

    fn on_pointer_up(&mut self, event: &PointerEvent, ctx: &mut ModeContext<'_>) -> Step {
        self.handle(event, ctx)
    }

    fn current_state_name(&self) -> &'static str {
        match self.state {
            EditState::Hovering => "Hovering",
            EditState::Resizing { .. } => "Resizing",
            EditState::Moving { .. } => "Moving",
        }
    }
}
