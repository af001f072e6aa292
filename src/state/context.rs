//! The editor engine.
//!
//! `EditorContext` owns the scene, the layout and the configuration, and
//! runs one tool at a time. It can be driven two ways:
//! - blocking, with [`EditorContext::run`] or one of the `run_*_mode`
//!   functions pulling events from a [`PointerSource`] until the mode ends;
//! - one event at a time with [`EditorContext::handle_event`], which is what
//!   the egui frontend does every frame.
//!
//! Both paths share the same tools, so ordering and cancellation behave the
//! same either way.

use log::{debug, info, warn};

use super::{EditorState, NextMode};
use crate::config::EditorConfig;
use crate::element::{Point, ShapeKind};
use crate::input::{PointerEvent, PointerSource};
use crate::layout::Layout;
use crate::renderer::{ButtonState, Canvas, redraw_all};
use crate::scene::{NodeId, Scene};
use crate::tools::{DrawShapeTool, EditTool, ModeContext, SelectionTool, Step, Tool, ToolType};

#[derive(Debug)]
pub struct EditorContext {
    scene: Scene,
    layout: Layout,
    config: EditorConfig,
    state: EditorState,
    tool: ToolType,
}

impl EditorContext {
    /// A new editor in selection mode with an empty scene
    pub fn new(layout: Layout, config: EditorConfig) -> Self {
        Self {
            scene: Scene::new(),
            layout,
            config,
            state: EditorState::Selecting,
            tool: ToolType::Selection(SelectionTool::new()),
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn tool(&self) -> &ToolType {
        &self.tool
    }

    /// Replace the layout, e.g. after the window was resized
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    /// Feed one event and apply any resulting mode change
    pub fn handle_event(&mut self, event: PointerEvent, canvas: &mut dyn Canvas) -> EditorState {
        if self.state.is_exited() {
            return self.state;
        }
        let current = self.state.mode();
        if let Some(next) = self.step(event, canvas) {
            self.dispatch(current, next, canvas);
        }
        self.state
    }

    /// Dispatch loop: run modes until EXIT is chosen or the source runs dry
    pub fn run(&mut self, source: &mut dyn PointerSource, canvas: &mut dyn Canvas) {
        let mut current = self.state.mode();
        loop {
            let next = match current {
                NextMode::Selection => self.run_selection_mode(source, canvas),
                NextMode::Drawing(kind) => self.run_drawing_mode(kind, source, canvas),
                NextMode::Clear => {
                    self.clear_scene(canvas);
                    NextMode::Selection
                }
                NextMode::Exit => break,
            };
            Self::update_buttons(current, next, canvas);
            current = next;
        }
        self.state = EditorState::Exited;
        info!("Editor exited with {} shapes", self.scene.len());
    }

    pub fn run_selection_mode(
        &mut self,
        source: &mut dyn PointerSource,
        canvas: &mut dyn Canvas,
    ) -> NextMode {
        self.install(
            ToolType::Selection(SelectionTool::new()),
            EditorState::Selecting,
            canvas,
        );
        self.drive(source, canvas)
    }

    pub fn run_drawing_mode(
        &mut self,
        kind: ShapeKind,
        source: &mut dyn PointerSource,
        canvas: &mut dyn Canvas,
    ) -> NextMode {
        self.install(
            ToolType::DrawShape(DrawShapeTool::new(kind)),
            EditorState::Drawing(kind),
            canvas,
        );
        self.drive(source, canvas)
    }

    pub fn run_editing_mode(
        &mut self,
        node: NodeId,
        source: &mut dyn PointerSource,
        canvas: &mut dyn Canvas,
    ) -> NextMode {
        if !self.scene.contains(node) {
            warn!("Cannot edit {:?}: not in the scene", node);
            return NextMode::Selection;
        }
        self.begin_editing(node, None, canvas);
        self.drive(source, canvas)
    }

    /// Destroy every shape and wipe the canvas
    pub fn clear_scene(&mut self, canvas: &mut dyn Canvas) {
        let count = self.scene.len();
        self.scene.clear();
        canvas.clear_canvas();
        info!("Cleared {} shapes", count);
    }

    /// Release every shape without touching the canvas
    pub fn destroy_scene(&mut self) {
        debug!("Destroying {} shapes", self.scene.len());
        self.scene.clear();
    }

    fn drive(&mut self, source: &mut dyn PointerSource, canvas: &mut dyn Canvas) -> NextMode {
        while let Some(event) = source.next_event() {
            if let Some(next) = self.step(event, canvas) {
                return next;
            }
        }
        debug!("Pointer source closed");
        self.finish_tool(canvas);
        NextMode::Exit
    }

    /// Run one event through the current tool. Returns the next mode when the
    /// tool exits; the tool is already deactivated by then.
    fn step(&mut self, event: PointerEvent, canvas: &mut dyn Canvas) -> Option<NextMode> {
        let step = {
            let mut ctx = ModeContext {
                scene: &mut self.scene,
                canvas: &mut *canvas,
                layout: &self.layout,
                config: &self.config,
            };
            self.tool.handle_event(&event, &mut ctx)
        };

        match step {
            Step::Continue => {
                if let Some(edit) = self.tool.as_edit_tool() {
                    self.state = EditorState::Editing(edit.node());
                }
                None
            }
            Step::Edit { node, cursor } => {
                self.begin_editing(node, Some(cursor), canvas);
                None
            }
            Step::Exit(next) => {
                self.finish_tool(canvas);
                info!("Leaving {} for {:?}", self.state, next);
                Some(next)
            }
        }
    }

    fn dispatch(&mut self, current: NextMode, next: NextMode, canvas: &mut dyn Canvas) {
        Self::update_buttons(current, next, canvas);
        match next {
            NextMode::Selection => self.install(
                ToolType::Selection(SelectionTool::new()),
                EditorState::Selecting,
                canvas,
            ),
            NextMode::Drawing(kind) => self.install(
                ToolType::DrawShape(DrawShapeTool::new(kind)),
                EditorState::Drawing(kind),
                canvas,
            ),
            NextMode::Clear => {
                self.clear_scene(canvas);
                self.dispatch(NextMode::Clear, NextMode::Selection, canvas);
            }
            NextMode::Exit => {
                self.state = EditorState::Exited;
                info!("Editor exited with {} shapes", self.scene.len());
            }
        }
    }

    fn begin_editing(&mut self, node: NodeId, cursor: Option<Point>, canvas: &mut dyn Canvas) {
        self.finish_tool(canvas);
        self.install(
            ToolType::Edit(EditTool::new(node, cursor)),
            EditorState::Editing(node),
            canvas,
        );
    }

    fn install(&mut self, tool: ToolType, state: EditorState, canvas: &mut dyn Canvas) {
        self.tool = tool;
        self.state = state;
        let mut ctx = ModeContext {
            scene: &mut self.scene,
            canvas,
            layout: &self.layout,
            config: &self.config,
        };
        self.tool.activate(&mut ctx);
        debug!("Entered {} ({})", self.state, self.tool.current_state_name());
    }

    /// Deactivate the current tool and repaint the scene in the shape color
    fn finish_tool(&mut self, canvas: &mut dyn Canvas) {
        let mut ctx = ModeContext {
            scene: &mut self.scene,
            canvas: &mut *canvas,
            layout: &self.layout,
            config: &self.config,
        };
        self.tool.deactivate(&mut ctx);
        redraw_all(&self.scene, canvas, self.config.colors.shape.into());
    }

    fn update_buttons(current: NextMode, next: NextMode, canvas: &mut dyn Canvas) {
        if let Some(button) = current.button() {
            canvas.set_button_state(button, ButtonState::Inactive);
        }
        if let Some(button) = next.button() {
            canvas.set_button_state(button, ButtonState::Active);
        }
    }
}
