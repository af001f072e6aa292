use egui::Rect;
use log::{debug, info, warn};

use crate::config::EditorConfig;
use crate::input::InputHandler;
use crate::layout::Layout;
use crate::renderer::Renderer;
use crate::state::EditorContext;

/// eframe frontend around the editor engine.
///
/// Only the configuration is persisted; shapes live for one session.
pub struct ShapeEditorApp {
    config: EditorConfig,
    editor: EditorContext,
    renderer: Renderer,
    input: InputHandler,
}

impl ShapeEditorApp {
    /// Called once before the first frame.
    ///
    /// An explicit `config` wins over the one stored by a previous run.
    pub fn new(cc: &eframe::CreationContext<'_>, config: Option<EditorConfig>) -> Self {
        let config = config
            .or_else(|| {
                cc.storage
                    .and_then(|storage| eframe::get_value::<EditorConfig>(storage, eframe::APP_KEY))
            })
            .filter(|config| match config.validate() {
                Ok(()) => true,
                Err(err) => {
                    warn!("Ignoring configuration: {}", err);
                    false
                }
            })
            .unwrap_or_default();
        Self::with_config(config)
    }

    pub fn with_config(config: EditorConfig) -> Self {
        let layout = Layout::new(config.window_width, config.window_height).unwrap_or_else(|err| {
            warn!("{}; using the minimum layout", err);
            Layout::minimum()
        });
        info!(
            "Starting editor: {}x{} screen, menu width {}",
            layout.screen_width(),
            layout.screen_height(),
            layout.menu_width()
        );
        Self {
            editor: EditorContext::new(layout, config.clone()),
            config,
            renderer: Renderer::new(),
            input: InputHandler::new(),
        }
    }

    pub fn editor(&self) -> &EditorContext {
        &self.editor
    }

    fn sync_layout(&mut self, screen: Rect) {
        let width = screen.width().round() as i32;
        let height = screen.height().round() as i32;
        let layout = self.editor.layout();
        if layout.screen_width() == width && layout.screen_height() == height {
            return;
        }
        match Layout::new(width, height) {
            Ok(layout) => self.editor.set_layout(layout),
            Err(err) => debug!("Keeping layout: {}", err),
        }
    }
}

impl eframe::App for ShapeEditorApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.config);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_layout(ctx.screen_rect());

        for event in self.input.process_input(ctx) {
            if self.editor.handle_event(event, &mut self.renderer).is_exited() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                break;
            }
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());

                let layout = self.editor.layout();
                let origin = layout.canvas_origin().to_pos2();
                let canvas = Rect::from_min_max(origin, response.rect.max);
                painter.rect_filled(canvas, 0.0, self.config.colors.canvas_background);
                self.renderer
                    .paint_canvas(&painter.with_clip_rect(canvas), origin);
                self.renderer.paint_menu(&painter, layout, &self.config);
            });
    }
}
