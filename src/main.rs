#![warn(clippy::all, rust_2018_idioms)]

/// Path of an optional JSON configuration file
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_ENV: &str = "SHAPE_EDITOR_CONFIG";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use shape_editor::layout::{SCREEN_MIN_HEIGHT, SCREEN_MIN_WIDTH};
    use shape_editor::{EditorConfig, ShapeEditorApp};

    env_logger::init();

    let config = std::env::var_os(CONFIG_ENV).and_then(|path| match EditorConfig::load(&path) {
        Ok(config) => Some(config),
        Err(err) => {
            log::error!("Failed to load {}: {}", path.to_string_lossy(), err);
            None
        }
    });
    let size = config.as_ref().map_or_else(
        || {
            let defaults = EditorConfig::default();
            [defaults.window_width as f32, defaults.window_height as f32]
        },
        |config| [config.window_width as f32, config.window_height as f32],
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(size)
            .with_min_inner_size([SCREEN_MIN_WIDTH as f32, SCREEN_MIN_HEIGHT as f32])
            .with_title("Shape Editor"),
        ..Default::default()
    };

    eframe::run_native(
        "Shape Editor",
        options,
        Box::new(|cc| Ok(Box::new(ShapeEditorApp::new(cc, config)))),
    )
}

// Only the native frontend is built
#[cfg(target_arch = "wasm32")]
fn main() {}
