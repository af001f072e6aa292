#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod element;
pub mod error;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod renderer;
pub mod scene;
pub mod state;
pub mod tools;
pub mod widgets;

pub use app::ShapeEditorApp;
pub use config::EditorConfig;
pub use element::{Element, Point, Shape, ShapeKind, factory};
pub use error::{ConfigError, LayoutError, SceneError, SceneResult, ShapeError};
pub use input::{InputHandler, PointerEvent, PointerSource};
pub use layout::{ButtonId, Layout, Region};
pub use renderer::{Canvas, Renderer};
pub use scene::{NodeId, Scene};
pub use state::{EditorContext, EditorState, NextMode};
pub use tools::{Tool, ToolType};
