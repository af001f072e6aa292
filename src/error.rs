use thiserror::Error;

use crate::element::ShapeKind;
use crate::scene::NodeId;

/// Errors raised when a shape cannot be built from the supplied geometry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The shape is too small to be clicked, so it is not created either
    #[error("{kind} too small: extent {extent} is within tolerance {tolerance}")]
    Degenerate {
        kind: ShapeKind,
        extent: i32,
        tolerance: i32,
    },

    #[error("text of {len} characters exceeds the limit of {max}")]
    TextTooLong { len: usize, max: usize },
}

/// Errors raised by scene mutations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SceneError {
    /// Removal was requested on a scene with no nodes
    #[error("cannot remove from an empty scene")]
    Empty,

    /// The node was removed (or cleared) since the handle was obtained
    #[error("node {0:?} is not part of the scene")]
    StaleNode(NodeId),

    #[error("failed to allocate a scene node")]
    AllocationFailed,
}

/// Result type for scene operations
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors that can occur while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors raised while laying out the menu and canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("unsupported screen resolution {width}x{height} (minimum {min_width}x{min_height})")]
    ScreenTooSmall {
        width: i32,
        height: i32,
        min_width: i32,
        min_height: i32,
    },
}
