//! Editor modes.
//!
//! ```text
//!            button            press on shape
//!  Drawing <--------> Selecting ----------------> Editing
//!     |                  ^   ^                      |
//!     |    CLEAR         |   |   miss / promote /   |
//!     +---> Clear -------+   +----- delete ---------+
//!
//!  EXIT from any mode ends the session.
//! ```

use std::fmt;

use crate::element::ShapeKind;
use crate::layout::ButtonId;
use crate::scene::NodeId;

/// The mode the editor is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// Idle: clicks select shapes or menu buttons
    Selecting,
    Drawing(ShapeKind),
    Editing(NodeId),
    /// EXIT was chosen or the pointer stream ended
    Exited,
}

impl EditorState {
    pub fn is_exited(&self) -> bool {
        matches!(self, EditorState::Exited)
    }

    /// Mode the dispatcher treats this state as running
    pub fn mode(&self) -> NextMode {
        match *self {
            EditorState::Selecting | EditorState::Editing(_) => NextMode::Selection,
            EditorState::Drawing(kind) => NextMode::Drawing(kind),
            EditorState::Exited => NextMode::Exit,
        }
    }
}

impl fmt::Display for EditorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorState::Selecting => f.write_str("selecting"),
            EditorState::Drawing(kind) => write!(f, "drawing {kind}"),
            EditorState::Editing(node) => write!(f, "editing {node:?}"),
            EditorState::Exited => f.write_str("exited"),
        }
    }
}

/// Where a mode hands control when it ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextMode {
    Selection,
    Drawing(ShapeKind),
    /// Destroy every shape, then select
    Clear,
    Exit,
}

impl NextMode {
    pub fn from_button(button: ButtonId) -> Self {
        match button {
            ButtonId::Segment => NextMode::Drawing(ShapeKind::Segment),
            ButtonId::Rectangle => NextMode::Drawing(ShapeKind::Rectangle),
            ButtonId::Circle => NextMode::Drawing(ShapeKind::Circle),
            ButtonId::Ellipse => NextMode::Drawing(ShapeKind::Ellipse),
            ButtonId::Text => NextMode::Drawing(ShapeKind::Text),
            ButtonId::Clear => NextMode::Clear,
            ButtonId::Exit => NextMode::Exit,
        }
    }

    /// Menu button shown active while this mode runs
    pub fn button(&self) -> Option<ButtonId> {
        match self {
            NextMode::Selection => None,
            NextMode::Drawing(ShapeKind::Segment) => Some(ButtonId::Segment),
            NextMode::Drawing(ShapeKind::Rectangle) => Some(ButtonId::Rectangle),
            NextMode::Drawing(ShapeKind::Circle) => Some(ButtonId::Circle),
            NextMode::Drawing(ShapeKind::Ellipse) => Some(ButtonId::Ellipse),
            NextMode::Drawing(ShapeKind::Text) => Some(ButtonId::Text),
            NextMode::Clear => Some(ButtonId::Clear),
            NextMode::Exit => Some(ButtonId::Exit),
        }
    }
}
