mod assist_handle;

pub use assist_handle::{AssistHandles, Cell, EDIT_ASSIST_MAX_NUM, HandleId, ResizeAnchor};
