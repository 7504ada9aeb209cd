mod component;
mod controls;
mod format;
mod render;
mod state;
mod views;

pub use component::GraphEditor;
pub use state::{DisplayMode, EditorState};
