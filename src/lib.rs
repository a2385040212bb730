pub mod config;
pub mod editor;
pub mod error;
pub mod gate;
pub mod logging;
pub mod model;
pub mod picker;
pub mod remote;
pub mod store;
pub mod tui;

mod tui_shell;
