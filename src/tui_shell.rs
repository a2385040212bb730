use anyhow::Result;

mod app;

mod input;
mod modal;
mod tasks;
mod view;
mod views;

// Core TUI types shared with submodules via `super::...`.
use view::{View, ViewAction, ViewKind, render_view_chrome};

pub fn run_with_options(opts: crate::tui::TuiRunOptions) -> Result<()> {
    app::run(opts)
}
