use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::editor::Notice;
use crate::gate::{AccessGate, GateDecision, GateStep};
use crate::remote::RemoteClient;
use crate::store::SessionStore;

use super::modal::{self, Modal};
use super::tasks::{self, TaskEnvelope, TaskResult, TaskRunner};
use super::views::{FlatAdsView, GridAdsView, LoginAction, LoginForm, ThumbnailsView};
use super::{View, ViewAction, ViewKind};

mod event_loop;
mod lifecycle;
mod render;
mod runtime;

pub(super) use self::runtime::run;

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;

/// Top-level screen. Protected content only renders on `Dashboard`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Screen {
    /// Gate verification in flight.
    Loading,
    Login,
    Dashboard,
}

pub(super) struct App {
    api: RemoteClient,
    store: SessionStore,

    screen: Screen,
    identity: String,
    login: LoginForm,

    view: Option<Box<dyn View>>,
    // Bumped on every mount, unmount and gate entry; results tagged with an
    // older epoch are dropped.
    epoch: u64,
    tasks: TaskRunner,

    modal: Option<Modal>,
    quit: bool,
}
