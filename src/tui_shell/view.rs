use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use crate::editor::Notice;

use super::tasks::{SaveRequest, TaskResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ViewKind {
    FlatAds,
    GridAds,
    Thumbnails,
}

impl ViewKind {
    pub(super) const ALL: [ViewKind; 3] =
        [ViewKind::FlatAds, ViewKind::GridAds, ViewKind::Thumbnails];

    pub(super) fn label(self) -> &'static str {
        match self {
            ViewKind::FlatAds => "F1 Flat ads",
            ViewKind::GridAds => "F2 Grid ads",
            ViewKind::Thumbnails => "F3 Thumbnails",
        }
    }
}

/// What the app should do after a view handled input.
#[derive(Debug)]
pub(super) enum ViewAction {
    None,
    Save(SaveRequest),
    Notify(Notice),
}

/// A mounted editor screen.
pub(super) trait View {
    fn kind(&self) -> ViewKind;
    fn title(&self) -> &str;

    /// Status line under the title (loading, load error, empty list).
    fn status(&self) -> Option<(String, Color)>;

    /// Marks the repository as loading; the app issues the fetch.
    fn begin_load(&mut self);

    fn handle_key(&mut self, key: KeyEvent) -> ViewAction;

    /// Saves whatever field has focus (Ctrl-S).
    fn save_action(&mut self) -> ViewAction;

    fn pointer_down(&mut self, _column: u16, _row: u16) {}

    /// Applies a finished task issued by this view.
    fn apply(&mut self, result: TaskResult) -> Option<Notice>;

    fn render(&self, frame: &mut ratatui::Frame, area: Rect);
}

pub(super) fn render_view_chrome(
    frame: &mut ratatui::Frame,
    title: &str,
    status: Option<(String, Color)>,
    area: Rect,
) -> Rect {
    let mut spans = vec![Span::styled(
        title.to_string(),
        Style::default().fg(Color::Yellow),
    )];
    if let Some((text, color)) = status {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(text, Style::default().fg(color)));
    }
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(spans));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);
    inner
}
