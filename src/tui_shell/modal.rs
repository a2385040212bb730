use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::editor::Notice;

/// Blocking notice, dismissed with Enter or Esc.
#[derive(Clone, Debug)]
pub(super) struct Modal {
    pub(super) notice: Notice,
}

impl Modal {
    pub(super) fn new(notice: Notice) -> Self {
        Self { notice }
    }
}

/// Returns true when the key dismisses the modal.
pub(super) fn handle_modal_key(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')
    )
}

pub(super) fn draw_modal(frame: &mut ratatui::Frame, modal: &Modal) {
    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(20, 60);
    let h = 7u16.min(area.height);
    let box_area = Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w,
        height: h,
    };

    frame.render_widget(Clear, box_area);

    let (title, color) = if modal.notice.is_error() {
        ("Error", Color::Red)
    } else {
        ("Notice", Color::Green)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title);
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);
    frame.render_widget(
        Paragraph::new(modal.notice.text().to_string()).wrap(Wrap { trim: false }),
        parts[0],
    );
    frame.render_widget(
        Paragraph::new(Line::styled(
            "Enter: close",
            Style::default().fg(Color::DarkGray),
        )),
        parts[1],
    );
}
