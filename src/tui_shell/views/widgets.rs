use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use crate::picker::Dropdown;

use super::super::input::Input;

const LIST_MAX_ROWS: u16 = 6;

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

/// Picker trigger: a bordered box showing the current choice.
pub(super) fn render_picker_trigger(
    frame: &mut ratatui::Frame,
    area: Rect,
    label: &str,
    text: &str,
    focused: bool,
    dropdown: &Dropdown,
) {
    let arrow = if dropdown.is_open() { "▴" } else { "▾" };
    let line = Line::from(vec![
        Span::raw(text.to_string()),
        Span::raw(" "),
        Span::styled(arrow, Style::default().fg(Color::Gray)),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(focused))
                .title(label.to_string()),
        ),
        area,
    );
    dropdown.set_area(area);
}

/// Open picker list, drawn over whatever sits below the trigger. Must be
/// rendered last so it stays on top.
pub(super) fn render_picker_list(
    frame: &mut ratatui::Frame,
    trigger: Rect,
    bounds: Rect,
    dropdown: &Dropdown,
    items: &[String],
    current: Option<usize>,
) {
    if !dropdown.is_open() || items.is_empty() {
        return;
    }
    let below = bounds
        .y
        .saturating_add(bounds.height)
        .saturating_sub(trigger.y.saturating_add(trigger.height));
    let rows = (items.len() as u16).min(LIST_MAX_ROWS) + 2;
    let list_area = Rect {
        x: trigger.x,
        y: trigger.y.saturating_add(trigger.height),
        width: trigger.width,
        height: rows.min(below),
    };
    if list_area.height < 3 {
        return;
    }

    let rows: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if Some(i) == current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(item.clone()).style(style)
        })
        .collect();
    let mut state = ListState::default();
    state.select(Some(dropdown.highlighted().min(items.len() - 1)));

    frame.render_widget(Clear, list_area);
    frame.render_stateful_widget(
        List::new(rows)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::Yellow)),
        list_area,
        &mut state,
    );

    // The picker's area now covers trigger and list.
    dropdown.set_area(Rect {
        x: trigger.x,
        y: trigger.y,
        width: trigger.width,
        height: trigger.height + list_area.height,
    });
}

/// Bordered single-line text field. Shows `placeholder` in gray when empty.
pub(super) fn render_field(
    frame: &mut ratatui::Frame,
    area: Rect,
    label: &str,
    input: &Input,
    placeholder: &str,
    focused: bool,
    masked: bool,
) {
    let text = if input.buf.is_empty() {
        Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    } else if masked {
        Line::from(input.masked())
    } else {
        Line::from(input.buf.as_str())
    };
    frame.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(focused))
                .title(label.to_string()),
        ),
        area,
    );
    if focused {
        let x = area.x + 1 + input.cursor as u16;
        frame.set_cursor_position((x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
    }
}

/// Read-only field for members that do not have focus.
pub(super) fn render_value(frame: &mut ratatui::Frame, area: Rect, label: &str, value: &str) {
    frame.render_widget(
        Paragraph::new(value.to_string())
            .block(Block::default().borders(Borders::ALL).title(label.to_string())),
        area,
    );
}

pub(super) fn hint_line(text: &str) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    )))
}
