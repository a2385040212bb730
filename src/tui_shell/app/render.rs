use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);

    match app.screen {
        Screen::Loading => {
            frame.render_widget(
                Paragraph::new(Line::styled(
                    "Loading...",
                    Style::default().fg(Color::Yellow),
                )),
                chunks[1],
            );
        }
        Screen::Login => app.login.render(frame, chunks[1]),
        Screen::Dashboard => {
            if let Some(view) = app.view.as_ref() {
                view.render(frame, chunks[1]);
            }
        }
    }

    draw_footer(frame, app, chunks[2]);

    if let Some(m) = app.modal.as_ref() {
        modal::draw_modal(frame, m);
    }
}

fn draw_header(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let mut spans = vec![Span::styled(
        "adconsole",
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if app.screen == Screen::Dashboard {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("Welcome, to the control, {}!", app.identity),
            Style::default().fg(Color::Yellow),
        ));
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        app.api.base_url().to_string(),
        Style::default().fg(Color::DarkGray),
    ));

    let mut tabs = Vec::new();
    if app.screen == Screen::Dashboard {
        let current = app.view.as_ref().map(|v| v.kind());
        for kind in ViewKind::ALL {
            let style = if Some(kind) == current {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default().fg(Color::Gray)
            };
            tabs.push(Span::styled(format!(" {} ", kind.label()), style));
            tabs.push(Span::raw(" "));
        }
    }

    frame.render_widget(
        Paragraph::new(vec![Line::from(spans), Line::from(tabs)]),
        area,
    );
}

fn draw_footer(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let keys = match app.screen {
        Screen::Dashboard => "F1-F3: views  Ctrl-L: logout  Ctrl-Q: quit",
        _ => "Ctrl-Q: quit",
    };
    let mut spans = vec![Span::styled(keys, Style::default().fg(Color::DarkGray))];
    let busy = app.tasks.in_flight();
    if busy > 0 {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("working ({})", busy),
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
