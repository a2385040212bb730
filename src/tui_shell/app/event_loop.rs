use super::*;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.apply_finished_tasks();

        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                Event::Mouse(m) => handle_mouse(app, m),
                _ => {}
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c')) {
        app.quit = true;
        return;
    }

    if app.modal.is_some() {
        if modal::handle_modal_key(key) {
            app.modal = None;
        }
        return;
    }

    match app.screen {
        Screen::Loading => {}
        Screen::Login => {
            if let LoginAction::Submit { user, password } = app.login.handle_key(key) {
                app.submit_login(user, password);
            }
        }
        Screen::Dashboard => handle_dashboard_key(app, key, ctrl),
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent, ctrl: bool) {
    match key.code {
        KeyCode::F(n) if (1..=ViewKind::ALL.len() as u8).contains(&n) => {
            app.mount(ViewKind::ALL[usize::from(n - 1)]);
        }
        KeyCode::Char('s') if ctrl => {
            if let Some(view) = app.view.as_mut() {
                let action = view.save_action();
                app.dispatch(action);
            }
        }
        KeyCode::Char('r') if ctrl => app.reload(),
        KeyCode::Char('l') if ctrl => app.logout(),
        _ => {
            if let Some(view) = app.view.as_mut() {
                let action = view.handle_key(key);
                app.dispatch(action);
            }
        }
    }
}

/// A press anywhere outside an open picker closes it.
fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind
        && app.modal.is_none()
        && let Some(view) = app.view.as_mut()
    {
        view.pointer_down(mouse.column, mouse.row);
    }
}
