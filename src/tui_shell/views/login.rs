use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::super::input::Input;
use super::widgets::{hint_line, render_field};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoginFocus {
    User,
    Password,
}

#[derive(Debug)]
pub(in crate::tui_shell) enum LoginAction {
    None,
    Submit { user: String, password: String },
}

/// Credentials form shown while unauthenticated.
#[derive(Debug)]
pub(in crate::tui_shell) struct LoginForm {
    user: Input,
    password: Input,
    focus: LoginFocus,
    pub(in crate::tui_shell) error: Option<String>,
    pub(in crate::tui_shell) submitting: bool,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            user: Input::default(),
            password: Input::default(),
            focus: LoginFocus::User,
            error: None,
            submitting: false,
        }
    }
}

impl LoginForm {
    /// Keeps the last user name; the password never survives a logout.
    pub(in crate::tui_shell) fn reset(&mut self) {
        self.password.clear();
        self.focus = LoginFocus::User;
        self.error = None;
        self.submitting = false;
    }

    pub(in crate::tui_shell) fn handle_key(&mut self, key: KeyEvent) -> LoginAction {
        if self.submitting {
            return LoginAction::None;
        }
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = match self.focus {
                    LoginFocus::User => LoginFocus::Password,
                    LoginFocus::Password => LoginFocus::User,
                };
                LoginAction::None
            }
            KeyCode::Enter => {
                if self.focus == LoginFocus::User && self.password.buf.is_empty() {
                    self.focus = LoginFocus::Password;
                    return LoginAction::None;
                }
                self.submit()
            }
            _ => {
                let field = match self.focus {
                    LoginFocus::User => &mut self.user,
                    LoginFocus::Password => &mut self.password,
                };
                field.handle_key(key);
                LoginAction::None
            }
        }
    }

    fn submit(&mut self) -> LoginAction {
        let user = self.user.buf.trim().to_string();
        if user.is_empty() || self.password.buf.is_empty() {
            self.error = Some("Username and password are required".to_string());
            return LoginAction::None;
        }
        self.error = None;
        self.submitting = true;
        LoginAction::Submit {
            user,
            password: self.password.buf.clone(),
        }
    }

    pub(in crate::tui_shell) fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        let w = area.width.saturating_sub(4).clamp(20, 60);
        let h = 13u16.min(area.height);
        let box_area = Rect {
            x: area.x + area.width.saturating_sub(w) / 2,
            y: area.y + area.height.saturating_sub(h) / 2,
            width: w,
            height: h,
        };
        let block = Block::default().borders(Borders::ALL).title("Login");
        let inner = block.inner(box_area);
        frame.render_widget(block, box_area);

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(inner);

        render_field(
            frame,
            parts[0],
            "Username",
            &self.user,
            "",
            !self.submitting && self.focus == LoginFocus::User,
            false,
        );
        render_field(
            frame,
            parts[1],
            "Password",
            &self.password,
            "",
            !self.submitting && self.focus == LoginFocus::Password,
            true,
        );

        let status = if self.submitting {
            Paragraph::new(Line::styled(
                "Logging in...",
                Style::default().fg(Color::Yellow),
            ))
        } else if let Some(err) = &self.error {
            Paragraph::new(Line::styled(err.clone(), Style::default().fg(Color::Red)))
        } else {
            Paragraph::new("")
        };
        frame.render_widget(status, parts[2]);
        frame.render_widget(
            hint_line("Tab: switch field  Enter: login  Ctrl-Q: quit"),
            parts[3],
        );
    }
}
