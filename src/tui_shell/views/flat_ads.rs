use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Color;

use crate::editor::{FlatAds, FlatAdsEditor, Notice, RecordFamily};
use crate::model::RecordId;

use super::super::input::Input;
use super::super::tasks::{SaveRequest, TaskResult};
use super::super::{View, ViewAction, ViewKind, render_view_chrome};
use super::widgets::{hint_line, render_field, render_picker_list, render_picker_trigger};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Focus {
    Picker,
    Title,
}

pub(in crate::tui_shell) struct FlatAdsView {
    editor: FlatAdsEditor,
    focus: Focus,
    field: Input,
}

impl FlatAdsView {
    pub(in crate::tui_shell) fn new() -> Self {
        Self {
            editor: FlatAdsEditor::new(),
            focus: Focus::Picker,
            field: Input::default(),
        }
    }

    /// Points the title field at the draft of the current selection.
    fn sync_field(&mut self) {
        let value = self
            .editor
            .selected_id()
            .map(|id| self.editor.draft(id).to_string())
            .unwrap_or_default();
        self.field = Input::with_value(&value);
    }

    fn picker_items(&self) -> Vec<String> {
        self.editor
            .records()
            .iter()
            .map(|ad| format!("Section: {}", ad.id))
            .collect()
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.editor.picker.move_up(),
            KeyCode::Down => {
                let n = self.editor.records().len();
                self.editor.picker.move_down(n);
            }
            KeyCode::Enter => {
                if self.editor.choose_from_picker() {
                    self.sync_field();
                }
            }
            KeyCode::Esc => self.editor.picker.close(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.editor.picker.close();
                self.focus = Focus::Title;
            }
            _ => {}
        }
    }
}

impl View for FlatAdsView {
    fn kind(&self) -> ViewKind {
        ViewKind::FlatAds
    }

    fn title(&self) -> &str {
        "Flat Ads Manager"
    }

    fn status(&self) -> Option<(String, Color)> {
        let repo = self.editor.repo();
        if repo.is_loading() {
            return Some(("Loading...".to_string(), Color::Yellow));
        }
        if let Some(err) = repo.error() {
            return Some((err.to_string(), Color::Red));
        }
        if repo.records().is_empty() {
            return Some(("No flat ads available.".to_string(), Color::Gray));
        }
        None
    }

    fn begin_load(&mut self) {
        self.editor.begin_load();
    }

    fn handle_key(&mut self, key: KeyEvent) -> ViewAction {
        if self.editor.picker.is_open() {
            self.handle_picker_key(key);
            return ViewAction::None;
        }
        match (self.focus, key.code) {
            (_, KeyCode::Tab | KeyCode::BackTab) => {
                self.focus = match self.focus {
                    Focus::Picker => Focus::Title,
                    Focus::Title => Focus::Picker,
                };
                ViewAction::None
            }
            (Focus::Picker, KeyCode::Enter | KeyCode::Down) => {
                self.editor.toggle_picker();
                ViewAction::None
            }
            (Focus::Picker, _) => ViewAction::None,
            (Focus::Title, KeyCode::Enter) => self.save_action(),
            (Focus::Title, _) => {
                if self.field.handle_key(key)
                    && let Some(id) = self.editor.selected_id().cloned()
                {
                    self.editor.set_draft(&id, self.field.buf.clone());
                }
                ViewAction::None
            }
        }
    }

    fn save_action(&mut self) -> ViewAction {
        match self.editor.prepare_selected_save() {
            Ok((id, title)) => ViewAction::Save(SaveRequest::Flat { id, title }),
            Err(err) => ViewAction::Notify(Notice::Error(err.notice(FlatAds::EMPTY_VALUE))),
        }
    }

    fn pointer_down(&mut self, column: u16, row: u16) {
        self.editor.picker.pointer_down(column, row);
    }

    fn apply(&mut self, result: TaskResult) -> Option<Notice> {
        match result {
            TaskResult::FlatLoaded(result) => {
                self.editor.apply_loaded(result);
                self.sync_field();
                None
            }
            TaskResult::Saved {
                request: SaveRequest::Flat { id, title },
                result,
            } => Some(self.editor.apply_saved(&id, &title, result)),
            _ => None,
        }
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        let inner = render_view_chrome(frame, self.title(), self.status(), area);
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(inner);

        let selected: Option<&RecordId> = self.editor.selected_id();
        let trigger_text = match selected {
            Some(id) => format!("Section: {}", id),
            None if self.editor.records().is_empty() => "No ads available".to_string(),
            None => "Select an ad".to_string(),
        };
        render_picker_trigger(
            frame,
            parts[0],
            "Select Ad",
            &trigger_text,
            self.focus == Focus::Picker,
            &self.editor.picker,
        );

        match selected {
            Some(id) => render_field(
                frame,
                parts[1],
                &format!("Section: {}", id),
                &self.field,
                &format!("Title for ID {}", id),
                self.focus == Focus::Title && !self.editor.picker.is_open(),
                false,
            ),
            None if !self.editor.records().is_empty() => frame.render_widget(
                hint_line("Please select an ad to manage."),
                parts[1],
            ),
            None => {}
        }

        frame.render_widget(
            hint_line("Tab: focus  Enter: open/save  Ctrl-S: save  Ctrl-R: reload"),
            parts[2],
        );

        render_picker_list(
            frame,
            parts[0],
            inner,
            &self.editor.picker,
            &self.picker_items(),
            self.editor.selected_index(),
        );
    }
}
