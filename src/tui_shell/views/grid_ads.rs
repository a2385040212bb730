use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Color;

use crate::editor::{GRID_DISPLAY_CAP, GridAds, GridAdsEditor, Notice, RecordFamily};

use super::super::input::Input;
use super::super::tasks::{SaveRequest, TaskResult};
use super::super::{View, ViewAction, ViewKind, render_view_chrome};
use super::widgets::{
    hint_line, render_field, render_picker_list, render_picker_trigger, render_value,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Focus {
    Picker,
    Member(usize),
}

pub(in crate::tui_shell) struct GridAdsView {
    editor: GridAdsEditor,
    focus: Focus,
    field: Input,
}

impl GridAdsView {
    pub(in crate::tui_shell) fn new() -> Self {
        Self {
            editor: GridAdsEditor::new(),
            focus: Focus::Picker,
            field: Input::default(),
        }
    }

    /// Focus order: picker, then each displayed member, then back.
    fn cycle_focus(&mut self, forward: bool) {
        let n = self.editor.displayed_ids().len();
        self.focus = match (self.focus, forward) {
            (_, _) if n == 0 => Focus::Picker,
            (Focus::Picker, true) => Focus::Member(0),
            (Focus::Picker, false) => Focus::Member(n - 1),
            (Focus::Member(i), true) if i + 1 < n => Focus::Member(i + 1),
            (Focus::Member(i), false) if i > 0 => Focus::Member(i - 1),
            (Focus::Member(_), _) => Focus::Picker,
        };
        self.sync_field();
    }

    fn sync_field(&mut self) {
        let value = match self.focus {
            Focus::Member(i) => self
                .editor
                .displayed_ids()
                .get(i)
                .map(|id| self.editor.draft(id).to_string())
                .unwrap_or_default(),
            Focus::Picker => String::new(),
        };
        self.field = Input::with_value(&value);
    }

    /// Drops a member focus that no longer points at a displayed record.
    fn clamp_focus(&mut self) {
        if let Focus::Member(i) = self.focus
            && i >= self.editor.displayed_ids().len()
        {
            self.focus = Focus::Picker;
        }
        self.sync_field();
    }

    fn save_member(&self, index: usize) -> ViewAction {
        let Some(id) = self.editor.displayed_ids().get(index).cloned() else {
            return ViewAction::None;
        };
        match self.editor.prepare_save(&id) {
            Ok(title) => ViewAction::Save(SaveRequest::Grid { id, title }),
            Err(err) => ViewAction::Notify(Notice::Error(err.notice(GridAds::EMPTY_VALUE))),
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.editor.picker.move_up(),
            KeyCode::Down => {
                let n = self.editor.groups().len();
                self.editor.picker.move_down(n);
            }
            KeyCode::Enter => {
                if self.editor.choose_from_picker() {
                    self.clamp_focus();
                }
            }
            KeyCode::Esc => self.editor.picker.close(),
            KeyCode::Tab => {
                self.editor.picker.close();
                self.cycle_focus(true);
            }
            KeyCode::BackTab => {
                self.editor.picker.close();
                self.cycle_focus(false);
            }
            _ => {}
        }
    }
}

impl View for GridAdsView {
    fn kind(&self) -> ViewKind {
        ViewKind::GridAds
    }

    fn title(&self) -> &str {
        "Grid Ads Manager"
    }

    fn status(&self) -> Option<(String, Color)> {
        let repo = self.editor.repo();
        if repo.is_loading() {
            return Some(("Loading...".to_string(), Color::Yellow));
        }
        repo.error().map(|err| (err.to_string(), Color::Red))
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
            (_, KeyCode::Tab) => {
                self.cycle_focus(true);
                ViewAction::None
            }
            (_, KeyCode::BackTab) => {
                self.cycle_focus(false);
                ViewAction::None
            }
            (Focus::Picker, KeyCode::Enter | KeyCode::Down) => {
                self.editor.toggle_picker();
                ViewAction::None
            }
            (Focus::Picker, _) => ViewAction::None,
            (Focus::Member(i), KeyCode::Enter) => self.save_member(i),
            (Focus::Member(i), _) => {
                if self.field.handle_key(key)
                    && let Some(id) = self.editor.displayed_ids().get(i).cloned()
                {
                    self.editor.set_draft(&id, self.field.buf.clone());
                }
                ViewAction::None
            }
        }
    }

    fn save_action(&mut self) -> ViewAction {
        match self.focus {
            Focus::Member(i) => self.save_member(i),
            Focus::Picker => ViewAction::Notify(Notice::Error(
                "Select a group member to save".to_string(),
            )),
        }
    }

    fn pointer_down(&mut self, column: u16, row: u16) {
        self.editor.picker.pointer_down(column, row);
    }

    fn apply(&mut self, result: TaskResult) -> Option<Notice> {
        match result {
            TaskResult::GridLoaded(result) => {
                self.editor.apply_loaded(result);
                self.clamp_focus();
                None
            }
            TaskResult::Saved {
                request: SaveRequest::Grid { id, title },
                result,
            } => Some(self.editor.apply_saved(&id, &title, result)),
            _ => None,
        }
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        let inner = render_view_chrome(frame, self.title(), self.status(), area);
        let mut constraints = vec![Constraint::Length(3), Constraint::Length(1)];
        constraints.extend([Constraint::Length(3); GRID_DISPLAY_CAP]);
        constraints.push(Constraint::Min(0));
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let groups = self.editor.groups();
        let selected_group = self.editor.selected_group();
        let trigger_text = match selected_group {
            Some(g) => g.to_string(),
            None => "-- Select a group --".to_string(),
        };
        render_picker_trigger(
            frame,
            parts[0],
            "Select Group",
            &trigger_text,
            self.focus == Focus::Picker,
            &self.editor.picker,
        );

        if let Some(group) = selected_group {
            frame.render_widget(hint_line(&format!("Group: {}", group)), parts[1]);
            for (i, ad) in self.editor.displayed().into_iter().enumerate() {
                let slot = parts[2 + i];
                let label = format!("Group: {} | Section: {}", ad.group, ad.id);
                if self.focus == Focus::Member(i) {
                    render_field(
                        frame,
                        slot,
                        &label,
                        &self.field,
                        &format!("Title for ID {}", ad.id),
                        !self.editor.picker.is_open(),
                        false,
                    );
                } else {
                    render_value(frame, slot, &label, self.editor.draft(&ad.id));
                }
            }
        }

        frame.render_widget(
            hint_line("Tab: focus  Enter: open/save  Ctrl-S: save  Ctrl-R: reload"),
            parts[2 + GRID_DISPLAY_CAP],
        );

        let items: Vec<String> = groups.iter().map(|g| g.to_string()).collect();
        let current = selected_group.and_then(|g| groups.iter().position(|x| *x == g));
        render_picker_list(
            frame,
            parts[0],
            inner,
            &self.editor.picker,
            &items,
            current,
        );
    }
}
