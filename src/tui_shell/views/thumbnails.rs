use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::editor::{Notice, Posts, PostsEditor, RecordFamily};

use super::super::input::Input;
use super::super::tasks::{SaveRequest, TaskResult};
use super::super::{View, ViewAction, ViewKind, render_view_chrome};
use super::widgets::{hint_line, render_field, render_picker_list, render_picker_trigger};

const RESULT_ROWS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Focus {
    Picker,
    Search,
    Url,
}

pub(in crate::tui_shell) struct ThumbnailsView {
    editor: PostsEditor,
    focus: Focus,
    search: Input,
    url: Input,
    result_cursor: usize,
}

impl ThumbnailsView {
    pub(in crate::tui_shell) fn new() -> Self {
        Self {
            editor: PostsEditor::new(),
            focus: Focus::Picker,
            search: Input::default(),
            url: Input::default(),
            result_cursor: 0,
        }
    }

    fn sync_url(&mut self) {
        self.url = Input::with_value(self.editor.url_draft());
    }

    fn cycle_focus(&mut self, forward: bool) {
        self.focus = match (self.focus, forward) {
            (Focus::Picker, true) | (Focus::Url, false) => Focus::Search,
            (Focus::Search, true) | (Focus::Picker, false) => Focus::Url,
            (Focus::Url, true) | (Focus::Search, false) => Focus::Picker,
        };
    }

    fn picker_items(&self) -> Vec<String> {
        self.editor
            .records()
            .iter()
            .map(|p| p.title.clone())
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
                    self.sync_url();
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

    fn handle_search_key(&mut self, key: KeyEvent) {
        let count = self.editor.search_results().len();
        match key.code {
            KeyCode::Up => self.result_cursor = self.result_cursor.saturating_sub(1),
            KeyCode::Down => {
                if count > 0 {
                    self.result_cursor = (self.result_cursor + 1).min(count - 1);
                }
            }
            KeyCode::Enter => {
                let chosen = self
                    .editor
                    .search_results()
                    .get(self.result_cursor)
                    .map(|p| p.id.clone());
                if let Some(id) = chosen
                    && self.editor.select(&id)
                {
                    self.sync_url();
                }
            }
            _ => {
                if self.search.handle_key(key) {
                    self.editor.search.set_query(self.search.buf.clone());
                    self.result_cursor = 0;
                }
            }
        }
    }
}

impl View for ThumbnailsView {
    fn kind(&self) -> ViewKind {
        ViewKind::Thumbnails
    }

    fn title(&self) -> &str {
        "Manage Thumbnails"
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
            (Focus::Search, _) => {
                self.handle_search_key(key);
                ViewAction::None
            }
            (Focus::Url, KeyCode::Enter) => self.save_action(),
            (Focus::Url, _) => {
                if self.url.handle_key(key) {
                    self.editor.set_url_draft(self.url.buf.clone());
                }
                ViewAction::None
            }
        }
    }

    fn save_action(&mut self) -> ViewAction {
        match self.editor.prepare_save() {
            Ok((id, image_url)) => ViewAction::Save(SaveRequest::Post { id, image_url }),
            Err(err) => ViewAction::Notify(Notice::Error(err.notice(Posts::EMPTY_VALUE))),
        }
    }

    fn pointer_down(&mut self, column: u16, row: u16) {
        self.editor.picker.pointer_down(column, row);
    }

    fn apply(&mut self, result: TaskResult) -> Option<Notice> {
        match result {
            TaskResult::PostsLoaded(result) => {
                self.editor.apply_loaded(result);
                self.result_cursor = 0;
                self.sync_url();
                None
            }
            TaskResult::Saved {
                request: SaveRequest::Post { id, image_url },
                result,
            } => Some(self.editor.apply_saved(&id, &image_url, result)),
            _ => None,
        }
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        let inner = render_view_chrome(frame, self.title(), self.status(), area);
        let results = self.editor.search_results();
        let results_height = if self.editor.search.is_active() {
            results.len().clamp(1, RESULT_ROWS) as u16 + 2
        } else {
            0
        };
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(results_height),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(inner);

        let selected = self.editor.selected();
        let trigger_text = selected
            .map(|p| p.title.clone())
            .unwrap_or_else(|| "Select a post".to_string());
        render_picker_trigger(
            frame,
            parts[0],
            "Select Post",
            &trigger_text,
            self.focus == Focus::Picker,
            &self.editor.picker,
        );

        let typing = !self.editor.picker.is_open();
        render_field(
            frame,
            parts[1],
            "Search",
            &self.search,
            "Search titles...",
            typing && self.focus == Focus::Search,
            false,
        );

        if self.editor.search.is_active() {
            let block = Block::default().borders(Borders::ALL).title("Results");
            if results.is_empty() {
                frame.render_widget(
                    Paragraph::new("No results found.").block(block),
                    parts[2],
                );
            } else {
                let rows: Vec<ListItem> = results
                    .iter()
                    .map(|p| ListItem::new(p.title.clone()))
                    .collect();
                let mut state = ListState::default();
                if self.focus == Focus::Search {
                    state.select(Some(self.result_cursor.min(results.len() - 1)));
                }
                frame.render_stateful_widget(
                    List::new(rows)
                        .block(block)
                        .highlight_style(Style::default().fg(Color::Black).bg(Color::Yellow)),
                    parts[2],
                    &mut state,
                );
            }
        }

        render_field(
            frame,
            parts[3],
            "Image URL",
            &self.url,
            "Enter image URL",
            typing && self.focus == Focus::Url,
            false,
        );

        let details = match selected {
            Some(post) => vec![
                format!("ID: {}", post.id),
                format!("Title: {}", post.title),
                format!("Current image: {}", post.image_url),
                String::new(),
                "Tab: focus  Enter: open/choose/save  Ctrl-S: save  Ctrl-R: reload".to_string(),
            ],
            None => vec!["Select a post first".to_string()],
        };
        if selected.is_none() && self.editor.records().is_empty() {
            frame.render_widget(hint_line("No posts available."), parts[4]);
        } else {
            frame.render_widget(
                Paragraph::new(details.join("\n")).wrap(Wrap { trim: false }),
                parts[4],
            );
        }

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
