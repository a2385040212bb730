use super::{Notice, Posts, RecordApi, RecordFamily, Repository};
use crate::error::{ConsoleError, ConsoleResult};
use crate::model::{Post, RecordId};
use crate::picker::{Dropdown, SearchFilter};

/// Thumbnail editor: one post at a time, one URL draft slot.
#[derive(Debug, Default)]
pub struct PostsEditor {
    repo: Repository<Posts>,
    selected: Option<RecordId>,
    url_draft: String,
    pub search: SearchFilter,
    pub picker: Dropdown,
}

impl PostsEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repo(&self) -> &Repository<Posts> {
        &self.repo
    }

    pub fn records(&self) -> &[Post] {
        self.repo.records()
    }

    pub fn selected_id(&self) -> Option<&RecordId> {
        self.selected.as_ref()
    }

    pub fn selected(&self) -> Option<&Post> {
        self.selected.as_ref().and_then(|id| self.repo.find(id))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected.as_ref().and_then(|id| self.repo.position(id))
    }

    pub fn url_draft(&self) -> &str {
        &self.url_draft
    }

    pub fn set_url_draft(&mut self, value: impl Into<String>) {
        self.url_draft = value.into();
    }

    pub fn begin_load(&mut self) {
        self.repo.begin_load();
    }

    /// Selects the first post and seeds the URL slot from it.
    pub fn apply_loaded(&mut self, result: ConsoleResult<Vec<Post>>) {
        self.repo.apply_loaded(result);
        match self.repo.records().first() {
            Some(first) => {
                self.selected = Some(first.id.clone());
                self.url_draft = Posts::field(first).to_string();
            }
            None => {
                self.selected = None;
                self.url_draft.clear();
            }
        }
    }

    /// Every selection re-seeds the URL slot, even for the current post.
    pub fn select(&mut self, id: &RecordId) -> bool {
        let Some(url) = self.repo.find(id).map(|p| Posts::field(p).to_string()) else {
            return false;
        };
        self.selected = Some(id.clone());
        self.url_draft = url;
        self.picker.close();
        true
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        match self.repo.records().get(index).map(|p| p.id.clone()) {
            Some(id) => self.select(&id),
            None => false,
        }
    }

    pub fn toggle_picker(&mut self) {
        let current = self.selected_index();
        self.picker.toggle(self.repo.records().len(), current);
    }

    pub fn choose_from_picker(&mut self) -> bool {
        match self.picker.choose(self.repo.records().len()) {
            Some(index) => self.select_index(index),
            None => false,
        }
    }

    /// Posts whose title contains the search text.
    pub fn search_results(&self) -> Vec<&Post> {
        self.search
            .filter(self.repo.records(), |p| Posts::title(p))
    }

    pub fn prepare_save(&self) -> ConsoleResult<(RecordId, String)> {
        let id = self
            .selected
            .clone()
            .ok_or_else(|| ConsoleError::Validation("Select a post first".to_string()))?;
        Repository::<Posts>::validate_value(&self.url_draft)?;
        Ok((id, self.url_draft.clone()))
    }

    pub fn apply_saved(&mut self, id: &RecordId, value: &str, result: ConsoleResult<()>) -> Notice {
        self.repo.apply_saved(id, value, result)
    }

    pub fn load(&mut self, api: &impl RecordApi) {
        self.begin_load();
        let result = api.fetch::<Posts>();
        self.apply_loaded(result);
    }

    pub fn save(&mut self, api: &impl RecordApi) -> Notice {
        let (id, value) = match self.prepare_save() {
            Ok(v) => v,
            Err(err) => return Notice::Error(err.notice(Posts::EMPTY_VALUE)),
        };
        let result = api.update::<Posts>(&id, &value);
        self.apply_saved(&id, &value, result)
    }
}

#[cfg(test)]
#[path = "../tests/editor/posts_tests.rs"]
mod tests;
