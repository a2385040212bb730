use super::{DraftBuffer, FlatAds, Notice, RecordApi, RecordFamily, Repository};
use crate::error::{ConsoleError, ConsoleResult};
use crate::model::{FlatAd, RecordId};
use crate::picker::Dropdown;

/// Flat ads: one selected slot, one title draft per slot.
#[derive(Debug, Default)]
pub struct FlatAdsEditor {
    repo: Repository<FlatAds>,
    drafts: DraftBuffer,
    selected: Option<RecordId>,
    pub picker: Dropdown,
}

impl FlatAdsEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repo(&self) -> &Repository<FlatAds> {
        &self.repo
    }

    pub fn records(&self) -> &[FlatAd] {
        self.repo.records()
    }

    pub fn drafts(&self) -> &DraftBuffer {
        &self.drafts
    }

    pub fn selected_id(&self) -> Option<&RecordId> {
        self.selected.as_ref()
    }

    pub fn selected(&self) -> Option<&FlatAd> {
        self.selected.as_ref().and_then(|id| self.repo.find(id))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected.as_ref().and_then(|id| self.repo.position(id))
    }

    pub fn begin_load(&mut self) {
        self.repo.begin_load();
    }

    /// A successful fetch seeds one draft per record and selects the first.
    pub fn apply_loaded(&mut self, result: ConsoleResult<Vec<FlatAd>>) {
        if self.repo.apply_loaded(result) {
            self.drafts.reseed_all(
                self.repo
                    .records()
                    .iter()
                    .map(|r| (&r.id, FlatAds::field(r))),
            );
        }
        self.selected = self.repo.records().first().map(|r| r.id.clone());
    }

    /// Makes `id` current and closes the picker. Drafts of other records are
    /// kept; a record without a draft gets one seeded from its title.
    pub fn select(&mut self, id: &RecordId) -> bool {
        let Some(record) = self.repo.find(id) else {
            return false;
        };
        if self.selected.as_ref() != Some(id) {
            let title = record.title.clone();
            self.drafts.seed_missing(id, &title);
            self.selected = Some(id.clone());
        }
        self.picker.close();
        true
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        match self.repo.records().get(index).map(|r| r.id.clone()) {
            Some(id) => self.select(&id),
            None => false,
        }
    }

    pub fn toggle_picker(&mut self) {
        let current = self.selected_index();
        self.picker.toggle(self.repo.records().len(), current);
    }

    /// Picks the highlighted picker entry.
    pub fn choose_from_picker(&mut self) -> bool {
        match self.picker.choose(self.repo.records().len()) {
            Some(index) => self.select_index(index),
            None => false,
        }
    }

    pub fn draft(&self, id: &RecordId) -> &str {
        self.drafts.value(id)
    }

    /// Editing a draft never touches the fetched list.
    pub fn set_draft(&mut self, id: &RecordId, value: impl Into<String>) {
        self.drafts.set(id, value);
    }

    /// Value to send for `id`, or the validation failure to show instead.
    pub fn prepare_save(&self, id: &RecordId) -> ConsoleResult<String> {
        let value = self.drafts.value(id);
        Repository::<FlatAds>::validate_value(value)?;
        Ok(value.to_string())
    }

    pub fn prepare_selected_save(&self) -> ConsoleResult<(RecordId, String)> {
        let id = self
            .selected
            .clone()
            .ok_or_else(|| ConsoleError::Validation("Please select an ad to manage.".to_string()))?;
        let value = self.prepare_save(&id)?;
        Ok((id, value))
    }

    pub fn apply_saved(&mut self, id: &RecordId, value: &str, result: ConsoleResult<()>) -> Notice {
        self.repo.apply_saved(id, value, result)
    }

    pub fn load(&mut self, api: &impl RecordApi) {
        self.begin_load();
        let result = api.fetch::<FlatAds>();
        self.apply_loaded(result);
    }

    pub fn save(&mut self, api: &impl RecordApi, id: &RecordId) -> Notice {
        let value = match self.prepare_save(id) {
            Ok(v) => v,
            Err(err) => return Notice::Error(err.notice(FlatAds::EMPTY_VALUE)),
        };
        let result = api.update::<FlatAds>(id, &value);
        self.apply_saved(id, &value, result)
    }
}

#[cfg(test)]
#[path = "../tests/editor/flat_tests.rs"]
mod tests;
