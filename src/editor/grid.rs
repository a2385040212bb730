use super::{DraftBuffer, GridAds, Notice, RecordApi, RecordFamily, Repository};
use crate::error::ConsoleResult;
use crate::model::{GridAd, RecordId};
use crate::picker::Dropdown;

/// Members shown for the selected group.
pub const GRID_DISPLAY_CAP: usize = 4;

/// Grid ads: the operator picks a group, then edits its first members.
#[derive(Debug, Default)]
pub struct GridAdsEditor {
    repo: Repository<GridAds>,
    drafts: DraftBuffer,
    selected_group: Option<String>,
    displayed: Vec<RecordId>,
    pub picker: Dropdown,
}

impl GridAdsEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repo(&self) -> &Repository<GridAds> {
        &self.repo
    }

    pub fn records(&self) -> &[GridAd] {
        self.repo.records()
    }

    pub fn drafts(&self) -> &DraftBuffer {
        &self.drafts
    }

    /// Distinct group labels in order of first appearance.
    pub fn groups(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for r in self.repo.records() {
            if !out.contains(&r.group.as_str()) {
                out.push(&r.group);
            }
        }
        out
    }

    pub fn selected_group(&self) -> Option<&str> {
        self.selected_group.as_deref()
    }

    pub fn displayed_ids(&self) -> &[RecordId] {
        &self.displayed
    }

    pub fn displayed(&self) -> Vec<&GridAd> {
        self.displayed
            .iter()
            .filter_map(|id| self.repo.find(id))
            .collect()
    }

    pub fn begin_load(&mut self) {
        self.repo.begin_load();
    }

    /// Keeps the full list; a selected group is re-filtered against it.
    pub fn apply_loaded(&mut self, result: ConsoleResult<Vec<GridAd>>) {
        self.repo.apply_loaded(result);
        self.refresh_displayed();
    }

    pub fn select_group(&mut self, group: &str) {
        self.selected_group = Some(group.to_string());
        self.refresh_displayed();
        self.picker.close();
    }

    pub fn toggle_picker(&mut self) {
        let groups = self.groups();
        let current = self
            .selected_group
            .as_deref()
            .and_then(|g| groups.iter().position(|x| *x == g));
        let count = groups.len();
        self.picker.toggle(count, current);
    }

    pub fn choose_from_picker(&mut self) -> bool {
        let groups: Vec<String> = self.groups().into_iter().map(str::to_string).collect();
        match self.picker.choose(groups.len()) {
            Some(index) => {
                self.select_group(&groups[index]);
                true
            }
            None => false,
        }
    }

    /// Filters the list down to the selected group (first members only) and
    /// re-seeds drafts for exactly those members. Other drafts stay.
    fn refresh_displayed(&mut self) {
        let Some(group) = self.selected_group.as_deref() else {
            self.displayed.clear();
            return;
        };
        let members: Vec<(RecordId, String)> = self
            .repo
            .records()
            .iter()
            .filter(|r| r.group == group)
            .take(GRID_DISPLAY_CAP)
            .map(|r| (r.id.clone(), GridAds::field(r).to_string()))
            .collect();
        for (id, title) in &members {
            self.drafts.set(id, title.as_str());
        }
        self.displayed = members.into_iter().map(|(id, _)| id).collect();
    }

    pub fn draft(&self, id: &RecordId) -> &str {
        self.drafts.value(id)
    }

    pub fn set_draft(&mut self, id: &RecordId, value: impl Into<String>) {
        self.drafts.set(id, value);
    }

    pub fn prepare_save(&self, id: &RecordId) -> ConsoleResult<String> {
        let value = self.drafts.value(id);
        Repository::<GridAds>::validate_value(value)?;
        Ok(value.to_string())
    }

    /// Group membership is not editable, so the displayed set stays as is.
    pub fn apply_saved(&mut self, id: &RecordId, value: &str, result: ConsoleResult<()>) -> Notice {
        self.repo.apply_saved(id, value, result)
    }

    pub fn load(&mut self, api: &impl RecordApi) {
        self.begin_load();
        let result = api.fetch::<GridAds>();
        self.apply_loaded(result);
    }

    pub fn save(&mut self, api: &impl RecordApi, id: &RecordId) -> Notice {
        let value = match self.prepare_save(id) {
            Ok(v) => v,
            Err(err) => return Notice::Error(err.notice(GridAds::EMPTY_VALUE)),
        };
        let result = api.update::<GridAds>(id, &value);
        self.apply_saved(id, &value, result)
    }
}

#[cfg(test)]
#[path = "../tests/editor/grid_tests.rs"]
mod tests;
