use std::collections::HashMap;

use crate::model::RecordId;

/// Pending edits keyed by record id. Independent of the fetched list until a
/// save is confirmed, and never cleared by a save.
#[derive(Clone, Debug, Default)]
pub struct DraftBuffer {
    values: HashMap<RecordId, String>,
}

impl DraftBuffer {
    pub fn get(&self, id: &RecordId) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// Draft text for display; missing entries read as empty.
    pub fn value(&self, id: &RecordId) -> &str {
        self.get(id).unwrap_or("")
    }

    pub fn set(&mut self, id: &RecordId, value: impl Into<String>) {
        self.values.insert(id.clone(), value.into());
    }

    /// Seeds an entry only when the record has none yet.
    pub fn seed_missing(&mut self, id: &RecordId, value: &str) {
        self.values
            .entry(id.clone())
            .or_insert_with(|| value.to_string());
    }

    /// Replaces every entry with values taken from a fresh fetch.
    pub fn reseed_all<'a>(&mut self, seeds: impl IntoIterator<Item = (&'a RecordId, &'a str)>) {
        self.values = seeds
            .into_iter()
            .map(|(id, v)| (id.clone(), v.to_string()))
            .collect();
    }
}
