use std::collections::HashSet;
use std::marker::PhantomData;

use super::{RecordApi, RecordFamily};
use crate::error::{ConsoleError, ConsoleResult};
use crate::model::RecordId;

/// Operator-facing outcome of a save.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Info(s) | Notice::Error(s) => s,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

/// Owns the fetched list of one record family.
///
/// Loads replace the list wholesale; confirmed saves patch one record in
/// place. Loads and saves are not serialized against each other: a save that
/// resolves after a newer load patches whatever list is current then
/// (last writer wins).
#[derive(Debug)]
pub struct Repository<F: RecordFamily> {
    records: Vec<F::Record>,
    loading: bool,
    error: Option<String>,
    _family: PhantomData<F>,
}

impl<F: RecordFamily> Default for Repository<F> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            loading: false,
            error: None,
            _family: PhantomData,
        }
    }
}

impl<F: RecordFamily> Repository<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[F::Record] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Banner text of the last failed load.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn find(&self, id: &RecordId) -> Option<&F::Record> {
        self.records.iter().find(|r| F::id(r) == id)
    }

    pub fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|r| F::id(r) == id)
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Applies a finished fetch. Returns true when the list was replaced.
    pub fn apply_loaded(&mut self, result: ConsoleResult<Vec<F::Record>>) -> bool {
        self.loading = false;
        match result {
            Ok(fetched) => {
                let total = fetched.len();
                let mut seen = HashSet::new();
                let mut list: Vec<F::Record> = fetched
                    .into_iter()
                    .filter(|r| seen.insert(F::id(r).clone()))
                    .collect();
                if list.len() < total {
                    tracing::warn!(
                        family = F::NAME,
                        dropped = total - list.len(),
                        "duplicate ids in fetched list"
                    );
                }
                if let Some(cap) = F::LIST_CAP {
                    list.truncate(cap);
                }
                tracing::info!(family = F::NAME, count = list.len(), "records loaded");
                self.records = list;
                self.error = None;
                true
            }
            Err(err) => {
                tracing::warn!(family = F::NAME, error = %err, "load failed");
                self.records.clear();
                self.error = Some(F::FETCH_FAILURE.to_string());
                false
            }
        }
    }

    /// Rejects empty values before any request is built.
    pub fn validate_value(value: &str) -> ConsoleResult<()> {
        if value.is_empty() {
            return Err(ConsoleError::Validation(F::EMPTY_VALUE.to_string()));
        }
        Ok(())
    }

    /// Applies a finished update. Only a confirmed success touches the list,
    /// and then only the record whose id matches.
    pub fn apply_saved(&mut self, id: &RecordId, value: &str, result: ConsoleResult<()>) -> Notice {
        match result {
            Ok(()) => {
                match self.records.iter_mut().find(|r| F::id(r) == id) {
                    Some(record) => F::set_field(record, value),
                    None => tracing::warn!(
                        family = F::NAME,
                        id = %id,
                        "saved record is no longer in the list"
                    ),
                }
                tracing::info!(family = F::NAME, id = %id, "record saved");
                Notice::Info(F::SAVE_SUCCESS.to_string())
            }
            Err(err) => {
                tracing::warn!(family = F::NAME, id = %id, error = %err, "save failed");
                Notice::Error(err.notice(F::SAVE_FAILURE))
            }
        }
    }

    pub fn load(&mut self, api: &impl RecordApi) -> bool {
        self.begin_load();
        let result = api.fetch::<F>();
        self.apply_loaded(result)
    }

    pub fn save(&mut self, api: &impl RecordApi, id: &RecordId, value: &str) -> Notice {
        if let Err(err) = Self::validate_value(value) {
            return Notice::Error(err.notice(F::EMPTY_VALUE));
        }
        let result = api.update::<F>(id, value);
        self.apply_saved(id, value, result)
    }
}

#[cfg(test)]
#[path = "../tests/editor/repository_tests.rs"]
mod tests;
