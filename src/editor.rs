//! Session-gated record editors: one repository, draft buffer and selection
//! per record family.

use crate::error::ConsoleResult;
use crate::model::RecordId;

mod drafts;
mod family;
mod flat;
mod grid;
mod posts;
mod repository;

pub use self::drafts::DraftBuffer;
pub use self::family::{AckPolicy, FlatAds, GridAds, Posts, RecordFamily};
pub use self::flat::FlatAdsEditor;
pub use self::grid::{GRID_DISPLAY_CAP, GridAdsEditor};
pub use self::posts::PostsEditor;
pub use self::repository::{Notice, Repository};

/// Transport seam for the repositories.
pub trait RecordApi {
    fn fetch<F: RecordFamily>(&self) -> ConsoleResult<Vec<F::Record>>;
    fn update<F: RecordFamily>(&self, id: &RecordId, value: &str) -> ConsoleResult<()>;
}

#[cfg(test)]
#[path = "tests/editor/fake_api.rs"]
pub(crate) mod fake_api;
