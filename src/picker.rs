//! Navigation affordances over a repository's current list. Nothing here
//! touches persistence.

mod dropdown;
mod search;

pub use self::dropdown::Dropdown;
pub use self::search::SearchFilter;
