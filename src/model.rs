mod config;
mod ids;
mod records;

pub use self::config::{ConsoleConfig, SessionCredential, SessionState};
pub use self::ids::RecordId;
pub use self::records::{FlatAd, GridAd, Post};
