use std::fs;
use std::path::{Path, PathBuf};

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::write_atomic;
use crate::error::{ConsoleError, ConsoleResult};
use crate::model::{SessionCredential, SessionState};

const SESSION_FILE: &str = "session.json";

/// Durable session credential shared by the whole process.
///
/// Writers: `write` is called by the login flow only; `clear` by logout and by
/// the access gate when verification fails. Everything else only reads.
#[derive(Clone, Debug)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(SESSION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_state(&self) -> ConsoleResult<SessionState> {
        if !self.path.exists() {
            return Ok(SessionState::default());
        }
        let bytes =
            fs::read(&self.path).map_err(|e| ConsoleError::storage("read session.json", e))?;
        let st: SessionState = serde_json::from_slice(&bytes)
            .map_err(|e| ConsoleError::storage("parse session.json", e))?;
        if st.version != 1 {
            return Err(ConsoleError::storage(
                "read session.json",
                format!("unsupported session version {}", st.version),
            ));
        }
        Ok(st)
    }

    /// The stored credential, if a non-empty token is present. The identity may
    /// be missing even then.
    pub fn credential(&self) -> ConsoleResult<Option<SessionCredential>> {
        let st = self.read_state()?;
        Ok(st
            .token
            .filter(|t| !t.is_empty())
            .map(|token| SessionCredential {
                token,
                identity: st.user.filter(|u| !u.is_empty()),
            }))
    }

    pub fn write(&self, token: &str, user: &str) -> ConsoleResult<()> {
        let st = SessionState {
            version: 1,
            token: Some(token.to_string()),
            user: Some(user.to_string()),
            logged_in_at: OffsetDateTime::now_utc().format(&Rfc3339).ok(),
        };
        let bytes = serde_json::to_vec_pretty(&st)
            .map_err(|e| ConsoleError::storage("serialize session", e))?;
        write_atomic(&self.path, &bytes)?;
        tracing::info!(user, "session stored");
        Ok(())
    }

    /// Drops token and identity together.
    pub fn clear(&self) -> ConsoleResult<()> {
        if !self.path.exists() {
            return Ok(());
        }
        fs::remove_file(&self.path)
            .map_err(|e| ConsoleError::storage("remove session.json", e))?;
        tracing::info!("session cleared");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/store/session_tests.rs"]
mod tests;
