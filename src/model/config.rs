use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConsoleConfig {
    pub version: u32,

    /// Base URL of the content API; endpoint paths are appended to it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// `tracing` filter directive used when `ADCONSOLE_LOG` is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_url: None,
            log_filter: None,
        }
    }
}

/// On-disk form of the session credential.
///
/// `user` may be missing while `token` is present (older files only stored the
/// token); readers must tolerate that.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionState {
    pub version: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logged_in_at: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            version: 1,
            token: None,
            user: None,
            logged_in_at: None,
        }
    }
}

/// Bearer token plus the display identity that goes with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionCredential {
    pub token: String,
    pub identity: Option<String>,
}

impl SessionCredential {
    pub fn display_identity(&self) -> &str {
        self.identity.as_deref().unwrap_or("user")
    }
}
