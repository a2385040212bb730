use thiserror::Error;

pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Failures surfaced by the console core.
///
/// None of these are fatal: each is handled where the call was issued and
/// turned into a banner or a notice for the operator.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Missing, invalid or expired session token.
    #[error("{0}")]
    AuthRejected(String),

    /// Network failure, unreadable body, or a body that is not the expected JSON.
    #[error("{context}: {message}")]
    Transport { context: String, message: String },

    /// Input rejected locally before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// The API answered but refused the change.
    #[error("{0}")]
    ServerRejected(String),

    #[error("{context}: {message}")]
    Storage { context: String, message: String },

    #[error("{0}")]
    Config(String),
}

impl ConsoleError {
    pub fn transport(context: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Transport {
            context: context.into(),
            message: err.to_string(),
        }
    }

    pub fn storage(context: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Storage {
            context: context.into(),
            message: err.to_string(),
        }
    }

    /// Operator-facing text. Transport details go to the log, not the screen.
    pub fn notice(&self, fallback: &str) -> String {
        match self {
            Self::AuthRejected(msg) | Self::Validation(msg) | Self::ServerRejected(msg) => {
                if msg.is_empty() {
                    fallback.to_string()
                } else {
                    msg.clone()
                }
            }
            Self::Transport { .. } => fallback.to_string(),
            Self::Storage { .. } | Self::Config(_) => self.to_string(),
        }
    }
}
