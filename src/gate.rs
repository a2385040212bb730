//! Access gate in front of every protected view and command.

use crate::error::{ConsoleError, ConsoleResult};
use crate::store::SessionStore;

/// Checks a bearer token with the content API.
pub trait SessionVerifier {
    fn verify(&self, token: &str) -> ConsoleResult<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Authenticated,
    Unauthenticated,
}

/// First half of an evaluation. While a `Verify` step is outstanding the
/// caller renders neither the protected view nor the redirect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateStep {
    Decided(GateDecision),
    Verify { token: String },
}

pub struct AccessGate;

impl AccessGate {
    /// Reads the session store. No token means no network call.
    pub fn begin(store: &SessionStore) -> GateStep {
        match store.credential() {
            Ok(Some(cred)) => GateStep::Verify { token: cred.token },
            Ok(None) => {
                tracing::info!("gate: no session token");
                GateStep::Decided(GateDecision::Unauthenticated)
            }
            Err(err) => {
                tracing::warn!(error = %err, "gate: unreadable session store");
                wipe(store);
                GateStep::Decided(GateDecision::Unauthenticated)
            }
        }
    }

    /// Applies the verification outcome. Any failure, rejection or transport,
    /// wipes the session before the caller redirects to login.
    pub fn finish(store: &SessionStore, result: ConsoleResult<()>) -> GateDecision {
        match result {
            Ok(()) => {
                tracing::info!("gate: session verified");
                GateDecision::Authenticated
            }
            Err(err) => {
                match &err {
                    ConsoleError::AuthRejected(_) => {
                        tracing::info!(error = %err, "gate: session rejected")
                    }
                    _ => tracing::warn!(error = %err, "gate: verification failed"),
                }
                wipe(store);
                GateDecision::Unauthenticated
            }
        }
    }

    /// Both halves back to back, for callers that can block.
    pub fn evaluate(store: &SessionStore, verifier: &impl SessionVerifier) -> GateDecision {
        match Self::begin(store) {
            GateStep::Decided(decision) => decision,
            GateStep::Verify { token } => Self::finish(store, verifier.verify(&token)),
        }
    }
}

fn wipe(store: &SessionStore) {
    if let Err(err) = store.clear() {
        tracing::error!(error = %err, "gate: failed to clear session store");
    }
}

#[cfg(test)]
#[path = "tests/gate_tests.rs"]
mod tests;
