//! Login and session verification against `security/login.php`.

use super::http_client::{bearer, error_message};
use super::*;
use crate::gate::SessionVerifier;

const LOGIN_PATH: &str = "security/login.php";

impl RemoteClient {
    /// Exchanges operator credentials for a bearer token.
    pub fn login(&self, user: &str, password: &str) -> ConsoleResult<String> {
        let raw = self.send_text(
            self.client
                .post(self.url(LOGIN_PATH))
                .json(&LoginRequest { user, password }),
            "login",
        )?;

        let parsed = parse_payload::<LoginResponse>(&raw.body, "login response");
        if !raw.status.is_success() {
            let msg = parsed
                .ok()
                .and_then(|r| r.error)
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| "Invalid credentials".to_string());
            tracing::info!(user, status = raw.status.as_u16(), "login rejected");
            return Err(ConsoleError::AuthRejected(msg));
        }

        match parsed?.token.filter(|t| !t.is_empty()) {
            Some(token) => {
                tracing::info!(user, "login accepted");
                Ok(token)
            }
            None => Err(ConsoleError::ServerRejected(
                "Token is missing in the response".to_string(),
            )),
        }
    }

    /// Any 2xx means the token is still good.
    pub fn verify_session(&self, token: &str) -> ConsoleResult<()> {
        let raw = self.send_text(
            self.client
                .get(self.url(LOGIN_PATH))
                .header(reqwest::header::AUTHORIZATION, bearer(token)),
            "verify session",
        )?;
        if raw.status.is_success() {
            return Ok(());
        }
        let msg = error_message(&raw.body)
            .unwrap_or_else(|| format!("session rejected (status {})", raw.status.as_u16()));
        Err(ConsoleError::AuthRejected(msg))
    }
}

impl SessionVerifier for RemoteClient {
    fn verify(&self, token: &str) -> ConsoleResult<()> {
        self.verify_session(token)
    }
}
