//! The content API prints a connection banner ahead of some JSON bodies.

use serde::de::DeserializeOwned;

use crate::error::{ConsoleError, ConsoleResult};

pub const BANNER: &str = "Connected successfully";

/// Removes the literal banner (and the whitespace after it) when present.
pub fn strip_banner(body: &str) -> &str {
    let body = body.trim_start();
    body.strip_prefix(BANNER).unwrap_or(body).trim()
}

/// Strips the banner and parses what is left. A parse failure is a transport
/// failure; it is never treated as an empty payload.
pub fn parse_payload<T: DeserializeOwned>(body: &str, label: &str) -> ConsoleResult<T> {
    serde_json::from_str(strip_banner(body))
        .map_err(|e| ConsoleError::transport(format!("parse {}", label), e))
}

#[cfg(test)]
#[path = "../tests/remote/banner_tests.rs"]
mod tests;
