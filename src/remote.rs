use crate::error::{ConsoleError, ConsoleResult};

mod banner;
mod http_client;
mod identity;
mod records;
mod types;

pub use self::banner::{BANNER, parse_payload, strip_banner};
pub use self::types::*;

/// Blocking client for the content API.
///
/// Every call is a single attempt with the platform default timeout; callers
/// decide what a failure means for their state.
#[derive(Clone)]
pub struct RemoteClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(base_url: &str) -> ConsoleResult<Self> {
        let base_url = base_url.trim();
        if base_url.is_empty() {
            return Err(ConsoleError::Config("api url is empty".to_string()));
        }
        let client = reqwest::blocking::Client::builder()
            .user_agent("adconsole")
            .build()
            .map_err(|e| ConsoleError::transport("build http client", e))?;
        Ok(Self {
            base_url: normalize_base_url(base_url),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Endpoint paths are relative (`ads/fetcher/...`), so the base must end in `/`.
pub(crate) fn normalize_base_url(base_url: &str) -> String {
    if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    }
}
