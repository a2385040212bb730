use super::*;

pub(super) struct RawResponse {
    pub(super) status: reqwest::StatusCode,
    pub(super) body: String,
}

impl RemoteClient {
    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends the request and reads the whole body as text; the status is left
    /// for the caller to judge.
    pub(super) fn send_text(
        &self,
        req: reqwest::blocking::RequestBuilder,
        label: &str,
    ) -> ConsoleResult<RawResponse> {
        let resp = req.send().map_err(|e| ConsoleError::transport(label, e))?;
        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| ConsoleError::transport(format!("{} body", label), e))?;
        tracing::debug!(label, status = status.as_u16(), bytes = body.len(), "api response");
        Ok(RawResponse { status, body })
    }
}

pub(super) fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Pulls `error` out of a (possibly banner-prefixed) JSON error body.
pub(super) fn error_message(body: &str) -> Option<String> {
    parse_payload::<ErrorBody>(body, "error body")
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.is_empty())
}
