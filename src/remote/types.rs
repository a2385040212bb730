//! DTOs and payload types for content API requests/responses.

#[derive(Debug, serde::Serialize)]
pub(super) struct LoginRequest<'a> {
    pub(super) user: &'a str,
    pub(super) password: &'a str,
}

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Acknowledgement returned by the ad updaters.
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct UpdateAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
pub(super) struct ErrorBody {
    #[serde(default)]
    pub(super) error: Option<String>,
}
