use serde::{Deserialize, Serialize};

/// Placeholder rendered for absent optional fields
pub const UNKNOWN: &str = "?";

/// A registry entry as returned by `GET /ont`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ont {
    pub name: String,
    /// Canonical IRI of the entry
    pub uri: String,
    pub version: String,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Ont {
    pub fn owner_name_or_unknown(&self) -> &str {
        self.owner_name.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn visibility_or_unknown(&self) -> &str {
        self.visibility.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn status_or_unknown(&self) -> &str {
        self.status.as_deref().unwrap_or(UNKNOWN)
    }
}

/// Authentication request
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
}

/// Authentication response
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// Outcome of a login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// HTTP 200 with a token
    Token(String),
    /// Any other status, with the raw body
    Rejected { status: u16, body: String },
}

/// Body of `PUT /ont`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub iri: String,
    pub version: String,
    pub user_name: String,
    pub visibility: String,
    pub status: String,
}

/// Body of `DELETE /ont`; without a version the whole entry goes
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub iri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Status and body of a write request, kept raw for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReply {
    pub status: u16,
    pub body: String,
}

impl RawReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
