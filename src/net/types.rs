//! Shared data types exchanged with the backend and the identity provider.

/// The authenticated end-user identity as issued by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Principal {
    pub uid: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Session record persisted in localStorage between visits.
///
/// Holds the long-lived refresh token; short-lived bearer tokens are never
/// stored and are minted fresh before every backend call.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionRecord {
    pub uid: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub refresh_token: String,
}

/// A project as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: String,
}

/// Body of `POST /signup`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
}

/// Body of `POST /projects`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Body of `POST /projects/{id}/chat`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub rows: u32,
    pub freq_seconds: u32,
}
