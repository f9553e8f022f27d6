//! REST API helpers for communicating with the SynthIoT backend.
//!
//! Every call except `sign_up` carries a freshly minted bearer token in the
//! `Authorization` header; the server scopes projects to the token's owner,
//! so the client never sends an explicit user filter.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ClientError;
use super::types::{CreateProjectRequest, GenerationRequest, Project, SignupRequest};

#[cfg(feature = "hydrate")]
use crate::config;

#[cfg(not(feature = "hydrate"))]
fn ssr_stub<T>() -> Result<T, ClientError> {
    Err(ClientError::Network("not available on server".to_owned()))
}

/// Register a new account via `POST /signup`. The backend creates the
/// identity-provider account and the profile record in one step.
///
/// # Errors
///
/// `Backend` with the server's `detail` message on rejection, `Network` on
/// transport failure.
pub async fn sign_up(req: &SignupRequest) -> Result<(), ClientError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/signup", config::API_BASE_URL);
        let resp = gloo_net::http::Request::post(&url)
            .json(req)
            .map_err(|e| ClientError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        if !resp.ok() {
            let text = resp.text().await.unwrap_or_default();
            return Err(ClientError::backend_from_body(&text, "Signup failed."));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        ssr_stub()
    }
}

/// Fetch the caller's projects via `GET /projects`.
///
/// A response that is not a JSON array is treated as an empty list rather
/// than an error, so a misbehaving server can never poison the view.
///
/// # Errors
///
/// `Backend` on non-2xx, `Network` on transport failure.
pub async fn fetch_projects(token: &str) -> Result<Vec<Project>, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/projects", config::API_BASE_URL);
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        if !resp.ok() {
            let text = resp.text().await.unwrap_or_default();
            return Err(ClientError::backend_from_body(
                &text,
                "Failed to fetch projects.",
            ));
        }
        let value: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Ok(parse_project_list(value))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        ssr_stub()
    }
}

/// Create a project via `POST /projects`, returning the server's copy.
///
/// # Errors
///
/// `Backend` with the server's `detail` message on rejection, `Network` on
/// transport failure.
pub async fn create_project(
    token: &str,
    req: &CreateProjectRequest,
) -> Result<Project, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/projects", config::API_BASE_URL);
        let resp = gloo_net::http::Request::post(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .json(req)
            .map_err(|e| ClientError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        if !resp.ok() {
            let text = resp.text().await.unwrap_or_default();
            return Err(ClientError::backend_from_body(
                &text,
                "Failed to create project.",
            ));
        }
        resp.json::<Project>()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, req);
        ssr_stub()
    }
}

/// Submit a generation prompt via `POST /projects/{id}/chat` and return the
/// generation id.
///
/// # Errors
///
/// `Backend` with the server's `detail` message on rejection, or when the
/// response carries no generation id; `Network` on transport failure.
pub async fn request_generation(
    token: &str,
    project_id: &str,
    req: &GenerationRequest,
) -> Result<String, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/projects/{project_id}/chat", config::API_BASE_URL);
        let resp = gloo_net::http::Request::post(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .json(req)
            .map_err(|e| ClientError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let text = resp.text().await.unwrap_or_default();
        if !resp.ok() {
            return Err(ClientError::backend_from_body(&text, "Generation failed."));
        }
        extract_generation_id(&text)
            .ok_or_else(|| ClientError::Backend("Generation failed.".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, project_id, req);
        ssr_stub()
    }
}

/// Fetch the generated CSV via `GET /projects/{id}/download?gen={gen_id}`.
///
/// # Errors
///
/// `Download` with status and body text on non-2xx, `Network` on transport
/// failure.
pub async fn download_csv(
    token: &str,
    project_id: &str,
    generation_id: &str,
) -> Result<Vec<u8>, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!(
            "{}/projects/{project_id}/download?gen={generation_id}",
            config::API_BASE_URL
        );
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Download { status, body });
        }
        resp.binary()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, project_id, generation_id);
        ssr_stub()
    }
}

/// Decode a project-list body, substituting an empty list for anything that
/// is not an array and skipping elements that do not decode as projects.
pub fn parse_project_list(value: serde_json::Value) -> Vec<Project> {
    let serde_json::Value::Array(items) = value else {
        return Vec::new();
    };
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}

/// Pull the `generation_id` out of a chat-endpoint response body.
pub fn extract_generation_id(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("generation_id")
        .and_then(serde_json::Value::as_str)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
}
