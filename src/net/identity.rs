//! REST client for the identity provider.
//!
//! The client uses exactly three provider operations: password sign-in,
//! forced token refresh, and (implicitly) sign-out by discarding the local
//! session record. Account creation goes through the backend's `/signup`
//! endpoint instead, which provisions the provider account server-side.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since authentication is only
//! meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use super::error::ClientError;
use super::types::Principal;

#[cfg(feature = "hydrate")]
use crate::config;

/// A fully established provider session: who signed in plus the long-lived
/// refresh token. The sign-in response's bearer token is discarded; every
/// backend call mints its own through `refresh_id_token`.
#[derive(Clone, Debug)]
pub struct ProviderSession {
    pub principal: Principal,
    pub refresh_token: String,
}

/// A freshly minted bearer token and the rotated refresh token that
/// replaces the one used to mint it.
#[derive(Clone, Debug)]
pub struct MintedToken {
    pub id_token: String,
    pub refresh_token: String,
}

#[cfg(feature = "hydrate")]
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct PasswordSignInResponse {
    refresh_token: String,
    local_id: String,
    email: String,
    #[serde(default)]
    display_name: Option<String>,
}

// The token endpoint answers in snake_case, unlike the accounts endpoint.
#[cfg(feature = "hydrate")]
#[derive(Debug, serde::Deserialize)]
struct RefreshTokenResponse {
    id_token: String,
    refresh_token: String,
    user_id: String,
}

/// Authenticate with email and password.
///
/// # Errors
///
/// `Auth` with a human-readable message on provider rejection, `Network`
/// on transport failure.
pub async fn password_sign_in(email: &str, password: &str) -> Result<ProviderSession, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!(
            "{}/accounts:signInWithPassword?key={}",
            config::IDENTITY_ACCOUNTS_URL,
            config::IDENTITY_API_KEY
        );
        let body = serde_json::json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });
        let resp = gloo_net::http::Request::post(&url)
            .json(&body)
            .map_err(|e| ClientError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        if !resp.ok() {
            let text = resp.text().await.unwrap_or_default();
            return Err(auth_error_from_body(&text));
        }
        let body: PasswordSignInResponse = resp
            .json()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Ok(ProviderSession {
            principal: Principal {
                uid: body.local_id,
                email: body.email,
                display_name: body.display_name.filter(|n| !n.is_empty()),
            },
            refresh_token: body.refresh_token,
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ClientError::Network("not available on server".to_owned()))
    }
}

/// Exchange a refresh token for a fresh bearer token.
///
/// Called before every backend request; the provider rotates the refresh
/// token on each exchange and the caller must persist the returned one.
///
/// # Errors
///
/// `Auth` if the refresh token is no longer accepted, `Network` on
/// transport failure.
pub async fn refresh_id_token(refresh_token: &str) -> Result<MintedToken, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!(
            "{}/v1/token?key={}",
            config::IDENTITY_TOKEN_URL,
            config::IDENTITY_API_KEY
        );
        let body = serde_json::json!({
            "grant_type": "refresh_token",
            "refresh_token": refresh_token,
        });
        let resp = gloo_net::http::Request::post(&url)
            .json(&body)
            .map_err(|e| ClientError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        if !resp.ok() {
            let text = resp.text().await.unwrap_or_default();
            return Err(auth_error_from_body(&text));
        }
        let body: RefreshTokenResponse = resp
            .json()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let _ = body.user_id;
        Ok(MintedToken {
            id_token: body.id_token,
            refresh_token: body.refresh_token,
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = refresh_token;
        Err(ClientError::Network("not available on server".to_owned()))
    }
}

/// Convert a provider error body into an `Auth` error with a friendly
/// message.
pub fn auth_error_from_body(body: &str) -> ClientError {
    let code = parse_provider_error_code(body);
    ClientError::Auth(friendly_auth_message(code.as_deref()))
}

/// Extract the provider's error code (e.g. `EMAIL_NOT_FOUND`) from an
/// error response body.
pub fn parse_provider_error_code(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}

/// Map a provider error code to a short human-readable message.
///
/// Codes sometimes arrive with a suffix (`TOO_MANY_ATTEMPTS_TRY_LATER :
/// ...`), so matching is by prefix.
pub fn friendly_auth_message(code: Option<&str>) -> String {
    let Some(code) = code else {
        return "Sign in failed.".to_owned();
    };
    let msg = if code.starts_with("EMAIL_NOT_FOUND") {
        "No account exists for that email."
    } else if code.starts_with("INVALID_PASSWORD") || code.starts_with("INVALID_LOGIN_CREDENTIALS")
    {
        "Incorrect email or password."
    } else if code.starts_with("USER_DISABLED") {
        "This account has been disabled."
    } else if code.starts_with("TOO_MANY_ATTEMPTS_TRY_LATER") {
        "Too many attempts. Try again later."
    } else if code.starts_with("EMAIL_EXISTS") {
        "An account already exists for that email."
    } else if code.starts_with("TOKEN_EXPIRED")
        || code.starts_with("INVALID_REFRESH_TOKEN")
        || code.starts_with("USER_NOT_FOUND")
    {
        "Your session has expired. Please sign in again."
    } else {
        return format!("Sign in failed ({code}).");
    };
    msg.to_owned()
}
