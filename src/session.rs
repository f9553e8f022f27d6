//! Session manager: sign-up, sign-in, sign-out, and per-call token minting.
//!
//! The manager owns the bridge between the identity provider (`net::identity`),
//! the persisted session record in localStorage, and the reactive
//! `SessionState` context. All session mutations funnel through here so the
//! phase watcher in `app` sees every transition.
//!
//! Tokens are deliberately never cached: `mint_token` performs a forced
//! refresh before every backend call and rotates the stored refresh token.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{RwSignal, Set, Update, WithUntracked};

use crate::net::error::ClientError;
use crate::net::identity;
use crate::net::types::{Principal, SessionRecord, SignupRequest};
use crate::state::session::{Session, SessionState};

/// Register a new account and sign it in.
///
/// The backend's `/signup` creates the identity-provider account; the
/// follow-up client-side sign-in makes the session machine fire as usual.
///
/// # Errors
///
/// `Validation` if email or password is empty, `Backend` if registration is
/// rejected, and `Auth` if registration succeeded but the follow-up sign-in
/// failed (the account exists; the user must sign in manually).
pub async fn sign_up(
    session: RwSignal<SessionState>,
    email: &str,
    password: &str,
    display_name: &str,
) -> Result<(), ClientError> {
    validate_credentials(email, password)?;

    let request = SignupRequest {
        email: email.to_owned(),
        password: password.to_owned(),
        display_name: normalize_display_name(display_name),
    };
    crate::net::api::sign_up(&request).await?;

    // The account now exists on the provider; a sign-in failure here is the
    // inconsistent half-registered case, reported as an auth error.
    sign_in(session, email, password).await.map_err(|err| {
        log::error!("post-signup sign-in failed: {err}");
        ClientError::Auth(
            "Account created, but automatic sign-in failed. Please sign in manually.".to_owned(),
        )
    })
}

/// Authenticate against the identity provider and establish the session.
///
/// # Errors
///
/// `Auth` on provider rejection, `Network` on transport failure.
pub async fn sign_in(
    session: RwSignal<SessionState>,
    email: &str,
    password: &str,
) -> Result<(), ClientError> {
    let provider = identity::password_sign_in(email, password).await?;
    let record = SessionRecord {
        uid: provider.principal.uid.clone(),
        email: provider.principal.email.clone(),
        display_name: provider.principal.display_name.clone(),
        refresh_token: provider.refresh_token.clone(),
    };
    store_record(&record);
    session.set(SessionState::authenticated(Session {
        principal: provider.principal,
        refresh_token: provider.refresh_token,
    }));
    Ok(())
}

/// Terminate the session. Idempotent: signing out while already signed out
/// just re-asserts the unauthenticated phase.
pub fn sign_out(session: RwSignal<SessionState>) {
    clear_record();
    session.set(SessionState::unauthenticated());
}

/// Mint a fresh bearer token for one backend call.
///
/// Forces a refresh through the identity provider and persists the rotated
/// refresh token.
///
/// # Errors
///
/// `Auth` if no session is active or the provider rejects the refresh
/// token, `Network` on transport failure.
pub async fn mint_token(session: RwSignal<SessionState>) -> Result<String, ClientError> {
    let refresh_token = session
        .with_untracked(|s| s.refresh_token().map(str::to_owned))
        .ok_or_else(|| ClientError::Auth("You are signed out.".to_owned()))?;

    let minted = identity::refresh_id_token(&refresh_token).await?;

    session.update(|s| s.rotate_refresh_token(minted.refresh_token.clone()));
    if let Some(record) = session.with_untracked(session_record) {
        store_record(&record);
    }
    Ok(minted.id_token)
}

/// Resolve the persisted session at startup.
///
/// Runs once from `App`. While it is in flight the session stays in
/// `Loading` and the shell shows the loading gate; no protected view can
/// mount and no backend call can be issued until it lands.
pub fn resolve_initial(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let Some(record) = load_record() else {
                session.set(SessionState::unauthenticated());
                return;
            };
            // Validate the stored refresh token by minting once.
            match identity::refresh_id_token(&record.refresh_token).await {
                Ok(minted) => {
                    let record = SessionRecord {
                        refresh_token: minted.refresh_token,
                        ..record
                    };
                    store_record(&record);
                    session.set(SessionState::authenticated(record_to_session(record)));
                }
                Err(err) => {
                    log::warn!("persisted session rejected: {err}");
                    clear_record();
                    session.set(SessionState::unauthenticated());
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        // SSR renders the loading gate; hydration resolves the real phase.
        let _ = session;
    }
}

/// Reject empty credentials before anything reaches the network.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), ClientError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ClientError::Validation(
            "Email and password required.".to_owned(),
        ));
    }
    Ok(())
}

/// Trim the optional display name, mapping blank to `None`.
pub fn normalize_display_name(display_name: &str) -> Option<String> {
    let trimmed = display_name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

fn record_to_session(record: SessionRecord) -> Session {
    Session {
        principal: Principal {
            uid: record.uid,
            email: record.email,
            display_name: record.display_name,
        },
        refresh_token: record.refresh_token,
    }
}

fn session_record(state: &SessionState) -> Option<SessionRecord> {
    let refresh_token = state.refresh_token()?.to_owned();
    let principal = state.principal()?;
    Some(SessionRecord {
        uid: principal.uid.clone(),
        email: principal.email.clone(),
        display_name: principal.display_name.clone(),
        refresh_token,
    })
}

// ---------------------------------------------------------------
// localStorage persistence
// ---------------------------------------------------------------

#[cfg(feature = "hydrate")]
fn load_record() -> Option<SessionRecord> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(crate::config::SESSION_STORAGE_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

#[cfg(feature = "hydrate")]
fn store_record(record: &SessionRecord) {
    let Ok(raw) = serde_json::to_string(record) else {
        return;
    };
    if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
        let _ = storage.set_item(crate::config::SESSION_STORAGE_KEY, &raw);
    }
}

#[cfg(feature = "hydrate")]
fn clear_record() {
    if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
        let _ = storage.remove_item(crate::config::SESSION_STORAGE_KEY);
    }
}

#[cfg(not(feature = "hydrate"))]
fn store_record(record: &SessionRecord) {
    let _ = record;
}

#[cfg(not(feature = "hydrate"))]
fn clear_record() {}
