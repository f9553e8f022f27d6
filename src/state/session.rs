//! Session state machine.
//!
//! The auth lifecycle is an explicit machine rather than an ambient
//! singleton: `Loading` until the persisted session (if any) has been
//! validated at startup, then `Unauthenticated` or `Authenticated`. Each
//! phase change maps to exactly one side effect (navigation plus banner),
//! computed by `phase_effect` and executed by the single watcher installed
//! in `App`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Principal;
use crate::state::ui::Severity;

/// Live binding of a principal to its long-lived refresh token. Short-lived
/// bearer tokens are minted per call and never stored here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub principal: Principal,
    pub refresh_token: String,
}

/// Where the session machine currently stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Startup: the persisted session is still being resolved. Protected
    /// views must not mount and no backend call may be issued.
    #[default]
    Loading,
    Unauthenticated,
    Authenticated(Session),
}

/// Session state provided via context to all views.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub phase: SessionPhase,
}

impl SessionState {
    pub fn authenticated(session: Session) -> Self {
        Self {
            phase: SessionPhase::Authenticated(session),
        }
    }

    pub fn unauthenticated() -> Self {
        Self {
            phase: SessionPhase::Unauthenticated,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SessionPhase::Loading
    }

    pub fn principal(&self) -> Option<&Principal> {
        match &self.phase {
            SessionPhase::Authenticated(session) => Some(&session.principal),
            _ => None,
        }
    }

    pub fn refresh_token(&self) -> Option<&str> {
        match &self.phase {
            SessionPhase::Authenticated(session) => Some(session.refresh_token.as_str()),
            _ => None,
        }
    }

    /// Replace the stored refresh token after a mint rotated it. No-op when
    /// signed out (the mint raced a sign-out).
    pub fn rotate_refresh_token(&mut self, refresh_token: String) {
        if let SessionPhase::Authenticated(session) = &mut self.phase {
            session.refresh_token = refresh_token;
        }
    }
}

/// The single side effect a phase transition produces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhaseEffect {
    pub navigate_to: Option<&'static str>,
    pub banner: Option<(Severity, &'static str)>,
}

/// Map a phase transition to its side effect.
///
/// Arriving in `Authenticated` redirects to the home view; arriving in
/// `Unauthenticated` returns to the login view with an informational note.
/// Re-entering the same kind of phase (e.g. a token rotation inside
/// `Authenticated`) produces nothing, which keeps repeated sign-outs
/// silent and idempotent.
pub fn phase_effect(from: &SessionPhase, to: &SessionPhase) -> PhaseEffect {
    match (from, to) {
        (SessionPhase::Authenticated(_), SessionPhase::Authenticated(_))
        | (SessionPhase::Unauthenticated, SessionPhase::Unauthenticated)
        | (_, SessionPhase::Loading) => PhaseEffect::default(),
        (_, SessionPhase::Authenticated(_)) => PhaseEffect {
            navigate_to: Some("/home"),
            banner: Some((Severity::Success, "Signed in. Redirecting...")),
        },
        (SessionPhase::Loading, SessionPhase::Unauthenticated) => PhaseEffect {
            navigate_to: Some("/"),
            banner: Some((Severity::Info, "No user signed in. Please log in.")),
        },
        (SessionPhase::Authenticated(_), SessionPhase::Unauthenticated) => PhaseEffect {
            navigate_to: Some("/"),
            banner: Some((Severity::Info, "Signed out.")),
        },
    }
}
