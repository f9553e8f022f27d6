//! View-scoped cancellation token.
//!
//! A page creates one token, cancels it in `on_cleanup`, and hands clones
//! to every async handler it spawns. Handlers re-check the token after each
//! await, so a response that lands after the view is gone is dropped
//! instead of mutating dead-view state.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cloneable cancellation flag shared between a view and its in-flight
/// requests.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
