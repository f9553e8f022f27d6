//! Transient status banner shown above the active view.
//!
//! Banners carry a severity tag and auto-clear after five seconds. The
//! sequence number handed out by `UiState::announce` guards the timer, so
//! a banner that was replaced early is never clobbered by the stale timer.

use leptos::prelude::*;

use crate::net::error::ClientError;
use crate::state::ui::{Severity, UiState};

const BANNER_MILLIS: u32 = 5_000;

/// Show a banner and schedule its auto-clear.
pub fn announce(ui: RwSignal<UiState>, severity: Severity, text: impl Into<String>) {
    let seq = {
        let text = text.into();
        let mut seq = 0;
        ui.update(|state| seq = state.announce(severity, text));
        seq
    };

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(BANNER_MILLIS).await;
            ui.update(|state| {
                state.clear_if(seq);
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = seq;
    }
}

/// Log a caught error and surface its short message as an error banner.
pub fn announce_error(ui: RwSignal<UiState>, context: &str, err: &ClientError) {
    log::error!("{context}: {err}");
    announce(ui, Severity::Error, err.user_message());
}

/// Banner element; renders nothing while no message is active.
#[component]
pub fn StatusBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        {move || {
            ui.get()
                .banner
                .map(|banner| {
                    let class = format!(
                        "status-banner status-banner--{}",
                        banner.severity.label()
                    );
                    view! { <div class=class role="status">{banner.text}</div> }
                })
        }}
    }
}
