//! Login page with email/password sign-in and sign-up.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::status_banner::announce_error;
use crate::session;
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// Login page: one form, two actions. Sign-in authenticates directly
/// against the identity provider; sign-up registers through the backend and
/// then signs in. Successful auth is handled by the session watcher, which
/// redirects to the home view.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    // Already signed in: nothing to do here.
    Effect::new(move || {
        if session.get().principal().is_some() {
            navigate("/home", NavigateOptions::default());
        }
    });

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let display_name = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let do_sign_in = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result =
                session::sign_in(session, &email.get_untracked(), &password.get_untracked()).await;
            busy.set(false);
            if let Err(err) = result {
                announce_error(ui, "sign-in", &err);
            }
        });
    };

    let do_sign_up = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = session::sign_up(
                session,
                &email.get_untracked(),
                &password.get_untracked(),
                &display_name.get_untracked(),
            )
            .await;
            busy.set(false);
            if let Err(err) = result {
                announce_error(ui, "sign-up", &err);
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"SynthIoT"</h1>
            <form class="login-page__form" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                <input
                    class="login-page__input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="login-page__input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <input
                    class="login-page__input"
                    type="text"
                    placeholder="Display name (optional)"
                    prop:value=move || display_name.get()
                    on:input=move |ev| display_name.set(event_target_value(&ev))
                />
                <div class="login-page__actions">
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=do_sign_in
                    >
                        "Sign In"
                    </button>
                    <button class="btn" disabled=move || busy.get() on:click=do_sign_up>
                        "Sign Up"
                    </button>
                </div>
            </form>
            <p class="login-page__hint">
                "Tokens stay with the identity provider; the app requests a fresh one for every backend call."
            </p>
        </div>
    }
}
