//! Root application component with routing, context providers, and the
//! session phase watcher.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};
use leptos_router::NavigateOptions;

use crate::components::status_banner::{StatusBanner, announce};
use crate::pages::{generate::GeneratePage, login::LoginPage, projects::ProjectsPage};
use crate::state::generation::GenerationState;
use crate::state::projects::ProjectsState;
use crate::state::session::{SessionPhase, SessionState, phase_effect};
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, kicks off the initial session
/// resolution, and gates the routes behind the loading phase so no
/// protected view mounts before the session is resolved.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let projects = RwSignal::new(ProjectsState::default());
    let generation = RwSignal::new(GenerationState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(projects);
    provide_context(generation);
    provide_context(ui);

    crate::session::resolve_initial(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/synthiot-client.css"/>
        <Title text="SynthIoT"/>

        <Router>
            <SessionWatcher/>
            <main class="app-shell">
                <StatusBanner/>
                <Show
                    when=move || !session.get().is_loading()
                    fallback=|| view! { <div class="app-shell__loading">"Loading..."</div> }
                >
                    <Routes fallback=|| view! { <FallbackRedirect/> }>
                        <Route path=StaticSegment("") view=LoginPage/>
                        <Route path=StaticSegment("home") view=ProjectsPage/>
                        <Route
                            path=(StaticSegment("projects"), ParamSegment("id"), StaticSegment("chat"))
                            view=GeneratePage
                        />
                    </Routes>
                </Show>
            </main>
        </Router>
    }
}

/// The one listener on the session machine, installed for the app's
/// lifetime. Every phase transition is mapped to its single side effect
/// (navigation plus banner) by `phase_effect`.
#[component]
fn SessionWatcher() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    Effect::new(move |prev: Option<SessionPhase>| {
        let phase = session.get().phase;
        let from = prev.unwrap_or(SessionPhase::Loading);
        let effect = phase_effect(&from, &phase);
        if let Some((severity, text)) = effect.banner {
            announce(ui, severity, text);
        }
        if let Some(target) = effect.navigate_to {
            navigate(target, NavigateOptions::default());
        }
        phase
    });
}

/// Unmatched paths land here: authenticated principals go home, everyone
/// else goes to the login view.
#[component]
fn FallbackRedirect() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if state.is_loading() {
            return;
        }
        let target = if state.principal().is_some() { "/home" } else { "/" };
        navigate(
            target,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });
}
