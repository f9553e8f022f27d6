//! Generation view: submit a prompt against a project, then download the
//! resulting CSV artifact.

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::status_banner::{announce, announce_error};
use crate::net::api;
use crate::net::error::ClientError;
use crate::net::types::GenerationRequest;
use crate::session;
use crate::state::generation::{GenerationPhase, GenerationState};
use crate::state::session::SessionState;
use crate::state::ui::{Severity, UiState};
use crate::util::cancel::CancelToken;
use crate::util::download;

/// Generation page for one project, at `/projects/{id}/chat`.
///
/// A submission walks `Idle -> Submitting -> AwaitingDownload -> Done`,
/// landing in `Failed` if either step errors. The submit control stays
/// disabled for the whole flight. Both steps mint their own bearer token;
/// the download's validity window is independent of the submission's.
#[component]
pub fn GeneratePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let generation = expect_context::<RwSignal<GenerationState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    // Each visit starts a fresh submission lifecycle.
    generation.set(GenerationState::default());

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    Effect::new(move || {
        let state = session.get();
        if !state.is_loading() && state.principal().is_none() {
            navigate("/", NavigateOptions::default());
        }
    });

    let prompt = RwSignal::new(String::new());
    let rows = RwSignal::new(24_u32);
    let freq_seconds = RwSignal::new(3600_u32);

    let on_submit = {
        let cancel = cancel.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let text = match validate_prompt(&prompt.get_untracked()) {
                Ok(text) => text,
                Err(err) => {
                    announce_error(ui, "generation", &err);
                    return;
                }
            };
            // The state machine is the sole duplicate-submission gate.
            let mut started = false;
            generation.update(|g| started = g.begin_submit());
            if !started {
                return;
            }

            let project_id = params.get_untracked().get("id").unwrap_or_default();
            let request = GenerationRequest {
                prompt: text,
                rows: rows.get_untracked(),
                freq_seconds: freq_seconds.get_untracked(),
            };
            let cancel = cancel.clone();
            leptos::task::spawn_local(run_generation(
                session, generation, ui, cancel, project_id, request,
            ));
        }
    };

    let project_label = move || {
        let id = params.get().get("id").unwrap_or_default();
        format!("Generate CSV for project {id}")
    };

    let submit_label = move || {
        if generation.get().in_flight() {
            "Generating..."
        } else {
            "Generate & Download CSV"
        }
    };

    view! {
        <div class="generate-page">
            <header class="generate-page__header">
                <h2>{project_label}</h2>
                <a class="generate-page__back" href="/home">
                    "Back"
                </a>
            </header>

            <form class="generate-page__form" on:submit=on_submit>
                <textarea
                    class="generate-page__prompt"
                    placeholder="Example: Generate hourly temperature for 2025-11-01 in Mumbai, clear weather, 24 rows"
                    prop:value=move || prompt.get()
                    on:input=move |ev| prompt.set(event_target_value(&ev))
                    rows=4
                ></textarea>

                <div class="generate-page__params">
                    <label>
                        "Rows:"
                        <input
                            type="number"
                            min=1
                            prop:value=move || rows.get().to_string()
                            on:input=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                                    rows.set(value.max(1));
                                }
                            }
                        />
                    </label>
                    <label>
                        "Freq (s):"
                        <input
                            type="number"
                            min=1
                            prop:value=move || freq_seconds.get().to_string()
                            on:input=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                                    freq_seconds.set(value.max(1));
                                }
                            }
                        />
                    </label>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || !generation.get().can_submit()
                    >
                        {submit_label}
                    </button>
                </div>
            </form>

            {move || {
                (generation.get().phase == GenerationPhase::Done)
                    .then(|| view! { <p class="generate-page__done">"Artifact downloaded."</p> })
            }}
        </div>
    }
}

/// Validate and trim a generation prompt. A blank prompt is rejected here,
/// before any network call is issued.
fn validate_prompt(prompt: &str) -> Result<String, ClientError> {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return Err(ClientError::Validation("Please enter a prompt.".to_owned()));
    }
    Ok(trimmed.to_owned())
}

/// Drive one submission through both steps, checking the view's cancel
/// token after every await so a late response cannot touch dead state.
async fn run_generation(
    session: RwSignal<SessionState>,
    generation: RwSignal<GenerationState>,
    ui: RwSignal<UiState>,
    cancel: CancelToken,
    project_id: String,
    request: GenerationRequest,
) {
    let submitted: Result<String, ClientError> = async {
        let token = session::mint_token(session).await?;
        api::request_generation(&token, &project_id, &request).await
    }
    .await;
    if cancel.is_cancelled() {
        return;
    }
    let generation_id = match submitted {
        Ok(id) => id,
        Err(err) => {
            generation.update(GenerationState::fail);
            announce_error(ui, "generation", &err);
            return;
        }
    };
    generation.update(|g| {
        g.accept_generation(generation_id.clone());
    });
    announce(ui, Severity::Success, "Generation ready. Starting download...");

    // Fresh token for the download step.
    let downloaded: Result<Vec<u8>, ClientError> = async {
        let token = session::mint_token(session).await?;
        api::download_csv(&token, &project_id, &generation_id).await
    }
    .await;
    if cancel.is_cancelled() {
        return;
    }
    let bytes = match downloaded {
        Ok(bytes) => bytes,
        Err(err) => {
            generation.update(GenerationState::fail);
            announce_error(ui, "download", &err);
            return;
        }
    };

    let filename = download::artifact_filename(&project_id, &generation_id);
    match download::save_csv(&bytes, &filename) {
        Ok(()) => {
            generation.update(GenerationState::complete);
            announce(ui, Severity::Success, "Download started.");
        }
        Err(err) => {
            generation.update(GenerationState::fail);
            announce_error(ui, "download", &err);
        }
    }
}
