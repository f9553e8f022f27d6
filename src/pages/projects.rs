//! Home view: the principal's project list plus a creation form.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::project_card::ProjectCard;
use crate::components::status_banner::{announce, announce_error};
use crate::net::api;
use crate::net::error::ClientError;
use crate::net::types::{CreateProjectRequest, Project};
use crate::session;
use crate::state::projects::ProjectsState;
use crate::state::session::SessionState;
use crate::state::ui::{Severity, UiState};
use crate::util::cancel::CancelToken;

/// Project list page. Fetches the list exactly once per distinct
/// authenticated principal; a failed fetch keeps the previous list visible.
/// Redirects to the login view when signed out.
#[component]
pub fn ProjectsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let projects = expect_context::<RwSignal<ProjectsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    // Each mount fetches anew; within a mount, once per distinct principal.
    projects.update(ProjectsState::reset_fetch_marker);

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

    // One fetch per principal; tracks only the session signal.
    Effect::new({
        let cancel = cancel.clone();
        move || {
            let Some(uid) = session.with(|s| s.principal().map(|p| p.uid.clone())) else {
                return;
            };
            if !projects.with_untracked(|p| p.needs_fetch(&uid)) {
                return;
            }
            projects.update(|p| {
                p.mark_fetched(uid);
                p.loading = true;
            });
            let cancel = cancel.clone();
            leptos::task::spawn_local(async move {
                let result = fetch_list(session).await;
                if cancel.is_cancelled() {
                    return;
                }
                projects.update(|p| p.loading = false);
                match result {
                    Ok(items) => projects.update(|p| p.replace(items)),
                    // Stale-but-visible: the prior list stays on screen.
                    Err(err) => announce_error(ui, "fetch projects", &err),
                }
            });
        }
    });

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let on_create = {
        let cancel = cancel.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if projects.with_untracked(|p| p.create_pending) {
                return;
            }
            let trimmed = match validate_project_name(&name.get_untracked()) {
                Ok(trimmed) => trimmed,
                Err(err) => {
                    announce_error(ui, "create project", &err);
                    return;
                }
            };
            let request = CreateProjectRequest {
                name: trimmed,
                description: normalize_description(&description.get_untracked()),
            };
            projects.update(|p| p.create_pending = true);
            let cancel = cancel.clone();
            leptos::task::spawn_local(async move {
                let result = create_one(session, &request).await;
                if cancel.is_cancelled() {
                    return;
                }
                projects.update(|p| p.create_pending = false);
                match result {
                    Ok(project) => {
                        projects.update(|p| p.prepend(project));
                        name.set(String::new());
                        description.set(String::new());
                        announce(ui, Severity::Success, "Project created.");
                    }
                    Err(err) => announce_error(ui, "create project", &err),
                }
            });
        }
    };

    let email = move || {
        session
            .get()
            .principal()
            .map(|p| p.email.clone())
            .unwrap_or_default()
    };

    view! {
        <div class="projects-page">
            <header class="projects-page__header">
                <h1>"My Projects"</h1>
                <div class="projects-page__identity">
                    <span class="projects-page__email">{email}</span>
                    <button class="btn" on:click=move |_| session::sign_out(session)>
                        "Sign Out"
                    </button>
                </div>
            </header>

            <form class="projects-page__create" on:submit=on_create>
                <h2>"Create New Project"</h2>
                <input
                    class="projects-page__input"
                    type="text"
                    placeholder="Project Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <textarea
                    class="projects-page__input"
                    placeholder="Description (optional)"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                    rows=3
                ></textarea>
                <div class="projects-page__actions">
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || projects.get().create_pending
                    >
                        {move || {
                            if projects.get().create_pending { "Creating..." } else { "Create Project" }
                        }}
                    </button>
                </div>
            </form>

            <section class="projects-page__list">
                <h3>"Your existing projects"</h3>
                {move || {
                    let state = projects.get();
                    if state.loading {
                        view! { <p class="projects-page__placeholder">"Loading..."</p> }.into_any()
                    } else if state.items.is_empty() {
                        view! {
                            <p class="projects-page__placeholder">
                                "No projects found. Create one above."
                            </p>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="projects-page__cards">
                                {state
                                    .items
                                    .into_iter()
                                    .map(|project| view! { <ProjectCard project=project/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </section>
        </div>
    }
}

/// Validate and trim a project name. A blank name is rejected here, before
/// any network call is issued.
fn validate_project_name(name: &str) -> Result<String, ClientError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ClientError::Validation("Project name required.".to_owned()));
    }
    Ok(trimmed.to_owned())
}

/// Trimmed description, or `None` when blank (sent as JSON null).
fn normalize_description(description: &str) -> Option<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

async fn fetch_list(session: RwSignal<SessionState>) -> Result<Vec<Project>, ClientError> {
    let token = session::mint_token(session).await?;
    api::fetch_projects(&token).await
}

async fn create_one(
    session: RwSignal<SessionState>,
    request: &CreateProjectRequest,
) -> Result<Project, ClientError> {
    let token = session::mint_token(session).await?;
    api::create_project(&token, request).await
}
