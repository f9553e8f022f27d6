//! Card component for project list items on the home view.

use leptos::prelude::*;

use crate::net::types::Project;

/// A project card linking to that project's generation view.
///
/// Shows the name, a short id prefix, the creation timestamp, and the
/// description when one is set.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let href = format!("/projects/{}/chat", project.id);
    let short_id = short_id(&project.id);

    view! {
        <a class="project-card" href=href>
            <div class="project-card__header">
                <span class="project-card__name">{project.name}</span>
                <span class="project-card__id">{short_id}</span>
            </div>
            <span class="project-card__created">{format!("Created: {}", project.created_at)}</span>
            {project
                .description
                .map(|desc| view! { <p class="project-card__description">{desc}</p> })}
        </a>
    }
}

/// First eight characters of the id, with an ellipsis when truncated.
fn short_id(id: &str) -> String {
    if id.len() <= 8 {
        id.to_owned()
    } else {
        let prefix: String = id.chars().take(8).collect();
        format!("{prefix}...")
    }
}
