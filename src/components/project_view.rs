//! Project View Component
//!
//! Header, task board, team panel, and the open task's details.

use leptos::prelude::*;

use crate::components::{NewTaskForm, TaskBoard, TaskDetails, TeamPanel};
use crate::context::use_app_context;
use crate::models::can_edit;
use crate::queries::{current_user, use_project};
use crate::store::{store_navigate, use_app_store, AppStateStoreFields, Route};

#[component]
pub fn ProjectView(project_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let user = current_user(&ctx);

    let id_signal = Signal::derive({
        let id = project_id.clone();
        move || id.clone()
    });
    let project = use_project(&ctx, id_signal);

    let is_manager = Signal::derive(move || {
        let manager = project.data.with(|p| p.as_ref().map(|p| p.manager.clone()));
        match (manager, user.get()) {
            (Some(manager), Some(user)) => can_edit(&manager, &user),
            _ => false,
        }
    });
    let tasks = Signal::derive(move || project.data.with(|p| p.as_ref().map(|p| p.tasks.clone()).unwrap_or_default()));

    let form_project_id = project_id.clone();
    let details_project_id = project_id.clone();

    view! {
        <section class="project-view">
            <button class="back-btn" on:click=move |_| store_navigate(&store, Route::Dashboard)>"Back to projects"</button>
            {move || {
                if project.is_loading() {
                    return view! { <p class="loading">"Loading..."</p> }.into_any();
                }
                let Some(current) = project.data.get() else {
                    return view! { <p class="error">"Project not found"</p> }.into_any();
                };
                view! {
                    <header class="project-header">
                        <h2>{current.project_name}</h2>
                        <p class="client-name">{format!("Client: {}", current.client_name)}</p>
                        <p class="project-description">{current.description}</p>
                    </header>
                }
                .into_any()
            }}
            <Show when=move || is_manager.get()>
                <NewTaskForm project_id=form_project_id.clone() />
            </Show>
            <TaskBoard project_id=project_id.clone() tasks=tasks can_edit=is_manager />
            <TeamPanel project_id=project_id can_edit=is_manager />
            {move || store.open_task().get().map(|_| view! {
                <TaskDetails project_id=details_project_id.clone() can_edit=is_manager />
            })}
        </section>
    }
}
