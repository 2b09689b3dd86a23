//! Dashboard Component
//!
//! The user's projects, with manager-only edit and a password-checked delete.

use leptos::prelude::*;

use crate::context::{use_app_context, use_notifier};
use crate::models::{can_edit, CheckPasswordForm, ProjectSummary};
use crate::queries::{current_user, run_mutation, use_projects};
use crate::store::{store_navigate, use_app_store, Route};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let projects = use_projects(&ctx);

    view! {
        <section class="dashboard">
            <h2>"My Projects"</h2>
            <button class="primary-btn" on:click=move |_| store_navigate(&store, Route::NewProject)>
                "New project"
            </button>
            {move || {
                if projects.is_loading() {
                    return view! { <p class="loading">"Loading..."</p> }.into_any();
                }
                let list = projects.data.get().unwrap_or_default();
                if list.is_empty() {
                    return view! { <p class="empty">"No projects yet"</p> }.into_any();
                }
                view! {
                    <ul class="project-list">
                        <For
                            each=move || projects.data.get().unwrap_or_default()
                            key=|project| (project.id.clone(), project.project_name.clone(), project.client_name.clone(), project.description.clone())
                            children=move |project| view! { <ProjectRow project=project /> }
                        />
                    </ul>
                }
                .into_any()
            }}
        </section>
    }
}

#[component]
fn ProjectRow(project: ProjectSummary) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let user = current_user(&ctx);

    let manager = project.manager.clone();
    let is_manager = move || user.get().is_some_and(|u| can_edit(&manager, &u));

    let open_id = project.id.clone();
    let edit_id = project.id.clone();
    let delete_id = project.id.clone();

    let deleting = RwSignal::new(false);

    view! {
        <li class="project-row">
            <div class="project-info" on:click=move |_| store_navigate(&store, Route::Project(open_id.clone()))>
                <span class="project-name">{project.project_name.clone()}</span>
                <span class="client-name">{format!("Client: {}", project.client_name)}</span>
                <p class="project-description">{project.description.clone()}</p>
            </div>
            {move || {
                if is_manager() {
                    let edit_id = edit_id.clone();
                    view! {
                        <span class="manager-badge">"Manager"</span>
                        <button on:click=move |_| store_navigate(&store, Route::EditProject(edit_id.clone()))>"Edit"</button>
                        <button class="delete-btn" on:click=move |_| deleting.set(true)>"Delete"</button>
                    }
                    .into_any()
                } else {
                    view! { <span class="member-badge">"Team member"</span> }.into_any()
                }
            }}
            <Show when=move || deleting.get()>
                <DeleteProjectDialog project_id=delete_id.clone() on_close=move |_| deleting.set(false) />
            </Show>
        </li>
    }
}

/// Asks for the user's password before the project is deleted
#[component]
fn DeleteProjectDialog(project_id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();
    let (password, set_password) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = CheckPasswordForm { password: password.get() };
        let ctx = ctx.clone();
        let client = ctx.client.clone();
        let id = project_id.clone();
        let request_id = id.clone();
        run_mutation(
            notifier,
            async move { client.delete_project_with_password(&request_id, &form).await },
            move |_| {
                on_close.run(());
                ctx.forget_project(&id);
            },
        );
    };

    view! {
        <div class="modal-backdrop">
            <form class="modal delete-project" on:submit=submit>
                <h3>"Delete project"</h3>
                <p>"Enter your password to confirm"</p>
                <input type="password" placeholder="Password"
                    prop:value=password on:input=move |ev| set_password.set(event_target_value(&ev)) />
                <button type="submit" class="delete-btn">"Delete project"</button>
                <button type="button" on:click=move |_| on_close.run(())>"Cancel"</button>
            </form>
        </div>
    }
}
