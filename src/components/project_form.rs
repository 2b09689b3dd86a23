//! Project Form Components
//!
//! Create and edit share one field set over a `ProjectDraft`.

use leptos::prelude::*;

use crate::board::Notify;
use crate::context::{use_app_context, use_notifier};
use crate::models::ProjectDraft;
use crate::queries::{run_mutation, use_project_draft};
use crate::store::{store_navigate, use_app_store, Route};

fn missing_field(draft: &ProjectDraft) -> Option<&'static str> {
    if draft.project_name.trim().is_empty() {
        Some("Project name is required")
    } else if draft.client_name.trim().is_empty() {
        Some("Client name is required")
    } else if draft.description.trim().is_empty() {
        Some("Description is required")
    } else {
        None
    }
}

#[component]
fn ProjectFields(draft: RwSignal<ProjectDraft>) -> impl IntoView {
    view! {
        <label>
            "Project name"
            <input type="text"
                prop:value=move || draft.with(|d| d.project_name.clone())
                on:input=move |ev| draft.update(|d| d.project_name = event_target_value(&ev)) />
        </label>
        <label>
            "Client name"
            <input type="text"
                prop:value=move || draft.with(|d| d.client_name.clone())
                on:input=move |ev| draft.update(|d| d.client_name = event_target_value(&ev)) />
        </label>
        <label>
            "Description"
            <textarea
                prop:value=move || draft.with(|d| d.description.clone())
                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev)) />
        </label>
    }
}

#[component]
pub fn NewProjectView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let notifier = use_notifier();
    let draft = RwSignal::new(ProjectDraft::default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let data = draft.get();
        if let Some(problem) = missing_field(&data) {
            notifier.error(problem);
            return;
        }
        let ctx = ctx.clone();
        let client = ctx.client.clone();
        run_mutation(notifier, async move { client.create_project(&data).await }, move |_| {
            ctx.invalidate_project(None);
            store_navigate(&store, Route::Dashboard);
        });
    };

    view! {
        <section class="project-form">
            <h2>"Create project"</h2>
            <form on:submit=submit>
                <ProjectFields draft=draft />
                <button type="submit">"Create project"</button>
            </form>
            <button on:click=move |_| store_navigate(&store, Route::Dashboard)>"Back to projects"</button>
        </section>
    }
}

#[component]
pub fn EditProjectView(project_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let notifier = use_notifier();

    let id_signal = Signal::derive({
        let id = project_id.clone();
        move || id.clone()
    });
    let loaded = use_project_draft(&ctx, id_signal);
    let draft = RwSignal::new(ProjectDraft::default());

    // Seed the form once the server copy arrives
    Effect::new(move |_| {
        if let Some(server) = loaded.data.get() {
            draft.set(server);
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let data = draft.get();
        if let Some(problem) = missing_field(&data) {
            notifier.error(problem);
            return;
        }
        let ctx = ctx.clone();
        let client = ctx.client.clone();
        let id = project_id.clone();
        run_mutation(notifier, {
            let id = id.clone();
            async move { client.update_project(&id, &data).await }
        }, move |_| {
            ctx.invalidate_project(Some(&id));
            store_navigate(&store, Route::Dashboard);
        });
    };

    view! {
        <section class="project-form">
            <h2>"Edit project"</h2>
            <Show
                when=move || !loaded.is_loading()
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <form on:submit=submit.clone()>
                    <ProjectFields draft=draft />
                    <button type="submit">"Save changes"</button>
                </form>
            </Show>
            <button on:click=move |_| store_navigate(&store, Route::Dashboard)>"Back to projects"</button>
        </section>
    }
}
