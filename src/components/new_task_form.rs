//! New Task Form Component
//!
//! Manager-only form under the project header.

use leptos::prelude::*;

use crate::board::Notify;
use crate::context::{use_app_context, use_notifier};
use crate::models::TaskForm;
use crate::queries::run_mutation;

#[component]
pub fn NewTaskForm(project_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = TaskForm { name: name.get(), description: description.get() };
        if form.name.trim().is_empty() || form.description.trim().is_empty() {
            notifier.error("Task name and description are required");
            return;
        }
        let ctx = ctx.clone();
        let client = ctx.client.clone();
        let id = project_id.clone();
        let request_id = id.clone();
        run_mutation(notifier, async move { client.create_task(&request_id, &form).await }, move |_| {
            set_name.set(String::new());
            set_description.set(String::new());
            ctx.invalidate_project(Some(&id));
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Task name"
                prop:value=name
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Task description"
                prop:value=description
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit">"Add task"</button>
        </form>
    }
}
