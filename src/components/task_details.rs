//! Task Details Component
//!
//! Overlay for the open task: status, history, notes, and manager edits.

use leptos::prelude::*;

use crate::board::Notify;
use crate::components::DeleteConfirmButton;
use crate::context::{use_app_context, use_notifier};
use crate::models::{can_delete_note, Note, NoteForm, Task, TaskForm, TaskStatus, User};
use crate::queries::{current_user, run_mutation, use_task};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::utils::format_date;

#[component]
pub fn TaskDetails(project_id: String, #[prop(into)] can_edit: Signal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let project_signal = Signal::derive({
        let id = project_id.clone();
        move || id.clone()
    });
    let open_task = Signal::derive(move || store.open_task().get());
    let task = use_task(&ctx, project_signal, open_task);

    let close = move |_| store.open_task().set(None);

    view! {
        <div class="modal-backdrop">
            <div class="modal task-details">
                <button class="close-btn" on:click=close>"×"</button>
                {move || match task.data.get() {
                    Some(task) => view! {
                        <TaskDetailsBody project_id=project_id.clone() task=task can_edit=can_edit />
                    }
                    .into_any(),
                    None if task.is_loading() => view! { <p class="loading">"Loading..."</p> }.into_any(),
                    None => view! { <p class="error">"Task not found"</p> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn TaskDetailsBody(project_id: String, task: Task, can_edit: Signal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let notifier = use_notifier();

    let task_id = task.id.clone();

    let on_status_change = {
        let ctx = ctx.clone();
        let project_id = project_id.clone();
        let task_id = task_id.clone();
        move |ev: web_sys::Event| {
            let Some(status) = TaskStatus::from_wire(&event_target_value(&ev)) else {
                return;
            };
            let ctx = ctx.clone();
            let client = ctx.client.clone();
            let (project_id, task_id) = (project_id.clone(), task_id.clone());
            let (p, t) = (project_id.clone(), task_id.clone());
            run_mutation(notifier, async move { client.update_status(&p, &t, status).await }, move |_| {
                ctx.invalidate_task(&project_id, &task_id);
            });
        }
    };

    let on_delete = Callback::new({
        let ctx = ctx.clone();
        let project_id = project_id.clone();
        let task_id = task_id.clone();
        move |_| {
            let ctx = ctx.clone();
            let client = ctx.client.clone();
            let (project_id, task_id) = (project_id.clone(), task_id.clone());
            let (p, t) = (project_id.clone(), task_id.clone());
            run_mutation(notifier, async move { client.delete_task(&p, &t).await }, move |_| {
                store.open_task().set(None);
                ctx.forget_task(&project_id, &task_id);
            });
        }
    });

    let current = task.status;
    let history = task.completed_by.clone();
    let notes = task.notes.clone();
    let edit_project_id = project_id.clone();
    let edit_task = task.clone();

    view! {
        <h2>{task.name.clone()}</h2>
        <p class="task-description">{task.description.clone()}</p>
        <p class="task-dates">
            {format!("Created: {}", format_date(&task.created_at))}
            " · "
            {format!("Updated: {}", format_date(&task.updated_at))}
        </p>

        <label class="status-select">
            "Status"
            <select on:change=on_status_change>
                {TaskStatus::ALL
                    .into_iter()
                    .map(|status| view! {
                        <option value=status.as_str() selected={status == current}>{status.label()}</option>
                    })
                    .collect_view()}
            </select>
        </label>

        <section class="status-history">
            <h3>"History"</h3>
            {if history.is_empty() {
                view! { <p class="empty">"No changes yet"</p> }.into_any()
            } else {
                view! {
                    <ol>
                        {history
                            .into_iter()
                            .map(|change| view! {
                                <li>{format!("{}: {}", change.status.label(), change.user.name)}</li>
                            })
                            .collect_view()}
                    </ol>
                }
                .into_any()
            }}
        </section>

        <Show when=move || can_edit.get()>
            <TaskEditForm project_id=edit_project_id.clone() task=edit_task.clone() />
            <DeleteConfirmButton button_class="delete-btn" label="Delete task" on_confirm=on_delete />
        </Show>

        <NotesPanel project_id=project_id task_id=task_id notes=notes />
    }
}

#[component]
fn TaskEditForm(project_id: String, task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();

    let (name, set_name) = signal(task.name.clone());
    let (description, set_description) = signal(task.description.clone());
    let task_id = task.id;

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = TaskForm { name: name.get(), description: description.get() };
        if form.name.trim().is_empty() || form.description.trim().is_empty() {
            notifier.error("Task name and description are required");
            return;
        }
        let ctx = ctx.clone();
        let client = ctx.client.clone();
        let (project_id, task_id) = (project_id.clone(), task_id.clone());
        let (p, t) = (project_id.clone(), task_id.clone());
        run_mutation(notifier, async move { client.update_task(&p, &t, &form).await }, move |_| {
            ctx.invalidate_task(&project_id, &task_id);
        });
    };

    view! {
        <form class="task-edit-form" on:submit=submit>
            <input type="text" prop:value=name on:input=move |ev| set_name.set(event_target_value(&ev)) />
            <textarea prop:value=description on:input=move |ev| set_description.set(event_target_value(&ev)) />
            <button type="submit">"Save task"</button>
        </form>
    }
}

#[component]
fn NotesPanel(project_id: String, task_id: String, notes: Vec<Note>) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();
    let user = current_user(&ctx);

    let (content, set_content) = signal(String::new());

    let add_note = {
        let ctx = ctx.clone();
        let project_id = project_id.clone();
        let task_id = task_id.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let form = NoteForm { content: content.get() };
            if form.content.trim().is_empty() {
                notifier.error("Note content is required");
                return;
            }
            let ctx = ctx.clone();
            let client = ctx.client.clone();
            let (project_id, task_id) = (project_id.clone(), task_id.clone());
            let (p, t) = (project_id.clone(), task_id.clone());
            run_mutation(notifier, async move { client.create_note(&p, &t, &form).await }, move |_| {
                set_content.set(String::new());
                ctx.invalidate_task(&project_id, &task_id);
            });
        }
    };

    view! {
        <section class="notes">
            <h3>"Notes"</h3>
            <form class="note-form" on:submit=add_note>
                <input type="text" placeholder="Write a note"
                    prop:value=content on:input=move |ev| set_content.set(event_target_value(&ev)) />
                <button type="submit">"Add note"</button>
            </form>
            {if notes.is_empty() {
                view! { <p class="empty">"No notes yet"</p> }.into_any()
            } else {
                view! {
                    <ul class="note-list">
                        {notes
                            .into_iter()
                            .map(|note| view! {
                                <NoteRow project_id=project_id.clone() task_id=task_id.clone() note=note user=user />
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            }}
        </section>
    }
}

#[component]
fn NoteRow(project_id: String, task_id: String, note: Note, user: Signal<Option<User>>) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();

    let is_author = {
        let note = note.clone();
        move || user.get().is_some_and(|u| can_delete_note(&note, &u))
    };

    let note_id = note.id.clone();
    let on_delete = move |_: web_sys::MouseEvent| {
        let ctx = ctx.clone();
        let client = ctx.client.clone();
        let (project_id, task_id) = (project_id.clone(), task_id.clone());
        let (p, t, n) = (project_id.clone(), task_id.clone(), note_id.clone());
        run_mutation(notifier, async move { client.delete_note(&p, &t, &n).await }, move |_| {
            ctx.invalidate_task(&project_id, &task_id);
        });
    };

    view! {
        <li class="note">
            <p>{note.content.clone()}</p>
            <span class="note-meta">
                {format!("{} · {}", note.created_by.name, format_date(&note.created_at))}
            </span>
            <Show when=is_author.clone()>
                <button class="delete-btn" on:click=on_delete.clone()>"Delete"</button>
            </Show>
        </li>
    }
}
