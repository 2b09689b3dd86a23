//! Task Board Component
//!
//! One column per status. Cards are dragged with leptos-dragdrop (mouse or
//! touch); a drop on a column patches the cached project first and sends the
//! status update in the background.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::board::{BoardColumns, StatusDrop};
use crate::components::{StatusDropZone, TaskCard};
use crate::context::{use_app_context, use_notifier};
use crate::models::{TaskStatus, TaskSummary};

use leptos_dragdrop::*;

#[component]
pub fn TaskBoard(
    project_id: String,
    #[prop(into)] tasks: Signal<Vec<TaskSummary>>,
    #[prop(into)] can_edit: Signal<bool>,
) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();

    let dnd = create_dnd_signals::<String, TaskStatus>(ctx.config.drag_activation());

    bind_global_listeners(
        dnd,
        {
            let ctx = ctx.clone();
            let project_id = project_id.clone();
            move |task_id: String, status: TaskStatus| {
                log::info!("[DND] drop: task={} status={}", task_id, status.as_str());
                let pending = StatusDrop { project_id: project_id.clone(), task_id, status }.apply(&ctx.project);
                let ctx = ctx.clone();
                spawn_local(async move {
                    let _ = pending
                        .commit(&ctx.client, &ctx.project, &ctx.task, &notifier, ctx.config.rollback_policy())
                        .await;
                });
            }
        },
        status_column_at,
    );

    let columns = Memo::new(move |_| BoardColumns::group(&tasks.get()));

    view! {
        <div class="task-board">
            {TaskStatus::ALL
                .into_iter()
                .map(|status| {
                    let column_tasks = move || columns.with(|c| c.column(status).to_vec());
                    view! {
                        <StatusDropZone dnd=dnd status=status>
                            <h3 class="column-title">{status.label()}</h3>
                            <Show
                                when=move || columns.with(|c| !c.column(status).is_empty())
                                fallback=|| view! { <p class="column-empty">"No tasks"</p> }
                            >
                                <ul class="column-tasks">
                                    <For
                                        each=column_tasks
                                        key=|task| (task.id.clone(), task.name.clone(), task.description.clone(), task.status)
                                        children=move |task| view! {
                                            <TaskCard task=task dnd=dnd can_edit=can_edit />
                                        }
                                    />
                                </ul>
                            </Show>
                        </StatusDropZone>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Status of the board column under a viewport point
fn status_column_at(x: i32, y: i32) -> Option<TaskStatus> {
    let doc = web_sys::window()?.document()?;
    let column = doc.element_from_point(x as f32, y as f32)?.closest("[data-status]").ok()??;
    TaskStatus::from_wire(&column.get_attribute("data-status")?)
}
