//! Task Card Component
//!
//! A draggable card on the board.

use leptos::prelude::*;

use crate::models::{TaskStatus, TaskSummary};
use crate::store::{use_app_store, AppStateStoreFields};
use leptos_dragdrop::{make_on_mousedown, make_on_touchstart, DndSignals};

#[component]
pub fn TaskCard(
    task: TaskSummary,
    dnd: DndSignals<String, TaskStatus>,
    #[prop(into)] can_edit: Signal<bool>,
) -> impl IntoView {
    let store = use_app_store();

    let id = task.id.clone();
    let on_mousedown = make_on_mousedown(dnd, id.clone());
    let on_touchstart = make_on_touchstart(dnd, id.clone());

    let dragged_id = id.clone();
    let is_dragging = move || dnd.dragging_id().as_deref() == Some(dragged_id.as_str());

    let open_id = id.clone();
    let on_click = move |_| {
        // The click that ends a drag is not an open
        if dnd.just_ended() {
            return;
        }
        store.open_task().set(Some(open_id.clone()));
    };

    view! {
        <li
            class=move || {
                let mut c = String::from("task-card");
                if is_dragging() { c.push_str(" dragging"); }
                if can_edit.get() { c.push_str(" editable"); }
                c
            }
            on:mousedown=on_mousedown
            on:touchstart=on_touchstart
            on:click=on_click
        >
            <span class="task-name">{task.name.clone()}</span>
            <p class="task-description">{task.description.clone()}</p>
        </li>
    }
}
