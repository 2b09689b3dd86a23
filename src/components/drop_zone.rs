//! Status Drop Zone Component
//!
//! A board column that accepts dragged task cards.

use leptos::prelude::*;

use crate::models::TaskStatus;
use leptos_dragdrop::{make_on_target_mouseenter, make_on_target_mouseleave, DndSignals};

#[component]
pub fn StatusDropZone(
    dnd: DndSignals<String, TaskStatus>,
    /// Status the dropped task will take
    status: TaskStatus,
    children: Children,
) -> impl IntoView {
    let on_mouseenter = make_on_target_mouseenter(dnd, status);
    let on_mouseleave = make_on_target_mouseleave(dnd, status);

    let is_active = move || dnd.drop_target() == Some(status);

    view! {
        <div
            class=move || {
                let mut c = format!("status-column {}", status.as_str());
                if dnd.is_dragging() { c.push_str(" accepting"); }
                if is_active() { c.push_str(" active"); }
                c
            }
            data-status=status.as_str()
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            {children()}
        </div>
    }
}
