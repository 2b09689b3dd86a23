//! Delete Confirm Button Component
//!
//! Destructive actions (project, task) take a second click.

use leptos::prelude::*;

/// Two-step delete: `label` first, then a "Delete?" prompt with ✓/✗.
/// Clicks never reach the parent row.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, default = "Delete".to_string())] label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);

    move || {
        if armed.get() {
            view! {
                <span class="delete-confirm" on:click=|ev| ev.stop_propagation()>
                    <span class="delete-confirm-text">"Delete?"</span>
                    <button class="confirm-btn" on:click=move |_| {
                        armed.set(false);
                        on_confirm.run(());
                    }>"✓"</button>
                    <button class="cancel-btn" on:click=move |_| armed.set(false)>"✗"</button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class=button_class.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        armed.set(true);
                    }
                >
                    {label.clone()}
                </button>
            }
            .into_any()
        }
    }
}
