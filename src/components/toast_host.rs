//! Toast Notifications
//!
//! Transient messages shown in a corner, dismissed on a timer or on click.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::board::Notify;
use crate::store::{store_dismiss_toast, store_push_toast, use_app_store, AppStateStoreFields, AppStore, ToastKind};

/// `Notify` implementation backed by the app store
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    store: AppStore,
    timeout_ms: u32,
}

impl ToastNotifier {
    pub fn new(store: AppStore, timeout_ms: u32) -> Self {
        Self { store, timeout_ms }
    }

    fn push(&self, kind: ToastKind, message: &str) {
        let id = store_push_toast(&self.store, kind, message);
        let store = self.store;
        Timeout::new(self.timeout_ms, move || store_dismiss_toast(&store, id)).forget();
    }
}

impl Notify for ToastNotifier {
    fn success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(ToastKind::Error, message);
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-host">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast success",
                        ToastKind::Error => "toast error",
                    };
                    view! {
                        <div class=class on:click=move |_| store_dismiss_toast(&store, id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
