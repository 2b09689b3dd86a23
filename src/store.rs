//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Server data does
//! not live here; it sits in the query caches on `AppContext`.

use leptos::prelude::*;
use reactive_stores::Store;

/// Which screen is showing
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Route {
    #[default]
    Dashboard,
    NewProject,
    EditProject(String),
    Project(String),
    Profile,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub route: Route,
    /// Task whose details panel is open
    pub open_task: Option<String>,
    /// A token is stored; the current user can be fetched
    pub authenticated: bool,
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
}

impl AppState {
    pub fn new(authenticated: bool) -> Self {
        Self {
            authenticated,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Switch screens and close any open task panel
pub fn store_navigate(store: &AppStore, route: Route) {
    store.open_task().set(None);
    store.route().set(route);
}

/// Queue a toast and return its id
pub fn store_push_toast(store: &AppStore, kind: ToastKind, message: &str) -> u32 {
    let id = store.next_toast_id().get_untracked();
    store.next_toast_id().set(id.wrapping_add(1));
    store.toasts().write().push(Toast {
        id,
        kind,
        message: message.to_string(),
    });
    id
}

/// Remove a toast by ID
pub fn store_dismiss_toast(store: &AppStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}
