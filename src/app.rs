//! UpTask Frontend App
//!
//! Auth gate, top bar, and route switching.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::cache::QueryStatus;
use crate::components::{AuthView, Dashboard, EditProjectView, NewProjectView, ProfileView, ProjectView, ToastHost};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::ApiError;
use crate::queries::use_user;
use crate::store::{store_navigate, AppState, AppStateStoreFields, Route};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let client = ApiClient::browser(&config.api_url);
    let store = Store::new(AppState::new(client.has_token()));
    let ctx = AppContext::new(client, config);

    provide_context(store);
    provide_context(ctx.clone());

    let authenticated = Signal::derive(move || store.authenticated().get());
    let user = use_user(&ctx, authenticated);

    Effect::new(move |_| {
        if store.authenticated().get() && session_rejected(user.error.get().as_ref()) {
            log::info!("[APP] token rejected, showing login");
            store.authenticated().set(false);
        }
    });

    // The layout only remounts when these change, not on every user cache write
    let user_loaded = Memo::new(move |_| user.data.with(Option::is_some));
    let user_name = Memo::new(move |_| user.data.with(|u| u.as_ref().map(|u| u.name.clone()).unwrap_or_default()));
    let user_failed = Memo::new(move |_| user.status.get() == QueryStatus::Failed);

    let retry_user = {
        let ctx = ctx.clone();
        move |_: web_sys::MouseEvent| {
            ctx.user.update(|c| {
                c.invalidate(&());
            });
        }
    };

    let logout = {
        let ctx = ctx.clone();
        move |_: web_sys::MouseEvent| {
            ctx.client.logout();
            ctx.reset_caches();
            store.authenticated().set(false);
            store_navigate(&store, Route::Dashboard);
        }
    };

    view! {
        <ToastHost />
        {move || {
            if !store.authenticated().get() {
                return view! { <AuthView /> }.into_any();
            }
            if !user_loaded.get() {
                if user_failed.get() {
                    let retry_user = retry_user.clone();
                    return view! {
                        <div class="load-error">
                            <p>"Could not load your account"</p>
                            <button on:click=retry_user>"Retry"</button>
                        </div>
                    }
                    .into_any();
                }
                return view! { <p class="loading">"Loading..."</p> }.into_any();
            }
            let logout = logout.clone();
            view! {
                <div class="app-layout">
                    <header class="top-bar">
                        <h1 on:click=move |_| store_navigate(&store, Route::Dashboard)>"UpTask"</h1>
                        <nav>
                            <span class="user-name">{move || format!("Hi, {}", user_name.get())}</span>
                            <button on:click=move |_| store_navigate(&store, Route::Profile)>"Profile"</button>
                            <button on:click=logout>"Log out"</button>
                        </nav>
                    </header>
                    <main class="main-content">
                        {move || match store.route().get() {
                            Route::Dashboard => view! { <Dashboard /> }.into_any(),
                            Route::NewProject => view! { <NewProjectView /> }.into_any(),
                            Route::EditProject(id) => view! { <EditProjectView project_id=id /> }.into_any(),
                            Route::Project(id) => view! { <ProjectView project_id=id /> }.into_any(),
                            Route::Profile => view! { <ProfileView /> }.into_any(),
                        }}
                    </main>
                </div>
            }
            .into_any()
        }}
    }
}

/// Only a rejected token ends the session; network or payload failures do not
fn session_rejected(error: Option<&ApiError>) -> bool {
    error.is_some_and(ApiError::is_unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_unauthorized_ends_session() {
        assert!(session_rejected(Some(&ApiError::from_response(401, r#"{"error":"Invalid token"}"#))));
        assert!(!session_rejected(Some(&ApiError::Network("offline".into()))));
        assert!(!session_rejected(Some(&ApiError::Validation("missing field `_id`".into()))));
        assert!(!session_rejected(Some(&ApiError::from_response(500, ""))));
        assert!(!session_rejected(None));
    }
}
