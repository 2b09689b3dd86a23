//! Cache-backed Queries
//!
//! `use_query` reads a key from a `QueryCache` signal and, whenever the entry
//! is missing or stale, fetches it in the background. Rendering always reads
//! from the cache, so invalidations and optimistic patches show up on their
//! own.

use std::future::Future;
use std::hash::Hash;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::board::Notify;
use crate::cache::{QueryCache, QueryStatus};
use crate::components::ToastNotifier;
use crate::context::{use_notifier, AppContext, TaskKey};
use crate::error::{ApiError, ApiResult};
use crate::models::{Project, ProjectDraft, ProjectSummary, Task, TeamMember, User};

/// Reactive view of one cache entry
pub struct Query<V: Send + Sync + 'static> {
    pub data: Signal<Option<V>>,
    pub status: Signal<QueryStatus>,
    /// Error of the last failed fetch
    pub error: Signal<Option<ApiError>>,
}

impl<V: Send + Sync + 'static> Clone for Query<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Send + Sync + 'static> Copy for Query<V> {}

impl<V: Clone + Send + Sync + 'static> Query<V> {
    pub fn is_loading(&self) -> bool {
        self.data.get().is_none() && matches!(self.status.get(), QueryStatus::Missing | QueryStatus::Fetching)
    }
}

pub fn use_query<K, V, F, Fut>(
    cache: RwSignal<QueryCache<K, V>>,
    key: impl Fn() -> Option<K> + Clone + Send + Sync + 'static,
    fetch: F,
) -> Query<V>
where
    K: Eq + Hash + Clone + Send + Sync + std::fmt::Debug + 'static,
    V: Clone + Send + Sync + 'static,
    F: Fn(K) -> Fut + 'static,
    Fut: Future<Output = ApiResult<V>> + 'static,
{
    let notifier = use_notifier();

    let fetch_key = key.clone();
    Effect::new(move |_| {
        let Some(k) = fetch_key() else { return };
        if !cache.with(|c| c.needs_fetch(&k)) {
            return;
        }
        let started = cache.try_update(|c| c.begin_fetch(k.clone())).unwrap_or(false);
        if !started {
            return;
        }
        log::debug!("[CACHE] fetching {:?}", k);
        let request = fetch(k.clone());
        spawn_local(async move {
            match request.await {
                Ok(value) => {
                    cache.try_update(|c| c.fulfill(k, value));
                }
                Err(err) => {
                    if !err.is_unauthorized() {
                        notifier.error(&err.to_string());
                    }
                    cache.try_update(|c| c.fail(&k, err));
                }
            }
        });
    });

    let data_key = key.clone();
    let data = Signal::derive(move || data_key().and_then(|k| cache.with(|c| c.get(&k).cloned())));
    let status_key = key.clone();
    let status = Signal::derive(move || status_key().map_or(QueryStatus::Missing, |k| cache.with(|c| c.status(&k))));
    let error = Signal::derive(move || key().and_then(|k| cache.with(|c| c.error(&k).cloned())));
    Query { data, status, error }
}

/// Run a mutation: toast the outcome and call `on_success` with the
/// server's confirmation text
pub fn run_mutation<Fut>(notifier: ToastNotifier, request: Fut, on_success: impl FnOnce(&str) + 'static)
where
    Fut: Future<Output = ApiResult<String>> + 'static,
{
    spawn_local(async move {
        match request.await {
            Ok(message) => {
                notifier.success(&message);
                on_success(&message);
            }
            Err(err) => notifier.error(&err.to_string()),
        }
    });
}

// ========================
// Queries per resource
// ========================

pub fn use_user(ctx: &AppContext, enabled: Signal<bool>) -> Query<User> {
    let client = ctx.client.clone();
    use_query(ctx.user, move || enabled.get().then_some(()), move |_| {
        let client = client.clone();
        async move { client.get_user().await }
    })
}

/// The signed-in user, read straight from the cache without fetching
pub fn current_user(ctx: &AppContext) -> Signal<Option<User>> {
    let cache = ctx.user;
    Signal::derive(move || cache.with(|c| c.get(&()).cloned()))
}

pub fn use_projects(ctx: &AppContext) -> Query<Vec<ProjectSummary>> {
    let client = ctx.client.clone();
    use_query(ctx.projects, || Some(()), move |_| {
        let client = client.clone();
        async move { client.list_projects().await }
    })
}

pub fn use_project(ctx: &AppContext, project_id: Signal<String>) -> Query<Project> {
    let client = ctx.client.clone();
    use_query(ctx.project, move || Some(project_id.get()), move |id| {
        let client = client.clone();
        async move { client.get_full_project(&id).await }
    })
}

pub fn use_project_draft(ctx: &AppContext, project_id: Signal<String>) -> Query<ProjectDraft> {
    let client = ctx.client.clone();
    use_query(ctx.project_draft, move || Some(project_id.get()), move |id| {
        let client = client.clone();
        async move { client.get_project(&id).await }
    })
}

/// Disabled while no task is selected
pub fn use_task(ctx: &AppContext, project_id: Signal<String>, task_id: Signal<Option<String>>) -> Query<Task> {
    let client = ctx.client.clone();
    use_query(
        ctx.task,
        move || task_id.get().filter(|t| !t.is_empty()).map(|t| (project_id.get(), t)),
        move |(project_id, task_id): TaskKey| {
            let client = client.clone();
            async move {
                client
                    .get_task_by_id(&project_id, &task_id)
                    .await?
                    .ok_or_else(|| ApiError::Validation("no task selected".into()))
            }
        },
    )
}

pub fn use_team(ctx: &AppContext, project_id: Signal<String>) -> Query<Vec<TeamMember>> {
    let client = ctx.client.clone();
    use_query(ctx.team, move || Some(project_id.get()), move |id| {
        let client = client.clone();
        async move { client.get_project_team(&id).await }
    })
}
