//! Application Context
//!
//! Shared state provided via Leptos Context API: the API client, config,
//! and one query cache per kind of server data.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::cache::QueryCache;
use crate::components::ToastNotifier;
use crate::config::AppConfig;
use crate::models::{Project, ProjectDraft, ProjectSummary, Task, TeamMember, User};
use crate::store::{use_app_store, AppStore};

/// (project id, task id)
pub type TaskKey = (String, String);

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    pub client: ApiClient,
    pub config: AppConfig,
    pub user: RwSignal<QueryCache<(), User>>,
    pub projects: RwSignal<QueryCache<(), Vec<ProjectSummary>>>,
    /// Full projects keyed by id; the board's optimistic patches land here
    pub project: RwSignal<QueryCache<String, Project>>,
    pub project_draft: RwSignal<QueryCache<String, ProjectDraft>>,
    pub task: RwSignal<QueryCache<TaskKey, Task>>,
    pub team: RwSignal<QueryCache<String, Vec<TeamMember>>>,
}

impl AppContext {
    pub fn new(client: ApiClient, config: AppConfig) -> Self {
        Self {
            client,
            config,
            user: RwSignal::new(QueryCache::new()),
            projects: RwSignal::new(QueryCache::new()),
            project: RwSignal::new(QueryCache::new()),
            project_draft: RwSignal::new(QueryCache::new()),
            task: RwSignal::new(QueryCache::new()),
            team: RwSignal::new(QueryCache::new()),
        }
    }

    pub fn notifier(&self, store: AppStore) -> ToastNotifier {
        ToastNotifier::new(store, self.config.toast_timeout_ms)
    }

    /// After a project create/update/delete
    pub fn invalidate_project(&self, project_id: Option<&str>) {
        self.projects.update(|c| {
            c.invalidate(&());
        });
        if let Some(id) = project_id {
            let id = id.to_string();
            self.project.update(|c| {
                c.invalidate(&id);
            });
            self.project_draft.update(|c| {
                c.invalidate(&id);
            });
            self.team.update(|c| {
                c.invalidate(&id);
            });
        }
    }

    /// After a task or note mutation: the task and its project
    pub fn invalidate_task(&self, project_id: &str, task_id: &str) {
        let key = (project_id.to_string(), task_id.to_string());
        self.task.update(|c| {
            c.invalidate(&key);
        });
        let project_id = project_id.to_string();
        self.project.update(|c| {
            c.invalidate(&project_id);
        });
    }

    /// After a project delete: its entries go away instead of refetching
    pub fn forget_project(&self, project_id: &str) {
        let id = project_id.to_string();
        self.project.update(|c| c.remove(&id));
        self.project_draft.update(|c| c.remove(&id));
        self.team.update(|c| c.remove(&id));
        self.task.update(|c| c.retain_keys(|(p, _)| *p != id));
        self.projects.update(|c| {
            c.invalidate(&());
        });
    }

    /// After a task delete
    pub fn forget_task(&self, project_id: &str, task_id: &str) {
        let key = (project_id.to_string(), task_id.to_string());
        self.task.update(|c| c.remove(&key));
        let project_id = project_id.to_string();
        self.project.update(|c| {
            c.invalidate(&project_id);
        });
    }

    /// After a profile change: the user, and every task whose history or
    /// notes embed the old name
    pub fn invalidate_user(&self) {
        self.user.update(|c| {
            c.invalidate(&());
        });
        self.task.update(QueryCache::invalidate_all);
    }

    /// Drop every cached response; used on login and logout
    pub fn reset_caches(&self) {
        self.user.update(QueryCache::clear);
        self.projects.update(QueryCache::clear);
        self.project.update(QueryCache::clear);
        self.project_draft.update(QueryCache::clear);
        self.task.update(QueryCache::clear);
        self.team.update(QueryCache::clear);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Context plus a toast notifier, the pair most handlers need
pub fn use_notifier() -> ToastNotifier {
    use_app_context().notifier(use_app_store())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{client_with, MockTransport};
    use crate::cache::QueryStatus;
    use crate::models::TaskStatus;

    fn context() -> AppContext {
        AppContext::new(client_with(&MockTransport::new()), AppConfig::default())
    }

    fn seed<K, V>(cache: RwSignal<QueryCache<K, V>>, key: K, value: V)
    where
        K: Eq + std::hash::Hash + Clone + Send + Sync + 'static,
        V: Send + Sync + 'static,
    {
        cache.update(|c| {
            c.begin_fetch(key.clone());
            c.fulfill(key, value);
        });
    }

    fn project(id: &str) -> Project {
        Project {
            id: id.to_string(),
            project_name: format!("Project {}", id),
            client_name: "Acme".into(),
            description: String::new(),
            manager: "u1".into(),
            tasks: vec![],
            team: vec![],
        }
    }

    fn task(project: &str, id: &str) -> Task {
        Task {
            id: id.to_string(),
            name: format!("Task {}", id),
            description: String::new(),
            project: project.to_string(),
            status: TaskStatus::Pending,
            completed_by: vec![],
            notes: vec![],
            created_at: "2026-10-19T10:00:00.000Z".into(),
            updated_at: "2026-10-19T10:00:00.000Z".into(),
        }
    }

    fn key(project: &str, task: &str) -> TaskKey {
        (project.to_string(), task.to_string())
    }

    #[test]
    fn test_forget_project_drops_its_entries_only() {
        let ctx = context();
        seed(ctx.projects, (), vec![]);
        seed(ctx.project, "p1".to_string(), project("p1"));
        seed(ctx.project, "p2".to_string(), project("p2"));
        seed(ctx.project_draft, "p1".to_string(), ProjectDraft::default());
        seed(ctx.team, "p1".to_string(), vec![]);
        seed(ctx.task, key("p1", "a"), task("p1", "a"));
        seed(ctx.task, key("p2", "b"), task("p2", "b"));

        ctx.forget_project("p1");

        assert_eq!(ctx.project.with_untracked(|c| c.status(&"p1".to_string())), QueryStatus::Missing);
        assert_eq!(ctx.project.with_untracked(|c| c.status(&"p2".to_string())), QueryStatus::Fresh);
        assert_eq!(ctx.project_draft.with_untracked(|c| c.status(&"p1".to_string())), QueryStatus::Missing);
        assert_eq!(ctx.team.with_untracked(|c| c.status(&"p1".to_string())), QueryStatus::Missing);
        assert_eq!(ctx.task.with_untracked(|c| c.status(&key("p1", "a"))), QueryStatus::Missing);
        assert_eq!(ctx.task.with_untracked(|c| c.status(&key("p2", "b"))), QueryStatus::Fresh);
        assert_eq!(ctx.projects.with_untracked(|c| c.status(&())), QueryStatus::Stale);
    }

    #[test]
    fn test_forget_task_refetches_its_project() {
        let ctx = context();
        seed(ctx.project, "p1".to_string(), project("p1"));
        seed(ctx.task, key("p1", "a"), task("p1", "a"));
        seed(ctx.task, key("p1", "b"), task("p1", "b"));

        ctx.forget_task("p1", "a");

        assert_eq!(ctx.task.with_untracked(|c| c.status(&key("p1", "a"))), QueryStatus::Missing);
        assert_eq!(ctx.task.with_untracked(|c| c.status(&key("p1", "b"))), QueryStatus::Fresh);
        assert_eq!(ctx.project.with_untracked(|c| c.status(&"p1".to_string())), QueryStatus::Stale);
    }

    #[test]
    fn test_profile_change_marks_user_and_tasks_stale() {
        let ctx = context();
        let user = User { id: "u1".into(), name: "Ana".into(), email: "ana@example.com".into() };
        seed(ctx.user, (), user);
        seed(ctx.task, key("p1", "a"), task("p1", "a"));
        seed(ctx.project, "p1".to_string(), project("p1"));

        ctx.invalidate_user();

        assert_eq!(ctx.user.with_untracked(|c| c.status(&())), QueryStatus::Stale);
        assert!(ctx.task.with_untracked(|c| c.needs_fetch(&key("p1", "a"))));
        assert_eq!(ctx.project.with_untracked(|c| c.status(&"p1".to_string())), QueryStatus::Fresh);
    }
}
