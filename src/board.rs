//! Task Board Synchronization
//!
//! The board is a partition of a project's tasks into one column per status.
//! A drop patches the cached project right away and then sends the status
//! update; the cache is reconciled by invalidation once the server answers.

use crate::api::ApiClient;
use crate::cache::CacheHandle;
use crate::context::TaskKey;
use crate::error::ApiResult;
use crate::models::{Project, Task, TaskStatus, TaskSummary};

/// Tasks grouped by status, columns in `TaskStatus::ALL` order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardColumns {
    columns: [Vec<TaskSummary>; 5],
}

impl BoardColumns {
    /// Tasks keep their project order within a column
    pub fn group(tasks: &[TaskSummary]) -> Self {
        let mut board = Self::default();
        for task in tasks {
            board.columns[column_index(task.status)].push(task.clone());
        }
        board
    }

    pub fn column(&self, status: TaskStatus) -> &[TaskSummary] {
        &self.columns[column_index(status)]
    }

    pub fn iter(&self) -> impl Iterator<Item = (TaskStatus, &[TaskSummary])> {
        TaskStatus::ALL.into_iter().map(move |s| (s, self.column(s)))
    }
}

fn column_index(status: TaskStatus) -> usize {
    match status {
        TaskStatus::Pending => 0,
        TaskStatus::OnHold => 1,
        TaskStatus::InProgress => 2,
        TaskStatus::UnderReview => 3,
        TaskStatus::Completed => 4,
    }
}

/// User-facing notifications raised by the board
pub trait Notify {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// What to do with the optimistic change when the server rejects it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RollbackPolicy {
    /// Leave the local change until the next refetch
    #[default]
    Keep,
    /// Put the previous status back and refetch
    Revert,
}

/// A task dropped onto a status column
#[derive(Debug, Clone, PartialEq)]
pub struct StatusDrop {
    pub project_id: String,
    pub task_id: String,
    pub status: TaskStatus,
}

/// A drop whose local patch is applied and whose server update is pending
#[derive(Debug, Clone, PartialEq)]
#[must_use = "the server update is only sent by `commit`"]
pub struct PendingDrop {
    pub drop: StatusDrop,
    /// Status before the patch, `None` if the task wasn't in the cached project
    pub previous: Option<TaskStatus>,
}

impl StatusDrop {
    /// Patch the cached project synchronously so the next render shows the
    /// task in its new column
    pub fn apply<C: CacheHandle<String, Project>>(self, cache: &C) -> PendingDrop {
        let previous = cache
            .write(|c| c.optimistic_patch(&self.project_id, |p| p.set_task_status(&self.task_id, self.status)))
            .flatten()
            .flatten();
        log::debug!(
            "[BOARD] task {} moved {:?} -> {:?} (local)",
            self.task_id,
            previous,
            self.status
        );
        PendingDrop { drop: self, previous }
    }
}

impl PendingDrop {
    /// Send the status update and reconcile the caches with the outcome.
    /// `tasks` holds the detail entries; the moved task's entry goes stale
    /// on success since its status history changed.
    pub async fn commit<C, T, N>(
        self,
        client: &ApiClient,
        cache: &C,
        tasks: &T,
        notifier: &N,
        policy: RollbackPolicy,
    ) -> ApiResult<String>
    where
        C: CacheHandle<String, Project>,
        T: CacheHandle<TaskKey, Task>,
        N: Notify + ?Sized,
    {
        let StatusDrop { project_id, task_id, status } = &self.drop;
        let result = client.update_status(project_id, task_id, *status).await;

        match &result {
            Ok(message) => {
                notifier.success(message);
                cache.write(|c| c.invalidate(project_id));
                tasks.write(|c| c.invalidate(&(project_id.clone(), task_id.clone())));
            }
            Err(err) => {
                log::warn!("[BOARD] status update for {} rejected: {}", task_id, err);
                notifier.error(&err.to_string());
                if policy == RollbackPolicy::Revert {
                    if let Some(previous) = self.previous {
                        cache.write(|c| {
                            c.optimistic_patch(project_id, |p| {
                                // A newer drop of the same task wins over this rollback.
                                if p.task_status(task_id) == Some(*status) {
                                    p.set_task_status(task_id, previous);
                                }
                            });
                            c.invalidate(project_id);
                        });
                    }
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::api::mock::{client_with, MockTransport};
    use crate::cache::{QueryCache, QueryStatus};
    use crate::models::{StatusChange, User};

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<(bool, String)>>,
    }

    impl Notify for Recorder {
        fn success(&self, message: &str) {
            self.events.borrow_mut().push((true, message.to_string()));
        }
        fn error(&self, message: &str) {
            self.events.borrow_mut().push((false, message.to_string()));
        }
    }

    fn task(id: &str, status: TaskStatus) -> TaskSummary {
        TaskSummary {
            id: id.to_string(),
            name: format!("Task {}", id),
            description: String::new(),
            status,
        }
    }

    fn project() -> Project {
        Project {
            id: "p1".into(),
            project_name: "Site".into(),
            client_name: "ACME".into(),
            description: String::new(),
            manager: "u1".into(),
            tasks: vec![
                task("a", TaskStatus::Pending),
                task("b", TaskStatus::InProgress),
                task("c", TaskStatus::Pending),
            ],
            team: vec![],
        }
    }

    fn cached(project: Project) -> RefCell<QueryCache<String, Project>> {
        let mut cache = QueryCache::new();
        cache.begin_fetch(project.id.clone());
        cache.fulfill(project.id.clone(), project);
        RefCell::new(cache)
    }

    type TaskCache = RefCell<QueryCache<TaskKey, Task>>;

    fn no_details() -> TaskCache {
        RefCell::new(QueryCache::new())
    }

    fn detail(id: &str, status: TaskStatus) -> Task {
        Task {
            id: id.to_string(),
            name: format!("Task {}", id),
            description: String::new(),
            project: "p1".into(),
            status,
            completed_by: vec![],
            notes: vec![],
            created_at: "2026-10-19T10:00:00.000Z".into(),
            updated_at: "2026-10-19T10:00:00.000Z".into(),
        }
    }

    fn statuses(cache: &RefCell<QueryCache<String, Project>>) -> Vec<(String, TaskStatus)> {
        cache.borrow().get(&"p1".to_string()).unwrap().tasks.iter().map(|t| (t.id.clone(), t.status)).collect()
    }

    #[test]
    fn test_group_preserves_order_and_covers_every_column() {
        let board = BoardColumns::group(&project().tasks);
        let pending: Vec<_> = board.column(TaskStatus::Pending).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(pending, vec!["a", "c"]);
        assert_eq!(board.iter().count(), 5);
        assert!(board.column(TaskStatus::Completed).is_empty());
        assert_eq!(board.column(TaskStatus::InProgress)[0].id, "b");
    }

    #[test]
    fn test_drop_on_each_column_moves_only_that_task() {
        for status in TaskStatus::ALL {
            let cache = cached(project());
            let before = statuses(&cache);

            let pending = StatusDrop { project_id: "p1".into(), task_id: "a".into(), status }.apply(&cache);
            assert_eq!(pending.previous, Some(TaskStatus::Pending));

            let after = statuses(&cache);
            for ((id, old), (_, new)) in before.iter().zip(after.iter()) {
                if id == "a" {
                    assert_eq!(*new, status);
                } else {
                    assert_eq!(new, old);
                }
            }
            let board = BoardColumns::group(&cache.borrow().get(&"p1".to_string()).unwrap().tasks);
            assert!(board.column(status).iter().any(|t| t.id == "a"));
        }
    }

    #[tokio::test]
    async fn test_success_notifies_and_invalidates() {
        let transport = MockTransport::new();
        transport.respond(200, r#""Status updated""#);
        let client = client_with(&transport);
        let cache = cached(project());
        let notes = Recorder::default();

        let pending = StatusDrop { project_id: "p1".into(), task_id: "a".into(), status: TaskStatus::Completed }.apply(&cache);
        // Patch is visible before the request goes out.
        assert!(transport.requests().is_empty());
        assert_eq!(cache.borrow().get(&"p1".to_string()).unwrap().task_status("a"), Some(TaskStatus::Completed));

        pending.commit(&client, &cache, &no_details(), &notes, RollbackPolicy::Keep).await.unwrap();

        assert_eq!(transport.last_request().path, "/projects/p1/tasks/a/status");
        assert_eq!(*notes.events.borrow(), vec![(true, "Status updated".to_string())]);
        assert_eq!(cache.borrow().status(&"p1".to_string()), QueryStatus::Stale);
    }

    #[tokio::test]
    async fn test_failure_keeps_optimistic_status_by_default() {
        let transport = MockTransport::new();
        transport.respond(403, r#"{"error":"Action not allowed"}"#);
        let client = client_with(&transport);
        let cache = cached(project());
        let notes = Recorder::default();

        let pending = StatusDrop { project_id: "p1".into(), task_id: "a".into(), status: TaskStatus::Completed }.apply(&cache);
        let result = pending.commit(&client, &cache, &no_details(), &notes, RollbackPolicy::Keep).await;

        assert!(result.is_err());
        assert_eq!(*notes.events.borrow(), vec![(false, "Action not allowed".to_string())]);
        let cache = cache.borrow();
        assert_eq!(cache.get(&"p1".to_string()).unwrap().task_status("a"), Some(TaskStatus::Completed));
        assert_eq!(cache.status(&"p1".to_string()), QueryStatus::Fresh);
    }

    #[tokio::test]
    async fn test_failure_reverts_in_strict_mode() {
        let transport = MockTransport::new();
        transport.fail("offline");
        let client = client_with(&transport);
        let cache = cached(project());
        let notes = Recorder::default();

        let pending = StatusDrop { project_id: "p1".into(), task_id: "a".into(), status: TaskStatus::OnHold }.apply(&cache);
        let _ = pending.commit(&client, &cache, &no_details(), &notes, RollbackPolicy::Revert).await;

        let cache = cache.borrow();
        assert_eq!(cache.get(&"p1".to_string()).unwrap().task_status("a"), Some(TaskStatus::Pending));
        assert_eq!(cache.status(&"p1".to_string()), QueryStatus::Stale);
        assert_eq!(notes.events.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_rollback_does_not_clobber_a_newer_drop() {
        let transport = MockTransport::new();
        transport.respond(500, r#"{"error":"boom"}"#);
        let client = client_with(&transport);
        let cache = cached(project());
        let notes = Recorder::default();

        let first = StatusDrop { project_id: "p1".into(), task_id: "a".into(), status: TaskStatus::OnHold }.apply(&cache);
        let _second = StatusDrop { project_id: "p1".into(), task_id: "a".into(), status: TaskStatus::Completed }.apply(&cache);
        let _ = first.commit(&client, &cache, &no_details(), &notes, RollbackPolicy::Revert).await;

        assert_eq!(cache.borrow().get(&"p1".to_string()).unwrap().task_status("a"), Some(TaskStatus::Completed));
    }

    #[tokio::test]
    async fn test_refetch_converges_on_server_state() {
        let transport = MockTransport::new();
        transport.respond(200, r#""Status updated""#);
        transport.respond(200, r#"{"_id":"p1","projectName":"Site","clientName":"ACME","description":"",
            "manager":"u1","team":[],
            "tasks":[{"_id":"a","name":"Task a","description":"","status":"underReview"},
                     {"_id":"b","name":"Task b","description":"","status":"inProgress"},
                     {"_id":"c","name":"Task c","description":"","status":"pending"}]}"#);
        let client = client_with(&transport);
        let cache = cached(project());
        let notes = Recorder::default();

        StatusDrop { project_id: "p1".into(), task_id: "a".into(), status: TaskStatus::Completed }
            .apply(&cache)
            .commit(&client, &cache, &no_details(), &notes, RollbackPolicy::Keep)
            .await
            .unwrap();

        let key = "p1".to_string();
        assert!(cache.borrow_mut().begin_fetch(key.clone()));
        let fresh = client.get_full_project("p1").await.unwrap();
        cache.borrow_mut().fulfill(key.clone(), fresh);

        let cache = cache.borrow();
        assert_eq!(cache.status(&key), QueryStatus::Fresh);
        assert_eq!(cache.get(&key).unwrap().task_status("a"), Some(TaskStatus::UnderReview));
    }

    #[tokio::test]
    async fn test_success_marks_task_details_stale() {
        let transport = MockTransport::new();
        transport.respond(200, r#""Status updated""#);
        transport.respond(403, r#"{"error":"Action not allowed"}"#);
        let client = client_with(&transport);
        let cache = cached(project());
        let notes = Recorder::default();

        let key: TaskKey = ("p1".into(), "a".into());
        let details = no_details();
        details.borrow_mut().begin_fetch(key.clone());
        details.borrow_mut().fulfill(key.clone(), detail("a", TaskStatus::Pending));

        StatusDrop { project_id: "p1".into(), task_id: "a".into(), status: TaskStatus::Completed }
            .apply(&cache)
            .commit(&client, &cache, &details, &notes, RollbackPolicy::Keep)
            .await
            .unwrap();

        assert_eq!(details.borrow().status(&key), QueryStatus::Stale);
        assert!(details.borrow().needs_fetch(&key));

        // A rejected update leaves the details alone
        let refreshed = Task {
            completed_by: vec![StatusChange {
                id: "s1".into(),
                user: User { id: "u1".into(), name: "Ana".into(), email: "ana@example.com".into() },
                status: TaskStatus::Completed,
            }],
            ..detail("a", TaskStatus::Completed)
        };
        assert!(details.borrow_mut().begin_fetch(key.clone()));
        details.borrow_mut().fulfill(key.clone(), refreshed);

        let _ = StatusDrop { project_id: "p1".into(), task_id: "a".into(), status: TaskStatus::OnHold }
            .apply(&cache)
            .commit(&client, &cache, &details, &notes, RollbackPolicy::Keep)
            .await;
        assert_eq!(details.borrow().status(&key), QueryStatus::Fresh);
    }

    #[test]
    fn test_drop_on_uncached_project_still_yields_pending() {
        let cache: RefCell<QueryCache<String, Project>> = RefCell::new(QueryCache::new());
        let pending = StatusDrop { project_id: "p9".into(), task_id: "a".into(), status: TaskStatus::Completed }.apply(&cache);
        assert_eq!(pending.previous, None);
    }
}
