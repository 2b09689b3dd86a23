//! UI Components
//!
//! Reusable Leptos components.

mod auth_view;
mod dashboard;
mod delete_confirm_button;
mod drop_zone;
mod new_task_form;
mod profile_view;
mod project_form;
mod project_view;
mod task_board;
mod task_card;
mod task_details;
mod team_panel;
mod toast_host;

pub use auth_view::AuthView;
pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use drop_zone::StatusDropZone;
pub use new_task_form::NewTaskForm;
pub use profile_view::ProfileView;
pub use project_form::{EditProjectView, NewProjectView};
pub use project_view::ProjectView;
pub use task_board::TaskBoard;
pub use task_card::TaskCard;
pub use task_details::TaskDetails;
pub use team_panel::TeamPanel;
pub use toast_host::{ToastHost, ToastNotifier};
