use std::sync::Arc;
use std::time::Duration;

use iced::border::{Border, Radius};
use iced::widget::{column, container, horizontal_space, row, text, Space, Stack};
use iced::{Background, Element, Length, Subscription, Task};
use tracing::{info, warn};

use taskdeck_api::{ApiError, ClientConfig, TaskApi, TaskApiClient};
use taskdeck_types::{ExecutionResponse, Task as TaskRecord};

use crate::appearance::{self, Palette};
use crate::config::AppConfig;
use crate::message::Message;
use crate::screen;
use crate::screen::task_form::TaskForm;
use crate::screen::tasks::{self, SortDirection, SortKey};
use crate::widget::{self, Toast, ToastKind};

const TOAST_TTL: Duration = Duration::from_secs(4);

/// Application state for the task dashboard.
///
/// Holds the mirrored task collection and the per-action UI flags; every
/// mutation flows through [`Taskdeck::update`].
pub struct Taskdeck {
    client: Arc<dyn TaskApi>,

    // Task collection state
    tasks: Vec<TaskRecord>,
    loading: bool,
    /// Distinguishes "not yet loaded" from "loaded and empty".
    initialized: bool,
    search_value: String,
    page: usize,
    sort: Option<(SortKey, SortDirection)>,

    // Create/edit form state (None = closed)
    form: Option<TaskForm>,

    // Delete confirmation state
    pending_delete: Option<TaskRecord>,

    // Details panel state
    selected_task: Option<TaskRecord>,
    details_open: bool,

    // Execution state
    executing_task_id: Option<String>,
    execution_result: Option<ExecutionResponse>,
    output_open: bool,

    // Notifications
    toasts: Vec<Toast>,
    next_toast_id: u64,

    /// Current spinner animation frame (0-9)
    spinner_frame: usize,
}

impl Taskdeck {
    pub fn new() -> (Self, Task<Message>) {
        let config = AppConfig::load();
        info!(base_url = %config.api_base_url, "starting taskdeck");

        let client = TaskApiClient::new(ClientConfig {
            base_url: config.api_base_url.clone(),
            timeout: config.timeout(),
        })
        .expect("HTTP client construction failed");

        let mut app = Self::with_client(Arc::new(client));
        let startup = app.fetch(None);
        (app, startup)
    }

    /// Build the application around any task service implementation.
    pub fn with_client(client: Arc<dyn TaskApi>) -> Self {
        Self {
            client,
            tasks: Vec::new(),
            loading: false,
            initialized: false,
            search_value: String::new(),
            page: 0,
            sort: None,
            form: None,
            pending_delete: None,
            selected_task: None,
            details_open: false,
            executing_task_id: None,
            execution_result: None,
            output_open: false,
            toasts: Vec::new(),
            next_toast_id: 0,
            spinner_frame: 0,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchInputChanged(value) => {
                // Emptying the input clears the filter immediately.
                let cleared = value.is_empty() && !self.search_value.is_empty();
                self.search_value = value;
                if cleared {
                    self.page = 0;
                    return self.fetch(None);
                }
                Task::none()
            }
            Message::SearchSubmitted => {
                self.page = 0;
                self.fetch(normalized_term(&self.search_value))
            }
            Message::RefreshPressed => self.fetch(normalized_term(&self.search_value)),
            Message::TasksLoaded(result) => {
                self.loading = false;
                self.initialized = true;
                match result {
                    Ok(tasks) => {
                        self.tasks = tasks;
                        self.clamp_page();
                        Task::none()
                    }
                    Err(error) => {
                        // The previous collection stays on screen.
                        warn!(%error, "task list fetch failed");
                        self.push_toast(ToastKind::Error, error.message)
                    }
                }
            }
            Message::PreviousPage => {
                self.page = self.page.saturating_sub(1);
                Task::none()
            }
            Message::NextPage => {
                if self.page + 1 < tasks::page_count(self.tasks.len()) {
                    self.page += 1;
                }
                Task::none()
            }
            Message::SortBy(key) => {
                self.sort = tasks::next_sort(self.sort, key);
                Task::none()
            }

            Message::OpenCreateForm => {
                self.form = Some(TaskForm::create());
                Task::none()
            }
            Message::OpenEditForm(task) => {
                self.form = Some(TaskForm::edit(&task));
                Task::none()
            }
            Message::FormNameChanged(value) => {
                if let Some(form) = &mut self.form {
                    form.name = value;
                }
                Task::none()
            }
            Message::FormOwnerChanged(value) => {
                if let Some(form) = &mut self.form {
                    form.owner = value;
                }
                Task::none()
            }
            Message::FormCommandChanged(value) => {
                if let Some(form) = &mut self.form {
                    form.command = value;
                }
                Task::none()
            }
            Message::FormCancelled => {
                self.form = None;
                Task::none()
            }
            Message::FormSubmitted => {
                let Some(form) = &mut self.form else {
                    return Task::none();
                };
                if form.submitting {
                    return Task::none();
                }
                // Validation gates the request: nothing is sent while any
                // field fails.
                if !form.validate() {
                    return Task::none();
                }
                form.submitting = true;
                let payload = form.payload();
                let client = self.client.clone();
                match form.editing.clone() {
                    Some(id) => Task::perform(
                        async move { client.update(&id, &payload).await },
                        Message::TaskUpdated,
                    ),
                    None => Task::perform(
                        async move { client.create(&payload).await },
                        Message::TaskCreated,
                    ),
                }
            }
            Message::TaskCreated(result) => match result {
                Ok(task) => {
                    info!(id = %task.id, "task created");
                    // The server-confirmed record goes to the front of the list.
                    self.tasks.insert(0, task.clone());
                    self.form = None;
                    self.push_toast(
                        ToastKind::Success,
                        format!("Task \"{}\" created successfully.", task.name),
                    )
                }
                Err(error) => {
                    if let Some(form) = &mut self.form {
                        form.submitting = false;
                        form.apply_api_error(&error);
                    }
                    self.push_toast(ToastKind::Error, error.message)
                }
            },
            Message::TaskUpdated(result) => match result {
                Ok(task) => {
                    self.replace_task(task.clone());
                    self.form = None;
                    self.push_toast(
                        ToastKind::Success,
                        format!("Task \"{}\" updated.", task.name),
                    )
                }
                Err(error) => {
                    if let Some(form) = &mut self.form {
                        form.submitting = false;
                        form.apply_api_error(&error);
                    }
                    self.push_toast(ToastKind::Error, error.message)
                }
            },

            Message::DeleteRequested(task) => {
                self.pending_delete = Some(task);
                Task::none()
            }
            Message::DeleteCancelled => {
                self.pending_delete = None;
                Task::none()
            }
            Message::DeleteConfirmed => {
                let Some(task) = self.pending_delete.take() else {
                    return Task::none();
                };
                let client = self.client.clone();
                Task::perform(
                    async move { client.remove(&task.id).await.map(|_| task) },
                    Message::TaskDeleted,
                )
            }
            Message::TaskDeleted(result) => match result {
                Ok(task) => {
                    // Removal happens only now, after server confirmation.
                    self.tasks.retain(|t| t.id != task.id);
                    self.clamp_page();
                    if self
                        .selected_task
                        .as_ref()
                        .is_some_and(|selected| selected.id == task.id)
                    {
                        self.selected_task = None;
                        self.details_open = false;
                    }
                    self.push_toast(
                        ToastKind::Success,
                        format!("Task \"{}\" removed.", task.name),
                    )
                }
                Err(error) => self.push_toast(ToastKind::Error, error.message),
            },

            Message::RunTask(task) => {
                if self.executing_task_id.as_deref() == Some(task.id.as_str()) {
                    return Task::none();
                }
                self.executing_task_id = Some(task.id.clone());
                let client = self.client.clone();
                let id = task.id;
                Task::perform(
                    async move {
                        let result = client.execute(&id).await;
                        (id, result)
                    },
                    |(task_id, result)| Message::ExecutionFinished { task_id, result },
                )
            }
            Message::ExecutionFinished { task_id, result } => {
                // The marker is cleared before the outcome is examined; a
                // failed call must not leave the run control stuck.
                if self.executing_task_id.as_deref() == Some(task_id.as_str()) {
                    self.executing_task_id = None;
                }
                match result {
                    Ok(response) => {
                        let kind = if response.status.is_success() {
                            ToastKind::Success
                        } else {
                            ToastKind::Error
                        };
                        let toast = self.push_toast(
                            kind,
                            format!(
                                "Command {} (exit code {}).",
                                response.status.as_str().to_lowercase(),
                                response.exit_code
                            ),
                        );
                        self.execution_result = Some(response);
                        self.output_open = true;

                        // Refresh the single task so its lastExecution cell
                        // reflects this run.
                        let client = self.client.clone();
                        let refresh = Task::perform(
                            async move { client.get(&task_id).await },
                            Message::TaskRefreshed,
                        );
                        Task::batch([toast, refresh])
                    }
                    Err(error) => {
                        warn!(%error, %task_id, "execution failed");
                        self.push_toast(ToastKind::Error, error.message)
                    }
                }
            }
            Message::TaskRefreshed(result) => match result {
                Ok(task) => {
                    self.replace_task(task);
                    Task::none()
                }
                Err(error) => self.push_toast(ToastKind::Error, error.message),
            },
            Message::CloseOutputModal => {
                self.output_open = false;
                Task::none()
            }

            Message::ViewDetails(task) => {
                self.selected_task = Some(task);
                self.details_open = true;
                Task::none()
            }
            Message::CloseDetails => {
                self.details_open = false;
                Task::none()
            }

            Message::DismissToast(id) | Message::ToastExpired(id) => {
                self.toasts.retain(|toast| toast.id != id);
                Task::none()
            }
            Message::SpinnerTick => {
                self.spinner_frame = (self.spinner_frame + 1) % 10;
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let palette = appearance::palette();

        let state = tasks::TasksScreenState {
            tasks: &self.tasks,
            loading: self.loading,
            initialized: self.initialized,
            search_value: &self.search_value,
            page: self.page,
            sort: self.sort,
            executing_task_id: self.executing_task_id.as_deref(),
            spinner_frame: self.spinner_frame,
        };

        let background = palette.background;
        let base = container(tasks::view(state, palette))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(background)),
                ..Default::default()
            });

        let mut layers: Vec<Element<'_, Message>> = vec![base.into()];

        if self.details_open {
            if let Some(task) = &self.selected_task {
                layers.push(screen::task_details::view(task, palette));
            }
        }
        if self.output_open {
            if let Some(result) = &self.execution_result {
                layers.push(screen::execution_output::view(result, palette));
            }
        }
        if let Some(task) = &self.pending_delete {
            layers.push(self.view_confirm_delete(task, palette));
        }
        if let Some(form) = &self.form {
            layers.push(screen::task_form::view(form, palette));
        }
        if !self.toasts.is_empty() {
            layers.push(widget::toast::view(&self.toasts, palette));
        }

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        // Spinner animation: 100ms interval while anything is in flight
        if self.needs_spinner_animation() {
            iced::time::every(Duration::from_millis(100)).map(|_| Message::SpinnerTick)
        } else {
            Subscription::none()
        }
    }

    fn needs_spinner_animation(&self) -> bool {
        self.loading
            || self.executing_task_id.is_some()
            || self.form.as_ref().is_some_and(|form| form.submitting)
    }

    fn fetch(&mut self, term: Option<String>) -> Task<Message> {
        self.loading = true;
        let client = self.client.clone();
        Task::perform(fetch_tasks(client, term), Message::TasksLoaded)
    }

    /// Replace the matching row in place, and the details selection when it
    /// shows the same task.
    fn replace_task(&mut self, task: TaskRecord) {
        if self
            .selected_task
            .as_ref()
            .is_some_and(|selected| selected.id == task.id)
        {
            self.selected_task = Some(task.clone());
        }
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
        }
    }

    fn clamp_page(&mut self) {
        self.page = self.page.min(tasks::page_count(self.tasks.len()) - 1);
    }

    fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> Task<Message> {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        Task::perform(tokio::time::sleep(TOAST_TTL), move |_| {
            Message::ToastExpired(id)
        })
    }

    /// Confirmation dialog shown before a delete is sent to the service.
    fn view_confirm_delete<'a>(
        &'a self,
        task: &'a TaskRecord,
        palette: &'a Palette,
    ) -> Element<'a, Message> {
        let bg = palette.surface;
        let border_color = palette.border;

        let dialog = container(
            column![
                text("Delete task").size(18).color(palette.text),
                Space::with_height(8),
                text(format!("Are you sure you want to delete \"{}\"?", task.name))
                    .size(13)
                    .color(palette.text_secondary),
                Space::with_height(16),
                row![
                    horizontal_space(),
                    widget::action_button("Cancel", Message::DeleteCancelled, palette),
                    Space::with_width(8),
                    widget::danger_button("Delete", Message::DeleteConfirmed, palette),
                ]
                .align_y(iced::Alignment::Center),
            ]
            .padding(24)
            .width(380),
        )
        .width(Length::Shrink)
        .style(move |_| container::Style {
            background: Some(Background::Color(bg)),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: Radius::from(appearance::CORNER_RADIUS_LARGE),
            },
            ..Default::default()
        });

        screen::task_form::overlay(dialog.into(), Message::DeleteCancelled)
    }
}

/// Fetch the collection, filtered when a search term is present.
async fn fetch_tasks(
    client: Arc<dyn TaskApi>,
    term: Option<String>,
) -> Result<Vec<TaskRecord>, ApiError> {
    match term {
        Some(term) => client.search(&term).await,
        None => client.list().await,
    }
}

/// A search term worth sending: trimmed and non-empty.
fn normalized_term(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use taskdeck_types::{ExecutionStatus, TaskExecution, TaskPayload};

    fn sample_task(id: &str, name: &str) -> TaskRecord {
        TaskRecord {
            id: id.to_string(),
            name: name.to_string(),
            owner: "Ops".to_string(),
            command: "echo hello".to_string(),
            last_execution: None,
        }
    }

    fn sample_response(task_id: &str, output: &str) -> ExecutionResponse {
        ExecutionResponse {
            task_id: task_id.to_string(),
            status: ExecutionStatus::Success,
            exit_code: 0,
            output: output.to_string(),
            start_time: Some("2026-08-05T10:00:00Z".parse().unwrap()),
            end_time: Some("2026-08-05T10:00:02.500Z".parse().unwrap()),
        }
    }

    /// Scripted task service that records which operations were invoked.
    #[derive(Default)]
    struct RecordingApi {
        calls: Mutex<Vec<&'static str>>,
    }

    #[async_trait]
    impl TaskApi for RecordingApi {
        async fn list(&self) -> taskdeck_api::Result<Vec<TaskRecord>> {
            self.calls.lock().unwrap().push("list");
            Ok(vec![sample_task("listed-1", "Listed")])
        }

        async fn search(&self, _name: &str) -> taskdeck_api::Result<Vec<TaskRecord>> {
            self.calls.lock().unwrap().push("search");
            Ok(vec![sample_task("found-1", "Found")])
        }

        async fn get(&self, id: &str) -> taskdeck_api::Result<TaskRecord> {
            self.calls.lock().unwrap().push("get");
            Ok(sample_task(id, "Fetched"))
        }

        async fn create(&self, _payload: &TaskPayload) -> taskdeck_api::Result<TaskRecord> {
            self.calls.lock().unwrap().push("create");
            Err(ApiError::transport("not scripted"))
        }

        async fn update(
            &self,
            _id: &str,
            _payload: &TaskPayload,
        ) -> taskdeck_api::Result<TaskRecord> {
            self.calls.lock().unwrap().push("update");
            Err(ApiError::transport("not scripted"))
        }

        async fn remove(&self, _id: &str) -> taskdeck_api::Result<()> {
            self.calls.lock().unwrap().push("remove");
            Ok(())
        }

        async fn execute(&self, _id: &str) -> taskdeck_api::Result<ExecutionResponse> {
            self.calls.lock().unwrap().push("execute");
            Err(ApiError::transport("not scripted"))
        }
    }

    fn app() -> Taskdeck {
        Taskdeck::with_client(Arc::new(RecordingApi::default()))
    }

    #[test]
    fn whitespace_only_terms_normalize_to_none() {
        assert_eq!(normalized_term(""), None);
        assert_eq!(normalized_term("   "), None);
        assert_eq!(normalized_term(" backup "), Some("backup".to_string()));
    }

    #[tokio::test]
    async fn empty_term_fetches_the_unfiltered_list() {
        let api = Arc::new(RecordingApi::default());

        let unfiltered = fetch_tasks(api.clone(), None).await.unwrap();
        assert_eq!(unfiltered[0].name, "Listed");

        let whitespace = fetch_tasks(api.clone(), normalized_term("   ")).await.unwrap();
        assert_eq!(whitespace[0].name, "Listed");

        assert_eq!(*api.calls.lock().unwrap(), vec!["list", "list"]);
    }

    #[tokio::test]
    async fn submitted_terms_use_the_search_endpoint() {
        let api = Arc::new(RecordingApi::default());
        let found = fetch_tasks(api.clone(), normalized_term(" backup "))
            .await
            .unwrap();
        assert_eq!(found[0].name, "Found");
        assert_eq!(*api.calls.lock().unwrap(), vec!["search"]);
    }

    #[test]
    fn loaded_tasks_replace_the_collection_and_mark_initialized() {
        let mut app = app();
        assert!(!app.initialized);

        let _ = app.update(Message::TasksLoaded(Ok(vec![
            sample_task("1", "Backup"),
            sample_task("2", "Cleanup"),
        ])));

        assert!(app.initialized);
        assert!(!app.loading);
        assert_eq!(app.tasks.len(), 2);
    }

    #[test]
    fn a_failed_fetch_keeps_the_previous_collection() {
        let mut app = app();
        let _ = app.update(Message::TasksLoaded(Ok(vec![sample_task("1", "Backup")])));

        let _ = app.update(Message::TasksLoaded(Err(ApiError::transport("down"))));

        assert_eq!(app.tasks.len(), 1);
        assert!(app.initialized);
        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts[0].kind, ToastKind::Error);
    }

    #[test]
    fn clearing_the_search_input_triggers_an_unfiltered_refetch() {
        let mut app = app();
        let _ = app.update(Message::SearchInputChanged("backup".to_string()));
        assert!(!app.loading);

        let _ = app.update(Message::SearchInputChanged(String::new()));
        assert!(app.loading);
        assert_eq!(app.search_value, "");
    }

    #[test]
    fn created_task_is_prepended_exactly_once() {
        let mut app = app();
        let _ = app.update(Message::TasksLoaded(Ok(vec![
            sample_task("1", "Backup"),
            sample_task("2", "Cleanup"),
        ])));
        let _ = app.update(Message::OpenCreateForm);

        let _ = app.update(Message::TaskCreated(Ok(sample_task("3", "Deploy"))));

        assert_eq!(app.tasks[0].id, "3");
        assert_eq!(app.tasks.iter().filter(|t| t.id == "3").count(), 1);
        assert_eq!(app.tasks.len(), 3);
        assert!(app.form.is_none());
        assert_eq!(app.toasts[0].kind, ToastKind::Success);
    }

    #[test]
    fn create_failure_maps_field_errors_onto_the_form() {
        let mut app = app();
        let _ = app.update(Message::OpenCreateForm);
        let _ = app.update(Message::FormNameChanged("Backup".to_string()));
        let _ = app.update(Message::FormOwnerChanged("Ops".to_string()));
        let _ = app.update(Message::FormCommandChanged("tar -czf a.tgz".to_string()));
        let _ = app.update(Message::FormSubmitted);
        assert!(app.form.as_ref().unwrap().submitting);

        let error = ApiError::from_response(
            400,
            r#"{"message": "Validation failed", "errors": {"name": "already taken"}}"#,
        );
        let _ = app.update(Message::TaskCreated(Err(error)));

        let form = app.form.as_ref().expect("form stays open");
        assert!(!form.submitting);
        assert_eq!(form.errors.get("name").map(String::as_str), Some("already taken"));
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn invalid_form_is_rejected_before_any_request_is_made() {
        let mut app = app();
        let _ = app.update(Message::OpenCreateForm);
        let _ = app.update(Message::FormNameChanged("ab".to_string()));
        let _ = app.update(Message::FormOwnerChanged("Ops".to_string()));
        let _ = app.update(Message::FormCommandChanged("ls -la".to_string()));

        let _ = app.update(Message::FormSubmitted);

        let form = app.form.as_ref().expect("form stays open");
        // The submitting flag only flips once a request is dispatched.
        assert!(!form.submitting);
        assert!(form.errors.contains_key("name"));
    }

    #[test]
    fn deleted_task_is_absent_after_confirmation() {
        let mut app = app();
        let _ = app.update(Message::TasksLoaded(Ok(vec![
            sample_task("1", "Backup"),
            sample_task("2", "Cleanup"),
        ])));

        let _ = app.update(Message::DeleteRequested(sample_task("1", "Backup")));
        assert!(app.pending_delete.is_some());
        assert_eq!(app.tasks.len(), 2);

        let _ = app.update(Message::DeleteConfirmed);
        assert!(app.pending_delete.is_none());

        let _ = app.update(Message::TaskDeleted(Ok(sample_task("1", "Backup"))));
        assert!(app.tasks.iter().all(|t| t.id != "1"));
        assert_eq!(app.tasks.len(), 1);
    }

    #[test]
    fn cancelled_delete_leaves_the_collection_alone() {
        let mut app = app();
        let _ = app.update(Message::TasksLoaded(Ok(vec![sample_task("1", "Backup")])));
        let _ = app.update(Message::DeleteRequested(sample_task("1", "Backup")));
        let _ = app.update(Message::DeleteCancelled);
        assert!(app.pending_delete.is_none());
        assert_eq!(app.tasks.len(), 1);
    }

    #[test]
    fn executing_marker_clears_on_failure() {
        let mut app = app();
        let _ = app.update(Message::RunTask(sample_task("1", "Backup")));
        assert_eq!(app.executing_task_id.as_deref(), Some("1"));

        let _ = app.update(Message::ExecutionFinished {
            task_id: "1".to_string(),
            result: Err(ApiError::transport("boom")),
        });

        assert!(app.executing_task_id.is_none());
        assert!(!app.output_open);
        assert_eq!(app.toasts[0].kind, ToastKind::Error);
    }

    #[test]
    fn executing_marker_clears_on_success_and_the_result_is_shown() {
        let mut app = app();
        let _ = app.update(Message::RunTask(sample_task("1", "Backup")));

        let _ = app.update(Message::ExecutionFinished {
            task_id: "1".to_string(),
            result: Ok(sample_response("1", "backup complete")),
        });

        assert!(app.executing_task_id.is_none());
        assert!(app.output_open);
        let result = app.execution_result.as_ref().expect("result stored");
        assert_eq!(result.output, "backup complete");
        assert_eq!(result.duration_seconds(), Some(2.5));
    }

    #[test]
    fn refetch_after_execution_updates_the_row_and_the_details_panel() {
        let mut app = app();
        let _ = app.update(Message::TasksLoaded(Ok(vec![sample_task("1", "Backup")])));
        let _ = app.update(Message::ViewDetails(sample_task("1", "Backup")));

        let mut refreshed = sample_task("1", "Backup");
        refreshed.last_execution = Some(TaskExecution {
            start_time: Some("2026-08-05T10:00:00Z".parse().unwrap()),
            end_time: Some("2026-08-05T10:00:02.500Z".parse().unwrap()),
            output: Some("backup complete".to_string()),
        });
        let _ = app.update(Message::TaskRefreshed(Ok(refreshed)));

        let row = &app.tasks[0];
        let execution = row.last_execution.as_ref().expect("row refreshed");
        assert_eq!(execution.output.as_deref(), Some("backup complete"));

        let selected = app.selected_task.as_ref().expect("selection refreshed");
        let execution = selected.last_execution.as_ref().expect("details refreshed");
        assert_eq!(execution.output.as_deref(), Some("backup complete"));
    }

    #[test]
    fn expired_toasts_are_dropped() {
        let mut app = app();
        let _ = app.update(Message::TasksLoaded(Err(ApiError::transport("down"))));
        let id = app.toasts[0].id;

        let _ = app.update(Message::ToastExpired(id));
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn page_is_clamped_when_the_collection_shrinks() {
        let mut app = app();
        let many: Vec<TaskRecord> = (0..17)
            .map(|i| sample_task(&format!("id-{i}"), &format!("task-{i}")))
            .collect();
        let _ = app.update(Message::TasksLoaded(Ok(many)));
        let _ = app.update(Message::NextPage);
        let _ = app.update(Message::NextPage);
        assert_eq!(app.page, 2);

        let _ = app.update(Message::TasksLoaded(Ok(vec![sample_task("1", "Backup")])));
        assert_eq!(app.page, 0);
    }

    #[test]
    fn running_a_task_twice_while_in_flight_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::RunTask(sample_task("1", "Backup")));
        let _ = app.update(Message::RunTask(sample_task("1", "Backup")));
        assert_eq!(app.executing_task_id.as_deref(), Some("1"));
    }
}
