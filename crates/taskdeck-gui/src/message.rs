use taskdeck_api::ApiError;
use taskdeck_types::{ExecutionResponse, Task};

use crate::screen::tasks::SortKey;

/// Top-level application message enum.
///
/// All user interactions and async operation results flow through this
/// enum. Variants are organized by category for clarity.
#[derive(Debug, Clone)]
pub enum Message {
    // ========== Task list ==========
    /// Search input changed (an emptied input clears the filter)
    SearchInputChanged(String),
    /// Search submitted explicitly (Enter or the search button)
    SearchSubmitted,
    /// Refresh button pressed; re-runs the current search
    RefreshPressed,
    /// Task collection finished loading
    TasksLoaded(Result<Vec<Task>, ApiError>),
    /// Pagination: previous page
    PreviousPage,
    /// Pagination: next page
    NextPage,
    /// Cycle sorting on the given column (ascending, descending, off)
    SortBy(SortKey),

    // ========== Task form (create/edit) ==========
    /// Open the create form with blank fields
    OpenCreateForm,
    /// Open the form pre-filled from an existing task
    OpenEditForm(Task),
    /// Form: name input changed
    FormNameChanged(String),
    /// Form: owner input changed
    FormOwnerChanged(String),
    /// Form: command input changed
    FormCommandChanged(String),
    /// Submit the form (validates before any request is made)
    FormSubmitted,
    /// Close the form without submitting
    FormCancelled,
    /// Create round-trip finished
    TaskCreated(Result<Task, ApiError>),
    /// Edit round-trip finished
    TaskUpdated(Result<Task, ApiError>),

    // ========== Delete ==========
    /// Ask for confirmation before deleting
    DeleteRequested(Task),
    /// Confirmation dialog accepted
    DeleteConfirmed,
    /// Confirmation dialog dismissed
    DeleteCancelled,
    /// Delete round-trip finished; carries the task that was removed
    TaskDeleted(Result<Task, ApiError>),

    // ========== Execution ==========
    /// Run a task's command remotely
    RunTask(Task),
    /// Execution round-trip finished for the given task id
    ExecutionFinished {
        task_id: String,
        result: Result<ExecutionResponse, ApiError>,
    },
    /// Single-task refetch after an execution finished
    TaskRefreshed(Result<Task, ApiError>),
    /// Close the execution output modal
    CloseOutputModal,

    // ========== Details panel ==========
    /// Open the details panel for a task
    ViewDetails(Task),
    /// Close the details panel
    CloseDetails,

    // ========== Toasts ==========
    /// Toast dismissed by its close button
    DismissToast(u64),
    /// Toast reached the end of its display time
    ToastExpired(u64),

    // ========== Animation ==========
    /// Animation tick for spinners (100ms interval)
    SpinnerTick,
}
