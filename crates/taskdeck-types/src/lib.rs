//! Shared domain types for the taskdeck client.
//!
//! These mirror the task service's JSON wire format (camelCase field
//! names) and carry the client-side validation rules for task payloads.

pub mod task;
pub mod validate;

pub use task::{ExecutionResponse, ExecutionStatus, Task, TaskExecution, TaskPayload};
pub use validate::FieldError;
