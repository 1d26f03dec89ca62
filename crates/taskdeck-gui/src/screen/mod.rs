//! Screen modules for the taskdeck application.
//!
//! Each screen is a view function over borrowed application state; the
//! overlays (form, details panel, output modal) render as layers above the
//! task list.

pub mod execution_output;
pub mod task_details;
pub mod task_form;
pub mod tasks;
