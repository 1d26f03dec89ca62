//! Client-side validation for task payloads.
//!
//! The rules are evaluated before a payload is allowed anywhere near the
//! network: required-ness plus minimum lengths, measured on trimmed input.

use crate::task::TaskPayload;

/// A validation error attributed to one named input of the task form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl TaskPayload {
    /// Check the payload against the form's declarative constraints.
    ///
    /// Returns every failing field, not just the first one, so the form
    /// can annotate all inputs in one pass.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        match self.name.trim().chars().count() {
            0 => errors.push(FieldError::new(
                "name",
                "Please provide a name for the task",
            )),
            1..=2 => errors.push(FieldError::new(
                "name",
                "Name should be at least 3 characters long",
            )),
            _ => {}
        }

        match self.owner.trim().chars().count() {
            0 => errors.push(FieldError::new("owner", "Please specify the owner")),
            1 => errors.push(FieldError::new(
                "owner",
                "Owner name should be at least 2 characters",
            )),
            _ => {}
        }

        match self.command.trim().chars().count() {
            0 => errors.push(FieldError::new("command", "Please enter a command")),
            1..=2 => errors.push(FieldError::new("command", "Command looks too short")),
            _ => {}
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
