//! Task form modal, used for both create and edit.
//!
//! Validation runs before submission is accepted; server-side field errors
//! from a rejected submit are mapped back onto the same inputs.

use std::collections::HashMap;

use iced::border::{Border, Radius};
use iced::widget::{column, container, horizontal_space, mouse_area, row, text, Space};
use iced::{Alignment, Background, Element, Length};

use taskdeck_api::ApiError;
use taskdeck_types::{Task, TaskPayload};

use crate::appearance::{self, Palette};
use crate::message::Message;
use crate::widget;

/// Form state for creating or editing a task.
#[derive(Debug, Clone, Default)]
pub struct TaskForm {
    /// Id of the task being edited; `None` means the form creates one.
    pub editing: Option<String>,
    pub name: String,
    pub owner: String,
    pub command: String,
    /// Field name to display message, from validation or the server.
    pub errors: HashMap<String, String>,
    pub submitting: bool,
}

impl TaskForm {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn edit(task: &Task) -> Self {
        Self {
            editing: Some(task.id.clone()),
            name: task.name.clone(),
            owner: task.owner.clone(),
            command: task.command.clone(),
            ..Self::default()
        }
    }

    pub fn payload(&self) -> TaskPayload {
        TaskPayload {
            name: self.name.trim().to_string(),
            owner: self.owner.trim().to_string(),
            command: self.command.trim().to_string(),
        }
    }

    /// Run client-side validation, annotating failing fields.
    ///
    /// Returns `true` when the form may be submitted.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();
        if let Err(field_errors) = self.payload().validate() {
            for error in field_errors {
                self.errors.insert(error.field, error.message);
            }
        }
        self.errors.is_empty()
    }

    /// Attach server-side field errors to the matching inputs.
    pub fn apply_api_error(&mut self, error: &ApiError) {
        if let Some(field_errors) = &error.field_errors {
            for (field, message) in field_errors {
                self.errors.insert(field.clone(), message.clone());
            }
        }
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() { "Edit Task" } else { "Create Task" }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing.is_some() { "Save" } else { "Create" }
    }
}

/// Render the form as a centered modal overlay.
pub fn view<'a>(form: &'a TaskForm, palette: &'a Palette) -> Element<'a, Message> {
    let name_field = view_field(
        "Task Name",
        "Example: Backup database",
        &form.name,
        Message::FormNameChanged,
        form.errors.get("name"),
        palette,
    );
    let owner_field = view_field(
        "Owner",
        "Example: DevOps team",
        &form.owner,
        Message::FormOwnerChanged,
        form.errors.get("owner"),
        palette,
    );
    let command_field = view_field(
        "Command",
        "Example: kubectl get pods -A",
        &form.command,
        Message::FormCommandChanged,
        form.errors.get("command"),
        palette,
    );

    let submit: Element<'a, Message> = if form.submitting {
        widget::primary_button("Submitting...", None, palette)
    } else {
        widget::primary_button(form.submit_label(), Some(Message::FormSubmitted), palette)
    };

    let buttons = row![
        horizontal_space(),
        widget::action_button("Cancel", Message::FormCancelled, palette),
        Space::with_width(8),
        submit,
    ]
    .align_y(Alignment::Center);

    let bg = palette.surface;
    let border_color = palette.border;

    let dialog = container(
        column![
            text(form.title()).size(18).color(palette.text),
            Space::with_height(12),
            name_field,
            owner_field,
            command_field,
            Space::with_height(8),
            buttons,
        ]
        .spacing(8)
        .padding(24)
        .width(440),
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

    overlay(dialog.into(), Message::FormCancelled)
}

fn view_field<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
    error: Option<&'a String>,
    palette: &'a Palette,
) -> Element<'a, Message> {
    let mut field = column![
        text(label).size(13).color(palette.text_secondary),
        widget::form_text_input(placeholder, value, on_input, palette),
    ]
    .spacing(4);

    if let Some(message) = error {
        field = field.push(text(message).size(11).color(palette.danger_light));
    }

    field.into()
}

/// Center a dialog above a dimmed, click-to-dismiss backdrop.
pub fn overlay(dialog: Element<'_, Message>, on_dismiss: Message) -> Element<'_, Message> {
    let backdrop = mouse_area(
        container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
                ..Default::default()
            }),
    )
    .on_press(on_dismiss);

    let centered = container(dialog)
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    iced::widget::stack![backdrop, centered].into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> TaskForm {
        TaskForm {
            name: "Backup".into(),
            owner: "Ops".into(),
            command: "tar -czf a.tgz /data".into(),
            ..TaskForm::default()
        }
    }

    #[test]
    fn a_valid_form_passes_validation() {
        let mut form = filled_form();
        assert!(form.validate());
        assert!(form.errors.is_empty());
    }

    #[test]
    fn short_name_is_annotated_on_the_name_field() {
        let mut form = filled_form();
        form.name = "ab".into();
        assert!(!form.validate());
        assert_eq!(
            form.errors.get("name").map(String::as_str),
            Some("Name should be at least 3 characters long")
        );
    }

    #[test]
    fn revalidation_clears_stale_errors() {
        let mut form = filled_form();
        form.name = "".into();
        assert!(!form.validate());
        form.name = "Backup".into();
        assert!(form.validate());
        assert!(form.errors.is_empty());
    }

    #[test]
    fn server_field_errors_land_on_their_inputs() {
        let mut form = filled_form();
        let error = ApiError::from_response(
            400,
            r#"{"message": "Validation failed", "errors": {"owner": "owner already retired"}}"#,
        );
        form.apply_api_error(&error);
        assert_eq!(
            form.errors.get("owner").map(String::as_str),
            Some("owner already retired")
        );
    }

    #[test]
    fn edit_form_is_prefilled_and_keeps_the_task_id() {
        let task = Task {
            id: "abc123".into(),
            name: "Backup".into(),
            owner: "Ops".into(),
            command: "tar -czf a.tgz /data".into(),
            last_execution: None,
        };
        let form = TaskForm::edit(&task);
        assert_eq!(form.editing.as_deref(), Some("abc123"));
        assert_eq!(form.name, "Backup");
        assert_eq!(form.title(), "Edit Task");
        assert_eq!(form.submit_label(), "Save");
    }

    #[test]
    fn payload_trims_surrounding_whitespace() {
        let mut form = filled_form();
        form.name = "  Backup  ".into();
        assert_eq!(form.payload().name, "Backup");
    }
}
