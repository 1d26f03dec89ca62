//! Read-only task details panel.
//!
//! Slides in from the right above a dimmed backdrop and shows the full
//! task attributes plus the latest execution record.

use iced::border::{Border, Radius};
use iced::widget::{column, container, horizontal_space, mouse_area, row, scrollable, text, Space};
use iced::{Alignment, Background, Element, Font, Length, Padding};
use lucide_icons::Icon;

use taskdeck_types::{Task, TaskExecution};

use crate::appearance::{self, Palette};
use crate::message::Message;
use crate::util::date_format;
use crate::widget;

/// Render the details panel as a right-anchored overlay layer.
pub fn view<'a>(task: &'a Task, palette: &'a Palette) -> Element<'a, Message> {
    let header = row![
        text(format!("Task: {}", task.name)).size(18).color(palette.text),
        horizontal_space(),
        widget::icon_button(Icon::X, Some(Message::CloseDetails), palette),
    ]
    .align_y(Alignment::Center);

    let body = column![
        header,
        Space::with_height(12),
        field("Name", text(&task.name).size(13).color(palette.text).into(), palette),
        field(
            "Owner",
            text(&task.owner).size(13).color(palette.text).into(),
            palette,
        ),
        field(
            "Command",
            text(&task.command)
                .size(12)
                .color(palette.text)
                .font(Font::MONOSPACE)
                .into(),
            palette,
        ),
        field("Last execution", view_execution(task, palette), palette),
    ]
    .spacing(12)
    .padding(24);

    let bg = palette.surface;
    let border_color = palette.border;

    let panel = container(scrollable(body).height(Length::Fill))
        .width(Length::Fixed(420.0))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(Background::Color(bg)),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: Radius::from(0.0),
            },
            ..Default::default()
        });

    let backdrop = mouse_area(
        container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
                ..Default::default()
            }),
    )
    .on_press(Message::CloseDetails);

    let aligned = container(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Right);

    iced::widget::stack![backdrop, aligned].into()
}

fn field<'a>(
    label: &'a str,
    value: Element<'a, Message>,
    palette: &'a Palette,
) -> Element<'a, Message> {
    column![
        text(label).size(11).color(palette.text_muted),
        value,
    ]
    .spacing(4)
    .into()
}

fn view_execution<'a>(task: &'a Task, palette: &'a Palette) -> Element<'a, Message> {
    let Some(execution) = &task.last_execution else {
        return text("Never executed").size(12).color(palette.text_muted).into();
    };

    let mut details = column![].spacing(4);

    if let Some(start) = execution.start_time {
        details = details.push(
            text(format!("Started: {}", date_format::format_timestamp(start)))
                .size(12)
                .color(palette.text_secondary),
        );
    }
    if let Some(end) = execution.end_time {
        details = details.push(
            text(format!("Finished: {}", date_format::format_timestamp(end)))
                .size(12)
                .color(palette.text_secondary),
        );
    }
    if let Some(seconds) = execution.duration_seconds() {
        details = details.push(
            text(format!(
                "Duration: {}",
                date_format::format_duration_seconds(seconds)
            ))
            .size(12)
            .color(palette.text_secondary),
        );
    }
    if let Some(output) = output_text(execution) {
        details = details.push(view_output(output, palette));
    }

    details.into()
}

fn output_text(execution: &TaskExecution) -> Option<&str> {
    execution.output.as_deref().filter(|output| !output.is_empty())
}

fn view_output<'a>(output: &'a str, palette: &'a Palette) -> Element<'a, Message> {
    let bg = palette.input;
    let border_color = palette.border;

    container(
        scrollable(
            text(output)
                .size(12)
                .color(palette.text)
                .font(Font::MONOSPACE),
        )
        .height(Length::Fixed(160.0)),
    )
    .width(Length::Fill)
    .padding(Padding::from([8, 10]))
    .style(move |_| container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: Radius::from(appearance::CORNER_RADIUS_SMALL),
        },
        ..Default::default()
    })
    .into()
}
