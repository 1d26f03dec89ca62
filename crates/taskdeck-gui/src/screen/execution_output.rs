//! Execution output modal.
//!
//! Shows the result of a just-triggered execution: status, exit code,
//! timing, and the captured output.

use iced::border::{Border, Radius};
use iced::widget::{column, container, horizontal_space, row, scrollable, text, Space};
use iced::{Alignment, Background, Element, Font, Length, Padding};

use taskdeck_types::ExecutionResponse;

use crate::appearance::{self, Palette};
use crate::message::Message;
use crate::screen::task_form::overlay;
use crate::util::date_format;
use crate::widget;

/// Render the execution result as a centered modal overlay.
pub fn view<'a>(result: &'a ExecutionResponse, palette: &'a Palette) -> Element<'a, Message> {
    let status_color = if result.status.is_success() {
        palette.success_light
    } else {
        palette.danger_light
    };

    let status_row = row![
        status_tag(result.status.as_str(), status_color, palette),
        text(format!("Exit code: {}", result.exit_code))
            .size(13)
            .color(palette.text_secondary),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let mut body = column![
        text("Command execution").size(18).color(palette.text),
        Space::with_height(12),
        status_row,
    ]
    .spacing(8);

    if let Some(start) = result.start_time {
        body = body.push(
            text(format!("Started: {}", date_format::format_timestamp(start)))
                .size(12)
                .color(palette.text_secondary),
        );
    }
    if let Some(end) = result.end_time {
        body = body.push(
            text(format!("Finished: {}", date_format::format_timestamp(end)))
                .size(12)
                .color(palette.text_secondary),
        );
    }
    if let Some(seconds) = result.duration_seconds() {
        body = body.push(
            text(format!(
                "Duration: {}",
                date_format::format_duration_seconds(seconds)
            ))
            .size(12)
            .color(palette.text_secondary),
        );
    }

    body = body.push(view_output(result, palette));
    body = body.push(
        row![
            horizontal_space(),
            widget::primary_button("Close", Some(Message::CloseOutputModal), palette),
        ]
        .align_y(Alignment::Center),
    );

    let bg = palette.surface;
    let border_color = palette.border;

    let dialog = container(body.padding(24).width(560))
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

    overlay(dialog.into(), Message::CloseOutputModal)
}

fn status_tag<'a>(
    label: &'a str,
    color: iced::Color,
    _palette: &'a Palette,
) -> Element<'a, Message> {
    let bg = appearance::with_alpha(color, 0.15);
    let border_color = appearance::with_alpha(color, 0.6);

    container(text(label).size(12).color(color))
        .padding(Padding::from([2, 10]))
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

fn view_output<'a>(result: &'a ExecutionResponse, palette: &'a Palette) -> Element<'a, Message> {
    let content: &str = if result.output.is_empty() {
        "No output received."
    } else {
        &result.output
    };

    let bg = palette.input;
    let border_color = palette.border;

    container(
        scrollable(
            text(content)
                .size(12)
                .color(palette.text)
                .font(Font::MONOSPACE),
        )
        .height(Length::Fixed(220.0)),
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
