//! Transient toast notifications.
//!
//! Toasts stack in the bottom-right corner, above all other layers, and
//! are dismissed either by their expiry timer or by the close button.

use iced::border::Radius;
use iced::widget::{column, container, mouse_area, row, text, Column, Space};
use iced::{Alignment, Background, Border, Element, Length, Padding};
use lucide_icons::Icon;

use crate::appearance::{self, CORNER_RADIUS, Palette};
use crate::message::Message;
use crate::widget::icon;

/// Severity of a toast, controls its accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One queued notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Render the toast stack as a bottom-right overlay layer.
pub fn view<'a>(toasts: &'a [Toast], palette: &'a Palette) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> =
        toasts.iter().map(|toast| view_toast(toast, palette)).collect();

    container(Column::from_vec(cards).spacing(8).width(Length::Fixed(360.0)))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Right)
        .align_y(iced::alignment::Vertical::Bottom)
        .padding(16)
        .into()
}

fn view_toast<'a>(toast: &'a Toast, palette: &'a Palette) -> Element<'a, Message> {
    let accent = match toast.kind {
        ToastKind::Success => palette.success_light,
        ToastKind::Error => palette.danger_light,
    };
    let bg = palette.surface;
    let border_color = appearance::with_alpha(accent, 0.6);

    let glyph = match toast.kind {
        ToastKind::Success => Icon::CircleCheck,
        ToastKind::Error => Icon::CircleAlert,
    };

    let body = row![
        icon(glyph).size(14).color(accent),
        text(&toast.message).size(13).color(palette.text),
        Space::with_width(Length::Fill),
        mouse_area(icon(Icon::X).size(12).color(palette.text_muted))
            .on_press(Message::DismissToast(toast.id)),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    container(column![body].padding(Padding::from([10, 14])))
        .width(Length::Fill)
        .style(move |_| container::Style {
            background: Some(Background::Color(bg)),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: Radius::from(CORNER_RADIUS),
            },
            ..Default::default()
        })
        .into()
}
