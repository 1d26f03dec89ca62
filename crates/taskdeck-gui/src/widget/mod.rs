//! Reusable widget builders for the taskdeck GUI.
//!
//! Generic widget functions that accept a palette for theming consistency.

pub mod icon;
pub mod toast;

pub use icon::icon;
pub use toast::{Toast, ToastKind};

use crate::appearance::{
    self, CORNER_RADIUS, CORNER_RADIUS_LARGE, CORNER_RADIUS_SMALL, PADDING_LARGE, Palette,
};
use iced::border::Radius;
use iced::widget::{button, container, horizontal_space, row, text, text_input};
use iced::{Background, Border, Color, Element, Font, Length, Padding, Shadow, Theme, Vector};

/// Fixed height for page headers to ensure consistent spacing
pub const PAGE_HEADER_HEIGHT: f32 = 40.0;

/// Spinner animation frames (braille pattern)
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Returns the current spinner character for the given frame
pub fn spinner_char(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Renders an animated spinner element
pub fn spinner<'a, Message: 'a>(frame: usize, palette: &'a Palette) -> Element<'a, Message> {
    text(spinner_char(frame))
        .size(14)
        .color(palette.accent_light)
        .font(Font::MONOSPACE)
        .into()
}

/// Card container with shadow and border
pub fn card<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    palette: &Palette,
) -> Element<'a, Message> {
    let bg = palette.surface;
    let border_color = palette.border;

    container(content)
        .padding(PADDING_LARGE)
        .width(Length::Fill)
        .style(move |_| container::Style {
            background: Some(Background::Color(bg)),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: Radius::from(CORNER_RADIUS_LARGE),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 16.0,
            },
            ..Default::default()
        })
        .into()
}

/// Icon button (small, icon-only)
///
/// Transparent background that highlights on hover. When `msg` is `None`
/// the button renders but does not react, which is how in-flight actions
/// are kept un-clickable.
pub fn icon_button<Message: Clone + 'static>(
    lucide_icon: lucide_icons::Icon,
    msg: Option<Message>,
    palette: &Palette,
) -> Element<'static, Message> {
    let text_color = palette.text_secondary;
    let hover_bg = palette.card_hover;

    button(container(icon(lucide_icon).size(14).color(text_color)).padding(Padding::from([6, 10])))
        .on_press_maybe(msg)
        .style(move |_, status| {
            let bg = match status {
                button::Status::Hovered => hover_bg,
                _ => Color::TRANSPARENT,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                border: Border {
                    radius: Radius::from(CORNER_RADIUS_SMALL),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}

/// Icon button in the danger color, for destructive row actions
pub fn danger_icon_button<Message: Clone + 'static>(
    lucide_icon: lucide_icons::Icon,
    msg: Message,
    palette: &Palette,
) -> Element<'static, Message> {
    let text_color = palette.danger_light;
    let hover_bg = palette.card_hover;

    button(container(icon(lucide_icon).size(14).color(text_color)).padding(Padding::from([6, 10])))
        .on_press(msg)
        .style(move |_, status| {
            let bg = match status {
                button::Status::Hovered => hover_bg,
                _ => Color::TRANSPARENT,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                border: Border {
                    radius: Radius::from(CORNER_RADIUS_SMALL),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}

/// Action button (labeled)
///
/// Labeled button with border styling, suitable for secondary actions.
pub fn action_button<'a, Message: Clone + 'a>(
    label: &'a str,
    msg: Message,
    palette: &Palette,
) -> Element<'a, Message> {
    let text_color = palette.text;
    let bg_normal = palette.card;
    let bg_hover = palette.card_hover;
    let border_normal = palette.border;
    let border_hover = palette.accent;

    button(container(text(label).size(12).color(text_color)).padding(Padding::from([6, 14])))
        .on_press(msg)
        .style(move |_: &Theme, status| {
            let (bg, border) = match status {
                button::Status::Hovered => (bg_hover, border_hover),
                _ => (bg_normal, border_normal),
            };
            button::Style {
                background: Some(Background::Color(bg)),
                border: Border {
                    color: border,
                    width: 1.0,
                    radius: Radius::from(CORNER_RADIUS_SMALL),
                },
                ..Default::default()
            }
        })
        .into()
}

/// Primary button (filled accent)
///
/// When `msg` is `None` the button is inert; callers use this while the
/// action it triggers is already in flight.
pub fn primary_button<'a, Message: Clone + 'a>(
    label: &'a str,
    msg: Option<Message>,
    palette: &Palette,
) -> Element<'a, Message> {
    let accent = palette.accent;

    button(container(text(label).size(13).color(Color::WHITE)).padding(Padding::from([8, 16])))
        .on_press_maybe(msg)
        .style(move |_: &Theme, status| {
            let bg = match status {
                button::Status::Hovered => appearance::lighten(accent, 0.08),
                button::Status::Disabled => appearance::with_alpha(accent, 0.5),
                _ => accent,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                border: Border {
                    color: bg,
                    width: 1.0,
                    radius: Radius::from(CORNER_RADIUS),
                },
                text_color: Color::WHITE,
                ..Default::default()
            }
        })
        .into()
}

/// Danger button (filled red), for confirmed destructive actions
pub fn danger_button<'a, Message: Clone + 'a>(
    label: &'a str,
    msg: Message,
    palette: &Palette,
) -> Element<'a, Message> {
    let danger = palette.danger;

    button(container(text(label).size(13).color(Color::WHITE)).padding(Padding::from([8, 16])))
        .on_press(msg)
        .style(move |_: &Theme, status| {
            let bg = match status {
                button::Status::Hovered => appearance::lighten(danger, 0.08),
                _ => danger,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                border: Border {
                    color: bg,
                    width: 1.0,
                    radius: Radius::from(CORNER_RADIUS),
                },
                text_color: Color::WHITE,
                ..Default::default()
            }
        })
        .into()
}

/// Styled single-line text input used by the search bar and form fields
pub fn form_text_input<'a, Message: Clone + 'a>(
    placeholder: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
    palette: &Palette,
) -> iced::widget::TextInput<'a, Message> {
    let input_bg = palette.input;
    let border_color = palette.border;
    let focus_border = palette.accent;
    let value_color = palette.text;
    let placeholder_color = palette.text_muted;
    let selection = appearance::with_alpha(palette.accent_light, 0.4);

    text_input(placeholder, value)
        .on_input(on_input)
        .padding(10)
        .size(14)
        .style(move |_: &Theme, status| {
            let border = match status {
                text_input::Status::Focused => focus_border,
                _ => border_color,
            };
            text_input::Style {
                background: Background::Color(input_bg),
                border: Border {
                    color: border,
                    width: 1.0,
                    radius: Radius::from(CORNER_RADIUS_SMALL),
                },
                icon: placeholder_color,
                placeholder: placeholder_color,
                value: value_color,
                selection,
            }
        })
}

/// Page header with consistent styling
pub fn page_header<'a, Message: 'a>(
    title: &'a str,
    trailing: impl Into<Element<'a, Message>>,
    palette: &Palette,
) -> Element<'a, Message> {
    let title_text = text(title)
        .size(24)
        .color(palette.text)
        .font(Font::MONOSPACE);

    container(
        row![title_text, horizontal_space(), trailing.into()].align_y(iced::Alignment::Center),
    )
    .height(Length::Fixed(PAGE_HEADER_HEIGHT))
    .width(Length::Fill)
    .into()
}
