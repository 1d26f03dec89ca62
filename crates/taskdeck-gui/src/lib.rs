//! Graphical client for the taskdeck task service.
//!
//! A single-window dashboard over the task collection: searchable table,
//! create/edit form, details panel, and remote execution with result
//! display.

pub mod app;
pub mod appearance;
pub mod config;
pub mod message;
pub mod screen;
pub mod util;
pub mod widget;

pub use app::Taskdeck;
pub use message::Message;

pub fn run() -> iced::Result {
    iced::application("Taskdeck", Taskdeck::update, Taskdeck::view)
        .subscription(Taskdeck::subscription)
        .theme(|_| iced::Theme::Dark)
        .antialiasing(true)
        .font(lucide_icons::LUCIDE_FONT_BYTES)
        .run_with(Taskdeck::new)
}
