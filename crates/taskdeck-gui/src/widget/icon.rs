//! Composable icon widget using lucide-icons

use iced::widget::Text;
use iced::Font;
use lucide_icons::Icon;

/// Font for lucide icons
pub const LUCIDE_FONT: Font = Font::with_name("lucide");

/// Default icon size
pub const DEFAULT_SIZE: f32 = 16.0;

/// Create a composable icon widget
pub fn icon(icon: Icon) -> Text<'static> {
    let icon_char: char = icon.into();
    Text::new(icon_char.to_string())
        .font(LUCIDE_FONT)
        .size(DEFAULT_SIZE)
}
