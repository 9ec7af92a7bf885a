use iced::{widget::row, Alignment, Length};

use crate::{component::text, theme, widget::*};

/// Severity of a toast, selecting its palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

/// A dismissable toast card.
pub fn toast<'a, T: 'a + Clone>(level: Level, message: &'a str, on_close: T) -> Container<'a, T> {
    let style = match level {
        Level::Info => theme::notification::info,
        Level::Success => theme::notification::success,
        Level::Warning => theme::notification::warning,
        Level::Error => theme::notification::error,
    };
    Container::new(
        row![
            Container::new(text::p2_regular(message)).width(Length::Fill),
            Button::new(text::caption("✕"))
                .style(theme::button::transparent)
                .on_press(on_close),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .padding(10)
    .width(Length::Fixed(320.0))
    .style(style)
}
