use super::{spinner, text::text};
use crate::font::MEDIUM;
use crate::{theme, widget::*};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::container;

pub fn primary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(text(t).font(MEDIUM))).style(theme::button::primary)
}

pub fn secondary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(text(t))).style(theme::button::secondary)
}

pub fn destructive<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(text(t))).style(theme::button::destructive)
}

pub fn transparent<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(text(t))).style(theme::button::transparent)
}

pub fn link<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(container(text(t)).padding(5)).style(theme::button::link)
}

/// Primary button swapping its label for a spinner while `loading`.
///
/// A loading button has no press handler, so it renders disabled and cannot be
/// triggered twice.
pub fn busy<'a, T: 'a + Clone>(
    t: &'static str,
    loading: bool,
    on_press: Option<T>,
) -> Button<'a, T> {
    if loading {
        Button::new(
            container(spinner::dots())
                .align_y(Vertical::Center)
                .align_x(Horizontal::Center)
                .width(iced::Length::Fill)
                .padding(5),
        )
        .style(theme::button::primary)
    } else {
        primary(t).on_press_maybe(on_press)
    }
}

fn content<'a, T: 'a>(text: Text<'a>) -> Container<'a, T> {
    container(text)
        .align_y(Vertical::Center)
        .align_x(Horizontal::Center)
        .width(iced::Length::Fill)
        .padding(5)
}
