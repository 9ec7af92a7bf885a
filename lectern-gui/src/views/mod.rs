pub mod course;
pub mod lesson_modal;
pub mod login;
pub mod signup;

use iced::{
    alignment::{Horizontal, Vertical},
    widget::{scrollable, Space},
    Alignment, Length,
};
use lectern_ui::{
    component::{notification, text},
    theme,
    widget::*,
};

use crate::{notification::Toasts, state::Msg};

/// Labeled input, the label above the field.
pub fn labeled<'a>(label: &'static str, input: impl Into<Element<'a, Msg>>) -> Column<'a, Msg> {
    Column::new()
        .spacing(5)
        .push(text::p2_regular(label).style(theme::text::secondary))
        .push(input)
}

/// Narrow centered column used by the account screens.
pub fn centered_layout<'a>(content: impl Into<Element<'a, Msg>>) -> Element<'a, Msg> {
    Container::new(
        Container::new(content)
            .padding(30)
            .max_width(480.0)
            .style(theme::card::simple),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(theme::container::background)
    .into()
}

/// Page with a header row and scrollable content.
pub fn page_layout<'a>(
    title: String,
    actions: impl Into<Element<'a, Msg>>,
    content: impl Into<Element<'a, Msg>>,
) -> Element<'a, Msg> {
    let header = Row::new()
        .spacing(10)
        .align_y(Alignment::Center)
        .push(text::h2(title))
        .push(Space::with_width(Length::Fill))
        .push(actions);
    Container::new(scrollable(
        Column::new()
            .spacing(30)
            .padding(40)
            .max_width(900.0)
            .push(header)
            .push(content),
    ))
    .center_x(Length::Fill)
    .height(Length::Fill)
    .style(theme::container::background)
    .into()
}

/// Stacks the toasts over the bottom right corner of `content`.
pub fn with_toasts<'a>(content: Element<'a, Msg>, toasts: &'a Toasts) -> Element<'a, Msg> {
    if toasts.is_empty() {
        return content;
    }
    let list = toasts.iter().fold(Column::new().spacing(10), |col, toast| {
        col.push(notification::toast(
            toast.notification.kind.into(),
            &toast.notification.message,
            Msg::DismissToast(toast.id),
        ))
    });
    Stack::new()
        .push(content)
        .push(
            Container::new(list)
                .padding(20)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Bottom),
        )
        .into()
}
