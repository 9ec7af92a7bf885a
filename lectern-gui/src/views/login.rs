use iced::{widget::Space, Alignment, Length};
use lectern_ui::{
    component::{button, text},
    theme,
    widget::*,
};

use crate::{
    config::DEFAULT_FILE_NAME,
    route::Route,
    state::{Msg, State},
    views::centered_layout,
};

pub fn login_view(_state: &State) -> Element<'_, Msg> {
    let content = Column::new()
        .spacing(20)
        .push(text::h3("Sign in"))
        .push(
            text::p1_regular(format!(
                "Set the access_token of an existing account in {} to resume its session.",
                DEFAULT_FILE_NAME
            ))
            .style(theme::text::secondary),
        )
        .push(
            Row::new()
                .spacing(5)
                .align_y(Alignment::Center)
                .push(button::transparent("Back").on_press(Msg::NavigateBack))
                .push(Space::with_width(Length::Fill))
                .push(text::p2_regular("No account yet?").style(theme::text::secondary))
                .push(button::link("Sign Up").on_press(Msg::Navigate(Route::Signup))),
        );

    centered_layout(content)
}
