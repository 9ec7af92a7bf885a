use iced::{widget::Space, Alignment, Length};
use lectern_ui::{
    component::{button, form, text},
    theme,
    widget::*,
};

use crate::{
    route::Route,
    state::{views::SignupField, Msg, State},
    views::{centered_layout, labeled},
};

pub fn signup_view(state: &State) -> Element<'_, Msg> {
    let screen = &state.views.signup;
    let draft = screen.form.draft();
    let loading = screen.is_loading();

    let input = |placeholder: &'static str, value: &String, field: SignupField| {
        let value = form::Value::new(value.clone());
        let form = if loading {
            form::Form::new_disabled(placeholder, &value)
        } else {
            form::Form::new(placeholder, &value, move |v| Msg::SignupUpdate(field, v))
                .on_submit_maybe(Some(Msg::SignupSubmit))
        };
        form.size(16).padding(10)
    };

    let email_suspicious = draft.is_email_suspicious();
    let email = form::Value {
        value: draft.email.clone(),
        valid: !email_suspicious,
    };
    let email_input = if loading {
        form::Form::new_disabled("your@email.com", &email)
    } else {
        form::Form::new_trimmed("your@email.com", &email, |v| {
            Msg::SignupUpdate(SignupField::Email, v)
        })
        .on_submit_maybe(Some(Msg::SignupSubmit))
    }
    .maybe_warning(email_suspicious.then_some("Invalid email address"))
    .size(16)
    .padding(10);

    let content = Column::new()
        .spacing(20)
        .push(
            Row::new()
                .push(Space::with_width(Length::Fill))
                .push(text::h3("Create an Account"))
                .push(Space::with_width(Length::Fill)),
        )
        .push(labeled(
            "Username",
            input("Your username", &draft.username, SignupField::Username),
        ))
        .push(labeled("Email Address", email_input))
        .push(labeled(
            "Password",
            input("Enter your password", &draft.password, SignupField::Password).secure(),
        ))
        .push(labeled(
            "Confirm Password",
            input(
                "Confirm your password",
                &draft.confirm_password,
                SignupField::ConfirmPassword,
            )
            .secure(),
        ))
        .push(button::busy("Sign Up", loading, Some(Msg::SignupSubmit)))
        .push(
            Row::new()
                .spacing(5)
                .align_y(Alignment::Center)
                .push(Space::with_width(Length::Fill))
                .push(text::p2_regular("Already have an account?").style(theme::text::secondary))
                .push(button::link("Login").on_press(Msg::Navigate(Route::Login)))
                .push(Space::with_width(Length::Fill)),
        );

    centered_layout(content)
}
