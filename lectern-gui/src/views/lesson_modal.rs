use iced::{widget::Space, Alignment, Length};
use lectern_ui::{
    component::{button, card, form, text},
    theme,
    widget::*,
};

use crate::{
    services::api::Course,
    state::{
        views::{LessonField, LessonModal},
        Msg,
    },
    views::labeled,
};

pub fn lesson_modal_view<'a>(
    modal: &'a LessonModal,
    course: Option<&'a Course>,
) -> Element<'a, Msg> {
    let draft = modal.form.draft();
    let loading = modal.is_loading();

    let input = |placeholder: &'static str, value: &String, field: LessonField| {
        let value = form::Value::new(value.clone());
        let form = if loading {
            form::Form::new_disabled(placeholder, &value)
        } else {
            form::Form::new(placeholder, &value, move |v| Msg::LessonUpdate(field, v))
        };
        form.padding(10)
    };

    let title = if modal.editing.is_some() {
        "Edit lesson"
    } else {
        "New lesson"
    };

    let sections = course
        .map(|c| c.sections())
        .unwrap_or_default()
        .iter()
        .fold(Column::new().spacing(10), |col, section| {
            col.push(
                card::simple(
                    text::p1_regular(section.name.as_deref().unwrap_or_default())
                        .style(theme::text::secondary),
                )
                .width(Length::Fill),
            )
        });

    let content = Column::new()
        .spacing(20)
        .push(text::h3(title))
        .push(
            Row::new()
                .spacing(15)
                .push(labeled("Name", input("Name", &draft.name, LessonField::Name)).width(Length::Fill))
                .push(
                    labeled(
                        "Description",
                        input("Description", &draft.description, LessonField::Description),
                    )
                    .width(Length::Fill),
                ),
        )
        .push(labeled(
            "Sessions (will be auto created for the following sections)",
            sections,
        ))
        .push(
            Row::new()
                .align_y(Alignment::Center)
                .push(
                    button::destructive("Cancel")
                        .width(Length::Fixed(120.0))
                        .on_press(Msg::LessonModalClose),
                )
                .push(Space::with_width(Length::Fill))
                .push(
                    button::busy("Save", loading, Some(Msg::LessonSubmit))
                        .width(Length::Fixed(120.0)),
                ),
        );

    card::modal(content).width(Length::Fixed(640.0)).into()
}
