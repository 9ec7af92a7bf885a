use iced::{widget::Space, Alignment, Length};
use lectern_ui::{
    component::{button, card, text},
    theme,
    widget::*,
};

use crate::{
    services::api::{LessonRecord, Section},
    state::{Msg, State},
    views::page_layout,
};

pub fn course_view(state: &State) -> Element<'_, Msg> {
    let page = &state.views.course;
    let title = page
        .course
        .as_ref()
        .and_then(|c| c.name.clone())
        .unwrap_or_else(|| "Course".to_string());

    let actions = Row::new()
        .spacing(10)
        .push(
            button::secondary("Refresh")
                .width(Length::Fixed(120.0))
                .on_press_maybe((!page.loading).then_some(Msg::LessonsRefresh(0))),
        )
        .push(
            button::primary("New lesson")
                .width(Length::Fixed(140.0))
                .on_press_maybe(page.course.is_some().then_some(Msg::LessonModalOpen(None))),
        );

    let mut content = Column::new().spacing(20);

    if let Some(course) = &page.course {
        content = content
            .push_maybe(
                course
                    .description
                    .as_ref()
                    .map(|d| text::p1_regular(d).style(theme::text::secondary)),
            )
            .push(text::h4_bold("Sections"))
            .push(
                course
                    .sections()
                    .iter()
                    .fold(Column::new().spacing(10), |col, section| {
                        col.push(section_row(section))
                    }),
            );
    } else {
        content = content.push(text::p1_regular("Loading course...").style(theme::text::secondary));
    }

    content = content.push(text::h4_bold("Lessons"));
    if page.lessons.is_empty() {
        content = content.push(
            text::p1_regular(if page.loading {
                "Loading lessons..."
            } else {
                "No lessons yet"
            })
            .style(theme::text::secondary),
        );
    } else {
        content = content.push(
            page.lessons
                .iter()
                .fold(Column::new().spacing(10), |col, lesson| {
                    col.push(lesson_row(lesson))
                }),
        );
    }

    page_layout(title, actions, content)
}

fn section_row(section: &Section) -> Element<'_, Msg> {
    let schedule = section
        .days_of_week
        .as_ref()
        .map(|days| format!("{} day(s) a week", days.len()))
        .unwrap_or_default();
    card::simple(
        Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(text::p1_medium(section.name.as_deref().unwrap_or("Unnamed section")))
            .push(Space::with_width(Length::Fill))
            .push(text::caption(schedule).style(theme::text::secondary)),
    )
    .width(Length::Fill)
    .into()
}

fn lesson_row(lesson: &LessonRecord) -> Element<'_, Msg> {
    let sessions = lesson.sessions.as_ref().map(Vec::len).unwrap_or(0);
    card::simple(
        Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(
                Column::new()
                    .spacing(5)
                    .width(Length::Fill)
                    .push(text::p1_bold(lesson.name.as_deref().unwrap_or("Untitled lesson")))
                    .push(
                        text::p2_regular(lesson.description.as_deref().unwrap_or_default())
                            .style(theme::text::secondary),
                    )
                    .push(
                        text::caption(format!("{} session(s)", sessions))
                            .style(theme::text::secondary),
                    ),
            )
            .push(
                button::secondary("Edit")
                    .width(Length::Fixed(100.0))
                    .on_press_maybe(lesson.id.map(|id| Msg::LessonModalOpen(Some(id)))),
            ),
    )
    .width(Length::Fill)
    .into()
}
