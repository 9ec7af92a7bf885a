use iced::time::Instant;

use crate::{
    form::{Outcome, Ticket},
    route::Route,
    services::api::{Ack, Course, LessonRecord, User},
    state::views::{LessonField, SignupField},
};

/// All application messages
#[derive(Debug, Clone)]
pub enum Msg {
    // Navigation
    Navigate(Route),
    NavigateBack,

    // Signup
    SignupUpdate(SignupField, String),
    SignupSubmit,
    SignupResult(Ticket, Outcome<User>),

    // Course page
    CourseLoaded(Outcome<Course>),
    /// Lesson list fetched by the request with the given sequence number.
    LessonsLoaded(u64, Outcome<Vec<LessonRecord>>),
    /// Re-fetches the lessons after the given one changed.
    LessonsRefresh(u64),

    // Lesson dialog
    /// Opens the dialog, editing the given lesson or creating one.
    LessonModalOpen(Option<u64>),
    LessonModalClose,
    LessonUpdate(LessonField, String),
    LessonSubmit,
    LessonSaved(Ticket, Outcome<Ack>),

    // Notifications
    DismissToast(u64),
    Tick(Instant),
}
