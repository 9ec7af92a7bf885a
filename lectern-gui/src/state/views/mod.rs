pub mod course;
pub mod lesson;
pub mod signup;

pub use course::CoursePage;
pub use lesson::{LessonDraft, LessonField, LessonModal};
pub use signup::{SignupDraft, SignupField, SignupScreen};

/// State of every screen.
#[derive(Default)]
pub struct ViewsState {
    pub course: CoursePage,
    /// Open lesson dialog, if any.
    pub lesson_modal: Option<LessonModal>,
    pub signup: SignupScreen,
}

impl ViewsState {
    pub fn new() -> Self {
        Self::default()
    }
}
