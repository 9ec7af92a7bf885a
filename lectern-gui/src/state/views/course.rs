use crate::{
    form::Outcome,
    notification::{Notification, Notifier},
    services::api::{Course, LessonRecord},
};

/// Course snapshot and its lessons, as displayed on the home page.
#[derive(Debug, Default)]
pub struct CoursePage {
    pub course: Option<Course>,
    pub lessons: Vec<LessonRecord>,
    /// A lesson list request is in flight.
    pub loading: bool,
    /// Sequence number of the latest lesson list request.
    fetch_seq: u64,
    /// Identifier passed to the last refresh, 0 for a newly created lesson.
    pub last_refresh: Option<u64>,
}

impl CoursePage {
    pub fn course_id(&self) -> Option<u64> {
        self.course.as_ref().and_then(|c| c.id)
    }

    pub fn lesson(&self, id: u64) -> Option<&LessonRecord> {
        self.lessons.iter().find(|l| l.id == Some(id))
    }

    /// Starts a lesson list request, superseding any request in flight.
    /// Returns the sequence number its answer must carry.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.loading = true;
        self.fetch_seq
    }

    pub fn on_course_loaded(&mut self, outcome: Outcome<Course>, notifier: &mut impl Notifier) {
        match outcome {
            Outcome::Success(course) => {
                tracing::info!(
                    "Loaded course {}",
                    course.name.as_deref().unwrap_or_default()
                );
                self.course = Some(course);
            }
            Outcome::Rejected(e) | Outcome::TransportFailed(e) => {
                notifier.notify(Notification::error(format!("Failed to load course. {}", e)));
            }
        }
    }

    /// Marks the lesson list as being refreshed after `id` changed.
    pub fn refresh(&mut self, id: u64) {
        self.last_refresh = Some(id);
        self.loading = true;
    }

    /// Returns the new list on success. The answer of a superseded request is
    /// ignored.
    pub fn on_lessons_loaded(
        &mut self,
        seq: u64,
        outcome: Outcome<Vec<LessonRecord>>,
        notifier: &mut impl Notifier,
    ) -> Option<&[LessonRecord]> {
        if seq != self.fetch_seq {
            tracing::debug!("Ignoring lesson list of superseded request {}", seq);
            return None;
        }
        self.loading = false;
        match outcome {
            Outcome::Success(lessons) => {
                tracing::debug!("Loaded {} lessons", lessons.len());
                self.lessons = lessons;
                Some(&self.lessons)
            }
            Outcome::Rejected(e) | Outcome::TransportFailed(e) => {
                notifier.notify(Notification::error(format!(
                    "Failed to load lessons. {}",
                    e
                )));
                None
            }
        }
    }
}
