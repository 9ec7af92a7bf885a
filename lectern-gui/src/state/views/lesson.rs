use iced::task::Handle;

use crate::{
    form::{Draft, FormState, Outcome, Ticket},
    notification::{Notification, Notifier},
    services::api::{Ack, ClassSession, Lesson, LessonRecord},
    session::Session,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonField {
    Name,
    Description,
}

/// Lesson being edited in the dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LessonDraft {
    /// Set when editing an existing lesson.
    pub id: Option<u64>,
    pub name: String,
    pub description: String,
    pub sessions: Vec<ClassSession>,
    /// Course the lesson belongs to, unknown until the course is loaded.
    pub course_id: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonDraftError {
    MissingCourse,
}

impl std::fmt::Display for LessonDraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::MissingCourse => write!(f, "The course of the lesson is not loaded yet"),
        }
    }
}

impl LessonDraft {
    pub fn for_course(course_id: Option<u64>) -> Self {
        Self {
            course_id,
            ..Default::default()
        }
    }

    /// Draft of a listed lesson, missing fields left empty. A lesson listed
    /// without its course is taken to belong to `course_id`.
    pub fn from_record(record: &LessonRecord, course_id: Option<u64>) -> Self {
        Self {
            id: record.id,
            name: record.name.clone().unwrap_or_default(),
            description: record.description.clone().unwrap_or_default(),
            sessions: record.sessions.clone().unwrap_or_default(),
            course_id: record.course_id.or(course_id),
        }
    }

    /// Record to send, a lesson without id being a new one.
    pub fn to_lesson(&self) -> Result<Lesson, LessonDraftError> {
        let course_id = self.course_id.ok_or(LessonDraftError::MissingCourse)?;
        Ok(Lesson {
            id: self.id.unwrap_or(0),
            name: self.name.clone(),
            description: self.description.clone(),
            sessions: self.sessions.clone(),
            course_id,
        })
    }
}

impl Draft for LessonDraft {
    type Field = LessonField;

    fn set(&mut self, field: LessonField, value: String) {
        match field {
            LessonField::Name => self.name = value,
            LessonField::Description => self.description = value,
        }
    }
}

/// What to send for one lesson submission.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonSubmission {
    pub ticket: Ticket,
    pub token: String,
    pub lesson: Lesson,
}

/// Dialog creating or editing a lesson.
pub struct LessonModal {
    /// Lesson being edited, `None` in creation mode.
    pub editing: Option<u64>,
    pub form: FormState<LessonDraft>,
    course_id: Option<u64>,
    handle: Option<Handle>,
}

impl LessonModal {
    pub fn new(
        course_id: Option<u64>,
        editing: Option<u64>,
        seed: Option<&LessonRecord>,
    ) -> Self {
        Self {
            editing,
            form: FormState::with_seed(
                LessonDraft::for_course(course_id),
                seed.map(|record| LessonDraft::from_record(record, course_id)),
            ),
            course_id,
            handle: None,
        }
    }

    /// Offers a lesson received after the dialog opened, see [`FormState::seed`].
    pub fn on_seed(&mut self, record: &LessonRecord) -> bool {
        if self.editing.is_none() || self.editing != record.id {
            return false;
        }
        self.form.seed(LessonDraft::from_record(record, self.course_id))
    }

    pub fn on_change(&mut self, field: LessonField, value: String) {
        self.form.on_change(field, value);
    }

    pub fn is_loading(&self) -> bool {
        self.form.is_loading()
    }

    /// Enters the submitting phase and returns the request to perform.
    ///
    /// Returns `None` when nothing must be sent: a submission is in flight, or
    /// the draft cannot be sent, which is notified.
    pub fn submit(
        &mut self,
        session: &Session,
        notifier: &mut impl Notifier,
    ) -> Option<LessonSubmission> {
        if self.form.is_loading() {
            tracing::debug!("Lesson submission already in flight");
            return None;
        }
        let Some(token) = session.access_token() else {
            notifier.notify(Notification::error("Sign in to save the lesson"));
            return None;
        };
        let lesson = match self.form.draft().to_lesson() {
            Ok(lesson) => lesson,
            Err(e) => {
                notifier.notify(Notification::error(e.to_string()));
                return None;
            }
        };
        let ticket = self.form.begin_submit()?;
        Some(LessonSubmission {
            ticket,
            token: token.to_string(),
            lesson,
        })
    }

    /// Keeps the handle of the request task, aborted on [`LessonModal::teardown`].
    pub fn set_handle(&mut self, handle: Handle) {
        self.handle = Some(handle);
    }

    /// Settles a submission.
    ///
    /// Returns the identifier to refresh if the lesson was saved, in which case
    /// the dialog must be closed. Failures are notified and keep it open.
    pub fn on_saved(
        &mut self,
        ticket: Ticket,
        outcome: Outcome<Ack>,
        notifier: &mut impl Notifier,
    ) -> Option<u64> {
        if !self.form.settle(ticket) {
            tracing::debug!("Ignoring outcome of a stale lesson submission");
            return None;
        }
        self.handle = None;
        match outcome {
            Outcome::Success(ack) => {
                tracing::info!(
                    "Lesson saved{}",
                    ack.message.map(|m| format!(": {}", m)).unwrap_or_default()
                );
                Some(self.form.draft().id.unwrap_or(0))
            }
            Outcome::Rejected(e) => {
                notifier.notify(Notification::error(format!("Lesson not saved. {}", e)));
                None
            }
            Outcome::TransportFailed(e) => {
                notifier.notify(Notification::error(format!(
                    "Could not reach the server. {}",
                    e
                )));
                None
            }
        }
    }

    /// Aborts the request in flight, if any.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.handle.take() {
            tracing::debug!("Aborting lesson submission");
            handle.abort();
        }
    }
}

impl Drop for LessonModal {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::{NotificationKind, Toasts};
    use crate::services::api::User;

    fn session() -> Session {
        Session::new(Some(User {
            access_token: "tok".to_string(),
            name: "n".to_string(),
            img: "i".to_string(),
        }))
    }

    fn saved_lesson() -> LessonRecord {
        LessonRecord {
            id: Some(5),
            name: Some("Limits".to_string()),
            description: Some("Intro".to_string()),
            sessions: Some(vec![ClassSession {
                id: Some(1),
                ..Default::default()
            }]),
            course_id: Some(2),
        }
    }

    #[test]
    fn empty_form_payload() {
        let mut toasts = Toasts::default();
        let mut modal = LessonModal::new(Some(2), None, None);
        let submission = modal.submit(&session(), &mut toasts).unwrap();
        assert_eq!(submission.token, "tok");
        assert_eq!(
            submission.lesson,
            Lesson {
                id: 0,
                name: String::new(),
                description: String::new(),
                sessions: Vec::new(),
                course_id: 2,
            }
        );
        assert!(modal.is_loading());

        let refresh = modal.on_saved(
            submission.ticket,
            Outcome::Success(Ack { message: None }),
            &mut toasts,
        );
        assert_eq!(refresh, Some(0));
        assert!(!modal.is_loading());
        assert!(toasts.is_empty());
    }

    #[test]
    fn second_submit_while_loading_sends_nothing() {
        let mut toasts = Toasts::default();
        let mut modal = LessonModal::new(Some(2), None, None);
        assert!(modal.submit(&session(), &mut toasts).is_some());
        assert!(modal.submit(&session(), &mut toasts).is_none());
        assert!(toasts.is_empty());
    }

    #[test]
    fn edit_mode_sends_seeded_record() {
        let mut toasts = Toasts::default();
        let lesson = saved_lesson();
        let mut modal = LessonModal::new(Some(2), Some(5), Some(&lesson));
        modal.on_change(LessonField::Description, "Updated".to_string());
        let submission = modal.submit(&session(), &mut toasts).unwrap();
        assert_eq!(submission.lesson.id, 5);
        assert_eq!(submission.lesson.description, "Updated");
        assert_eq!(Some(submission.lesson.sessions), lesson.sessions);

        let refresh = modal.on_saved(
            submission.ticket,
            Outcome::Success(Ack { message: None }),
            &mut toasts,
        );
        assert_eq!(refresh, Some(5));
    }

    #[test]
    fn late_seed_keeps_edits() {
        let mut modal = LessonModal::new(Some(2), Some(5), None);
        modal.on_change(LessonField::Name, "Mine".to_string());
        assert!(!modal.on_seed(&saved_lesson()));
        assert_eq!(modal.form.draft().name, "Mine");
        assert_eq!(modal.form.draft().id, None);
    }

    #[test]
    fn late_seed_applies_once() {
        let mut modal = LessonModal::new(Some(2), Some(5), None);
        let mut other = saved_lesson();
        other.id = Some(6);
        assert!(!modal.on_seed(&other));
        assert!(modal.on_seed(&saved_lesson()));
        assert_eq!(modal.form.draft().name, "Limits");

        let mut updated = saved_lesson();
        updated.name = Some("Renamed elsewhere".to_string());
        assert!(!modal.on_seed(&updated));
        assert_eq!(modal.form.draft().name, "Limits");
    }

    #[test]
    fn partial_record_seeds_an_editable_draft() {
        let mut toasts = Toasts::default();
        let record = LessonRecord {
            id: Some(5),
            name: Some("Limits".to_string()),
            ..Default::default()
        };
        let mut modal = LessonModal::new(Some(2), Some(5), None);
        assert!(modal.on_seed(&record));
        let draft = modal.form.draft();
        assert_eq!(draft.description, "");
        assert!(draft.sessions.is_empty());
        assert_eq!(draft.course_id, Some(2));

        let submission = modal.submit(&session(), &mut toasts).unwrap();
        assert_eq!(submission.lesson.id, 5);
        assert_eq!(submission.lesson.course_id, 2);
        assert!(toasts.is_empty());
    }

    #[test]
    fn record_without_id_never_seeds() {
        let mut modal = LessonModal::new(Some(2), None, None);
        assert!(!modal.on_seed(&LessonRecord::default()));
        assert_eq!(modal.form.draft(), &LessonDraft::for_course(Some(2)));
    }

    #[test]
    fn failures_keep_dialog_open_and_notify() {
        let mut toasts = Toasts::default();
        let mut modal = LessonModal::new(Some(2), None, None);

        let submission = modal.submit(&session(), &mut toasts).unwrap();
        let refresh = modal.on_saved(
            submission.ticket,
            Outcome::Rejected("Request rejected (500): no message".to_string()),
            &mut toasts,
        );
        assert_eq!(refresh, None);
        assert!(!modal.is_loading());
        assert_eq!(toasts.len(), 1);

        let submission = modal.submit(&session(), &mut toasts).unwrap();
        let refresh = modal.on_saved(
            submission.ticket,
            Outcome::TransportFailed("timed out".to_string()),
            &mut toasts,
        );
        assert_eq!(refresh, None);
        assert!(!modal.is_loading());
        assert_eq!(toasts.len(), 2);
        assert!(toasts
            .iter()
            .all(|t| t.notification.kind == NotificationKind::Error));
    }

    #[test]
    fn nothing_sent_without_course_or_token() {
        let mut toasts = Toasts::default();
        let mut modal = LessonModal::new(None, None, None);
        assert!(modal.submit(&session(), &mut toasts).is_none());
        assert!(!modal.is_loading());
        assert_eq!(toasts.len(), 1);

        let mut modal = LessonModal::new(Some(1), None, None);
        assert!(modal.submit(&Session::default(), &mut toasts).is_none());
        assert!(!modal.is_loading());
        assert_eq!(toasts.len(), 2);
    }

    #[test]
    fn stale_outcome_is_ignored() {
        let mut toasts = Toasts::default();
        let mut closed = LessonModal::new(Some(2), None, None);
        let stale = closed.submit(&session(), &mut toasts).unwrap();
        drop(closed);

        let mut reopened = LessonModal::new(Some(2), None, None);
        let refresh = reopened.on_saved(
            stale.ticket,
            Outcome::TransportFailed("aborted".to_string()),
            &mut toasts,
        );
        assert_eq!(refresh, None);
        assert!(toasts.is_empty());
    }
}
