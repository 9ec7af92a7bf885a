use iced::Task;
use tracing::{debug, trace};

use super::{message::Msg, views::lesson::LessonSubmission, views::LessonModal, State};
use crate::{
    form::{Outcome, Ticket},
    route::{Navigator, Route},
    services::api::{Ack, LessonRecord, User},
};

// Update routing logic
impl State {
    #[rustfmt::skip]
    pub fn update(&mut self, message: Msg) -> Task<Msg> {
        if !matches!(message, Msg::Tick(_)) {
            debug!("received message");
        } else {
            trace!("received message");
        }
        match message {
            // Navigation
            Msg::Navigate(route) => return self.on_navigate(route),
            Msg::NavigateBack => return self.on_navigate_back(),

            // Signup
            Msg::SignupUpdate(field, value) => self.views.signup.on_change(field, value),
            Msg::SignupSubmit => return self.on_signup_submit(),
            Msg::SignupResult(ticket, outcome) => return self.on_signup_result(ticket, outcome),

            // Course page
            Msg::CourseLoaded(outcome) => self.views.course.on_course_loaded(outcome, &mut self.toasts),
            Msg::LessonsLoaded(seq, outcome) => self.on_lessons_loaded(seq, outcome),
            Msg::LessonsRefresh(id) => return self.on_lessons_refresh(id),

            // Lesson dialog
            Msg::LessonModalOpen(id) => return self.on_lesson_modal_open(id),
            Msg::LessonModalClose => self.on_lesson_modal_close(),
            Msg::LessonUpdate(field, value) => {
                if let Some(modal) = self.views.lesson_modal.as_mut() {
                    modal.on_change(field, value);
                }
            }
            Msg::LessonSubmit => return self.on_lesson_submit(),
            Msg::LessonSaved(ticket, outcome) => return self.on_lesson_saved(ticket, outcome),

            // Notifications
            Msg::DismissToast(id) => self.toasts.dismiss(id),
            Msg::Tick(now) => self.toasts.prune(now),
        }
        Task::none()
    }

    /// Loads the course and its lessons, if signed in.
    pub fn load_course(&mut self) -> Task<Msg> {
        let Some(token) = self.session.access_token().map(str::to_string) else {
            return Task::none();
        };
        let client = self.client.clone();
        let course_id = self.course_id;
        let course = Task::perform(
            async move { client.course(&token, course_id).await },
            |res| Msg::CourseLoaded(Outcome::from(res)),
        );
        Task::batch([course, self.fetch_lessons()])
    }

    fn fetch_lessons(&mut self) -> Task<Msg> {
        let Some(token) = self.session.access_token().map(str::to_string) else {
            return Task::none();
        };
        let seq = self.views.course.begin_fetch();
        let client = self.client.clone();
        let course_id = self.course_id;
        Task::perform(
            async move { client.lessons(&token, course_id).await },
            move |res| Msg::LessonsLoaded(seq, Outcome::from(res)),
        )
    }

    /// Tears down what belongs to the current route before leaving it.
    fn leave_current_route(&mut self) {
        match self.router.current() {
            Route::Home => self.on_lesson_modal_close(),
            Route::Signup => self.views.signup.teardown(),
            Route::Login => {}
        }
    }

    fn enter_current_route(&mut self) -> Task<Msg> {
        match self.router.current() {
            Route::Home if !self.session.is_signed_in() => {
                debug!("Not signed in, redirecting to signup");
                self.router.navigate(Route::Signup);
                Task::none()
            }
            Route::Home => self.load_course(),
            _ => Task::none(),
        }
    }

    fn on_navigate(&mut self, route: Route) -> Task<Msg> {
        if route == self.router.current() {
            return Task::none();
        }
        self.leave_current_route();
        self.router.navigate(route);
        self.enter_current_route()
    }

    fn on_navigate_back(&mut self) -> Task<Msg> {
        self.leave_current_route();
        if self.router.back() {
            self.enter_current_route()
        } else {
            Task::none()
        }
    }

    fn on_signup_submit(&mut self) -> Task<Msg> {
        let Some((ticket, request)) = self.views.signup.submit(&mut self.toasts) else {
            return Task::none();
        };
        let auth = self.auth.clone();
        let (task, handle) = Task::perform(
            async move { auth.sign_up(request).await },
            move |res| Msg::SignupResult(ticket, Outcome::from(res)),
        )
        .abortable();
        self.views.signup.set_handle(handle);
        task
    }

    fn on_signup_result(&mut self, ticket: Ticket, outcome: Outcome<User>) -> Task<Msg> {
        let before = self.router.current();
        self.views.signup.on_result(
            ticket,
            outcome,
            &mut self.session,
            &mut self.toasts,
            &mut self.router,
        );
        if before != self.router.current() {
            self.enter_current_route()
        } else {
            Task::none()
        }
    }

    fn on_lessons_loaded(&mut self, seq: u64, outcome: Outcome<Vec<LessonRecord>>) {
        let Some(lessons) = self
            .views
            .course
            .on_lessons_loaded(seq, outcome, &mut self.toasts)
        else {
            return;
        };
        if let Some(modal) = self.views.lesson_modal.as_mut() {
            if let Some(id) = modal.editing {
                if let Some(lesson) = lessons.iter().find(|l| l.id == Some(id)) {
                    if modal.on_seed(lesson) {
                        debug!("Lesson dialog seeded with lesson {}", id);
                    }
                }
            }
        }
    }

    /// Called with the identifier of the lesson that changed.
    fn on_lessons_refresh(&mut self, id: u64) -> Task<Msg> {
        self.views.course.refresh(id);
        self.fetch_lessons()
    }

    fn on_lesson_modal_open(&mut self, editing: Option<u64>) -> Task<Msg> {
        self.on_lesson_modal_close();
        let seed = editing.and_then(|id| self.views.course.lesson(id));
        let seeded = seed.is_some();
        let modal = LessonModal::new(self.views.course.course_id(), editing, seed);
        self.views.lesson_modal = Some(modal);
        if editing.is_some() && !seeded {
            // The lesson shows up once the list is fetched.
            self.fetch_lessons()
        } else {
            Task::none()
        }
    }

    fn on_lesson_modal_close(&mut self) {
        if let Some(mut modal) = self.views.lesson_modal.take() {
            modal.teardown();
        }
    }

    fn on_lesson_submit(&mut self) -> Task<Msg> {
        let Some(modal) = self.views.lesson_modal.as_mut() else {
            return Task::none();
        };
        let Some(LessonSubmission {
            ticket,
            token,
            lesson,
        }) = modal.submit(&self.session, &mut self.toasts)
        else {
            return Task::none();
        };
        let client = self.client.clone();
        let (task, handle) = Task::perform(
            async move { client.save_lesson(&token, &lesson).await },
            move |res| Msg::LessonSaved(ticket, Outcome::from(res)),
        )
        .abortable();
        modal.set_handle(handle);
        task
    }

    fn on_lesson_saved(&mut self, ticket: Ticket, outcome: Outcome<Ack>) -> Task<Msg> {
        let Some(modal) = self.views.lesson_modal.as_mut() else {
            debug!("Lesson dialog already closed, ignoring outcome");
            return Task::none();
        };
        match modal.on_saved(ticket, outcome, &mut self.toasts) {
            Some(id) => {
                self.on_lesson_modal_close();
                self.on_lessons_refresh(id)
            }
            None => Task::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        form::SubmitPhase,
        notification::NotificationKind,
        services::{
            api::{Course, Section, SignUpRequest},
            auth::AuthService,
        },
        state::views::{LessonField, SignupField},
    };

    fn signed_in_state() -> State {
        let config = Config {
            access_token: Some("tok".to_string()),
            ..Default::default()
        };
        let mut state = State::new(&config).unwrap();
        state.views.course.course = Some(Course {
            id: Some(4),
            name: Some("Algebra".to_string()),
            sections: Some(vec![
                Section {
                    id: Some(1),
                    name: Some("Morning".to_string()),
                    ..Default::default()
                },
                Section {
                    id: Some(2),
                    name: Some("Evening".to_string()),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        });
        state
    }

    fn in_flight(state: &State) -> Ticket {
        match state.views.lesson_modal.as_ref().unwrap().form.phase() {
            SubmitPhase::Submitting(ticket) => ticket,
            SubmitPhase::Idle => panic!("no submission in flight"),
        }
    }

    #[test]
    fn starts_on_signup_without_token() {
        let state = State::new(&Config::default()).unwrap();
        assert_eq!(state.router.current(), Route::Signup);
        assert_eq!(signed_in_state().router.current(), Route::Home);
    }

    #[test]
    fn init_loads_course_when_signed_in() {
        let mut state = signed_in_state();
        let _ = state.init();
        assert!(state.views.course.loading);

        let mut state = State::new(&Config::default()).unwrap();
        let _ = state.init();
        assert!(!state.views.course.loading);
    }

    #[test]
    fn edit_open_during_refresh_keeps_latest_list() {
        let mut state = signed_in_state();
        // Requests 1 and 2: the refresh, then the list the dialog waits for.
        let _ = state.update(Msg::LessonsRefresh(0));
        let _ = state.update(Msg::LessonModalOpen(Some(9)));
        let (refresh, latest) = (1, 2);

        let record = LessonRecord {
            id: Some(9),
            name: Some("Vectors".to_string()),
            ..Default::default()
        };
        let _ = state.update(Msg::LessonsLoaded(latest, Outcome::Success(vec![record])));
        assert!(!state.views.course.loading);
        assert_eq!(
            state.views.lesson_modal.as_ref().unwrap().form.draft().name,
            "Vectors"
        );

        let _ = state.update(Msg::LessonsLoaded(refresh, Outcome::Success(Vec::new())));
        assert_eq!(state.views.course.lessons.len(), 1);
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn empty_lesson_saved_closes_and_refreshes() {
        let mut state = signed_in_state();
        let _ = state.update(Msg::LessonModalOpen(None));
        let draft = state.views.lesson_modal.as_ref().unwrap().form.draft();
        assert_eq!(draft.course_id, Some(4));
        assert!(draft.sessions.is_empty());

        let _ = state.update(Msg::LessonSubmit);
        let ticket = in_flight(&state);

        let _ = state.update(Msg::LessonSaved(
            ticket,
            Outcome::Success(Ack { message: None }),
        ));
        assert!(state.views.lesson_modal.is_none());
        assert_eq!(state.views.course.last_refresh, Some(0));
        assert!(state.views.course.loading);
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn submit_while_loading_is_a_noop() {
        let mut state = signed_in_state();
        let _ = state.update(Msg::LessonModalOpen(None));
        let _ = state.update(Msg::LessonSubmit);
        let ticket = in_flight(&state);
        let _ = state.update(Msg::LessonSubmit);
        assert_eq!(in_flight(&state), ticket);
    }

    #[test]
    fn transport_failure_keeps_dialog_open() {
        let mut state = signed_in_state();
        let _ = state.update(Msg::LessonModalOpen(None));
        let _ = state.update(Msg::LessonUpdate(LessonField::Name, "Sets".to_string()));
        let _ = state.update(Msg::LessonSubmit);
        let ticket = in_flight(&state);

        let _ = state.update(Msg::LessonSaved(
            ticket,
            Outcome::TransportFailed("connection refused".to_string()),
        ));
        let modal = state.views.lesson_modal.as_ref().unwrap();
        assert!(!modal.is_loading());
        assert_eq!(modal.form.draft().name, "Sets");
        assert_eq!(state.router.current(), Route::Home);
        assert_eq!(state.views.course.last_refresh, None);
        assert_eq!(
            state.toasts.iter().next().unwrap().notification.kind,
            NotificationKind::Error
        );
    }

    #[test]
    fn rejection_is_notified() {
        let mut state = signed_in_state();
        let _ = state.update(Msg::LessonModalOpen(None));
        let _ = state.update(Msg::LessonSubmit);
        let ticket = in_flight(&state);
        let _ = state.update(Msg::LessonSaved(
            ticket,
            Outcome::Rejected("Request rejected (422): invalid".to_string()),
        ));
        assert!(state.views.lesson_modal.is_some());
        assert_eq!(state.toasts.len(), 1);
    }

    #[test]
    fn closing_discards_late_outcome() {
        let mut state = signed_in_state();
        let _ = state.update(Msg::LessonModalOpen(None));
        let _ = state.update(Msg::LessonSubmit);
        let stale = in_flight(&state);
        let _ = state.update(Msg::LessonModalClose);
        assert!(state.views.lesson_modal.is_none());

        let _ = state.update(Msg::LessonModalOpen(None));
        let _ = state.update(Msg::LessonSaved(
            stale,
            Outcome::Success(Ack { message: None }),
        ));
        let modal = state.views.lesson_modal.as_ref().unwrap();
        assert!(!modal.is_loading());
        assert_eq!(state.views.course.last_refresh, None);
    }

    #[test]
    fn edit_dialog_seeded_when_lessons_arrive() {
        let mut state = signed_in_state();
        let _ = state.update(Msg::LessonModalOpen(Some(9)));
        assert_eq!(
            state.views.lesson_modal.as_ref().unwrap().form.draft().name,
            ""
        );

        let lesson = LessonRecord {
            id: Some(9),
            name: Some("Vectors".to_string()),
            description: None,
            sessions: None,
            course_id: None,
        };
        let seq = state.views.course.begin_fetch();
        let _ = state.update(Msg::LessonsLoaded(seq, Outcome::Success(vec![lesson.clone()])));
        let draft = state.views.lesson_modal.as_ref().unwrap().form.draft();
        assert_eq!(draft.name, "Vectors");
        assert_eq!(draft.description, "");
        assert_eq!(draft.id, Some(9));
        assert_eq!(draft.course_id, Some(4));

        let _ = state.update(Msg::LessonUpdate(LessonField::Name, "Matrices".to_string()));
        let seq = state.views.course.begin_fetch();
        let _ = state.update(Msg::LessonsLoaded(seq, Outcome::Success(vec![lesson])));
        assert_eq!(
            state.views.lesson_modal.as_ref().unwrap().form.draft().name,
            "Matrices"
        );
    }

    #[test]
    fn password_mismatch_stays_idle() {
        let mut state = State::new(&Config::default()).unwrap();
        let _ = state.update(Msg::SignupUpdate(SignupField::Password, "a".to_string()));
        let _ = state.update(Msg::SignupUpdate(
            SignupField::ConfirmPassword,
            "b".to_string(),
        ));
        let _ = state.update(Msg::SignupSubmit);
        assert!(!state.views.signup.is_loading());
        assert_eq!(
            state.toasts.iter().next().unwrap().notification.message,
            "Passwords do not match"
        );
    }

    #[tokio::test]
    async fn signup_populates_session_and_navigates_home() {
        let config = Config {
            signup_delay_ms: 10,
            ..Default::default()
        };
        let mut state = State::new(&config).unwrap();
        let _ = state.update(Msg::SignupUpdate(SignupField::Username, "ada".to_string()));
        let _ = state.update(Msg::SignupUpdate(SignupField::Password, "pw".to_string()));
        let _ = state.update(Msg::SignupUpdate(
            SignupField::ConfirmPassword,
            "pw".to_string(),
        ));
        let _ = state.update(Msg::SignupSubmit);
        assert!(state.views.signup.is_loading());
        let ticket = match state.views.signup.form.phase() {
            SubmitPhase::Submitting(ticket) => ticket,
            SubmitPhase::Idle => panic!("no signup in flight"),
        };

        let outcome = Outcome::from(
            state
                .auth
                .sign_up(SignUpRequest {
                    username: "ada".to_string(),
                    email: String::new(),
                    password: "pw".to_string(),
                })
                .await,
        );
        let _ = state.update(Msg::SignupResult(ticket, outcome));
        assert!(state.session.is_signed_in());
        assert_eq!(state.router.current(), Route::Home);
        assert!(!state.views.signup.is_loading());
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn home_requires_a_session() {
        let mut state = State::new(&Config::default()).unwrap();
        let _ = state.update(Msg::Navigate(Route::Login));
        let _ = state.update(Msg::Navigate(Route::Home));
        assert_eq!(state.router.current(), Route::Signup);
    }
}
