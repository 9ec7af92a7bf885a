use std::sync::Arc;
use std::time::Duration;

use iced::{Subscription, Task};
use lectern_ui::{
    theme::Theme,
    widget::{modal::Modal, Element},
};

use crate::{
    config::{AuthMode, Config},
    notification::Toasts,
    route::{Route, Router},
    services::{
        api::{ApiClient, ApiError},
        auth::{AuthService, SimulatedAuth},
    },
    session::Session,
};

pub use message::Msg;

pub mod message;
pub mod update;
pub mod views;

/// Main application state
pub struct State {
    pub session: Session,
    pub toasts: Toasts,
    pub router: Router,
    pub views: views::ViewsState,
    pub client: ApiClient,
    pub auth: Arc<dyn AuthService>,
    /// Course shown on the home page.
    pub course_id: u64,
}

impl State {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = ApiClient::new(
            config.api_url.clone(),
            config.lesson_endpoint.clone(),
            config.request_timeout(),
        )?;
        let auth: Arc<dyn AuthService> = match config.auth {
            AuthMode::Simulated => Arc::new(SimulatedAuth::new(config.signup_delay())),
            AuthMode::Remote => Arc::new(client.clone()),
        };
        let session = config
            .access_token
            .clone()
            .map(Session::from_token)
            .unwrap_or_default();
        let start = if session.is_signed_in() {
            Route::Home
        } else {
            Route::Signup
        };
        Ok(Self {
            session,
            toasts: Toasts::default(),
            router: Router::new(start),
            views: views::ViewsState::new(),
            client,
            auth,
            course_id: config.course_id,
        })
    }

    /// Task to run once the window is up.
    pub fn init(&mut self) -> Task<Msg> {
        if self.router.current() == Route::Home {
            self.load_course()
        } else {
            Task::none()
        }
    }

    pub fn title(&self) -> String {
        match self.router.current() {
            Route::Home => self
                .views
                .course
                .course
                .as_ref()
                .and_then(|c| c.name.clone())
                .map(|name| format!("Lectern - {}", name))
                .unwrap_or_else(|| "Lectern".to_string()),
            Route::Login => "Lectern - Sign in".to_string(),
            Route::Signup => "Lectern - Create an account".to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::default()
    }

    /// Ticks while toasts are displayed so they expire.
    pub fn subscription(&self) -> Subscription<Msg> {
        if self.toasts.is_empty() {
            Subscription::none()
        } else {
            iced::time::every(Duration::from_millis(250)).map(Msg::Tick)
        }
    }

    /// Render the current route with the lesson dialog and toasts on top.
    pub fn view(&self) -> Element<'_, Msg> {
        let content = match self.router.current() {
            Route::Home => crate::views::course::course_view(self),
            Route::Login => crate::views::login::login_view(self),
            Route::Signup => crate::views::signup::signup_view(self),
        };

        let content = match (&self.views.lesson_modal, self.router.current()) {
            (Some(modal), Route::Home) => {
                let dialog = crate::views::lesson_modal::lesson_modal_view(
                    modal,
                    self.views.course.course.as_ref(),
                );
                // Clicking outside closes the dialog unless a save is pending.
                let on_blur = (!modal.is_loading()).then_some(Msg::LessonModalClose);
                Modal::new(content, dialog).on_blur(on_blur).into()
            }
            _ => content,
        };

        crate::views::with_toasts(content, &self.toasts)
    }
}

// NOTE: implementation of State::update() is in src/state/update.rs
