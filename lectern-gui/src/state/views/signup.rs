use email_address::EmailAddress;
use iced::task::Handle;

use crate::{
    form::{Draft, FormState, Outcome, Ticket},
    notification::{Notification, Notifier},
    route::{Navigator, Route},
    services::api::{SignUpRequest, User},
    session::Session,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupField {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    PasswordMismatch,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::PasswordMismatch => write!(f, "Passwords do not match"),
        }
    }
}

impl SignupDraft {
    pub fn validate(&self) -> Result<SignUpRequest, ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(SignUpRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    /// Whether the email is worth a warning. Does not block the submission.
    pub fn is_email_suspicious(&self) -> bool {
        !self.email.is_empty() && !EmailAddress::is_valid(&self.email)
    }
}

impl Draft for SignupDraft {
    type Field = SignupField;

    fn set(&mut self, field: SignupField, value: String) {
        match field {
            SignupField::Username => self.username = value,
            SignupField::Email => self.email = value,
            SignupField::Password => self.password = value,
            SignupField::ConfirmPassword => self.confirm_password = value,
        }
    }
}

/// "Create an account" screen.
#[derive(Default)]
pub struct SignupScreen {
    pub form: FormState<SignupDraft>,
    handle: Option<Handle>,
}

impl SignupScreen {
    pub fn on_change(&mut self, field: SignupField, value: String) {
        self.form.on_change(field, value);
    }

    pub fn is_loading(&self) -> bool {
        self.form.is_loading()
    }

    /// Validates the draft and enters the submitting phase.
    ///
    /// A mismatching confirmation is notified and nothing is sent.
    pub fn submit(&mut self, notifier: &mut impl Notifier) -> Option<(Ticket, SignUpRequest)> {
        if self.form.is_loading() {
            return None;
        }
        let request = match self.form.draft().validate() {
            Ok(request) => request,
            Err(e) => {
                notifier.notify(Notification::error(e.to_string()));
                return None;
            }
        };
        let ticket = self.form.begin_submit()?;
        tracing::info!("Signing up {}", request.username);
        Some((ticket, request))
    }

    pub fn set_handle(&mut self, handle: Handle) {
        self.handle = Some(handle);
    }

    /// Settles a signup: the user is signed in and sent to the home page, or
    /// the failure is notified and the screen stays.
    pub fn on_result(
        &mut self,
        ticket: Ticket,
        outcome: Outcome<User>,
        session: &mut Session,
        notifier: &mut impl Notifier,
        navigator: &mut impl Navigator,
    ) {
        if !self.form.settle(ticket) {
            tracing::debug!("Ignoring outcome of a stale signup");
            return;
        }
        self.handle = None;
        match outcome {
            Outcome::Success(user) => {
                tracing::info!("Signed up as {}", user.name);
                session.set_user(user);
                // The credentials are not kept once the account exists.
                self.form = FormState::default();
                navigator.navigate(Route::Home);
            }
            Outcome::Rejected(e) | Outcome::TransportFailed(e) => {
                tracing::warn!("Signup failed: {}", e);
                notifier.notify(Notification::error("Signup failed"));
            }
        }
    }

    /// Aborts the signup in flight, if any, and returns to idle.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.handle.take() {
            tracing::debug!("Aborting signup");
            handle.abort();
        }
        if let crate::form::SubmitPhase::Submitting(ticket) = self.form.phase() {
            self.form.settle(ticket);
        }
    }
}
