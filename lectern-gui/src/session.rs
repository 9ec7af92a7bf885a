use crate::services::api::User;

/// The signed in user, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn new(user: Option<User>) -> Self {
        Self { user }
    }

    /// Session resumed from a configured token, without user details.
    pub fn from_token(token: String) -> Self {
        Self::new(Some(User {
            access_token: token,
            name: String::new(),
            img: String::new(),
        }))
    }

    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.access_token.as_str())
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
