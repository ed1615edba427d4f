//! Login state for the single interactive user.
//!
//! The presentation layer owns one `Session` and hands it to every store
//! call that acts on behalf of a user. Operations that need an identity
//! fail softly when the session is empty.

use crate::domain::User;

#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    /// An empty session, as at startup
    pub fn new() -> Self {
        Self::default()
    }

    /// A session already logged in as `user`
    pub fn for_user(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// Replace the current identity (re-login switches users)
    pub fn login(&mut self, user: User) {
        tracing::debug!("Session login: {} (id {})", user.username, user.id);
        self.user = Some(user);
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::debug!("Session logout: {}", user.username);
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}
