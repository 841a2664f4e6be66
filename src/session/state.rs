//! Session state
//!
//! Per-client session record: one-shot flash message, signed-in user, and
//! the transient username echo for failed sign-ins.

/// State carried for one client across a redirect boundary.
#[derive(Debug, Clone, Default)]
pub struct Session {
    message: Option<String>,
    user: Option<String>,
    failed_username: Option<String>,
}

impl Session {
    /// Stores a message to be shown on the very next rendered page.
    pub fn set_message(&mut self, text: impl Into<String>) {
        self.message = Some(text.into());
    }

    /// Returns and clears the flash message. A consumed message never
    /// reappears on a later page view.
    pub fn take_message(&mut self) -> Option<String> {
        self.message.take()
    }

    pub fn sign_in(&mut self, username: &str) {
        self.user = Some(username.to_string());
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }

    pub fn current_user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Remembers the username of a failed sign-in so the form can be
    /// redisplayed pre-filled.
    pub fn echo_failed_username(&mut self, username: &str) {
        self.failed_username = Some(username.to_string());
    }

    pub fn take_failed_username(&mut self) -> Option<String> {
        self.failed_username.take()
    }

    /// True when the session carries nothing worth keeping: no pending
    /// flash, no echo, and nobody signed in.
    pub fn is_empty(&self) -> bool {
        self.message.is_none() && self.user.is_none() && self.failed_username.is_none()
    }
}
