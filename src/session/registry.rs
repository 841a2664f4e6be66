//! Session registry
//!
//! Tracks live sessions keyed by the token carried in the session cookie.
//! Sessions live server-side; the client only ever holds an opaque token.
//!
//! Registry entries are lazy: resolving a request never inserts anything,
//! an entry appears when a handler first writes session state, and it is
//! pruned as soon as it empties again. Cookieless traffic therefore holds
//! no server-side state.

use axum::http::{HeaderMap, header};
use log::info;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::session::Session;

/// Outcome of resolving a request to a session. `is_new` means the client
/// presented no usable token and the response must hand one out.
#[derive(Debug, Clone)]
pub struct SessionTicket {
    pub token: String,
    pub is_new: bool,
}

/// Registry for tracking active sessions
#[derive(Clone)]
pub struct SessionRegistry {
    cookie_name: String,
    sessions: Arc<Mutex<HashMap<String, Session>>>,
}

impl SessionRegistry {
    pub fn new(cookie_name: &str) -> Self {
        Self {
            cookie_name: cookie_name.to_string(),
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Resolves the request's token from its cookie header, minting a
    /// fresh token when the client presents none (or a malformed one).
    /// No registry entry is created here; that waits until a handler
    /// writes session state.
    pub fn resolve(&self, headers: &HeaderMap) -> SessionTicket {
        if let Some(token) = self.token_from_headers(headers) {
            if well_formed_token(&token) {
                return SessionTicket {
                    token,
                    is_new: false,
                };
            }
        }

        let token = Uuid::new_v4().simple().to_string();
        info!("Issued session token {}", &token[..8]);

        SessionTicket {
            token,
            is_new: true,
        }
    }

    /// The Set-Cookie value that hands the ticket's token to the client.
    pub fn cookie_for(&self, ticket: &SessionTicket) -> String {
        format!("{}={}; Path=/; HttpOnly", self.cookie_name, ticket.token)
    }

    /// Number of sessions currently holding state.
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn set_message(&self, token: &str, text: impl Into<String>) {
        self.with_session(token, |session| session.set_message(text))
            .await;
    }

    pub async fn take_message(&self, token: &str) -> Option<String> {
        self.with_session(token, |session| session.take_message())
            .await
    }

    pub async fn sign_in(&self, token: &str, username: &str) {
        self.with_session(token, |session| session.sign_in(username))
            .await;
    }

    pub async fn sign_out(&self, token: &str) {
        self.with_session(token, |session| session.sign_out()).await;
    }

    pub async fn current_user(&self, token: &str) -> Option<String> {
        self.with_session(token, |session| {
            session.current_user().map(str::to_string)
        })
        .await
    }

    pub async fn echo_failed_username(&self, token: &str, username: &str) {
        self.with_session(token, |session| session.echo_failed_username(username))
            .await;
    }

    pub async fn take_failed_username(&self, token: &str) -> Option<String> {
        self.with_session(token, |session| session.take_failed_username())
            .await
    }

    /// Runs an operation against the token's session, creating the entry
    /// on demand and dropping it again once it carries no state. The map
    /// only ever holds sessions with a pending flash, echo, or sign-in.
    async fn with_session<T>(&self, token: &str, f: impl FnOnce(&mut Session) -> T) -> T {
        let mut sessions = self.sessions.lock().await;
        let session = sessions.entry(token.to_string()).or_default();
        let result = f(session);
        let emptied = session.is_empty();
        if emptied {
            sessions.remove(token);
        }
        result
    }

    fn token_from_headers(&self, headers: &HeaderMap) -> Option<String> {
        let raw = headers.get(header::COOKIE)?.to_str().ok()?;
        let prefix = format!("{}=", self.cookie_name);

        raw.split(';')
            .map(str::trim)
            .find_map(|pair| pair.strip_prefix(prefix.as_str()))
            .map(str::to_string)
    }
}

/// Tokens are 32 lowercase hex characters (a uuid without hyphens).
/// Anything else came from a tampered or foreign cookie.
fn well_formed_token(token: &str) -> bool {
    token.len() == 32 && token.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[tokio::test]
    async fn test_resolve_without_cookie_issues_token() {
        let registry = SessionRegistry::new("sid");
        let ticket = registry.resolve(&HeaderMap::new());

        assert!(ticket.is_new);
        assert!(registry.cookie_for(&ticket).starts_with("sid="));
    }

    #[tokio::test]
    async fn test_resolve_reuses_presented_token() {
        let registry = SessionRegistry::new("sid");
        let first = registry.resolve(&HeaderMap::new());

        let headers = headers_with_cookie(&format!("sid={}", first.token));
        let second = registry.resolve(&headers);

        assert!(!second.is_new);
        assert_eq!(second.token, first.token);
    }

    #[tokio::test]
    async fn test_resolve_rejects_malformed_token() {
        let registry = SessionRegistry::new("sid");
        let headers = headers_with_cookie("sid=deadbeef");
        let ticket = registry.resolve(&headers);

        assert!(ticket.is_new);
        assert_ne!(ticket.token, "deadbeef");
    }

    #[tokio::test]
    async fn test_token_parsed_among_other_cookies() {
        let registry = SessionRegistry::new("sid");
        let first = registry.resolve(&HeaderMap::new());

        let headers =
            headers_with_cookie(&format!("theme=dark; sid={}; lang=en", first.token));
        let second = registry.resolve(&headers);

        assert!(!second.is_new);
    }

    #[tokio::test]
    async fn test_resolve_holds_no_server_state() {
        let registry = SessionRegistry::new("sid");

        for _ in 0..10_000 {
            registry.resolve(&HeaderMap::new());
        }

        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_consumed_flash_frees_the_entry() {
        let registry = SessionRegistry::new("sid");
        let ticket = registry.resolve(&HeaderMap::new());

        registry.set_message(&ticket.token, "Welcome!").await;
        assert_eq!(registry.len().await, 1);

        assert_eq!(
            registry.take_message(&ticket.token).await.as_deref(),
            Some("Welcome!")
        );
        assert_eq!(registry.take_message(&ticket.token).await, None);
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_signed_in_session_is_retained() {
        let registry = SessionRegistry::new("sid");
        let ticket = registry.resolve(&HeaderMap::new());

        registry.sign_in(&ticket.token, "admin").await;
        registry.set_message(&ticket.token, "Welcome!").await;
        registry.take_message(&ticket.token).await;

        // Still signed in, so the entry must survive the flash consume.
        assert_eq!(registry.len().await, 1);
        assert_eq!(
            registry.current_user(&ticket.token).await.as_deref(),
            Some("admin")
        );

        registry.sign_out(&ticket.token).await;
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_reads_on_unknown_token_leave_no_entry() {
        let registry = SessionRegistry::new("sid");

        assert_eq!(registry.take_message("0123456789abcdef0123456789abcdef").await, None);
        assert_eq!(
            registry.current_user("0123456789abcdef0123456789abcdef").await,
            None
        );
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_sign_in_state_per_token() {
        let registry = SessionRegistry::new("sid");
        let alice = registry.resolve(&HeaderMap::new());
        let bob = registry.resolve(&HeaderMap::new());

        registry.sign_in(&alice.token, "admin").await;

        assert_eq!(
            registry.current_user(&alice.token).await.as_deref(),
            Some("admin")
        );
        assert_eq!(registry.current_user(&bob.token).await, None);
    }
}
