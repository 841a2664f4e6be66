//! Shared application state
//!
//! Everything a request handler needs, cloned cheaply per request.

use std::sync::Arc;

use crate::auth::CredentialChecker;
use crate::session::SessionRegistry;
use crate::store::DocumentStore;

/// Handler-visible state: the document store, the session registry, and
/// the credential policy.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DocumentStore>,
    pub sessions: SessionRegistry,
    pub credentials: Arc<dyn CredentialChecker + Send + Sync>,
}

impl AppState {
    pub fn new(
        store: DocumentStore,
        sessions: SessionRegistry,
        credentials: impl CredentialChecker + Send + Sync + 'static,
    ) -> Self {
        Self {
            store: Arc::new(store),
            sessions,
            credentials: Arc::new(credentials),
        }
    }
}
