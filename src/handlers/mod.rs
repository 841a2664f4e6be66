//! Request handlers
//!
//! Handler functions for the CMS routes, plus the shared plumbing every
//! handler uses: session resolution, page context, and error recovery.
//!
//! Handlers follow one discipline: snapshot the store before existence
//! checks, validate before mutating, at most one store mutation per
//! request, exactly one flash message per terminal response, and a
//! redirect after every mutation.

pub mod documents;
pub mod users;

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use log::error;
use std::fmt;

use crate::session::SessionTicket;
use crate::state::AppState;
use crate::templates::PageContext;

/// Attaches the session cookie when this request opened a fresh session.
pub(crate) fn with_session_cookie(
    state: &AppState,
    ticket: &SessionTicket,
    mut response: Response,
) -> Response {
    if ticket.is_new {
        match HeaderValue::from_str(&state.sessions.cookie_for(ticket)) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => error!("Failed to build session cookie header: {}", e),
        }
    }
    response
}

/// Builds the page context for a rendered page, consuming the flash
/// message in the process.
pub(crate) async fn page_context(state: &AppState, ticket: &SessionTicket) -> PageContext {
    PageContext {
        message: state.sessions.take_message(&ticket.token).await,
        user: state.sessions.current_user(&ticket.token).await,
    }
}

/// Logs an unrecoverable failure and returns a generic server error.
/// Only filesystem faults outside normal invalid input end up here.
pub(crate) fn server_error(context: &str, e: impl fmt::Display) -> Response {
    error!("{}: {}", context, e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong").into_response()
}
