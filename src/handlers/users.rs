//! User handlers
//!
//! Sign-in and sign-out routes. Credential checking goes through the
//! injected `CredentialChecker`, never a literal pair.

use axum::Form;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};
use log::{info, warn};
use serde::Deserialize;

use crate::handlers::{page_context, with_session_cookie};
use crate::state::AppState;
use crate::templates;

#[derive(Debug, Deserialize)]
pub struct SignInForm {
    pub username: String,
    pub password: String,
}

/// GET /users/signin - the sign-in form, pre-filled with the last failed
/// username if one was echoed.
pub async fn sign_in_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let ticket = state.sessions.resolve(&headers);

    let echoed = state
        .sessions
        .take_failed_username(&ticket.token)
        .await
        .unwrap_or_default();

    let ctx = page_context(&state, &ticket).await;
    let page = templates::sign_in_page(&ctx, &echoed);
    with_session_cookie(&state, &ticket, Html(page).into_response())
}

/// POST /users/signin - checks the submitted pair against the credential
/// policy; success signs the session in, failure echoes the username
/// back to the form.
pub async fn sign_in(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SignInForm>,
) -> Response {
    let ticket = state.sessions.resolve(&headers);

    if state.credentials.check(&form.username, &form.password) {
        info!("User {} signed in", form.username);
        state.sessions.sign_in(&ticket.token, &form.username).await;
        state.sessions.set_message(&ticket.token, "Welcome!").await;
        return with_session_cookie(&state, &ticket, Redirect::to("/").into_response());
    }

    warn!("Failed sign-in attempt for {:?}", form.username);
    state
        .sessions
        .set_message(&ticket.token, "Invalid Credentials")
        .await;
    state
        .sessions
        .echo_failed_username(&ticket.token, &form.username)
        .await;
    with_session_cookie(&state, &ticket, Redirect::to("/users/signin").into_response())
}

/// POST /users/signout - clears the signed-in user and redirects home.
pub async fn sign_out(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let ticket = state.sessions.resolve(&headers);

    state.sessions.sign_out(&ticket.token).await;
    state
        .sessions
        .set_message(&ticket.token, "You have been signed out.")
        .await;
    with_session_cookie(&state, &ticket, Redirect::to("/").into_response())
}
