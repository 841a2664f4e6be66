//! Document handlers
//!
//! Routes for listing, viewing, creating, editing, and deleting
//! documents. Missing documents are never an error page: they become a
//! flash message and a redirect to the listing.

use axum::Form;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use log::{info, warn};
use serde::Deserialize;

use crate::error::StoreError;
use crate::handlers::{page_context, server_error, with_session_cookie};
use crate::render::{self, DocumentKind};
use crate::session::SessionTicket;
use crate::state::AppState;
use crate::store::{safe_filename, valid_filename};
use crate::templates;

#[derive(Debug, Deserialize)]
pub struct NewDocumentForm {
    pub new_filename: String,
}

#[derive(Debug, Deserialize)]
pub struct EditDocumentForm {
    pub file_content: String,
}

/// GET / - the document listing.
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let ticket = state.sessions.resolve(&headers);

    let snapshot = match state.store.snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => return server_error("Failed to list documents", e),
    };

    let ctx = page_context(&state, &ticket).await;
    let page = templates::index_page(&ctx, snapshot.entries());
    with_session_cookie(&state, &ticket, Html(page).into_response())
}

/// GET /new - the create-document form.
pub async fn new_document_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let ticket = state.sessions.resolve(&headers);
    let ctx = page_context(&state, &ticket).await;
    let page = templates::new_document_page(&ctx);
    with_session_cookie(&state, &ticket, Html(page).into_response())
}

/// GET /{filename} - renders a document per its extension: txt verbatim
/// as text/plain, md to HTML inside the layout.
pub async fn view_document(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    headers: HeaderMap,
) -> Response {
    let ticket = state.sessions.resolve(&headers);

    let snapshot = match state.store.snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => return server_error("Failed to list documents", e),
    };

    if !snapshot.contains(&filename) {
        return missing_document(&state, &ticket, &filename).await;
    }

    let raw = match state.store.read(&filename) {
        Ok(raw) => raw,
        // Deleted between snapshot and read: same outcome as missing.
        Err(StoreError::NotFound(_)) => {
            return missing_document(&state, &ticket, &filename).await;
        }
        Err(e) => return server_error("Failed to read document", e),
    };

    let rendered = render::render(&filename, &raw);
    let response = match rendered.kind {
        DocumentKind::Markdown => {
            let ctx = page_context(&state, &ticket).await;
            let page = templates::document_page(&ctx, &rendered.body);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, rendered.content_type)],
                page,
            )
                .into_response()
        }
        DocumentKind::PlainText => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, rendered.content_type)],
            rendered.body,
        )
            .into_response(),
    };

    with_session_cookie(&state, &ticket, response)
}

/// GET /{filename}/edit - raw content in an editable form, for every
/// extension.
pub async fn edit_document_page(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    headers: HeaderMap,
) -> Response {
    let ticket = state.sessions.resolve(&headers);

    let snapshot = match state.store.snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => return server_error("Failed to list documents", e),
    };

    if !snapshot.contains(&filename) {
        return missing_document(&state, &ticket, &filename).await;
    }

    let raw = match state.store.read(&filename) {
        Ok(raw) => raw,
        Err(StoreError::NotFound(_)) => {
            return missing_document(&state, &ticket, &filename).await;
        }
        Err(e) => return server_error("Failed to read document", e),
    };

    let content = String::from_utf8_lossy(&raw);
    let ctx = page_context(&state, &ticket).await;
    let page = templates::edit_page(&ctx, &filename, &content);
    with_session_cookie(&state, &ticket, Html(page).into_response())
}

/// POST /new - creates an empty document and redirects to the listing.
pub async fn create_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<NewDocumentForm>,
) -> Response {
    let ticket = state.sessions.resolve(&headers);
    let filename = form.new_filename.trim().to_string();

    if !valid_filename(&filename) {
        state
            .sessions
            .set_message(&ticket.token, "A name is required.")
            .await;
        return redirect_to(&state, &ticket, "/new");
    }

    if !safe_filename(&filename) {
        warn!("Rejected unsafe document name {:?}", filename);
        state
            .sessions
            .set_message(&ticket.token, "That name is not allowed.")
            .await;
        return redirect_to(&state, &ticket, "/new");
    }

    if let Err(e) = state.store.create(&filename) {
        return server_error("Failed to create document", e);
    }

    state
        .sessions
        .set_message(&ticket.token, format!("{} was created.", filename))
        .await;
    redirect_to(&state, &ticket, "/")
}

/// POST /{filename}/edit - overwrites the document's content and
/// redirects to the listing.
pub async fn update_document(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    headers: HeaderMap,
    Form(form): Form<EditDocumentForm>,
) -> Response {
    let ticket = state.sessions.resolve(&headers);

    let snapshot = match state.store.snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => return server_error("Failed to list documents", e),
    };

    if !snapshot.contains(&filename) {
        return missing_document(&state, &ticket, &filename).await;
    }

    if let Err(e) = state.store.write(&filename, &form.file_content) {
        return server_error("Failed to update document", e);
    }

    state
        .sessions
        .set_message(&ticket.token, format!("{} has been updated.", filename))
        .await;
    redirect_to(&state, &ticket, "/")
}

/// POST /{filename}/delete - removes the document and redirects to the
/// listing.
pub async fn delete_document(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    headers: HeaderMap,
) -> Response {
    let ticket = state.sessions.resolve(&headers);

    let snapshot = match state.store.snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => return server_error("Failed to list documents", e),
    };

    if !snapshot.contains(&filename) {
        return missing_document(&state, &ticket, &filename).await;
    }

    match state.store.delete(&filename) {
        Ok(()) => {}
        // A racing delete beat us to it; the document is gone either way.
        Err(StoreError::NotFound(_)) => {
            return missing_document(&state, &ticket, &filename).await;
        }
        Err(e) => return server_error("Failed to delete document", e),
    }

    state
        .sessions
        .set_message(&ticket.token, format!("{} has been deleted.", filename))
        .await;
    redirect_to(&state, &ticket, "/")
}

/// Flash "does not exist" and send the client back to the listing.
async fn missing_document(state: &AppState, ticket: &SessionTicket, filename: &str) -> Response {
    info!("Request for missing document {:?}", filename);
    state
        .sessions
        .set_message(&ticket.token, format!("{} does not exist.", filename))
        .await;
    redirect_to(state, ticket, "/")
}

fn redirect_to(state: &AppState, ticket: &SessionTicket, location: &str) -> Response {
    with_session_cookie(state, ticket, Redirect::to(location).into_response())
}
