//! HTTP server
//!
//! Binds the listener, wires the routes to their handlers, and runs the
//! serve loop.

use axum::Router;
use axum::routing::{get, post};
use log::{error, info};
use tokio::net::TcpListener;

use crate::auth::StaticCredentials;
use crate::config::ServerConfig;
use crate::error::CmsError;
use crate::handlers::{documents, users};
use crate::session::SessionRegistry;
use crate::state::AppState;
use crate::store::DocumentStore;

pub struct Server {
    listener: TcpListener,
    state: AppState,
}

impl Server {
    /// Binds the configured address and assembles the application state.
    /// Creates the store root directory if it does not exist yet.
    pub async fn new(config: ServerConfig) -> Result<Self, CmsError> {
        let addr = config.listen_addr();
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            error!("Failed to bind to {}: {}", addr, e);
            CmsError::Io(e)
        })?;
        info!("Server bound to {}", addr);

        let contents = config.contents_path();
        std::fs::create_dir_all(&contents)?;
        info!("Store root: {}", contents.display());

        let state = AppState::new(
            DocumentStore::new(contents),
            SessionRegistry::new(&config.session_cookie),
            StaticCredentials::from_config(&config),
        );

        Ok(Self { listener, state })
    }

    /// Builds the route table. Static routes take precedence over the
    /// `{filename}` captures, so `/new` and `/users/...` never shadow a
    /// document.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(documents::index))
            .route(
                "/new",
                get(documents::new_document_page).post(documents::create_document),
            )
            .route(
                "/users/signin",
                get(users::sign_in_page).post(users::sign_in),
            )
            .route("/users/signout", post(users::sign_out))
            .route("/{filename}", get(documents::view_document))
            .route(
                "/{filename}/edit",
                get(documents::edit_document_page).post(documents::update_document),
            )
            .route("/{filename}/delete", post(documents::delete_document))
            .with_state(state)
    }

    /// Runs the serve loop until the process is stopped.
    pub async fn start(self) -> Result<(), CmsError> {
        info!("Starting inkpad CMS server");
        let app = Self::router(self.state);
        axum::serve(self.listener, app).await?;
        Ok(())
    }
}
