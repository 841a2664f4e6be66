//! Inkpad CMS - Entry Point
//!
//! A minimal file-backed content-management web server: list, view,
//! create, edit, and delete text/markdown documents.

use log::{error, info};

use inkpad::Server;
use inkpad::config::ServerConfig;
use inkpad::error::CmsError;

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching inkpad CMS server...");

    if let Err(e) = run().await {
        error!("Server failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CmsError> {
    let config = ServerConfig::load()?;
    let server = Server::new(config).await?;
    server.start().await
}
