pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod render;
pub mod server;
pub mod session;
pub mod state;
pub mod store;
pub mod templates;

pub use server::Server;
