//! Session management
//!
//! Per-client flash messages and sign-in state, carried across redirects
//! by a cookie-held token into a server-side registry.

pub mod registry;
pub mod state;

pub use registry::{SessionRegistry, SessionTicket};
pub use state::Session;
