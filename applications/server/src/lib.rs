//! Roster Server Library
//!
//! REST server for the user roster: bearer-token gate, request logging,
//! configuration, and startup seeding around the in-memory `UserStore`.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use services::AuthService;
pub use state::AppState;
