//! Roster Core
//!
//! Domain types, validation rules, and error handling for the user roster.
//!
//! This crate is pure: it owns no shared state and performs no I/O. The
//! store in `roster-storage` and the REST server build on top of it.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `CreateUser`, `UpdateUser`, `Page`, `Pagination`
//! - **Validation**: field-level checks for full and partial payloads
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::CreateUser;
//!
//! let payload = CreateUser::new("Alice", "alice@example.com", "Admin");
//! assert!(payload.validate().is_ok());
//!
//! let bad = CreateUser::new("", "not-an-email", "Admin");
//! let errors = bad.validate().unwrap_err();
//! assert!(errors.contains("name"));
//! assert!(errors.contains("email"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use types::{CreateUser, Page, Pagination, UpdateUser, User, UserId};
pub use validation::{validate, FieldErrors, Fields, Mode};
