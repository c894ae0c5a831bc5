//! Roster Storage
//!
//! Concurrency-safe, in-process store of user records.
//!
//! # Architecture
//!
//! - **Single Lock**: one mutex guards the whole collection, so every
//!   operation (reads included) is linearizable
//! - **Check Then Write**: validation and email uniqueness are settled before
//!   any field is written, so a failed call never leaves partial state
//! - **Snapshots Out**: callers only ever receive clones of stored records
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::{CreateUser, UpdateUser};
//! use roster_storage::UserStore;
//!
//! let store = UserStore::new();
//! let alice = store.create(CreateUser::new("Alice", "alice@example.com", "Admin")).unwrap();
//! assert_eq!(alice.id, 1);
//!
//! let update = UpdateUser { role: Some("Owner".into()), ..Default::default() };
//! let alice = store.update(alice.id, update).unwrap();
//! assert_eq!(alice.role, "Owner");
//!
//! let page = store.list(1, 20).unwrap();
//! assert_eq!(page.total, 1);
//! ```

mod store;

pub use store::UserStore;
