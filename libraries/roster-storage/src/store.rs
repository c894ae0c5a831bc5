//! The user store
//!
//! All state lives behind one `Mutex`. Every public operation takes the lock
//! exactly once and holds it for the whole read-modify-write, so concurrent
//! callers observe some sequential interleaving of their calls.

use roster_core::{
    types::{CreateUser, Page, Pagination, UpdateUser, User, UserId},
    Result, RosterError,
};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Authoritative, insertion-ordered collection of users
#[derive(Debug, Default)]
pub struct UserStore {
    users: Mutex<Vec<User>>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded through the regular `create` path
    pub fn with_users(payloads: impl IntoIterator<Item = CreateUser>) -> Result<Self> {
        let store = Self::new();
        for payload in payloads {
            store.create(payload)?;
        }
        Ok(store)
    }

    /// Acquire the collection
    ///
    /// No operation panics while holding the guard with the collection
    /// half-written, so a poisoned lock still guards consistent data.
    fn lock(&self) -> MutexGuard<'_, Vec<User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// List one page of users in insertion order
    ///
    /// # Arguments
    /// * `page` - 1-based page number
    /// * `page_size` - items per page, between 1 and 200
    pub fn list(&self, page: i64, page_size: i64) -> Result<Page<User>> {
        let pagination = Pagination::new(page, page_size)?;

        let users = self.lock();
        let items = users
            .iter()
            .skip(pagination.offset())
            .take(pagination.limit())
            .cloned()
            .collect();

        Ok(Page {
            page: pagination.page(),
            page_size: pagination.page_size(),
            total: users.len(),
            items,
        })
    }

    /// Get a user by id
    pub fn get(&self, id: UserId) -> Result<User> {
        self.lock()
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or_else(|| RosterError::not_found(id))
    }

    /// Create a user, assigning the next id after the current maximum
    ///
    /// Fails with `InvalidFields` if the payload does not validate and with
    /// `Conflict` if the email is already taken (case-insensitively).
    pub fn create(&self, payload: CreateUser) -> Result<User> {
        payload.validate()?;

        let mut users = self.lock();
        if users.iter().any(|user| user.email_matches(&payload.email)) {
            return Err(RosterError::conflict(payload.email.trim()));
        }

        let user = payload.into_user(next_id(&users));
        users.push(user.clone());
        Ok(user)
    }

    /// Apply a partial update
    ///
    /// Only fields provided non-blank change. Matching the user's own current
    /// email in any case is not a conflict.
    pub fn update(&self, id: UserId, payload: UpdateUser) -> Result<User> {
        if payload.is_noop() {
            return self.get(id);
        }
        payload.validate()?;

        let mut users = self.lock();
        let index = users
            .iter()
            .position(|user| user.id == id)
            .ok_or_else(|| RosterError::not_found(id))?;

        if let Some(email) = payload.email() {
            if users
                .iter()
                .any(|user| user.id != id && user.email_matches(email))
            {
                return Err(RosterError::conflict(email));
            }
        }

        let user = &mut users[index];
        payload.apply_to(user);
        Ok(user.clone())
    }

    /// Remove a user
    pub fn delete(&self, id: UserId) -> Result<()> {
        let mut users = self.lock();
        let index = users
            .iter()
            .position(|user| user.id == id)
            .ok_or_else(|| RosterError::not_found(id))?;
        users.remove(index);
        Ok(())
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

/// max + 1 rather than len + 1, so ids below the maximum are never reused
fn next_id(users: &[User]) -> UserId {
    users.iter().map(|user| user.id).max().map_or(1, |max| max + 1)
}
