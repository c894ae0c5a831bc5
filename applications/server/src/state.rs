/// Shared application state
use crate::services::AuthService;
use roster_storage::UserStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(store: Arc<UserStore>, auth_service: Arc<AuthService>) -> Self {
        Self {
            store,
            auth_service,
        }
    }
}
