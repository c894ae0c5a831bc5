/// Startup seeding
use crate::config::SeedSettings;
use roster_core::Result;
use roster_storage::UserStore;

/// Insert the configured seed users through the regular create path
///
/// Returns how many users were inserted. Seeding stops at the first user
/// that fails validation or collides with an existing email.
pub fn seed_store(store: &UserStore, settings: &SeedSettings) -> Result<usize> {
    if !settings.enabled {
        tracing::info!("Seeding disabled");
        return Ok(0);
    }

    for payload in &settings.users {
        let user = store.create(payload.clone())?;
        tracing::debug!(user_id = user.id, email = %user.email, "Seeded user");
    }

    tracing::info!("Seeded {} users", settings.users.len());
    Ok(settings.users.len())
}
