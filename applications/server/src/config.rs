/// Server configuration
use crate::error::{Result, ServerError};
use roster_core::types::CreateUser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file read when no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_auth")]
    pub auth: AuthSettings,

    #[serde(default = "default_seed")]
    pub seed: SeedSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    /// Shared bearer credential every `/api/users` request must present
    #[serde(default)]
    pub api_token: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedSettings {
    #[serde(default = "default_seed_enabled")]
    pub enabled: bool,

    #[serde(default = "default_seed_users")]
    pub users: Vec<CreateUser>,
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `config.toml` in the working
    /// directory is read if present. Environment variables prefixed with
    /// `ROSTER_` override file values, using `__` between sections
    /// (e.g. `ROSTER_AUTH__API_TOKEN`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        settings = match path {
            Some(path) => settings.add_source(
                config::File::from(path.to_path_buf())
                    .format(config::FileFormat::Toml)
                    .required(true),
            ),
            None => settings.add_source(
                config::File::from(PathBuf::from(DEFAULT_CONFIG_FILE))
                    .format(config::FileFormat::Toml)
                    .required(false),
            ),
        };

        // Override with environment variables (prefixed with ROSTER_)
        settings = settings.add_source(
            config::Environment::with_prefix("ROSTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.auth.api_token.trim().is_empty() {
            return Err(ServerError::Config(
                "API token is required (set ROSTER_AUTH__API_TOKEN)".to_string(),
            ));
        }

        if self.server.host.parse::<std::net::IpAddr>().is_err() {
            return Err(ServerError::Config(format!(
                "Invalid listen host: {}",
                self.server.host
            )));
        }

        Ok(())
    }

    /// Copy safe to print: the API token is masked
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if !config.auth.api_token.is_empty() {
            config.auth.api_token = "********".to_string();
        }
        config
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_auth() -> AuthSettings {
    AuthSettings {
        api_token: String::new(),
    }
}

fn default_seed() -> SeedSettings {
    SeedSettings {
        enabled: default_seed_enabled(),
        users: default_seed_users(),
    }
}

fn default_seed_enabled() -> bool {
    true
}

fn default_seed_users() -> Vec<CreateUser> {
    vec![
        CreateUser::new("Alice Johnson", "alice@example.com", "Admin"),
        CreateUser::new("Bob Smith", "bob@example.com", "User"),
    ]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            auth: default_auth(),
            seed: default_seed(),
        }
    }
}
