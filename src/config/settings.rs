//! Application settings and configuration structures.

use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Persistence backend selection
    pub store: StoreSettings,

    /// Database configuration (PostgreSQL)
    pub database: DatabaseSettings,

    /// Presence sweeper timing
    pub presence: PresenceSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// Which persistence collaborator backs the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local storage, lost on restart
    Memory,
    /// PostgreSQL via `database.url`
    Postgres,
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreBackend::Memory => write!(f, "memory"),
            StoreBackend::Postgres => write!(f, "postgres"),
        }
    }
}

/// Persistence configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    pub backend: StoreBackend,
}

/// PostgreSQL database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Database connection URL (required for the postgres backend)
    pub url: Option<String>,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections to maintain
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout: u64,
}

/// Presence sweeper configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PresenceSettings {
    /// Seconds between sweeps
    pub sweep_interval_secs: u64,

    /// Seconds without a heartbeat after which a participant is evicted
    pub inactivity_threshold_secs: u64,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins (comma-separated in env); empty allows any origin
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if the loaded values are inconsistent.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        // Determine the running environment
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("store.backend", "memory")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("database.acquire_timeout", 30)?
            .set_default("presence.sweep_interval_secs", 15)?
            .set_default("presence.inactivity_threshold_secs", 10)?
            .set_default("cors.allowed_origins", Vec::<String>::new())?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Load from environment variables
            // APP__SERVER__PORT=5000 -> server.port = 5000
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            // Map simple environment variables
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("store.backend", std::env::var("STORE_BACKEND").ok())?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| {
                settings.validate()?;
                Ok(settings)
            })
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.backend == StoreBackend::Postgres && self.database.url.is_none() {
            return Err(ConfigError::Message(
                "database.url (or DATABASE_URL) is required when store.backend = postgres".into(),
            ));
        }

        if self.presence.sweep_interval_secs == 0 || self.presence.inactivity_threshold_secs == 0 {
            return Err(ConfigError::Message(
                "presence.sweep_interval_secs and presence.inactivity_threshold_secs must be positive"
                    .into(),
            ));
        }

        Ok(())
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".into(),
                port: 5000,
            },
            store: StoreSettings {
                backend: StoreBackend::Memory,
            },
            database: DatabaseSettings::default(),
            presence: PresenceSettings::default(),
            cors: CorsSettings {
                allowed_origins: Vec::new(),
            },
            environment: "development".into(),
        }
    }
}

impl PresenceSettings {
    /// Time between sweeps.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    /// Inactivity threshold as a chrono duration, for timestamp arithmetic.
    pub fn inactivity_threshold(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.inactivity_threshold_secs as i64)
    }
}

impl Default for PresenceSettings {
    fn default() -> Self {
        Self {
            sweep_interval_secs: 15,
            inactivity_threshold_secs: 10,
        }
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 10,
            min_connections: 2,
            acquire_timeout: 30,
        }
    }
}

impl DatabaseSettings {
    /// Get the connection URL.
    pub fn connection_url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}
