use camp_store::database::DEFAULT_DATABASE_URL;

/// Errors raised while reading the server configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set to a value that could not be parsed
    #[error("Invalid value {value:?} for {key}")]
    InvalidValue {
        /// Name of the environment variable
        key: &'static str,
        /// The raw value found
        value: String,
    },
}

/// Server configuration, read from the environment (and `.env` when present)
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Store location, e.g. `sqlite://camp.db`
    pub database_url: String,
    /// Upper bound on pooled database connections
    pub max_connections: u32,
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            host: "0.0.0.0".to_string(),
            port: 5555,
        }
    }
}

impl ServerConfig {
    /// Reads `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS`, `HOST` and `PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup, falling back to defaults
    /// for anything unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", defaults.max_connections)?,
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
        })
    }

    /// The `host:port` pair to bind the HTTP server to
    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}
