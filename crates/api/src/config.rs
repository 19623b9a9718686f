use std::net::IpAddr;
use std::str::FromStr;

use axum::http::HeaderValue;

/// Errors raised while reading [`ServerConfig`] from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Install the demo app and shop scripts at startup (default: `true`).
    pub seed_demo_data: bool,
    /// Serve the GraphiQL console at `/graphiql` (default: `true`).
    pub graphiql_enabled: bool,
    /// Emit a tracing span per GraphQL parse/validate/resolve step
    /// (default: `false`).
    pub graphql_tracing: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `3000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `SEED_DEMO_DATA`       | `true`                  |
    /// | `GRAPHIQL_ENABLED`     | `true`                  |
    /// | `GRAPHQL_TRACING`      | `false`                 |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.into());

        let cors_origins = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                    name: "CORS_ORIGINS",
                    expected: "origin header value",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            host: parse("HOST", var("HOST", "0.0.0.0"), "IP address")?,
            port: parse("PORT", var("PORT", "3000"), "u16")?,
            cors_origins,
            request_timeout_secs: parse(
                "REQUEST_TIMEOUT_SECS",
                var("REQUEST_TIMEOUT_SECS", "30"),
                "u64",
            )?,
            seed_demo_data: parse("SEED_DEMO_DATA", var("SEED_DEMO_DATA", "true"), "bool")?,
            graphiql_enabled: parse("GRAPHIQL_ENABLED", var("GRAPHIQL_ENABLED", "true"), "bool")?,
            graphql_tracing: parse("GRAPHQL_TRACING", var("GRAPHQL_TRACING", "false"), "bool")?,
        })
    }
}

fn parse<T: FromStr>(
    name: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    let parsed = value.trim().parse();
    parsed.map_err(|_| ConfigError::Invalid {
        name,
        expected,
        value,
    })
}
