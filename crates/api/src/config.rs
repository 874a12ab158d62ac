use std::str::FromStr;

/// Deployment mode, read from `ENVIRONMENT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Testing,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" => Ok(Environment::Development),
            "testing" => Ok(Environment::Testing),
            "production" => Ok(Environment::Production),
            _ => Err(ConfigError::Invalid {
                key: "ENVIRONMENT",
                value: s.to_string(),
                expected: "one of development, testing, production",
            }),
        }
    }
}

/// Errors raised while reading configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has invalid value '{value}': expected {expected}")]
    Invalid {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Server configuration loaded from environment variables.
///
/// Built once at startup and shared read-only through
/// [`AppState`](crate::state::AppState).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Name shown in the root health payload.
    pub app_name: String,
    /// Version shown in the root health payload.
    pub app_version: String,
    pub environment: Environment,
    /// Enables SQL statement logging.
    pub debug: bool,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Upper bound on pooled database connections (default: `20`).
    pub database_max_connections: u32,
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Largest page size the list endpoint will serve (default: `1000`).
    pub max_list_limit: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `APP_NAME`                 | `Task Management API`      |
    /// | `APP_VERSION`              | crate version              |
    /// | `ENVIRONMENT`              | `development`              |
    /// | `DEBUG`                    | `false`                    |
    /// | `DATABASE_URL`             | required                   |
    /// | `DATABASE_MAX_CONNECTIONS` | `20`                       |
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `3000`                     |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                       |
    /// | `MAX_LIST_LIMIT`           | `1000`                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_name = lookup("APP_NAME").unwrap_or_else(|| "Task Management API".into());
        let app_version =
            lookup("APP_VERSION").unwrap_or_else(|| env!("CARGO_PKG_VERSION").into());

        let environment = match lookup("ENVIRONMENT") {
            Some(raw) => raw.parse()?,
            None => Environment::default(),
        };

        let debug = match lookup("DEBUG") {
            Some(raw) => parse_bool("DEBUG", &raw)?,
            None => false,
        };

        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let database_max_connections: u32 = parse_or(
            &lookup,
            "DATABASE_MAX_CONNECTIONS",
            taskapi_db::DEFAULT_MAX_CONNECTIONS,
            "a positive integer",
        )?;

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = parse_or(&lookup, "PORT", 3000, "a valid u16")?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 =
            parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30, "a valid u64")?;

        let max_list_limit: i64 =
            parse_or(&lookup, "MAX_LIST_LIMIT", 1000, "a non-negative integer")?;
        if max_list_limit < 0 {
            return Err(ConfigError::Invalid {
                key: "MAX_LIST_LIMIT",
                value: max_list_limit.to_string(),
                expected: "a non-negative integer",
            });
        }

        Ok(Self {
            app_name,
            app_version,
            environment,
            debug,
            database_url,
            database_max_connections,
            host,
            port,
            cors_origins,
            request_timeout_secs,
            max_list_limit,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn is_testing(&self) -> bool {
        self.environment == Environment::Testing
    }

    /// Default `tracing` filter when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> String {
        let mut filter = String::from("taskapi_api=debug,taskapi_db=debug,tower_http=debug");
        if self.debug {
            filter.push_str(",sqlx=debug");
        }
        filter
    }
}

fn parse_or<F, T>(
    lookup: &F,
    key: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            key,
            value: raw,
            expected,
        }),
        None => Ok(default),
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
            expected: "a boolean",
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/tasks")]).unwrap();
        assert_eq!(config.app_name, "Task Management API");
        assert_eq!(config.environment, Environment::Development);
        assert!(config.is_development());
        assert!(!config.debug);
        assert_eq!(config.database_max_connections, 20);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173".to_string()]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.max_list_limit, 1000);
    }

    #[test]
    fn database_url_is_required() {
        assert_matches!(load(&[]), Err(ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = load(&[
            ("DATABASE_URL", "postgres://db/tasks"),
            ("ENVIRONMENT", "Production"),
            ("DEBUG", "true"),
            ("PORT", "8080"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("MAX_LIST_LIMIT", "50"),
        ])
        .unwrap();
        assert!(config.is_production());
        assert!(config.debug);
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.max_list_limit, 50);
    }

    #[test]
    fn invalid_values_are_reported() {
        assert_matches!(
            load(&[("DATABASE_URL", "x"), ("PORT", "eighty")]),
            Err(ConfigError::Invalid { key: "PORT", .. })
        );
        assert_matches!(
            load(&[("DATABASE_URL", "x"), ("ENVIRONMENT", "staging")]),
            Err(ConfigError::Invalid { key: "ENVIRONMENT", .. })
        );
        assert_matches!(
            load(&[("DATABASE_URL", "x"), ("DEBUG", "maybe")]),
            Err(ConfigError::Invalid { key: "DEBUG", .. })
        );
        assert_matches!(
            load(&[("DATABASE_URL", "x"), ("MAX_LIST_LIMIT", "-1")]),
            Err(ConfigError::Invalid { key: "MAX_LIST_LIMIT", .. })
        );
    }

    #[test]
    fn debug_enables_sql_logging() {
        let mut config = load(&[("DATABASE_URL", "x")]).unwrap();
        assert!(!config.default_log_filter().contains("sqlx"));
        config.debug = true;
        assert!(config.default_log_filter().contains("sqlx=debug"));
    }
}
