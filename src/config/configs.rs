use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::{defaults, envconfig::EnvConfig, validate};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        <Self as EnvConfig>::from_env()
    }
}

impl EnvConfig for AppConfig {
    fn validate(&self) -> Result<()> {
        validate::validate(self)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    pub host: String,
    pub port: u16,
    /// Static asset directory; `public/` next to the working directory or binary when unset.
    pub public_dir: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.to_string(),
            port: defaults::DEFAULT_PORT as u16,
            public_dir: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub rust_log: String,
    /// When set, INFO and above are also appended to this file.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            rust_log: defaults::DEFAULT_RUST_LOG.to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_db_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_db_min_idle")]
    pub min_idle: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_db_max_connections(),
            min_idle: default_db_min_idle(),
        }
    }
}

fn default_database_url() -> String {
    defaults::DEFAULT_DATABASE_URL.to_string()
}

fn default_db_max_connections() -> u32 {
    defaults::DEFAULT_DB_MAX_CONNECTIONS as u32
}

fn default_db_min_idle() -> u32 {
    defaults::DEFAULT_DB_MIN_IDLE as u32
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::AppConfig;
    use crate::config::{EnvConfig, defaults};

    fn vars(pairs: &[(&str, &str)]) -> ::config::Map<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn default_config_points_at_local_sqlite() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.general.host, defaults::DEFAULT_HOST);
        assert_eq!(cfg.general.port, 5000);
        assert_eq!(cfg.database.url, defaults::DEFAULT_DATABASE_URL);
        assert!(cfg.database.min_idle <= cfg.database.max_connections);
    }

    #[test]
    fn nested_keys_fill_optional_paths() {
        let cfg = AppConfig::from_vars(vars(&[
            ("APP_GENERAL__PUBLIC_DIR", "/srv/fyyur/public"),
            ("APP_GENERAL__PORT", "8080"),
            ("APP_LOGGING__FILE", "/var/log/fyyur/error.log"),
        ]))
        .expect("config should load");

        assert_eq!(cfg.general.public_dir.as_deref(), Some(Path::new("/srv/fyyur/public")));
        assert_eq!(cfg.general.port, 8080);
        assert_eq!(cfg.logging.file.as_deref(), Some(Path::new("/var/log/fyyur/error.log")));
        assert_eq!(cfg.database.url, defaults::DEFAULT_DATABASE_URL);
    }

    #[test]
    fn empty_values_count_as_unset() {
        let cfg = AppConfig::from_vars(vars(&[("APP_GENERAL__PUBLIC_DIR", "")]))
            .expect("config should load");

        assert!(cfg.general.public_dir.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = AppConfig::from_vars(vars(&[("APP_GENERAL__PUBLIC_ROOT", "/srv")]))
            .expect_err("unknown key should fail");

        assert!(format!("{err:#}").contains("unknown field"), "{err:#}");
    }
}
