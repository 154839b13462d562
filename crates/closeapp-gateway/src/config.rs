//! Gateway configuration.
//!
//! | Source | Example | Notes |
//! |--------|---------|-------|
//! | defaults | host `0.0.0.0`, port `8000`, connect timeout `1500` ms | |
//! | TOML file | `config/closeapp.toml` | path from `CLOSEAPP_CONFIG`; skipped when absent |
//! | `CLOSEAPP__*` env | `CLOSEAPP__CONNECT_TIMEOUT_MS=500` | |
//! | bare env | `PORT`, `DATABASE_URL`, `DATABASE_NAME` | highest precedence |

use std::path::Path;

use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "config/closeapp.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    /// Connection string of the optional database checked by `GET /test`.
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default)]
    pub database_name: Option<String>,
    /// Upper bound for the diagnostic TCP connect.
    pub connect_timeout_ms: u64,
}

/// Bare environment variables layered on top of everything else.
#[derive(Debug, Default)]
struct EnvOverrides {
    port: Option<String>,
    database_url: Option<String>,
    database_name: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            port: env_opt_string("PORT"),
            database_url: env_opt_string("DATABASE_URL"),
            database_name: env_opt_string("DATABASE_NAME"),
        }
    }
}

impl GatewayConfig {
    /// Load defaults, then the config file, then `CLOSEAPP__*`, then bare env vars.
    pub fn load() -> Result<Self, config::ConfigError> {
        let path = std::env::var("CLOSEAPP_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&path), EnvOverrides::from_env())
    }

    fn load_from(path: &Path, overrides: EnvOverrides) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8000_i64)?
            .set_default("connect_timeout_ms", 1500_i64)?;

        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        builder
            .add_source(config::Environment::with_prefix("CLOSEAPP").separator("__"))
            .set_override_option("port", overrides.port)?
            .set_override_option("database_url", overrides.database_url)?
            .set_override_option("database_name", overrides.database_name)?
            .build()?
            .try_deserialize()
    }
}

fn env_opt_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let missing = Path::new("does/not/exist.toml");
        let cfg = GatewayConfig::load_from(missing, EnvOverrides::default()).unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8000);
        assert_eq!(cfg.connect_timeout_ms, 1500);
        assert!(cfg.database_url.is_none());
        assert!(cfg.database_name.is_none());
    }

    #[test]
    fn port_override_wins() {
        let overrides = EnvOverrides {
            port: Some("9123".into()),
            ..Default::default()
        };
        let cfg = GatewayConfig::load_from(Path::new("does/not/exist.toml"), overrides).unwrap();
        assert_eq!(cfg.port, 9123);
    }

    #[test]
    fn file_values_sit_under_env_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("closeapp.toml");
        std::fs::write(
            &path,
            concat!(
                "host = \"127.0.0.1\"\nport = 7000\n",
                "database_name = \"leads\"\nconnect_timeout_ms = 250\n",
            ),
        )
        .unwrap();

        let cfg = GatewayConfig::load_from(&path, EnvOverrides::default()).unwrap();
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 7000);
        assert_eq!(cfg.database_name.as_deref(), Some("leads"));
        assert_eq!(cfg.connect_timeout_ms, 250);

        let overrides = EnvOverrides {
            port: Some("7100".into()),
            database_name: Some("crm".into()),
            ..Default::default()
        };
        let cfg = GatewayConfig::load_from(&path, overrides).unwrap();
        assert_eq!(cfg.port, 7100);
        assert_eq!(cfg.database_name.as_deref(), Some("crm"));
    }

    #[test]
    fn invalid_port_is_a_config_error() {
        let overrides = EnvOverrides {
            port: Some("not-a-port".into()),
            ..Default::default()
        };
        assert!(GatewayConfig::load_from(Path::new("does/not/exist.toml"), overrides).is_err());
    }
}
