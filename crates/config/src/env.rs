use std::env;
use std::str::FromStr;

use falcon_common::error::{FalconError, FalconResult};
use serde::Deserialize;

/// Backing store for the admin records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Memory => "memory",
        }
    }
}

impl FromStr for StoreKind {
    type Err = FalconError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "pg" => Ok(Self::Postgres),
            "memory" | "mem" => Ok(Self::Memory),
            other => Err(FalconError::Config(format!(
                "invalid STORE: {other} (expected postgres or memory)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub store: StoreKind,
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub cors_origins: Vec<String>,
    pub risk_seed: Option<u64>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present, then reads the vars.
    pub fn from_env() -> FalconResult<Self> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        let store: StoreKind = get_var_or("STORE", "postgres").parse()?;
        let database_url = env::var("DATABASE_URL").ok().filter(|v| !v.is_empty());
        if store == StoreKind::Postgres && database_url.is_none() {
            return Err(FalconError::Config(
                "DATABASE_URL is required when STORE=postgres".to_string(),
            ));
        }

        let risk_seed = match env::var("RISK_SEED") {
            Ok(raw) => Some(
                raw.parse()
                    .map_err(|e| FalconError::Config(format!("invalid RISK_SEED: {e}")))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            store,
            database_url,
            host: get_var_or("HOST", "0.0.0.0"),
            port: get_var_or("PORT", "5000")
                .parse()
                .map_err(|e| FalconError::Config(format!("invalid PORT: {e}")))?,
            log_level: get_var_or("LOG_LEVEL", "info"),
            cors_origins: parse_list(&get_var_or(
                "CORS_ORIGINS",
                "http://localhost:3000,http://127.0.0.1:3000",
            )),
            risk_seed,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in ["STORE", "DATABASE_URL", "PORT", "RISK_SEED", "CORS_ORIGINS"] {
            env::remove_var(key);
        }
    }

    #[test]
    fn config_from_env_succeeds_with_database_url() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_env();

        env::set_var("DATABASE_URL", "postgres://localhost/falcon_test");

        let cfg = AppConfig::from_env().expect("should parse config");
        assert_eq!(cfg.store, StoreKind::Postgres);
        assert_eq!(
            cfg.database_url.as_deref(),
            Some("postgres://localhost/falcon_test")
        );
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.risk_seed, None);
        assert_eq!(cfg.cors_origins.len(), 2);

        clear_env();
    }

    #[test]
    fn config_from_env_fails_without_database_url_for_postgres() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_env();

        let result = AppConfig::from_env();
        assert!(result.is_err());
    }

    #[test]
    fn memory_store_does_not_need_database_url() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_env();

        env::set_var("STORE", "memory");
        env::set_var("RISK_SEED", "42");
        env::set_var("CORS_ORIGINS", "http://a.test, ,http://b.test");

        let cfg = AppConfig::from_env().expect("should parse config");
        assert_eq!(cfg.store, StoreKind::Memory);
        assert!(cfg.database_url.is_none());
        assert_eq!(cfg.risk_seed, Some(42));
        assert_eq!(cfg.cors_origins, vec!["http://a.test", "http://b.test"]);

        clear_env();
    }

    #[test]
    fn invalid_seed_is_a_config_error() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_env();

        env::set_var("STORE", "memory");
        env::set_var("RISK_SEED", "not-a-number");

        let err = AppConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("RISK_SEED"));

        clear_env();
    }

    #[test]
    fn store_kind_parses_aliases() {
        assert_eq!("PG".parse::<StoreKind>().unwrap(), StoreKind::Postgres);
        assert_eq!(" memory ".parse::<StoreKind>().unwrap(), StoreKind::Memory);
        assert!("mongo".parse::<StoreKind>().is_err());
        assert_eq!(StoreKind::Memory.as_str(), "memory");
        assert_eq!(StoreKind::Postgres.as_str(), "postgres");
    }

    #[test]
    fn bind_addr_formats_correctly() {
        let cfg = AppConfig {
            store: StoreKind::Memory,
            database_url: None,
            host: "127.0.0.1".to_owned(),
            port: 3000,
            log_level: "debug".to_owned(),
            cors_origins: Vec::new(),
            risk_seed: None,
        };
        assert_eq!(cfg.bind_addr(), "127.0.0.1:3000");
    }
}
