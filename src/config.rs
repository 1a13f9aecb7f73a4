// src/config.rs
use log::LevelFilter;
use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub addr: SocketAddr,
    /// JSON model artifact read at startup.
    pub model_path: PathBuf,
    pub max_workers: usize,
    /// Re-read the model artifact for every render instead of once.
    pub reload_model: bool,
    pub log_level: LevelFilter,
    /// Prefix of the displayed price, e.g. "£".
    pub currency_symbol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            model_path: PathBuf::from("models/london_price_model.json"),
            max_workers: 8,
            reload_model: false,
            log_level: LevelFilter::Info,
            currency_symbol: "£".to_string(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ConfigError {
    pub var: String,
    pub value: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid value for {}: {:?}", self.var, self.value)
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    /// Defaults overridden by `PREDICTOR_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup("PREDICTOR_ADDR") {
            cfg.addr = v.parse().map_err(|_| invalid("PREDICTOR_ADDR", &v))?;
        }
        if let Some(v) = lookup("PREDICTOR_MODEL_PATH") {
            cfg.model_path = PathBuf::from(v);
        }
        if let Some(v) = lookup("PREDICTOR_MAX_WORKERS") {
            cfg.max_workers = v
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| invalid("PREDICTOR_MAX_WORKERS", &v))?;
        }
        if let Some(v) = lookup("PREDICTOR_RELOAD_MODEL") {
            cfg.reload_model = parse_flag(&v).ok_or_else(|| invalid("PREDICTOR_RELOAD_MODEL", &v))?;
        }
        if let Some(v) = lookup("PREDICTOR_LOG_LEVEL") {
            cfg.log_level = v.parse().map_err(|_| invalid("PREDICTOR_LOG_LEVEL", &v))?;
        }
        if let Some(v) = lookup("PREDICTOR_CURRENCY_SYMBOL") {
            cfg.currency_symbol = v;
        }

        Ok(cfg)
    }
}

fn invalid(var: &str, value: &str) -> ConfigError {
    ConfigError {
        var: var.to_string(),
        value: value.to_string(),
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn cfg(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let c = cfg(&[]).unwrap();
        assert_eq!(c.addr.to_string(), "127.0.0.1:3000");
        assert_eq!(c.model_path, PathBuf::from("models/london_price_model.json"));
        assert_eq!(c.max_workers, 8);
        assert!(!c.reload_model);
        assert_eq!(c.log_level, LevelFilter::Info);
        assert_eq!(c.currency_symbol, "£");
    }

    #[test]
    fn env_overrides() {
        let c = cfg(&[
            ("PREDICTOR_ADDR", "0.0.0.0:8080"),
            ("PREDICTOR_MODEL_PATH", "/srv/model.json"),
            ("PREDICTOR_MAX_WORKERS", "2"),
            ("PREDICTOR_RELOAD_MODEL", "yes"),
            ("PREDICTOR_LOG_LEVEL", "debug"),
            ("PREDICTOR_CURRENCY_SYMBOL", "$"),
        ])
        .unwrap();

        assert_eq!(c.addr.port(), 8080);
        assert_eq!(c.model_path, PathBuf::from("/srv/model.json"));
        assert_eq!(c.max_workers, 2);
        assert!(c.reload_model);
        assert_eq!(c.log_level, LevelFilter::Debug);
        assert_eq!(c.currency_symbol, "$");
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            cfg(&[("PREDICTOR_MAX_WORKERS", "0")]).unwrap_err(),
            invalid("PREDICTOR_MAX_WORKERS", "0")
        );
        assert!(cfg(&[("PREDICTOR_ADDR", "localhost")]).is_err());
        assert!(cfg(&[("PREDICTOR_RELOAD_MODEL", "maybe")]).is_err());
        assert!(cfg(&[("PREDICTOR_LOG_LEVEL", "loud")]).is_err());
    }
}
