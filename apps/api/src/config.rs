use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";
const DEFAULT_PROXY: &str = "http://127.0.0.1:7890";

/// Application configuration loaded from environment variables.
/// Every setting has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub app_version: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub gemini: GeminiConfig,
    /// Accepted and reported on `/health/ready`; no limiter is wired.
    pub rate_limit_requests: u32,
    pub rate_limit_window_secs: u64,
    pub row_store: Option<RowStoreConfig>,
    /// Level for this crate when `RUST_LOG` is unset.
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    pub max_retries: u32,
    /// Set only when `USE_PROXY=true`.
    pub proxy: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RowStoreConfig {
    pub url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl Default for Config {
    /// The values used for every unset variable.
    fn default() -> Self {
        Config {
            app_name: "Toolkit API".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            host: "0.0.0.0".to_string(),
            port: 18512,
            cors_origins: split_list(DEFAULT_CORS_ORIGINS),
            gemini: GeminiConfig {
                api_key: String::new(),
                model: "gemini-2.5-flash".to_string(),
                base_url: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
                timeout: Duration::from_secs(60),
                max_retries: 3,
                proxy: None,
            },
            rate_limit_requests: 100,
            rate_limit_window_secs: 60,
            row_store: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let timeout = Duration::from_secs(parse_env("API_TIMEOUT", defaults.gemini.timeout.as_secs())?);

        let use_proxy = parse_env("USE_PROXY", false)?;
        let proxy = use_proxy.then(|| env_or("HTTP_PROXY", DEFAULT_PROXY));

        let row_store_url = env_or("SUPABASE_URL", "");
        let row_store_key = env_or("SUPABASE_ANON_KEY", "");
        let row_store = (!row_store_url.is_empty() && !row_store_key.is_empty()).then(|| {
            RowStoreConfig {
                url: row_store_url.trim_end_matches('/').to_string(),
                api_key: row_store_key,
                timeout,
            }
        });

        Ok(Config {
            app_name: env_or("APP_NAME", &defaults.app_name),
            app_version: env_or("APP_VERSION", &defaults.app_version),
            host: env_or("HOST", &defaults.host),
            port: parse_env("PORT", defaults.port)?,
            cors_origins: split_list(&env_or("CORS_ORIGINS", DEFAULT_CORS_ORIGINS)),
            gemini: GeminiConfig {
                api_key: env_or("GEMINI_API_KEY", ""),
                model: env_or("GEMINI_MODEL", &defaults.gemini.model),
                base_url: env_or("GEMINI_API_BASE_URL", &defaults.gemini.base_url),
                timeout,
                max_retries: parse_env("MAX_RETRIES", defaults.gemini.max_retries)?,
                proxy,
            },
            rate_limit_requests: parse_env("RATE_LIMIT_REQUESTS", defaults.rate_limit_requests)?,
            rate_limit_window_secs: parse_env("RATE_LIMIT_WINDOW", defaults.rate_limit_window_secs)?,
            row_store,
            log_level: env_or("LOG_LEVEL", &defaults.log_level),
        })
    }

    /// Fallback tracing directive, used only when `RUST_LOG` is not set.
    pub fn log_filter(&self, targets: &[&str]) -> String {
        targets
            .iter()
            .map(|target| format!("{target}={}", self.log_level))
            .chain(std::iter::once("tower_http=info".to_string()))
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        _ => Ok(default),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_trims_and_drops_empties() {
        let origins = split_list(" http://a.test , ,http://b.test,");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let port: u16 = parse_env("TOOLKIT_TEST_UNSET_PORT", 18512).unwrap();
        assert_eq!(port, 18512);
    }

    #[test]
    fn test_log_filter_uses_level() {
        let config = Config {
            log_level: "debug".to_string(),
            ..Config::default()
        };
        assert_eq!(config.log_filter(&["toolkit_api"]), "toolkit_api=debug,tower_http=info");
        assert_eq!(
            Config::default().log_filter(&["seed_catalog", "toolkit_api"]),
            "seed_catalog=info,toolkit_api=info,tower_http=info"
        );
    }

    #[test]
    fn test_defaults_leave_row_store_disabled() {
        let config = Config::default();
        assert!(config.row_store.is_none());
        assert_eq!(config.port, 18512);
        assert_eq!(config.cors_origins.len(), 2);
        assert!(config.gemini.proxy.is_none());
    }
}
