use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint of the spaCy annotation service.
    pub annotator_url: String,
    pub annotator_timeout: Duration,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            annotator_url: require_env("ANNOTATOR_URL")?,
            annotator_timeout: Duration::from_secs(parse_env("ANNOTATOR_TIMEOUT_SECS", 30)?),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable name so parallel tests don't race.

    #[test]
    fn test_parse_env_defaults_when_unset() {
        std::env::remove_var("RESUMATCH_TEST_UNSET");
        assert_eq!(parse_env("RESUMATCH_TEST_UNSET", 42u16).unwrap(), 42);
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("RESUMATCH_TEST_PORT", " 9090 ");
        assert_eq!(parse_env("RESUMATCH_TEST_PORT", 8080u16).unwrap(), 9090);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("RESUMATCH_TEST_BAD", "eighty");
        let err = parse_env("RESUMATCH_TEST_BAD", 8080u16).unwrap_err();
        assert!(err.to_string().contains("RESUMATCH_TEST_BAD"));
    }

    #[test]
    fn test_require_env_names_missing_key() {
        std::env::remove_var("RESUMATCH_TEST_REQUIRED");
        let err = require_env("RESUMATCH_TEST_REQUIRED").unwrap_err();
        assert!(err.to_string().contains("RESUMATCH_TEST_REQUIRED"));
    }
}
