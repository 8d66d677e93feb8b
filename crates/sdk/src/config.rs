//! Configuration types for the batch console SDK.

use crate::error::{BatchError, BatchResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Environment variable consulted for the REST root URL.
pub const REST_URL_ENV: &str = "BATCH_REST_URL";

/// REST root used when nothing else is configured.
pub const DEFAULT_REST_URL: &str = "http://localhost:8080/api";

/// Configuration for the batch console client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// REST root URL, including host, context path and API path.
    pub base_url: Url,
    /// Request timeout applied by the HTTP transport.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(30),
        }
    }

    /// Resolve the configuration from the usual sources.
    ///
    /// Precedence: `explicit` override, then the config file, then the
    /// `BATCH_REST_URL` environment variable, then [`DEFAULT_REST_URL`].
    pub fn resolve(explicit: Option<&str>, config_file: Option<&Path>) -> BatchResult<Self> {
        Self::resolve_with(explicit, config_file, |key| std::env::var(key).ok())
    }

    /// Like [`ClientConfig::resolve`] with a custom environment lookup.
    pub fn resolve_with<F>(
        explicit: Option<&str>,
        config_file: Option<&Path>,
        env: F,
    ) -> BatchResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match config_file {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        let rest_url = explicit
            .map(str::to_string)
            .or(file.rest_url)
            .or_else(|| env(REST_URL_ENV).filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| {
                tracing::info!(url = DEFAULT_REST_URL, "No REST URL configured, using default");
                DEFAULT_REST_URL.to_string()
            });

        let mut config = Self::new(Url::parse(&rest_url)?);
        if let Some(secs) = file.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}

/// On-disk configuration file (TOML).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub rest_url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Load a config file. A missing file yields an empty config.
    pub fn load(path: &Path) -> BatchResult<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "Configuration file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            BatchError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            BatchError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_with_url(key: &str) -> Option<String> {
        (key == REST_URL_ENV).then(|| "http://env-host:9090/api".to_string())
    }

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_client_config_defaults() {
        let url = Url::parse("https://example.com/api").unwrap();
        let config = ClientConfig::new(url.clone());

        assert_eq!(config.base_url, url);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let config = ClientConfig::resolve_with(None, None, no_env).unwrap();
        assert_eq!(config.base_url.as_str(), DEFAULT_REST_URL);
    }

    #[test]
    fn test_resolve_env_over_default() {
        let config = ClientConfig::resolve_with(None, None, env_with_url).unwrap();
        assert_eq!(config.base_url.as_str(), "http://env-host:9090/api");
    }

    #[test]
    fn test_resolve_file_over_env() {
        let file = config_file("rest_url = \"http://file-host/batch/api\"\ntimeout_secs = 5\n");

        let config = ClientConfig::resolve_with(None, Some(file.path()), env_with_url).unwrap();
        assert_eq!(config.base_url.as_str(), "http://file-host/batch/api");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_resolve_explicit_over_everything() {
        let file = config_file("rest_url = \"http://file-host/batch/api\"\n");

        let config = ClientConfig::resolve_with(
            Some("http://explicit/api"),
            Some(file.path()),
            env_with_url,
        )
        .unwrap();
        assert_eq!(config.base_url.as_str(), "http://explicit/api");
    }

    #[test]
    fn test_file_without_url_uses_env() {
        let file = config_file("timeout_secs = 10\n");

        let config = ClientConfig::resolve_with(None, Some(file.path()), env_with_url).unwrap();
        assert_eq!(config.base_url.as_str(), "http://env-host:9090/api");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let config = ClientConfig::resolve_with(None, Some(&path), no_env).unwrap();
        assert_eq!(config.base_url.as_str(), DEFAULT_REST_URL);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let file = config_file("rest_url = [");

        let result = ClientConfig::resolve_with(None, Some(file.path()), no_env);
        assert!(matches!(result, Err(BatchError::Config(_))));
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let result = ClientConfig::resolve_with(Some("not a url"), None, no_env);
        assert!(matches!(result, Err(BatchError::InvalidUrl(_))));
    }
}
