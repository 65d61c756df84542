//! Pager configuration
//!
//! Every field defaults to the fixed values the component ships with, so an
//! empty YAML document (or no file at all) yields the stock behavior.

use crate::error::{Error, Result, ResultExt};
use crate::types::{DEFAULT_ENDPOINT, DEFAULT_HEADING, PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Configuration for a mounted list component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerConfig {
    /// URL the user collection is fetched from
    pub endpoint: String,

    /// Records per page
    pub page_size: usize,

    /// Heading rendered above the list
    pub heading: String,

    /// User agent sent with the fetch
    pub user_agent: String,

    /// Optional request timeout in seconds (none by default)
    pub timeout_secs: Option<u64>,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: PAGE_SIZE,
            heading: DEFAULT_HEADING.to_string(),
            user_agent: format!("user-pager/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: None,
        }
    }
}

impl PagerConfig {
    /// Parse and validate a config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::config(format!(
                    "Config file '{}' not found",
                    path.display()
                )));
            }
            read => {
                read.context(format!("Failed to read config file '{}'", path.display()))?
            }
        };
        Self::from_yaml_str(&content)
    }

    /// Override the endpoint
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Check that the config describes something that can be mounted
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be at least 1"));
        }

        let url = Url::parse(&self.endpoint)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "endpoint",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        if self.timeout_secs == Some(0) {
            return Err(Error::invalid_value("timeout_secs", "must be at least 1"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = PagerConfig::default();
        assert_eq!(config.endpoint, "https://dummyjson.com/users");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.heading, "List Component");
        assert!(config.timeout().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = PagerConfig::from_yaml_str("").unwrap();
        assert_eq!(config, PagerConfig::default());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = PagerConfig::from_yaml_str(
            r"
endpoint: http://localhost:8080/users
timeout_secs: 5
",
        )
        .unwrap();

        assert_eq!(config.endpoint, "http://localhost:8080/users");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = PagerConfig::from_yaml_str("page_size: 0").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "page_size"));
    }

    #[test]
    fn test_bad_endpoint_rejected() {
        let err = PagerConfig::default()
            .with_endpoint("not a url")
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));

        let err = PagerConfig::default()
            .with_endpoint("ftp://example.com/users")
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "endpoint"));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = PagerConfig::from_yaml_str("page_size: [1, 2").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size: 25\nheading: Users").unwrap();

        let config = PagerConfig::load(file.path()).unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.heading, "Users");
    }

    #[test]
    fn test_load_unreadable_path_adds_context() {
        let dir = tempfile::tempdir().unwrap();
        let err = PagerConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Other(_)));
        assert!(err.to_string().starts_with("Failed to read config file"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PagerConfig::load(dir.path().join("missing.yaml")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
