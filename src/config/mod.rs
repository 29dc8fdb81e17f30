#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::html::DEFAULT_SELECTORS;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::collections::HashMap;
use std::time::Duration;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

pub const DEFAULT_USER_AGENT: &str = concat!("post2md/", env!("CARGO_PKG_VERSION"));
pub const MAX_TIMEOUT_SECS: u64 = 600;

/// Values given on the command line. `None` falls through to the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub url: Option<String>,
    pub user_agent: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub selectors: Vec<String>,
    pub output_path: Option<String>,
}

/// Fully resolved run configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    pub url: String,
    pub user_agent: String,
    pub timeout: Option<Duration>,
    pub headers: HashMap<String, String>,
    pub selectors: Vec<String>,
    pub output_path: Option<String>,
}

impl Settings {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            headers: HashMap::new(),
            selectors: DEFAULT_SELECTORS.iter().map(|s| s.to_string()).collect(),
            output_path: None,
        }
    }

    /// Command line > config file > defaults.
    pub fn resolve(file: TomlConfig, overrides: Overrides) -> Result<Self> {
        let url = overrides.url.or(file.source.url);
        let url = validation::validate_required_field("source.url", &url)?;

        let mut settings = Self::new(url.clone());

        if let Some(user_agent) = overrides.user_agent.or(file.source.user_agent) {
            settings.user_agent = user_agent;
        }
        settings.timeout = overrides
            .timeout_seconds
            .or(file.source.timeout_seconds)
            .map(Duration::from_secs);
        settings.headers = file.source.headers.unwrap_or_default();

        if !overrides.selectors.is_empty() {
            settings.selectors = overrides.selectors;
        } else if let Some(selectors) = file.convert.selectors {
            settings.selectors = selectors;
        }

        settings.output_path = overrides.output_path.or(file.output.path);

        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.url", &self.url)?;
        validation::validate_non_empty_string("source.user_agent", &self.user_agent)?;

        if let Some(timeout) = self.timeout {
            validation::validate_range(
                "source.timeout_seconds",
                timeout.as_secs(),
                1,
                MAX_TIMEOUT_SECS,
            )?;
        }

        for selector in &self.selectors {
            validation::validate_non_empty_string("convert.selectors", selector)?;
        }

        if let Some(path) = &self.output_path {
            validation::validate_path("output.path", path)?;
        }

        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn source_url(&self) -> &str {
        &self.url
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    fn selectors(&self) -> &[String] {
        &self.selectors
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::Error;

    #[test]
    fn test_defaults() {
        let settings = Settings::new("https://example.com/real-post");
        assert_eq!(settings.user_agent(), DEFAULT_USER_AGENT);
        assert_eq!(settings.selectors(), ["article", "main", "body"]);
        assert!(settings.timeout().is_none());
        assert!(settings.output_path().is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = TomlConfig::from_toml_str(
            r#"
[source]
url = "https://example.com/from-file"
user_agent = "file-agent"
timeout_seconds = 10

[convert]
selectors = [".from-file"]

[output]
path = "file.md"
"#,
        )
        .unwrap();

        let overrides = Overrides {
            url: Some("https://example.com/from-cli".to_string()),
            timeout_seconds: Some(30),
            selectors: vec![".from-cli".to_string()],
            ..Default::default()
        };

        let settings = Settings::resolve(file, overrides).unwrap();

        assert_eq!(settings.source_url(), "https://example.com/from-cli");
        assert_eq!(settings.user_agent(), "file-agent");
        assert_eq!(settings.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(settings.selectors(), [".from-cli"]);
        assert_eq!(settings.output_path(), Some("file.md"));
    }

    #[test]
    fn test_missing_url() {
        let result = Settings::resolve(TomlConfig::default(), Overrides::default());
        assert!(matches!(result, Err(Error::MissingConfigError { .. })));
    }

    #[test]
    fn test_validation_failures() {
        let mut settings = Settings::new("ftp://example.com/post");
        assert!(settings.validate().is_err());

        settings.url = "https://example.com/post".to_string();
        settings.timeout = Some(Duration::from_secs(0));
        assert!(settings.validate().is_err());

        settings.timeout = Some(Duration::from_secs(MAX_TIMEOUT_SECS + 1));
        assert!(settings.validate().is_err());

        settings.timeout = None;
        settings.selectors = vec![" ".to_string()];
        assert!(settings.validate().is_err());
    }
}
