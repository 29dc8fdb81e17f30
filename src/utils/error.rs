use thiserror::Error;

/// Every way the URL-to-markdown conversion can fail.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Source URL is empty")]
    EmptyUrl,

    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Unsupported content type '{content_type}' at {url}")]
    UnsupportedContent { url: String, content_type: String },

    #[error("Invalid content selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },

    #[error("No convertible content found at {url}")]
    EmptyDocument { url: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Conversion failed: {0}")]
    Conversion(#[from] ConversionError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Conversion,
    Configuration,
    Output,
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Conversion(_) => ErrorCategory::Conversion,
            Error::IoError(_) => ErrorCategory::Output,
            Error::TomlParseError(_)
            | Error::ConfigError { .. }
            | Error::InvalidConfigValueError { .. }
            | Error::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Conversion => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::Output => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Error::Conversion(ConversionError::EmptyUrl) => {
                "Pass the post URL as the first argument or set source.url in the config file"
            }
            Error::Conversion(ConversionError::Fetch { .. }) => {
                "Check your network connection and that the host is reachable"
            }
            Error::Conversion(ConversionError::Status { .. }) => {
                "Check that the post exists and is publicly accessible"
            }
            Error::Conversion(ConversionError::UnsupportedContent { .. }) => {
                "Only HTML pages can be converted"
            }
            Error::Conversion(ConversionError::Selector { .. }) => {
                "Fix the CSS selector syntax in --selector or convert.selectors"
            }
            Error::Conversion(ConversionError::EmptyDocument { .. }) => {
                "Try a different --selector; the page may render its content with JavaScript"
            }
            Error::IoError(_) => "Check that the output path is writable",
            Error::TomlParseError(_) => "Check the config file for TOML syntax errors",
            Error::ConfigError { .. }
            | Error::InvalidConfigValueError { .. }
            | Error::MissingConfigError { .. } => "Run with --help to see the accepted options",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        let conversion = Error::from(ConversionError::EmptyDocument {
            url: "https://example.com".to_string(),
        });
        assert_eq!(conversion.category(), ErrorCategory::Conversion);
        assert_eq!(conversion.exit_code(), 1);

        let config = Error::MissingConfigError {
            field: "source.url".to_string(),
        };
        assert_eq!(config.exit_code(), 2);

        let io = Error::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(io.exit_code(), 3);
    }

    #[test]
    fn test_status_error_message() {
        let err = ConversionError::Status {
            url: "https://example.com/missing-post".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(
            err.to_string(),
            "Request to https://example.com/missing-post returned HTTP 404 Not Found"
        );
    }
}
