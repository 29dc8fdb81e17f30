use crate::core::{ConfigProvider, FetchedPage, PageSource, SourceUrl};
use crate::utils::error::{ConversionError, Error, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;

const HTML_MEDIA_TYPES: [&str; 2] = ["text/html", "application/xhtml+xml"];

/// Fetches pages over HTTP(S) with `reqwest`.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(
        user_agent: &str,
        timeout: Option<Duration>,
        headers: &HashMap<String, String>,
    ) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(user_agent)
            .default_headers(build_header_map(headers)?);

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| Error::ConfigError {
            message: format!("Failed to build HTTP client: {}", e),
        })?;

        Ok(Self { client })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.user_agent(), config.timeout(), config.headers())
    }
}

fn build_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| Error::InvalidConfigValueError {
                field: "source.headers".to_string(),
                value: name.clone(),
                reason: format!("Invalid header name: {}", e),
            })?;
        let header_value =
            HeaderValue::from_str(value).map_err(|e| Error::InvalidConfigValueError {
                field: format!("source.headers.{}", name),
                value: value.clone(),
                reason: format!("Invalid header value: {}", e),
            })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

fn is_html(content_type: &str) -> bool {
    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    HTML_MEDIA_TYPES.contains(&media_type.as_str())
}

#[async_trait]
impl PageSource for HttpSource {
    async fn fetch(&self, url: &SourceUrl) -> std::result::Result<FetchedPage, ConversionError> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|source| ConversionError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);
        if !status.is_success() {
            return Err(ConversionError::Status {
                url: url.to_string(),
                status,
            });
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        // A missing Content-Type is still converted.
        if let Some(content_type) = &content_type {
            if !is_html(content_type) {
                return Err(ConversionError::UnsupportedContent {
                    url: final_url,
                    content_type: content_type.clone(),
                });
            }
        }

        let html = response
            .text()
            .await
            .map_err(|source| ConversionError::Fetch {
                url: url.to_string(),
                source,
            })?;

        Ok(FetchedPage {
            url: final_url,
            content_type,
            html,
        })
    }
}
