use std::fmt;

/// Remote document to fetch and convert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUrl(String);

impl SourceUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for SourceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceUrl {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

/// HTML page as returned by the page source.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL after redirects.
    pub url: String,
    pub content_type: Option<String>,
    pub html: String,
}

/// Markdown produced by a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedDocument {
    markdown: String,
}

impl ConvertedDocument {
    pub fn new(markdown: impl Into<String>) -> Self {
        Self {
            markdown: markdown.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.markdown
    }

    pub fn into_string(self) -> String {
        self.markdown
    }
}
