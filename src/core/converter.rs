use crate::core::{ConvertedDocument, Converter, MarkdownRenderer, PageSource, SourceUrl};
use crate::utils::error::ConversionError;
use async_trait::async_trait;

/// Fetch-then-render conversion built from a page source and a renderer.
pub struct UrlConverter<S: PageSource, R: MarkdownRenderer> {
    source: S,
    renderer: R,
}

impl<S: PageSource, R: MarkdownRenderer> UrlConverter<S, R> {
    pub fn new(source: S, renderer: R) -> Self {
        Self { source, renderer }
    }
}

#[async_trait]
impl<S: PageSource, R: MarkdownRenderer> Converter for UrlConverter<S, R> {
    async fn convert_from_url(
        &self,
        url: &SourceUrl,
    ) -> Result<ConvertedDocument, ConversionError> {
        let page = self.source.fetch(url).await?;
        tracing::debug!(
            "Fetched {} ({} bytes, content type {:?})",
            page.url,
            page.html.len(),
            page.content_type
        );

        self.renderer.render(&page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FetchedPage;

    struct StaticSource {
        html: Option<&'static str>,
    }

    #[async_trait]
    impl PageSource for StaticSource {
        async fn fetch(&self, url: &SourceUrl) -> Result<FetchedPage, ConversionError> {
            match self.html {
                Some(html) => Ok(FetchedPage {
                    url: url.to_string(),
                    content_type: Some("text/html".to_string()),
                    html: html.to_string(),
                }),
                None => Err(ConversionError::Status {
                    url: url.to_string(),
                    status: reqwest::StatusCode::NOT_FOUND,
                }),
            }
        }
    }

    struct UppercaseRenderer;

    impl MarkdownRenderer for UppercaseRenderer {
        fn render(&self, page: &FetchedPage) -> Result<ConvertedDocument, ConversionError> {
            Ok(ConvertedDocument::new(page.html.to_uppercase()))
        }
    }

    #[tokio::test]
    async fn test_renders_fetched_page() {
        let converter = UrlConverter::new(
            StaticSource {
                html: Some("<p>hi</p>"),
            },
            UppercaseRenderer,
        );

        let doc = converter
            .convert_from_url(&SourceUrl::from("https://example.com/real-post"))
            .await
            .unwrap();

        assert_eq!(doc.as_str(), "<P>HI</P>");
    }

    #[tokio::test]
    async fn test_fetch_error_skips_render() {
        let converter = UrlConverter::new(StaticSource { html: None }, UppercaseRenderer);

        let err = converter
            .convert_from_url(&SourceUrl::from("https://example.com/missing-post"))
            .await
            .unwrap_err();

        assert!(matches!(err, ConversionError::Status { .. }));
    }
}
