use crate::domain::model::{ConvertedDocument, FetchedPage, SourceUrl};
use crate::utils::error::{ConversionError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// URL-to-markdown capability. The invoker only ever sees this seam.
#[async_trait]
pub trait Converter: Send + Sync {
    async fn convert_from_url(
        &self,
        url: &SourceUrl,
    ) -> std::result::Result<ConvertedDocument, ConversionError>;
}

#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, url: &SourceUrl) -> std::result::Result<FetchedPage, ConversionError>;
}

pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, page: &FetchedPage) -> std::result::Result<ConvertedDocument, ConversionError>;
}

pub trait Sink: Send + Sync {
    fn write_document(
        &self,
        document: &ConvertedDocument,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_url(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
    fn headers(&self) -> &HashMap<String, String>;
    fn selectors(&self) -> &[String];
    fn output_path(&self) -> Option<&str>;
}
