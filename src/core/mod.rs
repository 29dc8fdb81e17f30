pub mod converter;
pub mod invoker;

pub use crate::domain::model::{ConvertedDocument, FetchedPage, SourceUrl};
pub use crate::domain::ports::{ConfigProvider, Converter, MarkdownRenderer, PageSource, Sink};
pub use crate::utils::error::Result;
