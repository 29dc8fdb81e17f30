pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FileSink, Html2MdRenderer, HttpSource, StdoutSink};
pub use config::Settings;
pub use crate::core::{converter::UrlConverter, invoker::ConverterInvoker};
pub use domain::model::{ConvertedDocument, SourceUrl};
pub use utils::error::{ConversionError, Error, Result};
