use crate::adapters::{FileSink, Html2MdRenderer, HttpSource, StdoutSink};
use crate::core::converter::UrlConverter;
use crate::core::invoker::ConverterInvoker;
use crate::core::{ConfigProvider, SourceUrl};
use crate::utils::error::Result;

/// Wire up the HTTP source, renderer and sink for one conversion and run it.
pub async fn run<C: ConfigProvider>(config: &C) -> Result<()> {
    let source = HttpSource::from_config(config)?;
    let renderer = Html2MdRenderer::new(config.selectors())?;
    let converter = UrlConverter::new(source, renderer);
    let url = SourceUrl::new(config.source_url());

    match config.output_path() {
        Some(path) => {
            tracing::debug!("Writing markdown to file: {}", path);
            ConverterInvoker::new(converter, FileSink::new(path))
                .convert_and_print(&url)
                .await
        }
        None => {
            ConverterInvoker::new(converter, StdoutSink)
                .convert_and_print(&url)
                .await
        }
    }
}
