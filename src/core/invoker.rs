use crate::core::{Converter, Sink, SourceUrl};
use crate::utils::error::{ConversionError, Result};

/// Runs one conversion and hands the result to the sink.
pub struct ConverterInvoker<C: Converter, W: Sink> {
    converter: C,
    sink: W,
}

impl<C: Converter, W: Sink> ConverterInvoker<C, W> {
    pub fn new(converter: C, sink: W) -> Self {
        Self { converter, sink }
    }

    /// The sink is written exactly once on success and never on failure.
    pub async fn convert_and_print(&self, url: &SourceUrl) -> Result<()> {
        if url.is_empty() {
            return Err(ConversionError::EmptyUrl.into());
        }

        tracing::info!("Converting {}", url);
        let document = self.converter.convert_from_url(url).await.map_err(|e| {
            tracing::debug!("Conversion of {} failed: {:?}", url, e);
            e
        })?;

        tracing::debug!("Converted document: {} bytes", document.as_str().len());
        self.sink.write_document(&document).await?;

        Ok(())
    }
}
