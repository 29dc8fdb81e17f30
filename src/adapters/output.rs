use crate::core::{ConvertedDocument, Sink};
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Prints the document followed by a newline, like a console print.
#[derive(Debug, Clone, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    async fn write_document(&self, document: &ConvertedDocument) -> Result<()> {
        print_document(&mut std::io::stdout().lock(), document)
    }
}

pub fn print_document<W: Write>(out: &mut W, document: &ConvertedDocument) -> Result<()> {
    out.write_all(document.as_str().as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    async fn write_document(&self, document: &ConvertedDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, document.as_str())?;
        tracing::info!("Markdown saved to {}", self.path.display());
        Ok(())
    }
}
