//! Append-only output file for cleaned URLs.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Output file plus the optional echo of every written line.
///
/// The file is opened in append mode for each batch and closed afterwards,
/// so earlier content and earlier batches are never overwritten.
#[derive(Debug, Clone)]
pub struct OutputSink {
    path: PathBuf,
    stream: bool,
}

impl OutputSink {
    pub fn new(path: impl Into<PathBuf>, stream: bool) -> Self {
        Self {
            path: path.into(),
            stream,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `urls`, one per line. When streaming, each line is also written
    /// to `echo`. Returns the number of lines appended.
    pub fn append<W: Write>(&self, urls: &[String], echo: &mut W) -> Result<usize> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open output file {}", self.path.display()))?;
        let mut out = BufWriter::new(file);

        for url in urls {
            writeln!(out, "{}", url)
                .with_context(|| format!("failed to write {}", self.path.display()))?;
            if self.stream {
                writeln!(echo, "{}", url).context("failed to stream url")?;
            }
        }

        out.flush()
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        if self.stream {
            echo.flush().context("failed to stream url")?;
        }
        Ok(urls.len())
    }
}
