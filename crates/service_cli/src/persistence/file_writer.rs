//! File writer for traces.

use std::fs;
use std::path::{Path, PathBuf};

use optimiser_core::types::Trace;
use tracing::info;

use super::{format_trace, TraceSink};
use crate::Result;

/// Writes each trace to `<output_dir>/<stem>.txt`.
#[derive(Debug, Clone)]
pub struct TraceWriter {
    output_dir: PathBuf,
}

impl TraceWriter {
    /// Create a new trace writer
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Path a trace with this stem is written to
    pub fn path_for(&self, stem: &str) -> PathBuf {
        self.output_dir.join(format!("{}.txt", stem))
    }

    /// Write a trace, creating the output directory if needed
    pub fn write(&self, stem: &str, trace: &Trace) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let path = self.path_for(stem);
        let content = format_trace(trace);
        fs::write(&path, &content)?;

        info!(
            path = %path.display(),
            records = trace.len(),
            size = content.len(),
            "Trace written to file"
        );

        Ok(path)
    }
}

impl TraceSink for TraceWriter {
    fn store(&self, stem: &str, trace: &Trace) -> Result<PathBuf> {
        self.write(stem, trace)
    }
}
