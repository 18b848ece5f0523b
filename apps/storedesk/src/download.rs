//! # Download Sinks
//!
//! Where finished exports go.
//!
//! ```text
//!   ListSession::export_request
//!        │  filename = orders_20250123.csv
//!        │  contents = "id,date,...\n..."
//!        ▼
//!   DownloadSink::deliver
//!        ├── DirectorySink  ──► <export dir>/orders_20250123.csv
//!        └── MemorySink     ──► Vec<(filename, contents)>  (tests, previews)
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::info;

use crate::error::AppResult;

/// Receives a named text file.
pub trait DownloadSink {
    fn deliver(&self, filename: &str, contents: &str) -> AppResult<()>;
}

/// Writes files into a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectorySink { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&self, filename: &str, contents: &str) -> AppResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        std::fs::write(&path, contents)?;
        info!(?path, bytes = contents.len(), "Export written");
        Ok(())
    }
}

/// Keeps delivered files in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: Arc<Mutex<Vec<(String, String)>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything delivered so far, oldest first.
    pub fn files(&self) -> Vec<(String, String)> {
        self.files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DownloadSink for MemorySink {
    fn deliver(&self, filename: &str, contents: &str) -> AppResult<()> {
        self.files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((filename.to_string(), contents.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_sink_creates_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(tmp.path().join("exports"));
        sink.deliver("orders_20250123.csv", "id\n\"#1\"").unwrap();

        let written = std::fs::read_to_string(sink.dir().join("orders_20250123.csv")).unwrap();
        assert_eq!(written, "id\n\"#1\"");
    }

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemorySink::new();
        sink.deliver("a.csv", "1").unwrap();
        sink.deliver("b.csv", "2").unwrap();
        let names: Vec<String> = sink.files().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);
    }
}
