//! Timestamped plain-text result files.
//!
//! One line per scanned port, `port: <n>, open: <bool>`, in ascending port
//! order. Files are named after the local time the scan was saved, e.g.
//! `2024-03-09_14h05m59s.txt`.

use crate::error::{StorageError, StorageResult};
use crate::types::{Port, ScanResultSet};
use chrono::{DateTime, Local};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const FILE_NAME_FORMAT: &str = "%Y-%m-%d_%Hh%Mm%Ss";

/// Format one port entry the way result files and the console show it.
pub fn format_line(port: Port, open: bool) -> String {
    format!("port: {}, open: {}", port, open)
}

/// Writes result sets into a results directory.
pub struct ResultFileWriter {
    dir: PathBuf,
}

impl ResultFileWriter {
    /// Create a writer, creating `dir` (and parents) if needed.
    pub fn new(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StorageError::DirectoryError {
            path: dir.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `results` to a file named after the current local time.
    pub fn write(&self, results: &ScanResultSet) -> StorageResult<PathBuf> {
        self.write_at(results, Local::now())
    }

    /// Write `results` to a file named after `timestamp`.
    pub fn write_at(
        &self,
        results: &ScanResultSet,
        timestamp: DateTime<Local>,
    ) -> StorageResult<PathBuf> {
        let path = self.dir.join(file_name(timestamp));

        let file = File::create(&path).map_err(|e| StorageError::CreateFailed {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        let write_err = |e: std::io::Error| StorageError::WriteFailed {
            path: path.clone(),
            reason: e.to_string(),
        };

        let mut out = BufWriter::new(file);
        for (port, open) in results.sorted() {
            writeln!(out, "{}", format_line(port, open)).map_err(write_err)?;
        }
        out.flush().map_err(write_err)?;

        tracing::debug!(path = %path.display(), entries = results.len(), "wrote result file");
        Ok(path)
    }
}

/// Result file name for a given save time.
pub(crate) fn file_name(timestamp: DateTime<Local>) -> String {
    format!("{}.txt", timestamp.format(FILE_NAME_FORMAT))
}
