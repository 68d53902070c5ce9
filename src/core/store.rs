//! Line-per-record flat-file store.

use std::{
    fs::{File, OpenOptions},
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::codec::Record;

/// I/O failure on a store's backing file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Opening or reading the file failed.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Backing file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// Appending to or replacing the file failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Backing file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// In-memory copy of one flat file, kept in file order.
///
/// Every mutation reaches disk before memory, so a failed write leaves both
/// unchanged. No handle is held between calls.
#[derive(Debug)]
pub struct RecordStore<R> {
    path: PathBuf,
    records: Vec<R>,
}

impl<R: Record> RecordStore<R> {
    /// Loads every decodable line of `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let records = load_records(&path)?;
        debug!(kind = R::KIND, path = %path.display(), count = records.len(), "store loaded");
        Ok(Self { path, records })
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records in file order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Number of loaded records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no record is loaded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends one line to the file, then keeps `record` in memory.
    pub fn append(&mut self, record: R) -> StoreResult<&R> {
        let line = record.encode();
        append_line(&self.path, &line).map_err(|source| {
            error!(kind = R::KIND, path = %self.path.display(), %source, "append failed");
            StoreError::Write {
                path: self.path.clone(),
                source,
            }
        })?;
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Drops every record for which `keep` is false and rewrites the file.
    ///
    /// Returns how many records were removed. The file is replaced through a
    /// temp file in the same directory, so a failed rewrite leaves the old
    /// contents and no temp file behind.
    pub fn retain<F>(&mut self, mut keep: F) -> StoreResult<usize>
    where
        R: Clone,
        F: FnMut(&R) -> bool,
    {
        let kept: Vec<R> = self.records.iter().filter(|r| keep(r)).cloned().collect();
        let removed = self.records.len() - kept.len();

        rewrite_lines(&self.path, kept.iter().map(R::encode)).map_err(|source| {
            error!(kind = R::KIND, path = %self.path.display(), %source, "rewrite failed");
            StoreError::Write {
                path: self.path.clone(),
                source,
            }
        })?;

        self.records = kept;
        Ok(removed)
    }
}

fn load_records<R: Record>(path: &Path) -> StoreResult<Vec<R>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut out = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                warn!(kind = R::KIND, path = %path.display(), line = idx + 1, "skipping non-UTF-8 line");
                continue;
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match R::decode(&line) {
            Ok(record) => out.push(record),
            Err(err) => warn!(
                kind = R::KIND,
                path = %path.display(),
                line = idx + 1,
                %err,
                "skipping malformed line"
            ),
        }
    }
    Ok(out)
}

fn append_line(path: &Path, line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")?;
    file.flush()
}

fn rewrite_lines(path: &Path, lines: impl Iterator<Item = String>) -> io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    // Deleted on drop if any step below fails.
    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        for line in lines {
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;
    }
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}
