//! Flat-file record stores.
//!
//! Each store owns an ordered list of records and the one file they are
//! persisted to. Every mutation rewrites the whole file; there is no journal
//! and no atomic rename, so an interrupted write can leave the file truncated.

pub mod achievements;
pub mod tasks;
pub mod wishes;

use crate::error::{Error, Result};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

pub use achievements::{AchievementStore, default_catalog};
pub use tasks::TaskStore;
pub use wishes::WishStore;

/// A record type that can live in a [`Store`].
pub trait Record: Clone {
    /// Human-readable record kind used in logs and errors.
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// Decode one persisted line.
    fn decode_line(line: &str) -> Result<Self>;

    /// Encode as one persisted line (without the trailing newline).
    fn encode_line(&self) -> String;

    /// Merge a record read from the file into the in-memory list.
    ///
    /// The default appends, so duplicate identifiers are kept.
    fn absorb(records: &mut Vec<Self>, loaded: Self) {
        records.push(loaded);
    }

    /// Records that exist before the file is read.
    fn seed() -> Vec<Self> {
        Vec::new()
    }
}

/// A line that was skipped during load.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line: usize,
    pub content: String,
    pub reason: String,
}

/// Outcome of reading a store's backing file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    /// Number of lines decoded successfully.
    pub loaded: usize,
    pub skipped: Vec<SkippedLine>,
    /// The backing file did not exist and was created.
    pub created: bool,
}

/// In-memory ordered collection persisted to one flat file.
#[derive(Debug, Clone)]
pub struct Store<R: Record> {
    path: PathBuf,
    records: Vec<R>,
    report: LoadReport,
}

impl<R: Record> Store<R> {
    /// Create a store holding only the seed records, without touching the disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: R::seed(),
            report: LoadReport::default(),
        }
    }

    /// Create a store and load its backing file.
    ///
    /// A load failure is logged and leaves the store with its seed records;
    /// later saves will report their own errors.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = Self::new(path);
        let loaded = store.load().map(|_| ());
        if let Err(e) = loaded {
            error!(kind = R::KIND, path = %store.path.display(), error = %e, "Failed to load store");
        }
        store
    }

    /// Replace the in-memory records with the seed plus the file contents.
    ///
    /// Lines that fail to decode are logged and skipped. A missing file is
    /// created empty; stores with seed records write them out immediately.
    pub fn load(&mut self) -> Result<&LoadReport> {
        self.records = R::seed();
        self.report = LoadReport::default();

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.create_backing_file()?;
                return Ok(&self.report);
            }
            Err(e) => return Err(Error::io(&self.path, e)),
        };

        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match R::decode_line(line) {
                Ok(record) => {
                    R::absorb(&mut self.records, record);
                    self.report.loaded += 1;
                }
                Err(e) => {
                    warn!(
                        kind = R::KIND,
                        path = %self.path.display(),
                        line = index + 1,
                        error = %e,
                        "Skipping malformed line"
                    );
                    self.report.skipped.push(SkippedLine {
                        line: index + 1,
                        content: line.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            kind = R::KIND,
            path = %self.path.display(),
            loaded = self.report.loaded,
            skipped = self.report.skipped.len(),
            "Loaded store"
        );
        Ok(&self.report)
    }

    fn create_backing_file(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            }
        }
        File::create(&self.path).map_err(|e| Error::io(&self.path, e))?;
        self.report.created = true;
        info!(kind = R::KIND, path = %self.path.display(), "Created missing store file");

        if !self.records.is_empty() {
            self.save()?;
        }
        Ok(())
    }

    /// Truncate the backing file and write every record in list order.
    pub fn save(&self) -> Result<()> {
        let file = File::create(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let mut writer = BufWriter::new(file);
        for record in &self.records {
            writeln!(writer, "{}", record.encode_line()).map_err(|e| Error::io(&self.path, e))?;
        }
        writer.flush().map_err(|e| Error::io(&self.path, e))?;
        debug!(kind = R::KIND, path = %self.path.display(), records = self.records.len(), "Saved store");
        Ok(())
    }

    /// Append a record and rewrite the file.
    pub fn add(&mut self, record: R) -> Result<()> {
        debug!(kind = R::KIND, id = record.id(), "Adding record");
        self.records.push(record);
        self.save()
    }

    /// Apply `change` to the first record with `id` and rewrite the file.
    ///
    /// Returns `Ok(false)` without saving when no record matches.
    pub fn update<F>(&mut self, id: &str, change: F) -> Result<bool>
    where
        F: FnOnce(&mut R),
    {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                change(record);
                self.save()?;
                Ok(true)
            }
            None => {
                debug!(kind = R::KIND, id, "No record to update");
                Ok(false)
            }
        }
    }

    /// Snapshot of the records matching `predicate`, in list order.
    pub fn query<P>(&self, predicate: P) -> Vec<R>
    where
        P: Fn(&R) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).cloned().collect()
    }

    /// Snapshot of every record.
    pub fn all(&self) -> Vec<R> {
        self.records.clone()
    }

    /// Copy of the first record with `id`.
    pub fn get(&self, id: &str) -> Option<R> {
        self.records.iter().find(|r| r.id() == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Report of the most recent load.
    pub fn load_report(&self) -> &LoadReport {
        &self.report
    }

    /// Remove every record with `id` and rewrite the file. Returns the count removed.
    fn remove_all(&mut self, id: &str) -> Result<usize> {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        let removed = before - self.records.len();
        self.save()?;
        Ok(removed)
    }

    /// Mutable access for store-specific batch updates that save on their own.
    fn records_mut(&mut self) -> &mut [R] {
        &mut self.records
    }
}
