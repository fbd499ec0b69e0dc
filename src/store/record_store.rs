//! Whole-file record persistence and in-memory collection operations.
//!
//! The store never patches a single record on disk. Workflows load the full
//! collection, change it in memory with [`RecordStore::append`],
//! [`RecordStore::replace_at`] or [`RecordStore::delete_at`], and commit
//! with [`RecordStore::save_all`], which rewrites the whole file.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{PayrollError, PayrollResult};
use crate::models::EmployeeRecord;

use super::codec::{self, CodecError, RECORD_SIZE};

/// File-backed employee record store.
///
/// # Example
///
/// ```no_run
/// use payroll_manager::store::RecordStore;
///
/// let store = RecordStore::new("EMPLOYEE.DAT");
/// let mut records = store.load_all()?;
/// if let Some(index) = RecordStore::find_by_code(&records, 3) {
///     RecordStore::delete_at(&mut records, index);
///     store.save_all(&records)?;
/// }
/// # Ok::<(), payroll_manager::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Creates a store backed by the file at `path`. The file need not exist.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every complete record in file order.
    ///
    /// A file that does not exist or cannot be opened is an empty store. A
    /// trailing partial record is dropped without error.
    ///
    /// # Errors
    ///
    /// - `StorageRead` if the file opens but reading it fails
    /// - `CorruptRecord` if a complete block does not decode
    pub fn load_all(&self) -> PayrollResult<Vec<EmployeeRecord>> {
        let Some(mut file) = self.open_for_read() else {
            return Ok(Vec::new());
        };

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|e| self.read_error(e))?;

        let blocks = bytes.chunks_exact(RECORD_SIZE);
        let trailing = blocks.remainder().len();
        if trailing > 0 {
            debug!(
                path = %self.path.display(),
                trailing_bytes = trailing,
                "Ignoring partial record at end of file"
            );
        }

        let records = blocks
            .enumerate()
            .map(|(index, block)| {
                codec::decode(block).map_err(|e| PayrollError::CorruptRecord {
                    index,
                    message: e.to_string(),
                })
            })
            .collect::<PayrollResult<Vec<_>>>()?;

        debug!(path = %self.path.display(), count = records.len(), "Loaded records");
        Ok(records)
    }

    /// Reads the single record at position `index` by seeking to its offset.
    ///
    /// Returns `None` when the file is missing or holds no complete record
    /// at that position.
    pub fn load_at(&self, index: usize) -> PayrollResult<Option<EmployeeRecord>> {
        let Some(mut file) = self.open_for_read() else {
            return Ok(None);
        };

        file.seek(SeekFrom::Start(codec::record_offset(index)))
            .map_err(|e| self.read_error(e))?;

        let mut block = Vec::with_capacity(RECORD_SIZE);
        file.take(RECORD_SIZE as u64)
            .read_to_end(&mut block)
            .map_err(|e| self.read_error(e))?;

        match codec::decode(&block) {
            Ok(record) => Ok(Some(record)),
            Err(CodecError::Truncated { .. }) => Ok(None),
            Err(e) => Err(PayrollError::CorruptRecord {
                index,
                message: e.to_string(),
            }),
        }
    }

    /// Replaces the file contents with `records`, back to back, in order.
    ///
    /// The records are written to a sibling temporary file which is then
    /// renamed over the backing file, so a failed write leaves the previous
    /// contents in place.
    ///
    /// # Errors
    ///
    /// Returns `PersistFailed` if the file cannot be written.
    pub fn save_all(&self, records: &[EmployeeRecord]) -> PayrollResult<()> {
        let temp_path = self.temp_path();

        if let Err(e) = write_records(&temp_path, records)
            .and_then(|()| fs::rename(&temp_path, &self.path))
        {
            // Best effort; the original error is what matters.
            let _ = fs::remove_file(&temp_path);
            warn!(path = %self.path.display(), error = %e, "Failed to persist records");
            return Err(PayrollError::PersistFailed {
                path: self.path.display().to_string(),
                message: e.to_string(),
            });
        }

        info!(path = %self.path.display(), count = records.len(), "Saved records");
        Ok(())
    }

    /// Returns the code for a new record: one more than the last record's
    /// code, or 1 for an empty collection.
    ///
    /// Codes stay increasing only while callers keep append order.
    ///
    /// # Errors
    ///
    /// Returns `CodesExhausted` if the last code is `i32::MAX`.
    pub fn next_code(records: &[EmployeeRecord]) -> PayrollResult<i32> {
        match records.last() {
            None => Ok(1),
            Some(last) => last
                .code
                .checked_add(1)
                .ok_or(PayrollError::CodesExhausted { last: last.code }),
        }
    }

    /// Returns the index of the record with `code`, if any.
    pub fn find_by_code(records: &[EmployeeRecord], code: i32) -> Option<usize> {
        records.iter().position(|r| r.code == code)
    }

    /// Adds a record to the end of the collection. Does not persist.
    pub fn append(records: &mut Vec<EmployeeRecord>, record: EmployeeRecord) {
        records.push(record);
    }

    /// Removes and returns the record at `index`. Does not persist.
    pub fn delete_at(records: &mut Vec<EmployeeRecord>, index: usize) -> Option<EmployeeRecord> {
        (index < records.len()).then(|| records.remove(index))
    }

    /// Overwrites the record at `index`, returning the previous value.
    /// Does not persist.
    pub fn replace_at(
        records: &mut [EmployeeRecord],
        index: usize,
        record: EmployeeRecord,
    ) -> Option<EmployeeRecord> {
        records
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, record))
    }

    fn open_for_read(&self) -> Option<File> {
        match File::open(&self.path) {
            Ok(file) => Some(file),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Record file does not exist yet");
                None
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Record file cannot be opened, treating store as empty"
                );
                None
            }
        }
    }

    fn read_error(&self, e: io::Error) -> PayrollError {
        PayrollError::StorageRead {
            path: self.path.display().to_string(),
            message: e.to_string(),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

fn write_records(path: &Path, records: &[EmployeeRecord]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for record in records {
        writer.write_all(&codec::encode(record))?;
    }
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()
}
