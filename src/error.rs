//! Error types for the payroll manager.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the record store, calculator, configuration loader,
//! and operator console can report.

use thiserror::Error;

/// The main error type for the payroll manager.
///
/// Lookups that find nothing are not errors; they are reported as `None`
/// by the store. Everything else that can go wrong surfaces here.
///
/// # Example
///
/// ```
/// use payroll_manager::error::PayrollError;
///
/// let error = PayrollError::PersistFailed {
///     path: "EMPLOYEE.DAT".to_string(),
///     message: "permission denied".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Unable to persist records to 'EMPLOYEE.DAT': permission denied"
/// );
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value that cannot be used.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending configuration key.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// An operator-entered value was outside its allowed range or format.
    #[error("Invalid value for '{field}': {message}")]
    InvalidField {
        /// The field being entered.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A per-diem breakdown was requested without attendance figures.
    #[error("Attendance is required to compute pay for per-diem employee {code}")]
    MissingAttendance {
        /// The code of the per-diem employee.
        code: i32,
    },

    /// The backing file was opened but could not be read.
    #[error("Failed to read records from '{path}': {message}")]
    StorageRead {
        /// The backing file path.
        path: String,
        /// The underlying I/O failure.
        message: String,
    },

    /// A complete record block could not be decoded.
    #[error("Record {index} is corrupt: {message}")]
    CorruptRecord {
        /// Zero-based position of the record in the file.
        index: usize,
        /// What the decoder rejected.
        message: String,
    },

    /// The record set could not be written back to disk.
    #[error("Unable to persist records to '{path}': {message}")]
    PersistFailed {
        /// The backing file path.
        path: String,
        /// The underlying I/O failure.
        message: String,
    },

    /// The last record's code is the largest representable, so no new
    /// code can follow it.
    #[error("No employee code is available after {last}")]
    CodesExhausted {
        /// The code of the last record.
        last: i32,
    },

    /// The operator's input stream ended.
    #[error("Input stream closed")]
    InputClosed,

    /// Writing to the operator's output stream failed.
    #[error("Console I/O error: {0}")]
    Console(#[from] std::io::Error),
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
