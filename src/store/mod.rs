//! Record persistence for the payroll manager.
//!
//! The backing file is a flat sequence of fixed-size records with no header,
//! so its length is always a multiple of [`RECORD_SIZE`] when well formed.
//!
//! # Example
//!
//! ```no_run
//! use payroll_manager::store::RecordStore;
//!
//! let store = RecordStore::new("EMPLOYEE.DAT");
//! let records = store.load_all().unwrap();
//! println!("Next code: {}", RecordStore::next_code(&records).unwrap());
//! ```

pub mod codec;
mod record_store;

pub use codec::{CodecError, RECORD_SIZE};
pub use record_store::RecordStore;
