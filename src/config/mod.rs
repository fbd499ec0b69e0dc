//! Configuration loading for the payroll manager.
//!
//! Configuration is optional. Without a file the manager stores records in
//! `EMPLOYEE.DAT` and pays the standard allowance and deduction rates.
//!
//! # Example
//!
//! ```no_run
//! use payroll_manager::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./payroll.yaml").unwrap();
//! println!("Per-diem rate: {}", config.rates().per_diem_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_DATA_FILE, DEFAULT_PAGE_SIZE, PayRates, PayrollConfig, StorageConfig};
