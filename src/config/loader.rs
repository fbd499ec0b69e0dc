//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from a YAML file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::{PayRates, PayrollConfig, StorageConfig};

/// Loads and provides access to the payroll configuration.
///
/// # File Format
///
/// ```yaml
/// storage:
///   data_file: EMPLOYEE.DAT
///   page_size: 20
/// rates:
///   house_allowance_percent: 5.0
///   travel_allowance_percent: 2.0
///   dearness_allowance_percent: 5.0
///   provident_fund_percent: 2.0
///   loan_deduction_percent: 15.0
///   per_diem_rate: 30.0
///   overtime_hourly_rate: 10.0
/// ```
///
/// Any key may be omitted; omitted keys take the values shown.
///
/// # Example
///
/// ```no_run
/// use payroll_manager::config::ConfigLoader;
///
/// let loader = ConfigLoader::load_or_default("payroll.yaml").unwrap();
/// println!("Records in {}", loader.storage().data_file);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if the file cannot be read
    /// - `ConfigParseError` if it is not valid YAML for [`PayrollConfig`]
    /// - `InvalidConfig` if a rate is negative or not finite, or the page
    ///   size is zero
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&path_str, &content)
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    ///
    /// A file that exists but is malformed is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => Self::from_yaml(&path.display().to_string(), &content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No configuration file, using defaults");
                Ok(Self::default())
            }
            Err(_) => Err(PayrollError::ConfigNotFound {
                path: path.display().to_string(),
            }),
        }
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: PayrollConfig) -> PayrollResult<Self> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn from_yaml(path: &str, content: &str) -> PayrollResult<Self> {
        let config: PayrollConfig =
            serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        let loader = Self::from_config(config)?;
        debug!(path, data_file = %loader.storage().data_file, "Loaded configuration");
        Ok(loader)
    }

    fn validate(config: &PayrollConfig) -> PayrollResult<()> {
        if config.storage.page_size == 0 {
            return Err(PayrollError::InvalidConfig {
                field: "storage.page_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if config.storage.data_file.trim().is_empty() {
            return Err(PayrollError::InvalidConfig {
                field: "storage.data_file".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        for (name, value) in config.rates.named() {
            if !value.is_finite() || value < 0.0 {
                return Err(PayrollError::InvalidConfig {
                    field: format!("rates.{}", name),
                    message: format!("must be a non-negative number, got {}", value),
                });
            }
        }
        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the storage settings.
    pub fn storage(&self) -> &StorageConfig {
        &self.config.storage
    }

    /// Returns the pay rates.
    pub fn rates(&self) -> &PayRates {
        &self.config.rates
    }
}
