//! Configuration types for the payroll manager.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so a partial file (or none at all) is valid.

use serde::Deserialize;

/// Default name of the record file.
pub const DEFAULT_DATA_FILE: &str = "EMPLOYEE.DAT";

/// Default number of rows per page in the employee list.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Where records live and how they are listed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the record file.
    pub data_file: String,
    /// Rows shown before the list pauses.
    pub page_size: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Percentages and flat rates used by the salary calculator.
///
/// Percentages are whole numbers (`5.0` means five percent).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PayRates {
    /// House allowance, percent of basic salary.
    pub house_allowance_percent: f64,
    /// Travel allowance, percent of basic salary.
    pub travel_allowance_percent: f64,
    /// Dearness allowance, percent of basic salary.
    pub dearness_allowance_percent: f64,
    /// Provident fund deduction, percent of basic salary.
    pub provident_fund_percent: f64,
    /// Loan repayment, percent of the outstanding loan.
    pub loan_deduction_percent: f64,
    /// Pay per day worked for per-diem grades.
    pub per_diem_rate: f64,
    /// Pay per overtime hour for per-diem grades.
    pub overtime_hourly_rate: f64,
}

impl Default for PayRates {
    fn default() -> Self {
        Self {
            house_allowance_percent: 5.0,
            travel_allowance_percent: 2.0,
            dearness_allowance_percent: 5.0,
            provident_fund_percent: 2.0,
            loan_deduction_percent: 15.0,
            per_diem_rate: 30.0,
            overtime_hourly_rate: 10.0,
        }
    }
}

impl PayRates {
    /// Returns each rate with its configuration key, in file order.
    pub(crate) fn named(&self) -> [(&'static str, f64); 7] {
        [
            ("house_allowance_percent", self.house_allowance_percent),
            ("travel_allowance_percent", self.travel_allowance_percent),
            ("dearness_allowance_percent", self.dearness_allowance_percent),
            ("provident_fund_percent", self.provident_fund_percent),
            ("loan_deduction_percent", self.loan_deduction_percent),
            ("per_diem_rate", self.per_diem_rate),
            ("overtime_hourly_rate", self.overtime_hourly_rate),
        ]
    }
}

/// The complete payroll configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Storage settings.
    pub storage: StorageConfig,
    /// Pay rates.
    pub rates: PayRates,
}
