//! Salary calculation for the payroll manager.
//!
//! This module contains the pure functions that turn an employee record
//! (and, for per-diem grades, the month's attendance) into a salary
//! breakdown: allowances, deductions, and net salary.

mod breakdown;
mod components;
mod per_diem;
mod salaried;

pub use breakdown::{compute_breakdown, compute_breakdown_with};
pub use components::{
    ComponentResult, DEARNESS_ALLOWANCE, HOUSE_ALLOWANCE, LOAN_DEDUCTION, OVERTIME,
    PER_DIEM_BASIC, PROVIDENT_FUND, PayRule, TRAVEL_ALLOWANCE, percentage_of, units_at_rate,
};
