//! Core data models for the payroll manager.
//!
//! This module contains the employee record, the attendance figures entered
//! for per-diem slips, and the computed breakdown types.

mod attendance;
mod breakdown;
mod employee;

pub use attendance::{Attendance, MAX_DAYS_WORKED};
pub use breakdown::{AuditStep, Breakdown, SlipFigures, to_money};
pub(crate) use employee::truncate_on_char_boundary;
pub use employee::{
    ADDRESS_MAX_LEN, DESIGNATION_MAX_LEN, EmployeeRecord, Grade, MAX_AMOUNT, MAX_JOIN_YEAR,
    MIN_JOIN_YEAR, NAME_MAX_LEN, NO_PHONE, PHONE_MAX_LEN, PayBasis, join_date, normalize_phone,
    normalize_text, validate_amount,
};
