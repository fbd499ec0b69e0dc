//! Payroll record manager
//!
//! This crate keeps a small company's employee records in a fixed-size
//! binary file and produces monthly salary slips from them. Salaried grades
//! (A to D) earn percentage allowances on a basic salary; grade E is paid
//! per day worked plus overtime.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;
