//! Employee record model and related types.
//!
//! This module defines the [`EmployeeRecord`] struct, the closed [`Grade`]
//! set, and the field rules every record obeys at the point of entry.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Maximum length of an employee name, in bytes.
pub const NAME_MAX_LEN: usize = 25;
/// Maximum length of an address, in bytes.
pub const ADDRESS_MAX_LEN: usize = 50;
/// Width of the phone buffer, in bytes. Longer input is truncated at entry.
pub const PHONE_MAX_LEN: usize = 20;
/// Maximum length of a designation, in bytes.
pub const DESIGNATION_MAX_LEN: usize = 20;

/// Placeholder stored when no phone number is given.
pub const NO_PHONE: &str = "-";

/// Upper bound for both the loan and the basic salary.
pub const MAX_AMOUNT: f32 = 50_000.0;

/// Earliest accepted joining year.
pub const MIN_JOIN_YEAR: i32 = 1900;
/// Latest accepted joining year.
pub const MAX_JOIN_YEAR: i32 = 2100;

/// How an employee's basic pay is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayBasis {
    /// Fixed monthly basic salary with house, travel and dearness allowances.
    Salaried,
    /// Paid per day worked plus overtime, computed at slip time.
    PerDiem,
}

/// One-letter employee classification.
///
/// Grades `A` to `D` are salaried; grade `E` is paid per diem.
///
/// # Example
///
/// ```
/// use payroll_manager::models::{Grade, PayBasis};
///
/// let grade = Grade::from_char('e').unwrap();
/// assert_eq!(grade, Grade::E);
/// assert_eq!(grade.pay_basis(), PayBasis::PerDiem);
/// assert_eq!(Grade::B.pay_basis(), PayBasis::Salaried);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// Salaried grade A.
    A,
    /// Salaried grade B.
    B,
    /// Salaried grade C.
    C,
    /// Salaried grade D.
    D,
    /// Per-diem workers.
    E,
}

impl Grade {
    /// Every grade, in order.
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::E];

    /// Parses a grade letter, ignoring case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Grade::A),
            'B' => Some(Grade::B),
            'C' => Some(Grade::C),
            'D' => Some(Grade::D),
            'E' => Some(Grade::E),
            _ => None,
        }
    }

    /// Returns the upper-case grade letter.
    pub fn as_char(self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::E => 'E',
        }
    }

    /// Returns the pay basis that governs this grade's breakdown.
    pub fn pay_basis(self) -> PayBasis {
        match self {
            Grade::A | Grade::B | Grade::C | Grade::D => PayBasis::Salaried,
            Grade::E => PayBasis::PerDiem,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_char().encode_utf8(&mut [0; 4]))
    }
}

/// A single employee as held in the store.
///
/// Amounts are single precision, the width they are stored at; the
/// calculator widens them before doing any arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique code, assigned once at creation.
    pub code: i32,
    /// Upper-cased name.
    pub name: String,
    /// Upper-cased address.
    pub address: String,
    /// Phone number, or [`NO_PHONE`].
    pub phone: String,
    /// Joining date.
    pub joined: NaiveDate,
    /// Upper-cased designation.
    pub designation: String,
    /// Employee grade.
    pub grade: Grade,
    /// Whether the house allowance is paid. Salaried grades only.
    pub house_allowance: bool,
    /// Whether the travel allowance is paid. Salaried grades only.
    pub travel_allowance: bool,
    /// Outstanding loan amount.
    pub loan: f32,
    /// Monthly basic salary. Salaried grades only.
    pub basic_salary: f32,
}

impl EmployeeRecord {
    /// Returns true if the employee draws a fixed basic salary.
    pub fn is_salaried(&self) -> bool {
        self.grade.pay_basis() == PayBasis::Salaried
    }
}

/// Upper-cases a text field and checks the upper-cased length is within
/// `1..=max_len` bytes.
///
/// # Example
///
/// ```
/// use payroll_manager::models::normalize_text;
///
/// assert_eq!(normalize_text("name", "jane doe", 25).unwrap(), "JANE DOE");
/// assert!(normalize_text("name", "", 25).is_err());
/// ```
pub fn normalize_text(field: &str, input: &str, max_len: usize) -> PayrollResult<String> {
    // Upper-casing can lengthen non-ASCII text, so the stored form is measured.
    let upper = input.to_uppercase();
    if upper.is_empty() || upper.len() > max_len {
        return Err(PayrollError::InvalidField {
            field: field.to_string(),
            message: format!("length should be between 1 and {} characters", max_len),
        });
    }
    if upper.contains('\0') {
        return Err(PayrollError::InvalidField {
            field: field.to_string(),
            message: "must not contain NUL characters".to_string(),
        });
    }
    Ok(upper)
}

/// Normalizes a phone number: empty becomes [`NO_PHONE`], long input is cut
/// to [`PHONE_MAX_LEN`] bytes.
pub fn normalize_phone(input: &str) -> String {
    let cleaned: String = input.chars().filter(|c| *c != '\0').collect();
    if cleaned.is_empty() {
        return NO_PHONE.to_string();
    }
    truncate_on_char_boundary(&cleaned, PHONE_MAX_LEN).to_string()
}

/// Checks a loan or salary amount lies within `0..=MAX_AMOUNT`.
pub fn validate_amount(field: &str, value: f32) -> PayrollResult<f32> {
    if (0.0..=MAX_AMOUNT).contains(&value) {
        Ok(value)
    } else {
        Err(PayrollError::InvalidField {
            field: field.to_string(),
            message: format!("must be between 0 and {}", MAX_AMOUNT),
        })
    }
}

/// Builds a joining date, enforcing the accepted year range and the
/// Gregorian calendar.
///
/// # Example
///
/// ```
/// use payroll_manager::models::join_date;
///
/// assert!(join_date(29, 2, 2024).is_ok());
/// assert!(join_date(29, 2, 2023).is_err());
/// assert!(join_date(1, 1, 1899).is_err());
/// ```
pub fn join_date(day: u32, month: u32, year: i32) -> PayrollResult<NaiveDate> {
    if !(MIN_JOIN_YEAR..=MAX_JOIN_YEAR).contains(&year) {
        return Err(PayrollError::InvalidField {
            field: "joining date".to_string(),
            message: format!("year must be between {} and {}", MIN_JOIN_YEAR, MAX_JOIN_YEAR),
        });
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| PayrollError::InvalidField {
        field: "joining date".to_string(),
        message: format!("{}/{}/{} is not a calendar date", day, month, year),
    })
}

/// Returns the longest prefix of `s` that fits in `max_len` bytes without
/// splitting a character.
pub(crate) fn truncate_on_char_boundary(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
