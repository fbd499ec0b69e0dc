//! Parsing of operator-entered values.
//!
//! Each function takes one line of input (without its line terminator) and
//! turns it into a domain value, or reports why it cannot.

use std::str::FromStr;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Grade, MAX_DAYS_WORKED, validate_amount};

/// Parses a whole number, ignoring surrounding whitespace.
pub fn parse_number<T: FromStr>(input: &str) -> Option<T> {
    input.trim().parse().ok()
}

/// Reads the first non-blank character as a yes/no answer.
///
/// # Example
///
/// ```
/// use payroll_manager::console::parse_yes_no;
///
/// assert_eq!(parse_yes_no("y"), Some(true));
/// assert_eq!(parse_yes_no(" No"), Some(false));
/// assert_eq!(parse_yes_no("maybe"), None);
/// ```
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match first_char(input)?.to_ascii_uppercase() {
        'Y' => Some(true),
        'N' => Some(false),
        _ => None,
    }
}

/// Reads the first non-blank character as a grade letter.
pub fn parse_grade(input: &str) -> Option<Grade> {
    first_char(input).and_then(Grade::from_char)
}

/// Returns the only character of `input` once trimmed, if it has exactly one.
pub fn single_char(input: &str) -> Option<char> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Parses a loan or salary amount and checks it is within range.
pub fn parse_amount(field: &str, input: &str) -> PayrollResult<f32> {
    let value: f32 = parse_number(input).ok_or_else(|| PayrollError::InvalidField {
        field: field.to_string(),
        message: format!("'{}' is not a number", input.trim()),
    })?;
    validate_amount(field, value)
}

/// Parses the days worked in a month.
pub fn parse_days_worked(input: &str) -> PayrollResult<u32> {
    parse_number::<u32>(input)
        .filter(|days| *days <= MAX_DAYS_WORKED)
        .ok_or_else(|| PayrollError::InvalidField {
            field: "days worked".to_string(),
            message: format!("must be a whole number between 0 and {}", MAX_DAYS_WORKED),
        })
}

/// Parses a count of overtime hours.
pub fn parse_overtime_hours(input: &str) -> PayrollResult<u32> {
    parse_number::<u32>(input).ok_or_else(|| PayrollError::InvalidField {
        field: "overtime hours".to_string(),
        message: "must be a whole number, 0 or more".to_string(),
    })
}

fn first_char(input: &str) -> Option<char> {
    input.trim_start().chars().next()
}
