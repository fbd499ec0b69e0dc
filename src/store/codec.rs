//! Fixed-size binary record layout.
//!
//! Every record occupies exactly [`RECORD_SIZE`] bytes. Fields sit at fixed
//! offsets in a fixed order; numbers are little-endian and text lives in
//! NUL-padded fixed-width buffers, so record `n` starts at
//! [`record_offset`]`(n)`.
//!
//! ```text
//! offset  width  field
//!      0      4  code            i32
//!      4     25  name            text
//!     29     50  address         text
//!     79     20  phone           text
//!     99      1  join day        u8
//!    100      1  join month      u8
//!    101      2  join year       u16
//!    103     20  designation     text
//!    123      1  grade           b'A'..=b'E'
//!    124      1  house allow.    b'Y' | b'N'
//!    125      1  travel allow.   b'Y' | b'N'
//!    126      4  loan            f32
//!    130      4  basic salary    f32
//! ```

use std::ops::Range;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::models::{
    ADDRESS_MAX_LEN, DESIGNATION_MAX_LEN, EmployeeRecord, Grade, NAME_MAX_LEN, PHONE_MAX_LEN,
    truncate_on_char_boundary,
};

const CODE: Range<usize> = 0..4;
const NAME: Range<usize> = 4..4 + NAME_MAX_LEN;
const ADDRESS: Range<usize> = NAME.end..NAME.end + ADDRESS_MAX_LEN;
const PHONE: Range<usize> = ADDRESS.end..ADDRESS.end + PHONE_MAX_LEN;
const JOIN_DAY: usize = PHONE.end;
const JOIN_MONTH: usize = JOIN_DAY + 1;
const JOIN_YEAR: Range<usize> = JOIN_MONTH + 1..JOIN_MONTH + 3;
const DESIGNATION: Range<usize> = JOIN_YEAR.end..JOIN_YEAR.end + DESIGNATION_MAX_LEN;
const GRADE: usize = DESIGNATION.end;
const HOUSE_ALLOWANCE: usize = GRADE + 1;
const TRAVEL_ALLOWANCE: usize = GRADE + 2;
const LOAN: Range<usize> = GRADE + 3..GRADE + 7;
const BASIC_SALARY: Range<usize> = LOAN.end..LOAN.end + 4;

/// Size in bytes of one encoded record.
pub const RECORD_SIZE: usize = BASIC_SALARY.end;

/// Reasons a block of bytes cannot be decoded into a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Fewer than [`RECORD_SIZE`] bytes were supplied.
    #[error("record block is {actual} bytes, expected {expected}")]
    Truncated {
        /// Bytes available.
        actual: usize,
        /// Bytes required.
        expected: usize,
    },

    /// The grade byte is not one of `A` to `E`.
    #[error("invalid grade byte {0:#04x}")]
    InvalidGrade(u8),

    /// An allowance flag byte is neither `Y` nor `N`.
    #[error("invalid {field} flag byte {byte:#04x}")]
    InvalidFlag {
        /// Which flag.
        field: &'static str,
        /// The byte found.
        byte: u8,
    },

    /// The stored day, month and year do not form a calendar date.
    #[error("invalid joining date {day}/{month}/{year}")]
    InvalidDate {
        /// Stored day.
        day: u8,
        /// Stored month.
        month: u8,
        /// Stored year.
        year: u16,
    },

    /// A text buffer does not hold valid UTF-8.
    #[error("{0} is not valid UTF-8")]
    InvalidText(&'static str),
}

/// Byte offset of the record at position `index`.
pub fn record_offset(index: usize) -> u64 {
    (index * RECORD_SIZE) as u64
}

/// Encodes a record into its fixed-size block.
///
/// Text longer than its buffer is cut on a character boundary; unused
/// buffer bytes are NUL.
pub fn encode(record: &EmployeeRecord) -> [u8; RECORD_SIZE] {
    let mut block = [0u8; RECORD_SIZE];

    block[CODE].copy_from_slice(&record.code.to_le_bytes());
    put_text(&mut block[NAME], &record.name);
    put_text(&mut block[ADDRESS], &record.address);
    put_text(&mut block[PHONE], &record.phone);

    // Day and month always fit in a byte; years outside u16 are stored as 0
    // and rejected on decode.
    block[JOIN_DAY] = record.joined.day() as u8;
    block[JOIN_MONTH] = record.joined.month() as u8;
    let year = u16::try_from(record.joined.year()).unwrap_or(0);
    block[JOIN_YEAR].copy_from_slice(&year.to_le_bytes());

    put_text(&mut block[DESIGNATION], &record.designation);
    block[GRADE] = record.grade.as_char() as u8;
    block[HOUSE_ALLOWANCE] = flag_byte(record.house_allowance);
    block[TRAVEL_ALLOWANCE] = flag_byte(record.travel_allowance);
    block[LOAN].copy_from_slice(&record.loan.to_le_bytes());
    block[BASIC_SALARY].copy_from_slice(&record.basic_salary.to_le_bytes());

    block
}

/// Decodes the first [`RECORD_SIZE`] bytes of `bytes` into a record.
///
/// A short block is an error, never a partially populated record.
pub fn decode(bytes: &[u8]) -> Result<EmployeeRecord, CodecError> {
    if bytes.len() < RECORD_SIZE {
        return Err(CodecError::Truncated {
            actual: bytes.len(),
            expected: RECORD_SIZE,
        });
    }
    let block = &bytes[..RECORD_SIZE];

    let grade_byte = block[GRADE];
    let grade = Grade::from_char(grade_byte as char)
        .filter(|g| g.as_char() as u8 == grade_byte)
        .ok_or(CodecError::InvalidGrade(grade_byte))?;

    let day = block[JOIN_DAY];
    let month = block[JOIN_MONTH];
    let year = u16::from_le_bytes(array(&block[JOIN_YEAR]));
    let joined = NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
        .ok_or(CodecError::InvalidDate { day, month, year })?;

    Ok(EmployeeRecord {
        code: i32::from_le_bytes(array(&block[CODE])),
        name: get_text("name", &block[NAME])?,
        address: get_text("address", &block[ADDRESS])?,
        phone: get_text("phone", &block[PHONE])?,
        joined,
        designation: get_text("designation", &block[DESIGNATION])?,
        grade,
        house_allowance: get_flag("house allowance", block[HOUSE_ALLOWANCE])?,
        travel_allowance: get_flag("travel allowance", block[TRAVEL_ALLOWANCE])?,
        loan: f32::from_le_bytes(array(&block[LOAN])),
        basic_salary: f32::from_le_bytes(array(&block[BASIC_SALARY])),
    })
}

fn put_text(buf: &mut [u8], text: &str) {
    let text = truncate_on_char_boundary(text, buf.len());
    buf[..text.len()].copy_from_slice(text.as_bytes());
}

fn get_text(field: &'static str, buf: &[u8]) -> Result<String, CodecError> {
    let end = buf.iter().position(|b| *b == 0).unwrap_or(buf.len());
    std::str::from_utf8(&buf[..end])
        .map(str::to_owned)
        .map_err(|_| CodecError::InvalidText(field))
}

fn flag_byte(flag: bool) -> u8 {
    if flag { b'Y' } else { b'N' }
}

fn get_flag(field: &'static str, byte: u8) -> Result<bool, CodecError> {
    match byte {
        b'Y' => Ok(true),
        b'N' => Ok(false),
        _ => Err(CodecError::InvalidFlag { field, byte }),
    }
}

fn array<const N: usize>(slice: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(slice);
    out
}
