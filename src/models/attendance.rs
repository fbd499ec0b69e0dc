//! Attendance entered for a per-diem salary slip.

use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// The most days that can be worked in one month.
pub const MAX_DAYS_WORKED: u32 = 31;

/// Days worked and overtime hours for one per-diem pay run.
///
/// # Example
///
/// ```
/// use payroll_manager::models::Attendance;
///
/// let attendance = Attendance::new(20, 5).unwrap();
/// assert_eq!(attendance.days_worked(), 20);
/// assert!(Attendance::new(32, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    days_worked: u32,
    overtime_hours: u32,
}

impl Attendance {
    /// Creates attendance figures, rejecting more than [`MAX_DAYS_WORKED`] days.
    pub fn new(days_worked: u32, overtime_hours: u32) -> PayrollResult<Self> {
        if days_worked > MAX_DAYS_WORKED {
            return Err(PayrollError::InvalidField {
                field: "days worked".to_string(),
                message: format!("must be between 0 and {}", MAX_DAYS_WORKED),
            });
        }
        Ok(Self {
            days_worked,
            overtime_hours,
        })
    }

    /// Days worked this month.
    pub fn days_worked(&self) -> u32 {
        self.days_worked
    }

    /// Overtime hours this month.
    pub fn overtime_hours(&self) -> u32 {
        self.overtime_hours
    }
}
