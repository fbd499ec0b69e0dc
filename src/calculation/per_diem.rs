//! Pay rules for per-diem grade E.
//!
//! Basic pay is days worked at the daily rate; overtime is the only
//! allowance and loan repayment the only deduction.

use crate::config::PayRates;
use crate::models::{Attendance, EmployeeRecord};

use super::breakdown::Components;
use super::components::{LOAN_DEDUCTION, OVERTIME, PER_DIEM_BASIC, percentage_of, units_at_rate};

/// Computes the per-diem components for `record` from this month's attendance.
pub(crate) fn per_diem_components(
    record: &EmployeeRecord,
    attendance: Attendance,
    rates: &PayRates,
    first_step: u32,
) -> Components {
    let basic = units_at_rate(
        PER_DIEM_BASIC,
        attendance.days_worked(),
        rates.per_diem_rate,
        first_step,
    );
    let overtime = units_at_rate(
        OVERTIME,
        attendance.overtime_hours(),
        rates.overtime_hourly_rate,
        first_step + 1,
    );
    let loan_deduction = percentage_of(
        LOAN_DEDUCTION,
        f64::from(record.loan),
        rates.loan_deduction_percent,
        true,
        first_step + 2,
    );

    Components {
        basic: basic.amount,
        house_allowance: 0.0,
        travel_allowance: 0.0,
        dearness_allowance: 0.0,
        overtime_pay: overtime.amount,
        provident_fund: 0.0,
        loan_deduction: loan_deduction.amount,
        audit_steps: vec![
            basic.audit_step,
            overtime.audit_step,
            loan_deduction.audit_step,
        ],
    }
}
