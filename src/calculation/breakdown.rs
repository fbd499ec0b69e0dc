//! Salary breakdown computation.
//!
//! This module selects the rule set for an employee's pay basis, once, and
//! then applies the common totals for both bases.

use tracing::debug;

use crate::config::PayRates;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Attendance, AuditStep, Breakdown, EmployeeRecord, PayBasis};

use super::per_diem::per_diem_components;
use super::salaried::salaried_components;

/// Components produced by a pay basis' rule set, before totals.
#[derive(Debug, Clone)]
pub(crate) struct Components {
    pub basic: f64,
    pub house_allowance: f64,
    pub travel_allowance: f64,
    pub dearness_allowance: f64,
    pub overtime_pay: f64,
    pub provident_fund: f64,
    pub loan_deduction: f64,
    pub audit_steps: Vec<AuditStep>,
}

/// Computes the salary breakdown for `record` with the standard pay rates.
///
/// `attendance` is required for per-diem grades and ignored for salaried ones.
///
/// # Errors
///
/// Returns `MissingAttendance` if the employee is per diem and no
/// attendance was supplied.
///
/// # Examples
///
/// ```
/// use payroll_manager::calculation::compute_breakdown;
/// use payroll_manager::models::{EmployeeRecord, Grade};
/// use chrono::NaiveDate;
///
/// let record = EmployeeRecord {
///     code: 1,
///     name: "ASHA".to_string(),
///     address: "HILL ROAD".to_string(),
///     phone: "-".to_string(),
///     joined: NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(),
///     designation: "ACCOUNTANT".to_string(),
///     grade: Grade::A,
///     house_allowance: true,
///     travel_allowance: false,
///     loan: 2000.0,
///     basic_salary: 10000.0,
/// };
///
/// let breakdown = compute_breakdown(&record, None).unwrap();
/// assert_eq!(breakdown.net_salary, 10500.0);
/// ```
pub fn compute_breakdown(
    record: &EmployeeRecord,
    attendance: Option<Attendance>,
) -> PayrollResult<Breakdown> {
    compute_breakdown_with(record, attendance, &PayRates::default())
}

/// Computes the salary breakdown for `record` with the given pay rates.
pub fn compute_breakdown_with(
    record: &EmployeeRecord,
    attendance: Option<Attendance>,
    rates: &PayRates,
) -> PayrollResult<Breakdown> {
    let components = match record.grade.pay_basis() {
        PayBasis::Salaried => salaried_components(record, rates, 1),
        PayBasis::PerDiem => {
            let attendance =
                attendance.ok_or(PayrollError::MissingAttendance { code: record.code })?;
            per_diem_components(record, attendance, rates, 1)
        }
    };

    let breakdown = apply_totals(record, components);
    debug!(
        code = record.code,
        grade = %record.grade,
        net_salary = breakdown.net_salary,
        "Computed salary breakdown"
    );
    Ok(breakdown)
}

fn apply_totals(record: &EmployeeRecord, components: Components) -> Breakdown {
    let Components {
        basic,
        house_allowance,
        travel_allowance,
        dearness_allowance,
        overtime_pay,
        provident_fund,
        loan_deduction,
        mut audit_steps,
    } = components;

    let allowance_total = house_allowance + travel_allowance + dearness_allowance + overtime_pay;
    let deduction_total = provident_fund + loan_deduction;
    let net_salary = (basic + allowance_total) - deduction_total;

    let step_number = audit_steps.len() as u32 + 1;
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "net_salary".to_string(),
        rule_name: "Net Salary".to_string(),
        input: serde_json::json!({
            "basic": basic,
            "allowance_total": allowance_total,
            "deduction_total": deduction_total
        }),
        output: serde_json::json!({
            "net_salary": net_salary
        }),
        reasoning: format!(
            "${:.2} + ${:.2} - ${:.2} = ${:.2}",
            basic, allowance_total, deduction_total, net_salary
        ),
    });

    Breakdown {
        code: record.code,
        grade: record.grade,
        basic,
        house_allowance,
        travel_allowance,
        dearness_allowance,
        overtime_pay,
        provident_fund,
        loan_deduction,
        allowance_total,
        deduction_total,
        net_salary,
        audit_steps,
    }
}
