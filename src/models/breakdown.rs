//! Salary breakdown models.
//!
//! This module contains the [`Breakdown`] produced by the calculator, the
//! rounded [`SlipFigures`] used for display, and the [`AuditStep`] records
//! that explain how each component was derived.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::Grade;

/// A single step in the audit trail recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The full computed salary breakdown for one employee.
///
/// Components that do not apply to the employee's grade are zero. Values
/// are unrounded; call [`Breakdown::figures`] for the two-decimal amounts
/// shown on a slip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Code of the employee the breakdown is for.
    pub code: i32,
    /// Grade the rules were selected by.
    pub grade: Grade,
    /// Basic pay for the month.
    pub basic: f64,
    /// House allowance.
    pub house_allowance: f64,
    /// Travel allowance.
    pub travel_allowance: f64,
    /// Dearness allowance.
    pub dearness_allowance: f64,
    /// Overtime pay.
    pub overtime_pay: f64,
    /// Provident fund deduction.
    pub provident_fund: f64,
    /// Loan repayment deduction.
    pub loan_deduction: f64,
    /// Sum of all allowances.
    pub allowance_total: f64,
    /// Sum of all deductions.
    pub deduction_total: f64,
    /// `basic + allowance_total - deduction_total`.
    pub net_salary: f64,
    /// How each component was derived, in order.
    pub audit_steps: Vec<AuditStep>,
}

impl Breakdown {
    /// Returns every amount rounded to two decimal places.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_manager::calculation::compute_breakdown;
    /// use payroll_manager::models::{Attendance, EmployeeRecord, Grade};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let record = EmployeeRecord {
    ///     code: 4,
    ///     name: "RAVI".to_string(),
    ///     address: "DOCK ROAD".to_string(),
    ///     phone: "-".to_string(),
    ///     joined: NaiveDate::from_ymd_opt(2019, 7, 1).unwrap(),
    ///     designation: "LOADER".to_string(),
    ///     grade: Grade::E,
    ///     house_allowance: false,
    ///     travel_allowance: false,
    ///     loan: 1000.0,
    ///     basic_salary: 0.0,
    /// };
    ///
    /// let attendance = Attendance::new(20, 5).unwrap();
    /// let figures = compute_breakdown(&record, Some(attendance)).unwrap().figures();
    /// assert_eq!(figures.net_salary, Decimal::new(50000, 2));
    /// assert_eq!(figures.net_salary.to_string(), "500.00");
    /// ```
    pub fn figures(&self) -> SlipFigures {
        SlipFigures {
            basic: to_money(self.basic),
            house_allowance: to_money(self.house_allowance),
            travel_allowance: to_money(self.travel_allowance),
            dearness_allowance: to_money(self.dearness_allowance),
            overtime_pay: to_money(self.overtime_pay),
            provident_fund: to_money(self.provident_fund),
            loan_deduction: to_money(self.loan_deduction),
            allowance_total: to_money(self.allowance_total),
            deduction_total: to_money(self.deduction_total),
            net_salary: to_money(self.net_salary),
        }
    }
}

/// Breakdown amounts fixed to two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlipFigures {
    /// Basic pay.
    pub basic: Decimal,
    /// House allowance.
    pub house_allowance: Decimal,
    /// Travel allowance.
    pub travel_allowance: Decimal,
    /// Dearness allowance.
    pub dearness_allowance: Decimal,
    /// Overtime pay.
    pub overtime_pay: Decimal,
    /// Provident fund deduction.
    pub provident_fund: Decimal,
    /// Loan repayment deduction.
    pub loan_deduction: Decimal,
    /// Total allowances.
    pub allowance_total: Decimal,
    /// Total deductions.
    pub deduction_total: Decimal,
    /// Net salary.
    pub net_salary: Decimal,
}

/// Rounds a computed amount to two decimal places.
///
/// Rounding is done on the exact binary value, the same way `%.2f` output
/// would render it, so `1.005` (stored as `1.00499...`) becomes `1.00`.
pub fn to_money(value: f64) -> Decimal {
    Decimal::from_str(&format!("{:.2}", value)).unwrap_or_else(|_| {
        warn!(value, "non-finite amount shown as zero");
        Decimal::ZERO
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn empty_breakdown() -> Breakdown {
        Breakdown {
            code: 1,
            grade: Grade::A,
            basic: 0.0,
            house_allowance: 0.0,
            travel_allowance: 0.0,
            dearness_allowance: 0.0,
            overtime_pay: 0.0,
            provident_fund: 0.0,
            loan_deduction: 0.0,
            allowance_total: 0.0,
            deduction_total: 0.0,
            net_salary: 0.0,
            audit_steps: vec![],
        }
    }

    #[test]
    fn test_to_money_keeps_two_places() {
        assert_eq!(to_money(600.0).to_string(), "600.00");
        assert_eq!(to_money(10500.0).to_string(), "10500.00");
    }

    #[test]
    fn test_to_money_rounds_binary_value() {
        assert_eq!(to_money(1.005), dec("1.00"));
        assert_eq!(to_money(123.456), dec("123.46"));
        assert_eq!(to_money(-12.344), dec("-12.34"));
    }

    #[test]
    fn test_to_money_non_finite_is_zero() {
        assert_eq!(to_money(f64::NAN), Decimal::ZERO);
        assert_eq!(to_money(f64::INFINITY), Decimal::ZERO);
    }

    #[test]
    fn test_figures_round_every_component() {
        let mut breakdown = empty_breakdown();
        breakdown.basic = 1234.5;
        breakdown.dearness_allowance = 61.725000001;
        breakdown.net_salary = 1296.225000001;

        let figures = breakdown.figures();
        assert_eq!(figures.basic, dec("1234.50"));
        assert_eq!(figures.dearness_allowance, dec("61.73"));
        assert_eq!(figures.net_salary, dec("1296.23"));
        assert_eq!(figures.house_allowance, Decimal::ZERO);
    }

    #[test]
    fn test_figures_serialize_as_strings() {
        let mut breakdown = empty_breakdown();
        breakdown.basic = 600.0;
        let json = serde_json::to_value(breakdown.figures()).unwrap();
        assert_eq!(json["basic"], "600.00");
    }
}
