//! Pay rules for salaried grades (A to D).
//!
//! Salaried employees receive their stored basic salary, optional house and
//! travel allowances, and an unconditional dearness allowance. Provident
//! fund and loan repayment are deducted.

use crate::config::PayRates;
use crate::models::EmployeeRecord;

use super::breakdown::Components;
use super::components::{
    DEARNESS_ALLOWANCE, HOUSE_ALLOWANCE, LOAN_DEDUCTION, PROVIDENT_FUND, TRAVEL_ALLOWANCE,
    percentage_of,
};

/// Computes the salaried components for `record`.
pub(crate) fn salaried_components(
    record: &EmployeeRecord,
    rates: &PayRates,
    first_step: u32,
) -> Components {
    let basic = f64::from(record.basic_salary);
    let loan = f64::from(record.loan);

    let house = percentage_of(
        HOUSE_ALLOWANCE,
        basic,
        rates.house_allowance_percent,
        record.house_allowance,
        first_step,
    );
    let travel = percentage_of(
        TRAVEL_ALLOWANCE,
        basic,
        rates.travel_allowance_percent,
        record.travel_allowance,
        first_step + 1,
    );
    let dearness = percentage_of(
        DEARNESS_ALLOWANCE,
        basic,
        rates.dearness_allowance_percent,
        true,
        first_step + 2,
    );
    let provident_fund = percentage_of(
        PROVIDENT_FUND,
        basic,
        rates.provident_fund_percent,
        true,
        first_step + 3,
    );
    let loan_deduction = percentage_of(
        LOAN_DEDUCTION,
        loan,
        rates.loan_deduction_percent,
        true,
        first_step + 4,
    );

    Components {
        basic,
        house_allowance: house.amount,
        travel_allowance: travel.amount,
        dearness_allowance: dearness.amount,
        overtime_pay: 0.0,
        provident_fund: provident_fund.amount,
        loan_deduction: loan_deduction.amount,
        audit_steps: vec![
            house.audit_step,
            travel.audit_step,
            dearness.audit_step,
            provident_fund.audit_step,
            loan_deduction.audit_step,
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Grade;
    use chrono::NaiveDate;

    fn create_salaried(house: bool, travel: bool, basic: f32, loan: f32) -> EmployeeRecord {
        EmployeeRecord {
            code: 1,
            name: "MEERA".to_string(),
            address: "LAKE VIEW".to_string(),
            phone: "-".to_string(),
            joined: NaiveDate::from_ymd_opt(2018, 4, 1).unwrap(),
            designation: "MANAGER".to_string(),
            grade: Grade::A,
            house_allowance: house,
            travel_allowance: travel,
            loan,
            basic_salary: basic,
        }
    }

    #[test]
    fn test_all_allowances_granted() {
        let record = create_salaried(true, true, 20000.0, 0.0);
        let components = salaried_components(&record, &PayRates::default(), 1);

        assert_eq!(components.basic, 20000.0);
        assert_eq!(components.house_allowance, 1000.0);
        assert_eq!(components.travel_allowance, 400.0);
        assert_eq!(components.dearness_allowance, 1000.0);
        assert_eq!(components.provident_fund, 400.0);
        assert_eq!(components.loan_deduction, 0.0);
        assert_eq!(components.overtime_pay, 0.0);
    }

    #[test]
    fn test_dearness_and_provident_fund_ignore_flags() {
        let record = create_salaried(false, false, 10000.0, 0.0);
        let components = salaried_components(&record, &PayRates::default(), 1);

        assert_eq!(components.house_allowance, 0.0);
        assert_eq!(components.travel_allowance, 0.0);
        assert_eq!(components.dearness_allowance, 500.0);
        assert_eq!(components.provident_fund, 200.0);
    }

    #[test]
    fn test_loan_deduction_is_fifteen_percent() {
        let record = create_salaried(false, false, 0.0, 50000.0);
        let components = salaried_components(&record, &PayRates::default(), 1);
        assert_eq!(components.loan_deduction, 7500.0);
    }

    #[test]
    fn test_audit_steps_are_numbered_from_first_step() {
        let record = create_salaried(true, false, 10000.0, 2000.0);
        let components = salaried_components(&record, &PayRates::default(), 4);

        let numbers: Vec<u32> = components.audit_steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![4, 5, 6, 7, 8]);
        let ids: Vec<&str> = components
            .audit_steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "house_allowance",
                "travel_allowance",
                "dearness_allowance",
                "provident_fund",
                "loan_deduction"
            ]
        );
    }

    #[test]
    fn test_configured_rates_are_used() {
        let record = create_salaried(true, false, 10000.0, 0.0);
        let rates = PayRates {
            house_allowance_percent: 10.0,
            ..PayRates::default()
        };
        let components = salaried_components(&record, &rates, 1);
        assert_eq!(components.house_allowance, 1000.0);
    }
}
