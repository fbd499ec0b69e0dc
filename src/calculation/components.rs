//! Individual pay components.
//!
//! Each function computes one allowance or deduction and records an
//! [`AuditStep`] describing the inputs and result.

use crate::models::AuditStep;

/// Identifies a pay rule in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayRule {
    /// Stable identifier, e.g. `house_allowance`.
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
}

/// House rent allowance on the basic salary.
pub const HOUSE_ALLOWANCE: PayRule = PayRule {
    id: "house_allowance",
    name: "House Allowance",
};

/// Conveyance allowance on the basic salary.
pub const TRAVEL_ALLOWANCE: PayRule = PayRule {
    id: "travel_allowance",
    name: "Travel Allowance",
};

/// Dearness allowance, paid to every salaried grade.
pub const DEARNESS_ALLOWANCE: PayRule = PayRule {
    id: "dearness_allowance",
    name: "Dearness Allowance",
};

/// Provident fund contribution, deducted from every salaried grade.
pub const PROVIDENT_FUND: PayRule = PayRule {
    id: "provident_fund",
    name: "Provident Fund",
};

/// Monthly loan repayment.
pub const LOAN_DEDUCTION: PayRule = PayRule {
    id: "loan_deduction",
    name: "Loan Deduction",
};

/// Basic pay for per-diem grades.
pub const PER_DIEM_BASIC: PayRule = PayRule {
    id: "per_diem_basic",
    name: "Per-Diem Basic Pay",
};

/// Overtime pay for per-diem grades.
pub const OVERTIME: PayRule = PayRule {
    id: "overtime",
    name: "Overtime",
};

/// One computed component and the audit step that explains it.
#[derive(Debug, Clone)]
pub struct ComponentResult {
    /// The computed amount.
    pub amount: f64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes `percent` percent of `base`, or zero when the rule does not apply.
///
/// The multiplication happens before the division by 100, so results match
/// `(percent * base) / 100` exactly rather than `base * (percent / 100)`.
pub fn percentage_of(
    rule: PayRule,
    base: f64,
    percent: f64,
    applies: bool,
    step_number: u32,
) -> ComponentResult {
    let amount = if applies { (percent * base) / 100.0 } else { 0.0 };

    let reasoning = if applies {
        format!("{}% of ${:.2} = ${:.2}", percent, base, amount)
    } else {
        format!("{} not granted to this employee", rule.name)
    };

    ComponentResult {
        amount,
        audit_step: AuditStep {
            step_number,
            rule_id: rule.id.to_string(),
            rule_name: rule.name.to_string(),
            input: serde_json::json!({
                "base": base,
                "percent": percent,
                "applies": applies
            }),
            output: serde_json::json!({
                "amount": amount
            }),
            reasoning,
        },
    }
}

/// Computes `units * rate`.
pub fn units_at_rate(rule: PayRule, units: u32, rate: f64, step_number: u32) -> ComponentResult {
    let amount = f64::from(units) * rate;

    ComponentResult {
        amount,
        audit_step: AuditStep {
            step_number,
            rule_id: rule.id.to_string(),
            rule_name: rule.name.to_string(),
            input: serde_json::json!({
                "units": units,
                "rate": rate
            }),
            output: serde_json::json!({
                "amount": amount
            }),
            reasoning: format!("{} x ${:.2} = ${:.2}", units, rate, amount),
        },
    }
}
