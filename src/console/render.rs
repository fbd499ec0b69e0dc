//! Text rendering for the operator console.
//!
//! Every function returns the text to print; nothing here touches the
//! output stream.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::config::PayRates;
use crate::models::{Breakdown, EmployeeRecord, PayBasis};

const WIDTH: usize = 80;

/// A full-width line of `-`.
pub fn separator() -> String {
    "-".repeat(WIDTH)
}

/// A full-width line of `=`.
pub fn rule() -> String {
    "=".repeat(WIDTH)
}

/// A centred title between two rules.
pub fn header(title: &str) -> String {
    let width = WIDTH / 2 + title.len() / 2;
    format!("{}\n{:>width$}\n{}", rule(), title, rule(), width = width)
}

/// Formats a date as `d/m/yyyy`.
pub fn short_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

/// Every field of one record, framed by separators.
pub fn employee_details(record: &EmployeeRecord) -> String {
    let mut lines = vec![
        separator(),
        format!("Employee Code  : {}", record.code),
        format!("Name           : {}", record.name),
        format!("Address        : {}", record.address),
        format!("Phone          : {}", record.phone),
        format!("Joining Date   : {}", short_date(record.joined)),
        format!("Designation    : {}", record.designation),
        format!("Grade          : {}", record.grade),
    ];
    if record.is_salaried() {
        lines.push(format!("House Allowance: {}", yes_no(record.house_allowance)));
        lines.push(format!("Travel Allow.  : {}", yes_no(record.travel_allowance)));
        lines.push(format!("Basic Salary   : ${:.2}", record.basic_salary));
    }
    lines.push(format!("Loan Amount    : ${:.2}", record.loan));
    lines.push(separator());
    lines.join("\n")
}

/// Column headings for the employee list.
pub fn list_header() -> String {
    format!(
        "{:<6}{:<20}{:<12}{:<12}{:<15}{:<6}{:<10}",
        "CODE", "NAME", "PHONE", "DOJ", "DESIGNATION", "GRADE", "SALARY"
    )
}

/// One employee as a list row. Long text is clipped to its column.
pub fn list_row(record: &EmployeeRecord) -> String {
    let salary = if record.is_salaried() {
        format!("${:.0}", record.basic_salary)
    } else {
        "-".to_string()
    };
    format!(
        "{:<6}{:<20}{:<12}{:<12}{:<15}{:<6}{}",
        record.code,
        clip(&record.name, 19),
        clip(&record.phone, 11),
        short_date(record.joined),
        clip(&record.designation, 14),
        record.grade,
        salary
    )
}

/// A complete salary slip dated `date`.
pub fn salary_slip(
    record: &EmployeeRecord,
    breakdown: &Breakdown,
    rates: &PayRates,
    date: NaiveDate,
) -> String {
    let figures = breakdown.figures();
    let mut lines = vec![
        rule(),
        format!("{:>45}", "SALARY SLIP"),
        format!("{:>35}", date.format("%B, %Y").to_string()),
        rule(),
        String::new(),
        format!(
            "Employee Name: {}{:>40}{}",
            record.name,
            "Date: ",
            short_date(date)
        ),
        format!(
            "Designation  : {}{:>40}{}",
            record.designation, "Grade: ", record.grade
        ),
        separator(),
        String::new(),
        "SALARY BREAKDOWN:".to_string(),
        separator(),
        slip_line("Basic Salary", figures.basic),
        String::new(),
        "ALLOWANCES:".to_string(),
    ];

    match breakdown.grade.pay_basis() {
        PayBasis::Salaried => {
            lines.push(slip_line(
                &format!("  House Allowance ({}%)", rates.house_allowance_percent),
                figures.house_allowance,
            ));
            lines.push(slip_line(
                &format!("  Travel Allowance ({}%)", rates.travel_allowance_percent),
                figures.travel_allowance,
            ));
            lines.push(slip_line(
                &format!("  Dearness Allowance ({}%)", rates.dearness_allowance_percent),
                figures.dearness_allowance,
            ));
        }
        PayBasis::PerDiem => {
            lines.push(slip_line("  Overtime", figures.overtime_pay));
        }
    }
    lines.push(slip_line("  Total Allowances", figures.allowance_total));
    lines.push(String::new());
    lines.push("DEDUCTIONS:".to_string());
    if breakdown.grade.pay_basis() == PayBasis::Salaried {
        lines.push(slip_line(
            &format!("  Provident Fund ({}%)", rates.provident_fund_percent),
            figures.provident_fund,
        ));
    }
    lines.push(slip_line(
        &format!("  Loan Deduction ({}%)", rates.loan_deduction_percent),
        figures.loan_deduction,
    ));
    lines.push(slip_line("  Total Deductions", figures.deduction_total));
    lines.push(rule());
    lines.push(slip_line("NET SALARY", figures.net_salary));
    lines.push(rule());
    lines.push(String::new());
    lines.push(String::new());
    lines.push(format!("CASHIER{:>65}", "EMPLOYEE"));
    lines.join("\n")
}

fn slip_line(label: &str, amount: Decimal) -> String {
    format!("{:<32}: ${:>10}", label, amount.to_string())
}

fn yes_no(flag: bool) -> char {
    if flag { 'Y' } else { 'N' }
}

fn clip(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
