//! End-to-end tests for the operator console.
//!
//! Each test drives a [`Console`] with a scripted input stream against a
//! record file in a temporary directory, then checks both what the
//! operator saw and what ended up on disk. Covered:
//! - Adding salaried and per-diem employees
//! - Input validation and re-prompting
//! - Display, list and pagination
//! - Salary slips for both pay bases
//! - Delete and modify through the edit menu
//! - End of input, persist failures and corrupt files

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;

use payroll_manager::config::{ConfigLoader, PayrollConfig, StorageConfig};
use payroll_manager::console::{AppState, Console};
use payroll_manager::models::{EmployeeRecord, Grade};
use payroll_manager::store::{RecordStore, codec};

// =============================================================================
// Test Helpers
// =============================================================================

const ADD_SALARIED: &str = "1\nasha menon\n12 hill road\n98450 12345\n1\n6\n2020\naccountant\na\ny\nn\n10000\n2000\ny\n\n";
const ADD_PER_DIEM: &str = "1\nravi kumar\nmill lane\n\n15\n3\n2019\nloader\ne\n1000\ny\n\n";

fn data_file(dir: &TempDir) -> PathBuf {
    dir.path().join("EMPLOYEE.DAT")
}

fn slip_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn run_console_with(store: RecordStore, config: &ConfigLoader, script: &str) -> String {
    let state = AppState::with_store(store, config);
    let mut console =
        Console::new(state, Cursor::new(script.to_string()), Vec::new()).with_slip_date(slip_date());
    console.run().expect("console should exit cleanly");
    String::from_utf8(console.into_output()).unwrap()
}

fn run_console(dir: &TempDir, script: &str) -> String {
    run_console_with(
        RecordStore::new(data_file(dir)),
        &ConfigLoader::default(),
        script,
    )
}

fn load(dir: &TempDir) -> Vec<EmployeeRecord> {
    RecordStore::new(data_file(dir)).load_all().unwrap()
}

fn create_record(code: i32, name: &str, grade: Grade, basic_salary: f32, loan: f32) -> EmployeeRecord {
    EmployeeRecord {
        code,
        name: name.to_string(),
        address: "12 HILL ROAD".to_string(),
        phone: "98450 12345".to_string(),
        joined: NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(),
        designation: "ACCOUNTANT".to_string(),
        grade,
        house_allowance: grade != Grade::E,
        travel_allowance: false,
        loan,
        basic_salary,
    }
}

fn seed(dir: &TempDir, records: &[EmployeeRecord]) {
    RecordStore::new(data_file(dir)).save_all(records).unwrap();
}

// =============================================================================
// New Employee
// =============================================================================

#[test]
fn test_add_salaried_employee() {
    let dir = TempDir::new().unwrap();

    let output = run_console(&dir, &format!("{}0\n", ADD_SALARIED));

    assert!(output.contains("Employee Code: 1"));
    assert!(output.contains("Record added successfully!"));

    let records = load(&dir);
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.code, 1);
    assert_eq!(record.name, "ASHA MENON");
    assert_eq!(record.address, "12 HILL ROAD");
    assert_eq!(record.phone, "98450 12345");
    assert_eq!(record.joined, NaiveDate::from_ymd_opt(2020, 6, 1).unwrap());
    assert_eq!(record.designation, "ACCOUNTANT");
    assert_eq!(record.grade, Grade::A);
    assert!(record.house_allowance);
    assert!(!record.travel_allowance);
    assert_eq!(record.basic_salary, 10000.0);
    assert_eq!(record.loan, 2000.0);
}

#[test]
fn test_add_per_diem_employee_skips_salary_prompts() {
    let dir = TempDir::new().unwrap();

    let output = run_console(&dir, &format!("{}0\n", ADD_PER_DIEM));

    assert!(!output.contains("House allowance"));
    assert!(!output.contains("Basic salary"));

    let records = load(&dir);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].grade, Grade::E);
    assert_eq!(records[0].phone, "-");
    assert_eq!(records[0].basic_salary, 0.0);
    assert_eq!(records[0].loan, 1000.0);
}

#[test]
fn test_codes_follow_last_record() {
    let dir = TempDir::new().unwrap();

    let output = run_console(&dir, &format!("{}{}0\n", ADD_SALARIED, ADD_PER_DIEM));

    assert!(output.contains("Employee Code: 2"));
    let codes: Vec<i32> = load(&dir).iter().map(|r| r.code).collect();
    assert_eq!(codes, vec![1, 2]);
}

#[test]
fn test_invalid_entries_reprompt() {
    let dir = TempDir::new().unwrap();
    let script = concat!(
        "1\n",
        "abcdefghijklmnopqrstuvwxyz\n", // 26 characters
        "meera\n",
        "lake view\n",
        "\n",
        "31\n2\n2021\n",
        "1\n3\n2021\n",
        "clerk\n",
        "x\n",
        "b\n",
        "maybe\n",
        "y\n",
        "y\n",
        "60000\n",
        "abc\n",
        "9000\n",
        "-1\n",
        "0\n",
        "y\n",
        "\n",
        "0\n",
    );

    let output = run_console(&dir, script);

    assert!(output.contains("Invalid value for 'name'"));
    assert!(output.contains("Please try again."));
    assert!(output.contains("Invalid grade!"));
    assert!(output.contains("Please enter Y or N."));
    assert!(output.contains("Invalid value for 'basic salary'"));
    assert!(output.contains("Invalid value for 'loan'"));

    let records = load(&dir);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "MEERA");
    assert_eq!(records[0].joined, NaiveDate::from_ymd_opt(2021, 3, 1).unwrap());
    assert_eq!(records[0].grade, Grade::B);
    assert_eq!(records[0].basic_salary, 9000.0);
    assert_eq!(records[0].loan, 0.0);
}

#[test]
fn test_name_growing_past_limit_when_upper_cased_is_rejected() {
    let dir = TempDir::new().unwrap();
    // 24 bytes as typed, 72 bytes once upper-cased
    let long_name = "\u{0390}".repeat(12);
    let script = ADD_PER_DIEM.replacen("ravi kumar", &format!("{}\nravi kumar", long_name), 1);

    let output = run_console(&dir, &format!("{}0\n", script));

    assert!(output.contains("Invalid value for 'name'"));
    let records = load(&dir);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "RAVI KUMAR");
}

#[test]
fn test_add_refused_after_largest_code() {
    let dir = TempDir::new().unwrap();
    seed(&dir, &[create_record(i32::MAX, "ASHA MENON", Grade::A, 10000.0, 0.0)]);

    let output = run_console(&dir, "1\n\n0\n");

    assert!(output.contains("No employee code is available after 2147483647"));
    assert!(!output.contains("Employee Code:"));
    assert_eq!(load(&dir).len(), 1);
}

#[test]
fn test_declined_save_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let script = ADD_PER_DIEM.replace("1000\ny\n", "1000\nn\n");

    let output = run_console(&dir, &format!("{}0\n", script));

    assert!(output.contains("Record not saved."));
    assert!(!data_file(&dir).exists());
}

#[test]
fn test_cancel_at_address() {
    let dir = TempDir::new().unwrap();

    let output = run_console(&dir, "1\nasha\n0\n0\n");

    assert!(output.contains("Entry cancelled."));
    assert!(!data_file(&dir).exists());
}

// =============================================================================
// Display and List
// =============================================================================

#[test]
fn test_display_employee() {
    let dir = TempDir::new().unwrap();
    seed(&dir, &[create_record(1, "ASHA MENON", Grade::A, 10000.0, 2000.0)]);

    let output = run_console(&dir, "2\n1\n\n0\n");

    assert!(output.contains("Name           : ASHA MENON"));
    assert!(output.contains("Joining Date   : 1/6/2020"));
    assert!(output.contains("Basic Salary   : $10000.00"));
}

#[test]
fn test_display_missing_employee() {
    let dir = TempDir::new().unwrap();
    seed(&dir, &[create_record(1, "ASHA MENON", Grade::A, 10000.0, 2000.0)]);

    let output = run_console(&dir, "2\n42\n\n0\n");

    assert!(output.contains("Employee with code 42 not found!"));
}

#[test]
fn test_list_empty_store() {
    let dir = TempDir::new().unwrap();

    let output = run_console(&dir, "3\n\n0\n");

    assert!(output.contains("No employee records found!"));
}

#[test]
fn test_list_two_employees() {
    let dir = TempDir::new().unwrap();
    seed(
        &dir,
        &[
            create_record(1, "ASHA MENON", Grade::A, 10000.0, 0.0),
            create_record(2, "RAVI KUMAR", Grade::E, 0.0, 0.0),
        ],
    );

    let output = run_console(&dir, "3\n\n0\n");

    assert!(output.contains("ASHA MENON"));
    assert!(output.contains("$10000"));
    assert!(output.contains("RAVI KUMAR"));
    assert!(output.contains("Total employees: 2"));
    assert!(!output.contains("'q' to quit"));
}

fn paged_config(dir: &TempDir) -> ConfigLoader {
    ConfigLoader::from_config(PayrollConfig {
        storage: StorageConfig {
            data_file: data_file(dir).display().to_string(),
            page_size: 2,
        },
        ..PayrollConfig::default()
    })
    .unwrap()
}

fn seed_five(dir: &TempDir) {
    let names = ["EMPLOYEE ONE", "EMPLOYEE TWO", "EMPLOYEE THREE", "EMPLOYEE FOUR", "EMPLOYEE FIVE"];
    let records: Vec<EmployeeRecord> = names
        .iter()
        .enumerate()
        .map(|(i, name)| create_record(i as i32 + 1, name, Grade::C, 5000.0, 0.0))
        .collect();
    seed(dir, &records);
}

#[test]
fn test_list_pagination_quit() {
    let dir = TempDir::new().unwrap();
    seed_five(&dir);
    let config = paged_config(&dir);

    let output = run_console_with(RecordStore::new(data_file(&dir)), &config, "3\nq\n\n0\n");

    assert!(output.contains("EMPLOYEE ONE"));
    assert!(output.contains("EMPLOYEE TWO"));
    assert!(!output.contains("EMPLOYEE THREE"));
    assert!(output.contains("Total employees: 5"));
}

#[test]
fn test_list_pagination_continue() {
    let dir = TempDir::new().unwrap();
    seed_five(&dir);
    let config = paged_config(&dir);

    let output = run_console_with(RecordStore::new(data_file(&dir)), &config, "3\n\n\n\n0\n");

    assert_eq!(output.matches("'q' to quit").count(), 2);
    assert!(output.contains("EMPLOYEE FIVE"));
    assert!(output.contains("Total employees: 5"));
}

// =============================================================================
// Salary Slips
// =============================================================================

#[test]
fn test_salaried_slip() {
    let dir = TempDir::new().unwrap();
    seed(&dir, &[create_record(1, "ASHA MENON", Grade::A, 10000.0, 2000.0)]);

    let output = run_console(&dir, "4\n1\n\n0\n");

    assert!(output.contains("October, 2026"));
    assert!(output.contains("Date: 18/10/2026"));
    assert!(output.contains("  House Allowance (5%)          : $    500.00"));
    assert!(output.contains("  Dearness Allowance (5%)       : $    500.00"));
    assert!(output.contains("  Provident Fund (2%)           : $    200.00"));
    assert!(output.contains("  Loan Deduction (15%)          : $    300.00"));
    assert!(output.contains("NET SALARY                      : $  10500.00"));
    assert!(output.contains("CASHIER"));
    assert!(!output.contains("Days worked"));
}

#[test]
fn test_per_diem_slip_reprompts_attendance() {
    let dir = TempDir::new().unwrap();
    seed(&dir, &[create_record(1, "RAVI KUMAR", Grade::E, 0.0, 1000.0)]);

    let output = run_console(&dir, "4\n1\n40\n20\n-5\n5\n\n0\n");

    assert!(output.contains("Invalid value for 'days worked'"));
    assert!(output.contains("Invalid value for 'overtime hours'"));
    assert!(output.contains("Basic Salary                    : $    600.00"));
    assert!(output.contains("  Overtime                      : $     50.00"));
    assert!(output.contains("  Loan Deduction (15%)          : $    150.00"));
    assert!(output.contains("NET SALARY                      : $    500.00"));
}

// =============================================================================
// Edit Menu
// =============================================================================

#[test]
fn test_delete_only_record() {
    let dir = TempDir::new().unwrap();
    seed(&dir, &[create_record(1, "ASHA MENON", Grade::A, 10000.0, 2000.0)]);

    let output = run_console(&dir, "5\n1\n1\ny\n\n0\n0\n");

    assert!(output.contains("Record deleted successfully!"));
    assert!(load(&dir).is_empty());
    assert_eq!(fs::metadata(data_file(&dir)).unwrap().len(), 0);
}

#[test]
fn test_delete_cancelled() {
    let dir = TempDir::new().unwrap();
    seed(&dir, &[create_record(1, "ASHA MENON", Grade::A, 10000.0, 2000.0)]);

    let output = run_console(&dir, "5\n1\n1\nn\n\n0\n0\n");

    assert!(output.contains("Deletion cancelled."));
    assert_eq!(load(&dir).len(), 1);
}

#[test]
fn test_delete_keeps_other_records_in_order() {
    let dir = TempDir::new().unwrap();
    seed(
        &dir,
        &[
            create_record(1, "ONE", Grade::A, 1000.0, 0.0),
            create_record(2, "TWO", Grade::B, 2000.0, 0.0),
            create_record(3, "THREE", Grade::E, 0.0, 0.0),
        ],
    );

    run_console(&dir, "5\n1\n2\ny\n\n0\n0\n");

    let codes: Vec<i32> = load(&dir).iter().map(|r| r.code).collect();
    assert_eq!(codes, vec![1, 3]);
}

#[test]
fn test_modify_name_and_loan() {
    let dir = TempDir::new().unwrap();
    let original = create_record(1, "ASHA MENON", Grade::A, 10000.0, 2000.0);
    seed(&dir, &[original.clone()]);
    // name, address, phone, date, designation, grade, house, travel, salary, loan
    let script = "5\n2\n1\ny\npriya nair\n\n\n\n\n\n\n\n\n1500\ny\n\n0\n0\n";

    let output = run_console(&dir, script);

    assert!(output.contains("Record modified successfully!"));
    let records = load(&dir);
    assert_eq!(records.len(), 1);
    let expected = EmployeeRecord {
        name: "PRIYA NAIR".to_string(),
        loan: 1500.0,
        ..original
    };
    assert_eq!(records[0], expected);
}

#[test]
fn test_modify_rejects_bad_values_and_keeps_old() {
    let dir = TempDir::new().unwrap();
    let original = create_record(1, "ASHA MENON", Grade::A, 10000.0, 2000.0);
    seed(&dir, &[original.clone()]);
    let script = concat!(
        "5\n2\n1\ny\n",
        "abcdefghijklmnopqrstuvwxyz\n", // name too long
        "\n\n",
        "30/2/2020\n",
        "\n",
        "z\n",
        "maybe\n",
        "\n",
        "abc\n",
        "99999\n",
        "y\n\n0\n0\n",
    );

    let output = run_console(&dir, script);

    assert_eq!(output.matches("Keeping the current value.").count(), 6);
    assert_eq!(load(&dir), vec![original]);
}

#[test]
fn test_modify_to_per_diem_clears_salary_fields() {
    let dir = TempDir::new().unwrap();
    seed(&dir, &[create_record(1, "ASHA MENON", Grade::A, 10000.0, 2000.0)]);
    // keep text and date, grade e, keep loan
    let script = "5\n2\n1\ny\n\n\n\n\n\ne\n\ny\n\n0\n0\n";

    run_console(&dir, script);

    let record = &load(&dir)[0];
    assert_eq!(record.grade, Grade::E);
    assert!(!record.house_allowance);
    assert_eq!(record.basic_salary, 0.0);
    assert_eq!(record.loan, 2000.0);
}

#[test]
fn test_modify_changes_not_saved() {
    let dir = TempDir::new().unwrap();
    let original = create_record(1, "ASHA MENON", Grade::A, 10000.0, 2000.0);
    seed(&dir, &[original.clone()]);
    let script = "5\n2\n1\ny\nother\n\n\n\n\n\n\n\n\n\nn\n\n0\n0\n";

    let output = run_console(&dir, script);

    assert!(output.contains("Changes not saved."));
    assert_eq!(load(&dir), vec![original]);
}

// =============================================================================
// Failure Handling
// =============================================================================

#[test]
fn test_end_of_input_mid_workflow() {
    let dir = TempDir::new().unwrap();

    let output = run_console(&dir, "1\nasha\n");

    assert!(output.ends_with("Goodbye!\n"));
    assert!(!data_file(&dir).exists());
}

#[test]
fn test_persist_failure_returns_to_menu() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::new(dir.path().join("missing").join("EMPLOYEE.DAT"));

    let output = run_console_with(
        store,
        &ConfigLoader::default(),
        &format!("{}0\n", ADD_PER_DIEM),
    );

    assert!(output.contains("Unable to persist records"));
    assert!(!output.contains("Record added successfully!"));
    assert_eq!(output.matches("MAIN MENU").count(), 2);
    assert!(output.ends_with("Goodbye!\n"));
}

#[test]
fn test_corrupt_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let mut bytes = codec::encode(&create_record(1, "ASHA MENON", Grade::A, 10000.0, 0.0));
    bytes[123] = b'Z';
    fs::write(data_file(&dir), bytes).unwrap();

    let output = run_console(&dir, "2\n1\n\n0\n");

    assert!(output.contains("Record 0 is corrupt"));
    assert!(output.ends_with("Goodbye!\n"));
}
