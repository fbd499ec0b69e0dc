//! Interactive workflows for the operator console.
//!
//! [`Console`] reads operator input line by line and writes prompts and
//! reports to any pair of streams. Each workflow loads the record
//! collection fresh from the store and saves it back only when the
//! operator confirms a change.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::calculation::compute_breakdown_with;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    ADDRESS_MAX_LEN, Attendance, DESIGNATION_MAX_LEN, EmployeeRecord, Grade, NAME_MAX_LEN,
    PayBasis, join_date, normalize_phone, normalize_text,
};
use crate::store::RecordStore;

use super::input::{
    parse_amount, parse_days_worked, parse_grade, parse_number, parse_overtime_hours,
    parse_yes_no, single_char,
};
use super::render;
use super::state::AppState;

/// The operator console.
pub struct Console<R, W> {
    state: AppState,
    input: R,
    output: W,
    slip_date: Option<NaiveDate>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub fn new(state: AppState, input: R, output: W) -> Self {
        Self {
            state,
            input,
            output,
            slip_date: None,
        }
    }

    /// Fixes the date printed on salary slips instead of using today.
    pub fn with_slip_date(mut self, date: NaiveDate) -> Self {
        self.slip_date = Some(date);
        self
    }

    /// Consumes the console and returns its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the main menu until the operator quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns `Console` if the output stream fails. Every other error is
    /// reported to the operator and the menu carries on.
    pub fn run(&mut self) -> PayrollResult<()> {
        writeln!(self.output, "{}", render::header("PAYROLL MANAGEMENT SYSTEM"))?;
        match self.main_menu() {
            Ok(()) => {}
            Err(PayrollError::InputClosed) => debug!("Input closed, leaving console"),
            Err(e) => return Err(e),
        }
        writeln!(self.output, "\nGoodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn main_menu(&mut self) -> PayrollResult<()> {
        loop {
            writeln!(self.output, "\n{}", render::header("MAIN MENU"))?;
            writeln!(self.output, "1. New Employee")?;
            writeln!(self.output, "2. Display Employee")?;
            writeln!(self.output, "3. List Employees")?;
            writeln!(self.output, "4. Salary Slip")?;
            writeln!(self.output, "5. Edit Employee")?;
            writeln!(self.output, "0. Quit")?;

            let choice = self.prompt("Enter your choice: ")?;
            let outcome = match choice.trim() {
                "1" => self.new_employee(),
                "2" => self.display_employee(),
                "3" => self.list_employees(),
                "4" => self.salary_slip(),
                "5" => self.edit_menu(),
                "0" => return Ok(()),
                _ => {
                    writeln!(self.output, "Invalid choice! Please enter 0-5.")?;
                    continue;
                }
            };
            self.recover(outcome)?;
        }
    }

    fn edit_menu(&mut self) -> PayrollResult<()> {
        loop {
            writeln!(self.output, "\n{}", render::header("EDIT MENU"))?;
            writeln!(self.output, "1. Delete Employee")?;
            writeln!(self.output, "2. Modify Employee")?;
            writeln!(self.output, "0. Back")?;

            let choice = self.prompt("Enter your choice: ")?;
            let outcome = match choice.trim() {
                "1" => self.delete_employee(),
                "2" => self.modify_employee(),
                "0" => return Ok(()),
                _ => {
                    writeln!(self.output, "Invalid choice! Please enter 0-2.")?;
                    continue;
                }
            };
            self.recover(outcome)?;
        }
    }

    /// Reports a failed workflow and returns to the menu. Closed input and
    /// broken output end the session instead.
    fn recover(&mut self, outcome: PayrollResult<()>) -> PayrollResult<()> {
        match outcome {
            Ok(()) => Ok(()),
            Err(e @ (PayrollError::InputClosed | PayrollError::Console(_))) => Err(e),
            Err(e) => {
                warn!(error = %e, "Workflow aborted");
                writeln!(self.output, "\n{}", e)?;
                self.pause()
            }
        }
    }

    fn new_employee(&mut self) -> PayrollResult<()> {
        let mut records = self.state.store().load_all()?;
        let code = RecordStore::next_code(&records)?;

        writeln!(self.output, "\n{}", render::header("NEW EMPLOYEE"))?;
        writeln!(self.output, "Employee Code: {}", code)?;
        writeln!(self.output, "(Enter 0 at any text prompt to cancel)")?;

        let Some(name) = self.prompt_text("Name: ", "name", NAME_MAX_LEN)? else {
            return self.cancelled();
        };
        let Some(address) = self.prompt_text("Address: ", "address", ADDRESS_MAX_LEN)? else {
            return self.cancelled();
        };
        let phone = self.prompt("Phone (Enter for none): ")?;
        if phone.trim() == "0" {
            return self.cancelled();
        }
        let phone = normalize_phone(&phone);
        let joined = self.prompt_join_date()?;
        let Some(designation) =
            self.prompt_text("Designation: ", "designation", DESIGNATION_MAX_LEN)?
        else {
            return self.cancelled();
        };
        let grade = self.prompt_grade()?;

        let (house_allowance, travel_allowance, basic_salary) = match grade.pay_basis() {
            PayBasis::Salaried => (
                self.prompt_yes_no("House allowance (Y/N): ")?,
                self.prompt_yes_no("Travel allowance (Y/N): ")?,
                self.prompt_amount("Basic salary: ", "basic salary")?,
            ),
            PayBasis::PerDiem => (false, false, 0.0),
        };
        let loan = self.prompt_amount("Loan amount: ", "loan")?;

        let record = EmployeeRecord {
            code,
            name,
            address,
            phone,
            joined,
            designation,
            grade,
            house_allowance,
            travel_allowance,
            loan,
            basic_salary,
        };

        if !self.confirm("\nDo you want to save this record? (Y/N): ")? {
            writeln!(self.output, "Record not saved.")?;
            return self.pause();
        }

        RecordStore::append(&mut records, record);
        self.state.store().save_all(&records)?;
        info!(code, "Added employee");
        writeln!(self.output, "Record added successfully!")?;
        self.pause()
    }

    fn display_employee(&mut self) -> PayrollResult<()> {
        writeln!(self.output, "\n{}", render::header("EMPLOYEE DETAILS"))?;
        let Some((records, index)) = self.lookup()? else {
            return Ok(());
        };
        writeln!(self.output, "{}", render::employee_details(&records[index]))?;
        self.pause()
    }

    fn list_employees(&mut self) -> PayrollResult<()> {
        let records = self.state.store().load_all()?;
        if records.is_empty() {
            writeln!(self.output, "\nNo employee records found!")?;
            return self.pause();
        }

        let page_size = self.state.page_size();
        writeln!(self.output, "\n{}", render::header("EMPLOYEE LIST"))?;
        writeln!(self.output, "{}", render::list_header())?;
        writeln!(self.output, "{}", render::separator())?;

        for (shown, record) in records.iter().enumerate().map(|(i, r)| (i + 1, r)) {
            writeln!(self.output, "{}", render::list_row(record))?;
            if shown % page_size == 0 && shown < records.len() {
                let answer = self.prompt("\nPress Enter for more, or 'q' to quit: ")?;
                if answer.trim().eq_ignore_ascii_case("q") {
                    break;
                }
                writeln!(self.output, "\n{}", render::list_header())?;
                writeln!(self.output, "{}", render::separator())?;
            }
        }

        writeln!(self.output, "{}", render::separator())?;
        writeln!(self.output, "Total employees: {}", records.len())?;
        self.pause()
    }

    fn salary_slip(&mut self) -> PayrollResult<()> {
        writeln!(self.output, "\n{}", render::header("SALARY SLIP"))?;
        let Some((records, index)) = self.lookup()? else {
            return Ok(());
        };
        let record = &records[index];

        let attendance = match record.grade.pay_basis() {
            PayBasis::Salaried => None,
            PayBasis::PerDiem => {
                let days = self.prompt_parsed("Days worked this month (0-31): ", parse_days_worked)?;
                let hours = self.prompt_parsed("Overtime hours: ", parse_overtime_hours)?;
                Some(Attendance::new(days, hours)?)
            }
        };

        let breakdown = compute_breakdown_with(record, attendance, self.state.rates())?;
        let date = self
            .slip_date
            .unwrap_or_else(|| Local::now().date_naive());
        writeln!(
            self.output,
            "\n{}",
            render::salary_slip(record, &breakdown, self.state.rates(), date)
        )?;
        info!(code = record.code, net_salary = breakdown.net_salary, "Issued salary slip");
        self.pause()
    }

    fn delete_employee(&mut self) -> PayrollResult<()> {
        writeln!(self.output, "\n{}", render::header("DELETE EMPLOYEE"))?;
        let Some((mut records, index)) = self.lookup()? else {
            return Ok(());
        };
        writeln!(self.output, "{}", render::employee_details(&records[index]))?;

        if !self.confirm("\nAre you sure you want to delete this record? (Y/N): ")? {
            writeln!(self.output, "Deletion cancelled.")?;
            return self.pause();
        }

        if let Some(removed) = RecordStore::delete_at(&mut records, index) {
            self.state.store().save_all(&records)?;
            info!(code = removed.code, "Deleted employee");
            writeln!(self.output, "Record deleted successfully!")?;
        }
        self.pause()
    }

    fn modify_employee(&mut self) -> PayrollResult<()> {
        writeln!(self.output, "\n{}", render::header("MODIFY EMPLOYEE"))?;
        let Some((mut records, index)) = self.lookup()? else {
            return Ok(());
        };
        writeln!(self.output, "{}", render::employee_details(&records[index]))?;

        if !self.confirm("\nDo you want to modify this record? (Y/N): ")? {
            writeln!(self.output, "Modification cancelled.")?;
            return self.pause();
        }

        let mut updated = records[index].clone();
        writeln!(self.output, "Press Enter to keep the current value.")?;

        updated.name = self.modify_text("Name", "name", &updated.name, NAME_MAX_LEN)?;
        updated.address =
            self.modify_text("Address", "address", &updated.address, ADDRESS_MAX_LEN)?;
        let phone = self.prompt(&format!("Phone [{}]: ", updated.phone))?;
        if !phone.is_empty() {
            updated.phone = normalize_phone(&phone);
        }
        updated.joined = self.modify_join_date(updated.joined)?;
        updated.designation = self.modify_text(
            "Designation",
            "designation",
            &updated.designation,
            DESIGNATION_MAX_LEN,
        )?;
        updated.grade = self.modify_grade(updated.grade)?;

        match updated.grade.pay_basis() {
            PayBasis::Salaried => {
                updated.house_allowance =
                    self.modify_flag("House allowance (Y/N)", updated.house_allowance)?;
                updated.travel_allowance =
                    self.modify_flag("Travel allowance (Y/N)", updated.travel_allowance)?;
                updated.basic_salary =
                    self.modify_amount("Basic salary", "basic salary", updated.basic_salary)?;
            }
            PayBasis::PerDiem => {
                updated.house_allowance = false;
                updated.travel_allowance = false;
                updated.basic_salary = 0.0;
            }
        }
        updated.loan = self.modify_amount("Loan amount", "loan", updated.loan)?;

        if !self.confirm("\nDo you want to save the changes? (Y/N): ")? {
            writeln!(self.output, "Changes not saved.")?;
            return self.pause();
        }

        let code = updated.code;
        RecordStore::replace_at(&mut records, index, updated);
        self.state.store().save_all(&records)?;
        info!(code, "Modified employee");
        writeln!(self.output, "Record modified successfully!")?;
        self.pause()
    }

    /// Asks for an employee code and finds it in a freshly loaded
    /// collection. `None` means the operator backed out or the code was
    /// not found; either way the caller just returns.
    fn lookup(&mut self) -> PayrollResult<Option<(Vec<EmployeeRecord>, usize)>> {
        let code = loop {
            let line = self.prompt("Enter employee code (0 to exit): ")?;
            match parse_number::<i32>(&line) {
                Some(0) => return Ok(None),
                Some(code) => break code,
                None => writeln!(self.output, "Invalid code! Please enter a number.")?,
            }
        };

        let records = self.state.store().load_all()?;
        match RecordStore::find_by_code(&records, code) {
            Some(index) => Ok(Some((records, index))),
            None => {
                writeln!(self.output, "\nEmployee with code {} not found!", code)?;
                self.pause()?;
                Ok(None)
            }
        }
    }

    fn cancelled(&mut self) -> PayrollResult<()> {
        writeln!(self.output, "Entry cancelled.")?;
        Ok(())
    }

    fn read_line(&mut self) -> PayrollResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PayrollError::InputClosed);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(line)
    }

    fn prompt(&mut self, label: &str) -> PayrollResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    fn pause(&mut self) -> PayrollResult<()> {
        self.prompt("\nPress Enter to continue...")?;
        Ok(())
    }

    fn confirm(&mut self, label: &str) -> PayrollResult<bool> {
        let answer = self.prompt(label)?;
        Ok(parse_yes_no(&answer) == Some(true))
    }

    /// Re-prompts until `parse` accepts the input, printing each rejection.
    fn prompt_parsed<T>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> PayrollResult<T>,
    ) -> PayrollResult<T> {
        loop {
            let line = self.prompt(label)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Text prompt for a new record. `None` when the operator enters `0`.
    fn prompt_text(
        &mut self,
        label: &str,
        field: &str,
        max_len: usize,
    ) -> PayrollResult<Option<String>> {
        loop {
            let line = self.prompt(label)?;
            if line.trim() == "0" {
                return Ok(None);
            }
            match normalize_text(field, &line, max_len) {
                Ok(text) => return Ok(Some(text)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn prompt_join_date(&mut self) -> PayrollResult<NaiveDate> {
        writeln!(self.output, "Date of joining:")?;
        loop {
            let day = self.prompt("  Day: ")?;
            let month = self.prompt("  Month: ")?;
            let year = self.prompt("  Year: ")?;
            let parsed = match (parse_number(&day), parse_number(&month), parse_number(&year)) {
                (Some(day), Some(month), Some(year)) => join_date(day, month, year),
                _ => Err(PayrollError::InvalidField {
                    field: "joining date".to_string(),
                    message: "day, month and year must be numbers".to_string(),
                }),
            };
            match parsed {
                Ok(date) => return Ok(date),
                Err(e) => writeln!(self.output, "{}. Please try again.", e)?,
            }
        }
    }

    fn prompt_grade(&mut self) -> PayrollResult<Grade> {
        loop {
            let line = self.prompt("Grade (A-E): ")?;
            match parse_grade(&line) {
                Some(grade) => return Ok(grade),
                None => writeln!(self.output, "Invalid grade! Please enter A, B, C, D or E.")?,
            }
        }
    }

    fn prompt_yes_no(&mut self, label: &str) -> PayrollResult<bool> {
        loop {
            let line = self.prompt(label)?;
            match parse_yes_no(&line) {
                Some(answer) => return Ok(answer),
                None => writeln!(self.output, "Please enter Y or N.")?,
            }
        }
    }

    fn prompt_amount(&mut self, label: &str, field: &str) -> PayrollResult<f32> {
        self.prompt_parsed(label, |line| parse_amount(field, line))
    }

    fn modify_text(
        &mut self,
        label: &str,
        field: &str,
        current: &str,
        max_len: usize,
    ) -> PayrollResult<String> {
        let line = self.prompt(&format!("{} [{}]: ", label, current))?;
        if line.is_empty() {
            return Ok(current.to_string());
        }
        match normalize_text(field, &line, max_len) {
            Ok(text) => Ok(text),
            Err(e) => {
                writeln!(self.output, "{}. Keeping the current value.", e)?;
                Ok(current.to_string())
            }
        }
    }

    fn modify_join_date(&mut self, current: NaiveDate) -> PayrollResult<NaiveDate> {
        let line = self.prompt(&format!(
            "Date of joining d/m/yyyy [{}]: ",
            render::short_date(current)
        ))?;
        if line.trim().is_empty() {
            return Ok(current);
        }
        let parts: Vec<Option<i64>> = line.split('/').map(parse_number).collect();
        let parsed = match parts.as_slice() {
            [Some(day), Some(month), Some(year)] => {
                match (u32::try_from(*day), u32::try_from(*month), i32::try_from(*year)) {
                    (Ok(day), Ok(month), Ok(year)) => join_date(day, month, year).ok(),
                    _ => None,
                }
            }
            _ => None,
        };
        match parsed {
            Some(date) => Ok(date),
            None => {
                writeln!(self.output, "Invalid date! Keeping the current value.")?;
                Ok(current)
            }
        }
    }

    fn modify_grade(&mut self, current: Grade) -> PayrollResult<Grade> {
        let line = self.prompt(&format!("Grade (A-E) [{}]: ", current))?;
        if line.trim().is_empty() {
            return Ok(current);
        }
        match single_char(&line).and_then(Grade::from_char) {
            Some(grade) => Ok(grade),
            None => {
                writeln!(self.output, "Invalid grade! Keeping the current value.")?;
                Ok(current)
            }
        }
    }

    fn modify_flag(&mut self, label: &str, current: bool) -> PayrollResult<bool> {
        let shown = if current { 'Y' } else { 'N' };
        let line = self.prompt(&format!("{} [{}]: ", label, shown))?;
        if line.trim().is_empty() {
            return Ok(current);
        }
        match single_char(&line).and_then(|c| parse_yes_no(c.encode_utf8(&mut [0; 4]))) {
            Some(flag) => Ok(flag),
            None => {
                writeln!(self.output, "Please enter Y or N. Keeping the current value.")?;
                Ok(current)
            }
        }
    }

    fn modify_amount(&mut self, label: &str, field: &str, current: f32) -> PayrollResult<f32> {
        let line = self.prompt(&format!("{} [{:.2}]: ", label, current))?;
        if line.trim().is_empty() {
            return Ok(current);
        }
        match parse_amount(field, &line) {
            Ok(amount) => Ok(amount),
            Err(e) => {
                writeln!(self.output, "{}. Keeping the current value.", e)?;
                Ok(current)
            }
        }
    }
}
