//! Interactive operator console.
//!
//! The console drives the record workflows (add, display, list, salary
//! slip, delete, modify) over any buffered reader and writer, so the same
//! code serves the terminal and scripted tests.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use payroll_manager::config::ConfigLoader;
//! use payroll_manager::console::{AppState, Console};
//!
//! let state = AppState::new(&ConfigLoader::default());
//! let mut console = Console::new(state, Cursor::new("0\n"), Vec::new());
//! console.run().unwrap();
//! ```

mod input;
pub mod render;
mod state;
mod workflows;

pub use input::{
    parse_amount, parse_days_worked, parse_grade, parse_number, parse_overtime_hours,
    parse_yes_no, single_char,
};
pub use state::AppState;
pub use workflows::Console;
