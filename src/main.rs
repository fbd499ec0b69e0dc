use std::io;
use std::process::ExitCode;

use payroll_manager::config::ConfigLoader;
use payroll_manager::console::{AppState, Console};
use payroll_manager::error::PayrollResult;
use payroll_manager::logging;
use tracing::error;

const CONFIG_FILE: &str = "payroll.yaml";

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Payroll manager stopped");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> PayrollResult<()> {
    let config = ConfigLoader::load_or_default(CONFIG_FILE)?;
    let state = AppState::new(&config);
    let stdin = io::stdin();
    let mut console = Console::new(state, stdin.lock(), io::stdout());
    console.run()
}
