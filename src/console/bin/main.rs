use std::io;
use tracing::info;
use lms_console::console::driver::run;
use lms_console::core::domain::Configuration;
use lms_console::core::library::LibraryError;
use lms_console::library::factory::create_library_system;
use lms_console::utils::logs::setup_tracing;

// Interactive catalog on stdin/stdout, configured from LMS_* variables.
fn main() -> Result<(), LibraryError> {
    let config = Configuration::from_env()?;
    setup_tracing(&config)?;

    let mut system = create_library_system(&config)?;
    info!("starting console for branch {}", system.branch_id());

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut system, config.output, stdin.lock(), stdout.lock())
}
