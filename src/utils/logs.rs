use std::str::FromStr;
use crate::core::domain::{Configuration, OutputFormat};
use crate::core::library::{LibraryError, LibraryResult};

// Installs the global subscriber. Log lines go to stderr so they never
// interleave with the menu on stdout.
pub fn setup_tracing(config: &Configuration) -> LibraryResult<()> {
    let level = tracing::Level::from_str(config.log_level.as_str()).map_err(|err| {
        LibraryError::validation(format!("unknown log level {:?}: {}", config.log_level, err).as_str(), None)
    })?;
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        // disable printing the name of the module in every log line.
        .with_target(false);
    let res = match config.log_format {
        OutputFormat::Text => builder.try_init(),
        OutputFormat::Json => builder.with_ansi(false).json().try_init(),
    };
    res.map_err(|err| LibraryError::runtime(format!("tracing setup {}", err).as_str(), None))
}
