use tbl::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Installs the stderr logger with UTC timestamps, matching transaction times.
/// `RUST_LOG` overrides the default `warn` level.
pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .with_utc_timestamps()
        .env()
        .init()?;

    return Ok(());
}
