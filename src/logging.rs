use crate::config::Config;
use crate::constants::APP_NAME;
use crate::errors::ChatResult;
use flexi_logger::{detailed_format, FileSpec, Logger, LoggerHandle};

/// Starts the file logger. The terminal belongs to the UI, so nothing is
/// written to stdout/stderr. `RUST_LOG` wins over the configured level.
///
/// Keep the returned handle alive for the lifetime of the program.
pub fn init_logging(config: &Config) -> ChatResult<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(&config.log_level)?
        .log_to_file(
            FileSpec::default()
                .directory(config.log_directory())
                .basename(APP_NAME),
        )
        .format(detailed_format)
        .start()?;

    log::info!(
        "{} {} starting (language: {})",
        APP_NAME,
        env!("CARGO_PKG_VERSION"),
        config.language
    );
    Ok(handle)
}
