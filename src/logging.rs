use std::path::Path;

use flexi_logger::{
    colored_default_format, opt_format, Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger,
    LoggerHandle, Naming,
};

const ROTATE_AFTER_BYTES: u64 = 10 * 1024 * 1024;
const KEEP_LOG_FILES: usize = 7;

/// Starts the global logger. `RUST_LOG` overrides `level`.
///
/// Without `log_dir` logs go to stderr in color; with it they go to rotating
/// numbered files in that directory. Keep the returned handle alive for the
/// lifetime of the process.
pub fn setup_logging(level: &str, log_dir: Option<&Path>) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(level)?;

    match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir))
            .format(opt_format)
            .rotate(
                Criterion::Size(ROTATE_AFTER_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(KEEP_LOG_FILES),
            )
            .start(),
        None => logger.format(colored_default_format).start(),
    }
}
