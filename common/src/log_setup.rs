use std::path::Path;

use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming,
};

/// Starts the process-wide logger.
///
/// `base_level` is a flexi_logger spec string such as `"info"` or `"passepartout=debug"`.
/// With `log_dir` set, records go to rotated files in that directory and warnings are
/// duplicated to stderr. Without it, everything goes to stderr.
///
/// The returned handle must be kept alive until the program exits.
pub fn setup_logging(
    base_level: &str,
    log_dir: Option<&Path>,
) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_str(base_level)?;

    let logger = match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir).basename("passepartout"))
            .duplicate_to_stderr(Duplicate::Warn)
            .rotate(
                Criterion::Size(1024 * 1024), //1MB
                Naming::Timestamps,
                Cleanup::KeepLogFiles(5),
            ),
        None => logger.log_to_stderr(),
    };

    logger.start()
}
