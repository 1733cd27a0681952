use std::path::Path;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};

const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Start file logging under `<data-dir>/logs`. The TUI owns the
/// terminal, so nothing may log to stdout/stderr while it runs.
///
/// Returns None when the logger can't start (unwritable directory, bad
/// level); the app keeps working without logs. The returned handle must
/// stay alive for the duration of the process.
pub fn init(data_dir: &Path, level: &str) -> Option<LoggerHandle> {
    let log_dir = data_dir.join("logs");
    Logger::try_with_str(level)
        .ok()?
        .log_to_file(FileSpec::default().directory(log_dir).basename("tick"))
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .start()
        .ok()
}
