use std::fs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LogConfig;

/// Initializes the logging system with both console and file output. The file
/// appender rotates daily under the configured log directory.
pub fn init_logging(config: &LogConfig) {
    // Ensure the log directory exists
    let _ = fs::create_dir_all(&config.dir);

    let file_appender = tracing_appender::rolling::daily(&config.dir, &config.file);
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer().with_ansi(false).with_writer(non_blocking_writer);
    let console_layer = fmt::layer().with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "valor_etl=info,tower_http=info".into()),
        )
        .with(file_layer)
        .with(console_layer)
        .init();

    // The guard must outlive the process so buffered lines are flushed on exit
    std::mem::forget(guard);
}
