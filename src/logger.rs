use crate::config::Config;
use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::{
        EnvFilter,
        LevelFilter,
    },
    layer::SubscriberExt,
    Layer,
};

const LOG_FILE_NAME: &str = "tic-tac-toe.log";

/// Try to setup a logger.
///
/// Everything that passes the configured filter goes to the log file.
/// Only warnings and errors go to the stderr, so they don't bury the board.
///
/// The returned guard flushes the log file when dropped.
pub fn setup(config: &Config) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(config.log_file_dir()).with_context(|| {
        format!(
            "failed to create log file dir `{}`",
            config.log_file_dir()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(config.log_file_dir(), LOG_FILE_NAME);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(config.log_level()).context("invalid log level")?;
    let stderr_formatting_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(LevelFilter::WARN);
    let file_formatting_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(file_writer);

    let subscriber = tracing_subscriber::Registry::default()
        .with(env_filter)
        .with(file_formatting_layer)
        .with(stderr_formatting_layer);

    tracing::subscriber::set_global_default(subscriber).context("failed to set subscriber")?;

    Ok(guard)
}
