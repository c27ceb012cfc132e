use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Directory for daily log files, file logging is off when unset.
pub const LOG_DIR_ENV: &str = "HTMLRENDER_LOG_DIR";

/// Install the global subscriber. Logs go to stderr so rendered text on
/// stdout is not interleaved with them. Keep the returned guard alive until
/// exit or buffered file logs are lost.
pub fn setup_logging(debug: bool) -> Option<WorkerGuard> {
    use tracing_appender::{
        non_blocking,
        rolling::{RollingFileAppender, Rotation},
    };
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let (file_layer, guard) = match std::env::var_os(LOG_DIR_ENV) {
        Some(log_path) => {
            let file_appender = RollingFileAppender::new(
                Rotation::DAILY,
                log_path,
                format!("htmlrender-{}.log", env!("CARGO_PKG_VERSION")),
            );
            let (non_blocking_writer, guard) = non_blocking(file_appender);

            let file_layer = fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking_writer);

            (Some(file_layer), Some(guard))
        }
        None => (None, None),
    };

    let console_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    let level = if debug { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("htmlrender={level},html_wrap={level}")));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(env_filter)
        .init();

    guard
}
