use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_ENV: &str = "SASGEN_LOG";
const LOG_FILE: &str = "sasgen.log";

/// Initialize tracing with a file appender so log output never touches the
/// terminal the TUI is drawing on. The returned guard must stay alive for
/// the duration of the process or buffered lines are lost.
pub fn init() -> anyhow::Result<WorkerGuard> {
    let appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false);
    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
    Ok(guard)
}
