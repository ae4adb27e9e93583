use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes tracing with a console layer and a daily-rotated JSON log
/// file under `logs/`. RUST_LOG overrides the default crate-level filter.
pub fn init_logging() {
    let _ = std::fs::create_dir_all("logs");

    let file_appender = tracing_appender::rolling::daily("logs", "gateway.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::from_default_env()
        .add_directive("tiktok_gateway=info".parse().expect("valid directive"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_writer(file_writer))
        .with(fmt::layer().with_writer(std::io::stdout))
        .init();

    // The writer guard must outlive the process or buffered logs are dropped
    std::mem::forget(guard);
}
