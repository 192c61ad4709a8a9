pub mod config;
pub use self::config::*;

use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

/// Installs the global subscriber. Fails when one is already set.
pub fn initialize_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    if !config.enable {
        return Ok(());
    }
    let console = config.console.enable.then(|| {
        let debug = config.console.enable_debug_logging;
        tracing_subscriber::fmt::layer()
            .with_file(debug)
            .with_line_number(debug)
            .with_thread_ids(debug)
            .with_target(debug)
            .with_filter(config.console.filter.env_filter())
    });
    let file = config.file.enable.then(|| {
        let debug = config.file.enable_debug_logging;
        let appender = RollingFileAppender::new(
            config.file.rolling_time.clone().into(),
            &config.file.path,
            &config.file.prefix,
        );
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(appender)
            .with_file(debug)
            .with_line_number(debug)
            .with_thread_ids(debug)
            .with_target(debug)
            .with_filter(config.file.filter.env_filter())
    });
    Registry::default()
        .with(config.filter.env_filter())
        .with(console)
        .with(file)
        .try_init()?;
    Ok(())
}
