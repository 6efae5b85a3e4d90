//! Tracing subscriber setup.
//!
//! The filter comes from `RUST_LOG` when set, otherwise from
//! `LoggingConfig.level` (e.g. `"info"` or `"warn,kyc_core=debug"`).

use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use kyc_shared::{LogFormat, LoggingConfig};

/// Install the global subscriber.
///
/// Returns `false` when a global subscriber was already installed; the
/// existing one is kept.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let installed = tracing_subscriber::registry()
        .with(build_filter(&config.level))
        .with(format_layer(config, std::io::stdout))
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level = %config.level, format = ?config.format, "Tracing initialized");
    }
    installed
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

fn format_layer<S, W>(config: &LoggingConfig, writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let location = config.source_location;
    match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_file(location)
            .with_line_number(location)
            .with_writer(writer)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_file(location)
            .with_line_number(location)
            .with_writer(writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_file(location)
            .with_line_number(location)
            .with_writer(writer)
            .boxed(),
    }
}
