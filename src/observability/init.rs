//! Subscriber setup.

use super::exporter::file_tracer_provider;
use crate::infrastructure::paths::data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");
const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber: an [`EnvFilter`] at the configured level
/// feeding an OpenTelemetry layer that exports to
/// `<data dir>/holocron-otlp.json`.
///
/// Returns `false` if tracing could not be set up. Tracing is optional, so
/// the plugin carries on either way.
pub fn init_tracing(config: &Config) -> bool {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let dir = data_dir();
    if std::fs::create_dir_all(&dir).is_err() {
        return false;
    }

    let resource = Resource::new([
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = file_tracer_provider(dir.join(format!("{SERVICE_NAME}-otlp.json")), resource, SERVICE_NAME);

    tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)))
        .try_init()
        .is_ok()
}
