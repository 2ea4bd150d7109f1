//! Tracing export.
//!
//! ```text
//! tracing → EnvFilter → tracing-opentelemetry → TracerProvider → OTLP/JSON lines
//! ```
//!
//! Spans go to `~/.local/share/zellij/holocron/holocron-otlp.json` (inside the
//! sandbox, under `/host`). The file rolls over at 10 MiB and the three newest
//! rolled files are kept.

pub(crate) mod exporter;
mod init;
mod otlp;
mod rotation;

pub use init::init_tracing;
