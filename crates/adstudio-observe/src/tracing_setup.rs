//! Logging for the `adstudio` binary.
//!
//! Log lines go to stderr so they never mix with the chat, tables, or JSON
//! on stdout. `--otel` additionally exports the designer session spans
//! (with their `adstudio.*` attributes) through the OpenTelemetry stdout
//! exporter.
//!
//! ```no_run
//! adstudio_observe::tracing_setup::init_tracing("warn", false).unwrap();
//! // ... run a command ...
//! adstudio_observe::tracing_setup::shutdown_tracing();
//! ```

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use std::sync::OnceLock;

/// Set once `--otel` is on; flushed by `shutdown_tracing`.
static TRACER_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

/// `RUST_LOG` when set, otherwise the level picked from `-v`/`--quiet`.
fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Span events worth printing: close timings only matter when spans are
/// being exported too.
fn span_events(enable_otel: bool) -> FmtSpan {
    if enable_otel {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    }
}

/// Install the global subscriber for one CLI run.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(default_filter: &str, enable_otel: bool) -> Result<(), TryInitError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(enable_otel)
        .with_span_events(span_events(enable_otel));

    let otel_layer = enable_otel.then(|| {
        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
            .build();
        let tracer = provider.tracer("adstudio");
        let _ = TRACER_PROVIDER.set(provider.clone());
        opentelemetry::global::set_tracer_provider(provider);
        tracing_opentelemetry::layer().with_tracer(tracer)
    });

    tracing_subscriber::registry()
        .with(env_filter(default_filter))
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()
}

/// Export any spans still buffered before the process exits.
pub fn shutdown_tracing() {
    let Some(provider) = TRACER_PROVIDER.get() else {
        return;
    };
    if let Err(e) = provider.shutdown() {
        eprintln!("adstudio: could not flush trace spans on exit: {e}");
    }
}
