//! Observability for AdStudio: subscriber setup with optional OpenTelemetry
//! export, plus the attribute names recorded on designer spans.

pub mod attrs;
pub mod tracing_setup;
