//! # chat-common
//!
//! Shared infrastructure for consumers of `chat-core`: tracing subscriber setup.

pub mod telemetry;

pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
