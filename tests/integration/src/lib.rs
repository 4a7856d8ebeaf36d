//! Integration test utilities for the channel model
//!
//! Provides platform payload fixtures and helpers for decoding them
//! end to end through `chat-core`.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
