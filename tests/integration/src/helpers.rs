//! Test helpers for integration tests

use anyhow::{Context, Result};
use chat_common::{try_init_tracing_with_config, TracingConfig};
use chat_core::{Channel, ChannelType};

/// Install a debug-level subscriber once per test binary
pub fn init_test_tracing() {
    // Another test may have installed it already
    let _ = try_init_tracing_with_config(TracingConfig::development());
}

/// Decode a fixture list, attaching the fixture name to any error
pub fn decode_fixture(name: &str, json: &str) -> Result<Vec<Channel>> {
    Channel::decode_list(json).with_context(|| format!("decoding fixture {name}"))
}

/// Count channels of a given type
pub fn count_of(channels: &[Channel], channel_type: ChannelType) -> usize {
    channels
        .iter()
        .filter(|c| c.channel_type == channel_type)
        .count()
}
