//! # chat-core
//!
//! Domain types for the platform's channel model: the channel type table,
//! the channel object that carries it, and Snowflake ids.
//! This crate has no dependencies on transport or runtime infrastructure.

pub mod entities;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Channel, ChannelType, ChannelTypeParseError};
pub use value_objects::{Snowflake, SnowflakeParseError};
