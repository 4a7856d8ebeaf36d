//! Test fixtures
//!
//! Channel payloads shaped like what the platform sends in guild and DM events.

/// Channels of a guild, including an announcement channel (type 5)
/// and a stage channel (type 13) this library has no variant for
pub const GUILD_CHANNELS: &str = r#"[
    {
        "id": "399942396007890945",
        "type": 4,
        "guild_id": "290926798626357999",
        "name": "Text Channels",
        "position": 0
    },
    {
        "id": "41771983423143937",
        "type": 0,
        "guild_id": "290926798626357999",
        "name": "general",
        "topic": "24/7 chat about how to gank Mike #2",
        "position": 1,
        "parent_id": "399942396007890945"
    },
    {
        "id": "41771983423143938",
        "type": 5,
        "guild_id": "290926798626357999",
        "name": "announcements",
        "position": 2,
        "parent_id": "399942396007890945"
    },
    {
        "id": "155101607195836416",
        "type": 2,
        "guild_id": "290926798626357999",
        "name": "ROCKET CHEESE",
        "position": 5
    },
    {
        "id": "155101607195836417",
        "type": 13,
        "guild_id": "290926798626357999",
        "name": "Town Hall",
        "position": 6
    }
]"#;

/// Private and group DM channels, which carry no guild id and often no name
pub const DM_CHANNELS: &str = r#"[
    {
        "id": "319674150115610528",
        "type": 1
    },
    {
        "id": "319674150115710529",
        "type": 3,
        "name": "Some test channel"
    }
]"#;

/// A channel whose type field is not a number
pub const MALFORMED_CHANNEL: &str = r#"{ "id": "1", "type": "GUILD_TEXT" }"#;
