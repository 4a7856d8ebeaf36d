//! Channel entity and the platform's channel type table

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value_objects::Snowflake;

/// Channel type as encoded by the platform's wire protocol
///
/// The set is closed. Ids the library does not recognise decode to
/// [`ChannelType::Unknown`] instead of failing, so new platform channel
/// types never break a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ChannelType {
    /// Guild text channel
    Text = 0,
    /// Direct message between two users
    Private = 1,
    /// Guild voice channel
    Voice = 2,
    /// Group direct message
    Group = 3,
    /// Guild category for organizing channels
    Category = 4,
    /// Sentinel for ids this library does not know about. Never sent by the platform.
    Unknown = -1,
}

impl ChannelType {
    /// Every variant, in declaration order
    pub const ALL: [ChannelType; 6] = [
        Self::Text,
        Self::Private,
        Self::Voice,
        Self::Group,
        Self::Category,
        Self::Unknown,
    ];

    /// Announcement channels. Decoded as [`ChannelType::Text`].
    pub const NEWS_ALIAS_ID: i32 = 5;

    /// Get the wire id
    #[inline]
    #[must_use]
    pub const fn id(self) -> i32 {
        self as i32
    }

    /// Whether channels of this type only exist inside a guild
    #[inline]
    #[must_use]
    pub const fn is_guild(self) -> bool {
        matches!(self, Self::Text | Self::Voice | Self::Category)
    }

    /// Whether this is a real platform type rather than the sentinel
    #[inline]
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Resolve a wire id. Unrecognised ids map to [`ChannelType::Unknown`].
    #[must_use]
    pub const fn from_id(id: i32) -> Self {
        match id {
            0 | Self::NEWS_ALIAS_ID => Self::Text,
            1 => Self::Private,
            2 => Self::Voice,
            3 => Self::Group,
            4 => Self::Category,
            _ => Self::Unknown,
        }
    }

    /// Get the symbolic name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Private => "PRIVATE",
            Self::Voice => "VOICE",
            Self::Group => "GROUP",
            Self::Category => "CATEGORY",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl From<i32> for ChannelType {
    fn from(id: i32) -> Self {
        Self::from_id(id)
    }
}

impl From<ChannelType> for i32 {
    fn from(ct: ChannelType) -> Self {
        ct.id()
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.id())
    }
}

/// Error when parsing a channel type from its symbolic name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChannelTypeParseError {
    #[error("unknown channel type name: {0}")]
    UnknownName(String),
}

impl FromStr for ChannelType {
    type Err = ChannelTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ct| ct.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChannelTypeParseError::UnknownName(s.to_string()))
    }
}

impl Serialize for ChannelType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i32(self.id())
    }
}

/// Decodes any `i32` through [`ChannelType::from_id`]; ids outside the `i32` range are a decode error.
impl<'de> Deserialize<'de> for ChannelType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = i32::deserialize(deserializer)?;
        let channel_type = Self::from_id(id);

        if id == Self::NEWS_ALIAS_ID {
            tracing::debug!(id, "news channel type decoded as text");
        } else if !channel_type.is_known() {
            tracing::debug!(id, "unrecognised channel type");
        }

        Ok(channel_type)
    }
}

/// Channel object as delivered by the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub channel_type: ChannelType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default)]
    pub position: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Snowflake>,
}

impl Channel {
    /// Create a bare channel of the given type
    #[must_use]
    pub fn new(id: Snowflake, channel_type: ChannelType) -> Self {
        Self {
            id,
            channel_type,
            guild_id: None,
            name: None,
            topic: None,
            position: 0,
            parent_id: None,
        }
    }

    /// Create a guild channel with a name
    #[must_use]
    pub fn new_in_guild(
        id: Snowflake,
        guild_id: Snowflake,
        channel_type: ChannelType,
        name: String,
    ) -> Self {
        Self {
            guild_id: Some(guild_id),
            name: Some(name),
            ..Self::new(id, channel_type)
        }
    }

    /// Decode a JSON array of channel objects
    pub fn decode_list(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        let channels: Vec<Self> = serde_json::from_str(json)?;
        tracing::trace!(count = channels.len(), "decoded channel list");
        Ok(channels)
    }

    /// Check if this channel can carry text messages
    #[inline]
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(
            self.channel_type,
            ChannelType::Text | ChannelType::Private | ChannelType::Group
        )
    }

    #[inline]
    #[must_use]
    pub fn is_voice(&self) -> bool {
        matches!(self.channel_type, ChannelType::Voice)
    }

    #[inline]
    #[must_use]
    pub fn is_category(&self) -> bool {
        matches!(self.channel_type, ChannelType::Category)
    }

    /// Check if this is a one-to-one or group DM
    #[inline]
    #[must_use]
    pub fn is_private(&self) -> bool {
        matches!(self.channel_type, ChannelType::Private | ChannelType::Group)
    }

    #[inline]
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        !self.channel_type.is_known()
    }

    /// Check if this channel lives in a guild
    #[inline]
    #[must_use]
    pub fn is_guild_channel(&self) -> bool {
        self.channel_type.is_guild()
    }

    /// Get display name (channel name or fallback for DMs)
    #[must_use]
    pub fn display_name(&self) -> &str {
        match (&self.name, self.is_private()) {
            (Some(name), _) => name,
            (None, true) => "Direct Message",
            (None, false) => "",
        }
    }
}
