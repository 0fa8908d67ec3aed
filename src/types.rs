//! Common types used throughout the deepseekbot plugin.

use poise::serenity_prelude::{ChannelId, GuildId};
use serde::{Deserialize, Serialize};

/// Role of a message in a chat completions request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message from the human user
    User,
    /// Message from the AI assistant
    Assistant,
    /// System prompt or instructions
    System,
}

/// Where an entry point was invoked from.
///
/// Carried through to the plugin for logging; the DeepSeek call itself does
/// not depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation {
    pub channel_id: ChannelId,
    pub guild_id: Option<GuildId>,
}

impl Invocation {
    pub fn new(channel_id: ChannelId, guild_id: Option<GuildId>) -> Self {
        Self {
            channel_id,
            guild_id,
        }
    }
}
