//! Automatic DeepSeek replies to messages that mention the bot.

use log::{debug, info};
use poise::serenity_prelude::{Context, Mentionable, Message as SerenityMessage, UserId};

use crate::bot::Data;
use crate::deepseek::DEFAULT_TEMPERATURE;
use crate::error::Result;
use crate::plugin::{DeepSeekPlugin, MISSING_KEY_MESSAGE, fit_discord_message};
use crate::types::Invocation;

/// Message text with the bot's own mention tokens removed and trimmed.
///
/// Returns `None` when nothing but whitespace is left.
pub fn extract_question(content: &str, bot_user_id: UserId) -> Option<String> {
    let question = content
        .replace(&format!("<@{bot_user_id}>"), "")
        .replace(&format!("<@!{bot_user_id}>"), "");
    let question = question.trim();

    if question.is_empty() {
        None
    } else {
        Some(question.to_string())
    }
}

/// Build the reply for a mention, or `None` when there is nothing to ask.
pub async fn respond(
    plugin: &DeepSeekPlugin,
    content: &str,
    bot_user_id: UserId,
    sender: UserId,
    invocation: &Invocation,
) -> Option<String> {
    let Some(question) = extract_question(content, bot_user_id) else {
        debug!("Ignoring mention from {sender} with no question");
        return None;
    };

    let body = plugin
        .ask(&question, DEFAULT_TEMPERATURE, invocation)
        .await
        .into_text(MISSING_KEY_MESSAGE);

    Some(fit_discord_message(&format!("{}\n{body}", sender.mention())))
}

/// Handler for messages that mention the bot.
pub async fn handle_bot_mention(
    ctx: &Context,
    new_message: &SerenityMessage,
    data: &Data,
    bot_user_id: UserId,
) -> Result<()> {
    if new_message.author.bot || !new_message.mentions_user_id(bot_user_id) {
        return Ok(());
    }

    info!(
        "Received mention from {} in channel {}",
        new_message.author.tag(),
        new_message.channel_id
    );

    if let Err(e) = new_message.channel_id.broadcast_typing(&ctx.http).await {
        debug!("Failed to broadcast typing indicator: {e}");
    }

    let invocation = Invocation::new(new_message.channel_id, new_message.guild_id);
    let Some(reply) = respond(
        data.plugin(),
        &new_message.content,
        bot_user_id,
        new_message.author.id,
        &invocation,
    )
    .await
    else {
        return Ok(());
    };

    new_message.channel_id.say(&ctx.http, &reply).await?;
    info!(
        "Replied to {} in channel {}",
        new_message.author.tag(),
        new_message.channel_id
    );

    Ok(())
}
