//! Poise commands for asking DeepSeek directly.

use log::info;
use poise::CreateReply;

use crate::bot::Data;
use crate::deepseek::DEFAULT_TEMPERATURE;
use crate::error::{BotError, Result};
use crate::plugin::{MISSING_KEY_MESSAGE, QUERYING_MESSAGE, fit_discord_message};
use crate::types::Invocation;

/// Context type for DeepSeek commands.
type Context<'a> = poise::Context<'a, Data, BotError>;

/// Ask DeepSeek a question.
#[poise::command(slash_command, prefix_command)]
pub async fn deepseek(
    ctx: Context<'_>,
    #[description = "Question for DeepSeek"]
    #[rest]
    prompt: String,
) -> Result<()> {
    let plugin = ctx.data().plugin();
    if !plugin.is_configured() {
        ctx.say(MISSING_KEY_MESSAGE).await?;
        return Ok(());
    }

    info!(
        "DeepSeek command from {} in channel {}",
        ctx.author().tag(),
        ctx.channel_id()
    );

    let pending = ctx.say(QUERYING_MESSAGE).await?;

    let invocation = Invocation::new(ctx.channel_id(), ctx.guild_id());
    let text = plugin
        .ask(&prompt, DEFAULT_TEMPERATURE, &invocation)
        .await
        .into_text(MISSING_KEY_MESSAGE);

    pending
        .edit(
            ctx,
            CreateReply::default().content(fit_discord_message(&text)),
        )
        .await?;
    Ok(())
}

/// Get available DeepSeek commands.
#[must_use]
pub fn deepseek_commands() -> Vec<poise::Command<Data, BotError>> {
    vec![deepseek()]
}
