//! Discord bot wiring: framework setup, command registration and event dispatch.

use log::{debug, error, info};
use poise::{
    Framework, FrameworkError, FrameworkOptions, PrefixFrameworkOptions, builtins,
    serenity_prelude::{ClientBuilder, Context, FullEvent, GatewayIntents},
};

use crate::commands::deepseek_commands;
use crate::config::Config;
use crate::error::{BotError, Result};
use crate::mention::handle_bot_mention;
use crate::plugin::DeepSeekPlugin;
use crate::tools::ToolRegistry;

/// Shared state handed to every command and event.
pub struct Data {
    plugin: DeepSeekPlugin,
    tools: ToolRegistry,
}

impl Data {
    pub fn new(plugin: DeepSeekPlugin, tools: ToolRegistry) -> Self {
        Self { plugin, tools }
    }

    pub fn plugin(&self) -> &DeepSeekPlugin {
        &self.plugin
    }

    /// Tools available to an orchestrating agent.
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }
}

/// Run the Discord bot.
pub async fn run() -> Result<()> {
    info!("Initializing bot");
    let config = Config::from_env()?;

    let plugin = DeepSeekPlugin::new(config.deepseek_api_key);
    let tools = ToolRegistry::new();
    info!("Registered tools: {}", tools.names().join(", "));

    debug!("Setting up gateway intents");
    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;

    debug!("Building framework");
    let framework = Framework::builder()
        .options(FrameworkOptions {
            commands: deepseek_commands(),
            prefix_options: PrefixFrameworkOptions {
                prefix: Some(config.prefix),
                mention_as_prefix: false,
                ..Default::default()
            },
            on_error: |error| Box::pin(on_error(error)),
            event_handler: |ctx, event, _framework, data| Box::pin(event_handler(ctx, event, data)),
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                info!("Bot is ready and connected to Discord");
                debug!("Registering commands globally");
                builtins::register_globally(ctx, &framework.options().commands).await?;
                info!("Commands registered successfully");
                Ok(Data::new(plugin, tools))
            })
        })
        .build();

    debug!("Creating Discord client");
    let mut client = ClientBuilder::new(config.discord_token, intents)
        .framework(framework)
        .await?;

    info!("Starting Discord client");

    tokio::select! {
        result = client.start() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received, shutting down...");
        }
    }

    Ok(())
}

async fn event_handler(ctx: &Context, event: &FullEvent, data: &Data) -> Result<()> {
    if let FullEvent::Message { new_message } = event {
        let bot_user_id = ctx.cache.current_user().id;
        if new_message.author.id != bot_user_id {
            handle_bot_mention(ctx, new_message, data, bot_user_id).await?;
        }
    }
    Ok(())
}

async fn on_error(error: FrameworkError<'_, Data, BotError>) {
    match error {
        FrameworkError::Command { error, ctx, .. } => {
            error!("Command '{}' failed: {error}", ctx.command().name);
            if let Err(e) = ctx.say(error.user_message()).await {
                error!("Failed to report command error: {e}");
            }
        }
        other => {
            if let Err(e) = builtins::on_error(other).await {
                error!("Error while handling framework error: {e}");
            }
        }
    }
}
