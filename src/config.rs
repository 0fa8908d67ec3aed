use std::env;

use log::{debug, error, info, warn};

use crate::error::Result;

const DEFAULT_PREFIX: &str = "!";

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub deepseek_api_key: Option<String>,
    pub prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment");
        dotenvy::dotenv().ok();

        let discord_token = env::var("DISCORD_TOKEN").map_err(|e| {
            error!("Failed to load DISCORD_TOKEN from environment: {e}");
            e
        })?;

        let deepseek_api_key = normalize_api_key(env::var("DEEPSEEK_API_KEY").ok());
        if deepseek_api_key.is_none() {
            warn!("DEEPSEEK_API_KEY is not set, DeepSeek requests will be refused");
        }

        let prefix = env::var("BOT_PREFIX")
            .ok()
            .filter(|prefix| !prefix.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PREFIX.to_string());

        info!("Configuration loaded successfully");
        debug!("Discord token length: {} characters", discord_token.len());
        if let Some(ref key) = deepseek_api_key {
            debug!("DeepSeek API key length: {} characters", key.len());
        }
        debug!("Command prefix: {prefix}");

        Ok(Self {
            discord_token,
            deepseek_api_key,
            prefix,
        })
    }
}

/// Blank keys count as missing.
fn normalize_api_key(raw: Option<String>) -> Option<String> {
    raw.map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_stays_missing() {
        assert_eq!(normalize_api_key(None), None);
    }

    #[test]
    fn blank_key_is_treated_as_missing() {
        assert_eq!(normalize_api_key(Some("   ".to_string())), None);
        assert_eq!(normalize_api_key(Some(String::new())), None);
    }

    #[test]
    fn key_is_trimmed() {
        assert_eq!(
            normalize_api_key(Some(" sk-test\n".to_string())),
            Some("sk-test".to_string())
        );
    }
}
