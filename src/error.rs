use reqwest::StatusCode;
use thiserror::Error;

/// Prefix put in front of every failed DeepSeek exchange shown to users.
pub const CALL_FAILED_PREFIX: &str = "DeepSeek call failed: ";

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Serenity error: {0}")]
    Serenity(Box<poise::serenity_prelude::Error>),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Invalid tool arguments: {0}")]
    ToolArguments(#[from] serde_json::Error),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

impl From<poise::serenity_prelude::Error> for BotError {
    fn from(err: poise::serenity_prelude::Error) -> Self {
        BotError::Serenity(Box::new(err))
    }
}

impl BotError {
    /// Returns a user-friendly error message suitable for displaying in Discord
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            BotError::Serenity(_) => {
                "Sorry, I'm having trouble communicating with Discord right now. Please try again later.".to_string()
            }
            BotError::EnvVar(_) => {
                "Sorry, there's a configuration issue on my end. Please contact the bot administrator.".to_string()
            }
            BotError::ToolArguments(_) | BotError::UnknownTool(_) => {
                "Sorry, that tool call could not be understood.".to_string()
            }
        }
    }
}

/// Failure of a single DeepSeek exchange.
///
/// The display form is the underlying failure description;
/// [`CallError::user_message`] adds the fixed failure prefix.
#[derive(Error, Debug)]
pub enum CallError {
    #[error("request timed out: {0}")]
    Timeout(reqwest::Error),

    #[error("HTTP request error: {0}")]
    Http(reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("unexpected response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for CallError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CallError::Timeout(err)
        } else if err.is_decode() {
            CallError::MalformedResponse(err.to_string())
        } else {
            CallError::Http(err)
        }
    }
}

impl CallError {
    /// Message shown in place of an answer when the exchange failed.
    #[must_use]
    pub fn user_message(&self) -> String {
        format!("{CALL_FAILED_PREFIX}{self}")
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
