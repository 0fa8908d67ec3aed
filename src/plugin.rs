//! Framework-independent behavior of the DeepSeek entry points.

use log::{info, warn};

use crate::deepseek::DeepSeekClient;
use crate::error::CallError;
use crate::types::Invocation;

/// Reply to the command and mention entry points when no key is set.
pub const MISSING_KEY_MESSAGE: &str =
    "Please configure the DEEPSEEK_API_KEY environment variable first.";

/// Reply to the tool entry point when no key is set.
pub const TOOL_MISSING_KEY_MESSAGE: &str = "DeepSeek API key is not configured.";

/// Interim reply shown while a command waits on DeepSeek.
pub const QUERYING_MESSAGE: &str = "Querying DeepSeek...";

/// Label put before answers returned to an orchestrating agent.
pub const TOOL_ANSWER_LABEL: &str = "DeepSeek answer:\n";

// Discord rejects longer messages for standard users
const DISCORD_MESSAGE_LIMIT: usize = 2000;

/// Outcome of one exchange as seen by an entry point.
#[derive(Debug)]
pub enum Reply {
    /// No API key, nothing was sent.
    Unconfigured,
    Answer(String),
    Failed(CallError),
}

impl Reply {
    /// Text for the user, using `missing_key` for the unconfigured case.
    #[must_use]
    pub fn into_text(self, missing_key: &str) -> String {
        match self {
            Reply::Unconfigured => missing_key.to_string(),
            Reply::Answer(text) => text,
            Reply::Failed(e) => e.user_message(),
        }
    }
}

/// The DeepSeek plugin: an optional client shared by all entry points.
#[derive(Debug, Clone, Default)]
pub struct DeepSeekPlugin {
    client: Option<DeepSeekClient>,
}

impl DeepSeekPlugin {
    /// Builds the plugin from the configured key, if any.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: api_key.map(DeepSeekClient::new),
        }
    }

    pub fn with_client(client: DeepSeekClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Run one exchange, short-circuiting when no key is configured.
    pub async fn ask(&self, prompt: &str, temperature: f64, invocation: &Invocation) -> Reply {
        let Some(client) = &self.client else {
            info!(
                "Refusing DeepSeek request in channel {}: no API key configured",
                invocation.channel_id
            );
            return Reply::Unconfigured;
        };

        match client.ask(prompt, temperature).await {
            Ok(answer) => {
                info!(
                    "DeepSeek answered in channel {} ({} characters)",
                    invocation.channel_id,
                    answer.len()
                );
                Reply::Answer(answer)
            }
            Err(e) => {
                warn!(
                    "DeepSeek call from channel {} failed: {e}",
                    invocation.channel_id
                );
                Reply::Failed(e)
            }
        }
    }

    /// Text returned by the `deepseek_query` tool.
    pub async fn tool_answer(
        &self,
        question: &str,
        temperature: f64,
        invocation: &Invocation,
    ) -> String {
        match self.ask(question, temperature, invocation).await {
            Reply::Unconfigured => TOOL_MISSING_KEY_MESSAGE.to_string(),
            reply => format!("{TOOL_ANSWER_LABEL}{}", reply.into_text(TOOL_MISSING_KEY_MESSAGE)),
        }
    }
}

/// Cut `text` to Discord's message limit on a character boundary.
#[must_use]
pub fn fit_discord_message(text: &str) -> String {
    match text.char_indices().nth(DISCORD_MESSAGE_LIMIT) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text.to_string(),
    }
}
