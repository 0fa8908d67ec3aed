//! HTTP client for the DeepSeek chat completions API.

use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::CallError;
use crate::types::MessageRole;

const DEEPSEEK_API_URL: &str = "https://api.deepseek.com/v1/chat/completions";
const DEEPSEEK_MODEL: &str = "deepseek-chat";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Temperature used when the caller does not pick one.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'static str,
    messages: Vec<RequestMessage<'a>>,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct RequestMessage<'a> {
    role: MessageRole,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Client for single-shot DeepSeek questions.
///
/// Every call to [`DeepSeekClient::ask`] is an independent exchange: the
/// request body is built fresh, nothing is cached and nothing is retried.
#[derive(Debug, Clone)]
pub struct DeepSeekClient {
    api_key: String,
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl DeepSeekClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
            endpoint: DEEPSEEK_API_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Points the client at a different chat completions URL.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Ask with the default temperature.
    pub async fn ask_default(&self, prompt: &str) -> Result<String, CallError> {
        self.ask(prompt, DEFAULT_TEMPERATURE).await
    }

    /// Send `prompt` as a single user message and return the first choice's text.
    pub async fn ask(&self, prompt: &str, temperature: f64) -> Result<String, CallError> {
        let request = ChatRequest {
            model: DEEPSEEK_MODEL,
            messages: vec![RequestMessage {
                role: MessageRole::User,
                content: prompt,
            }],
            temperature,
        };

        debug!(
            "Sending {} character prompt to {} (temperature {temperature})",
            prompt.len(),
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response: {e}"));
            return Err(CallError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        let api_response: ChatResponse = serde_json::from_slice(&bytes)
            .map_err(|e| CallError::MalformedResponse(e.to_string()))?;

        let content = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CallError::MalformedResponse("No choices in response".to_string()))?
            .message
            .content
            .ok_or_else(|| {
                CallError::MalformedResponse("No message content in first choice".to_string())
            })?;

        debug!("Received {} character answer from DeepSeek", content.len());
        Ok(content)
    }
}
