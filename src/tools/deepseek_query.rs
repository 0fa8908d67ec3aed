//! `deepseek_query` tool: answer a question with DeepSeek.

use log::debug;
use serde::Deserialize;

use crate::deepseek::DEFAULT_TEMPERATURE;
use crate::error::Result;
use crate::plugin::DeepSeekPlugin;
use crate::types::Invocation;

pub const NAME: &str = "deepseek_query";

/// Arguments for the deepseek_query tool
#[derive(Debug, Deserialize)]
struct DeepSeekQueryArgs {
    question: String,
    temperature: Option<f64>,
}

/// Ask DeepSeek the `question` from `arguments` and return the labelled answer.
pub async fn deepseek_query(
    plugin: &DeepSeekPlugin,
    arguments: &str,
    invocation: &Invocation,
) -> Result<String> {
    let args: DeepSeekQueryArgs = serde_json::from_str(arguments)?;
    let temperature = args.temperature.unwrap_or(DEFAULT_TEMPERATURE);

    debug!(
        "deepseek_query: {} character question, temperature {temperature}",
        args.question.len()
    );

    Ok(plugin
        .tool_answer(&args.question, temperature, invocation)
        .await)
}
