//! Explicit name-to-handler registry for agent-callable tools.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use log::{debug, warn};

use crate::error::{BotError, Result};
use crate::plugin::DeepSeekPlugin;
use crate::types::Invocation;

use super::deepseek_query::{self, deepseek_query};
use super::definitions::{Tool, deepseek_query_definition};

pub type ToolFuture<'a> = Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;

/// Handler invoked with the plugin, the raw JSON arguments and the invocation.
pub type ToolHandler =
    for<'a> fn(&'a DeepSeekPlugin, &'a str, &'a Invocation) -> ToolFuture<'a>;

struct RegisteredTool {
    definition: Tool,
    handler: ToolHandler,
}

fn deepseek_query_handler<'a>(
    plugin: &'a DeepSeekPlugin,
    arguments: &'a str,
    invocation: &'a Invocation,
) -> ToolFuture<'a> {
    Box::pin(deepseek_query(plugin, arguments, invocation))
}

/// Tools this plugin offers, keyed by name.
pub struct ToolRegistry {
    tools: HashMap<&'static str, RegisteredTool>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    /// Registry with every built-in tool registered.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(
            deepseek_query::NAME,
            deepseek_query_definition(),
            deepseek_query_handler,
        );
        registry
    }

    pub fn empty() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register `handler` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: &'static str, definition: Tool, handler: ToolHandler) {
        debug!("Registering tool '{name}'");
        if self
            .tools
            .insert(name, RegisteredTool { definition, handler })
            .is_some()
        {
            warn!("Tool '{name}' was registered twice, keeping the latest");
        }
    }

    /// Sorted tool names.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.tools.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Definitions to hand to the agent, ordered by name.
    pub fn definitions(&self) -> Vec<Tool> {
        self.names()
            .into_iter()
            .filter_map(|name| self.tools.get(name))
            .map(|tool| tool.definition.clone())
            .collect()
    }

    /// Execute a tool by name with the given JSON arguments
    pub async fn execute(
        &self,
        name: &str,
        arguments: &str,
        plugin: &DeepSeekPlugin,
        invocation: &Invocation,
    ) -> Result<String> {
        debug!("Executing tool '{name}' with args: {arguments}");

        let Some(tool) = self.tools.get(name) else {
            warn!("Unknown tool requested: {name}");
            return Err(BotError::UnknownTool(name.to_string()));
        };

        (tool.handler)(plugin, arguments, invocation).await
    }
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use poise::serenity_prelude::{ChannelId, GuildId};
    use serde_json::json;

    use super::*;
    use crate::plugin::{TOOL_ANSWER_LABEL, TOOL_MISSING_KEY_MESSAGE};
    use crate::test_support::{StubProvider, answer_with};

    fn invocation() -> Invocation {
        Invocation::new(ChannelId::new(7), Some(GuildId::new(9)))
    }

    fn answering_stub() -> Router {
        answer_with(json!({ "choices": [{ "message": { "content": "blue" } }] }))
    }

    #[test]
    fn deepseek_query_is_registered() {
        let registry = ToolRegistry::new();
        assert_eq!(registry.names(), vec!["deepseek_query"]);

        let definitions = serde_json::to_value(registry.definitions()).expect("serialize");
        assert_eq!(definitions[0]["type"], "function");
        assert_eq!(definitions[0]["function"]["name"], "deepseek_query");
        assert_eq!(
            definitions[0]["function"]["parameters"]["required"],
            json!(["question"])
        );
        assert_eq!(
            definitions[0]["function"]["parameters"]["properties"]["temperature"]["type"],
            "number"
        );
    }

    #[tokio::test]
    async fn missing_key_returns_fixed_message() {
        let registry = ToolRegistry::new();
        let plugin = DeepSeekPlugin::new(None);

        let text = registry
            .execute(
                "deepseek_query",
                r#"{"question":"why?"}"#,
                &plugin,
                &invocation(),
            )
            .await
            .expect("tool should run");

        assert_eq!(text, TOOL_MISSING_KEY_MESSAGE);
    }

    #[tokio::test]
    async fn temperature_defaults_when_omitted() {
        let stub = StubProvider::spawn(answering_stub()).await;
        let plugin = DeepSeekPlugin::with_client(stub.client("sk-test"));

        let text = ToolRegistry::new()
            .execute(
                "deepseek_query",
                r#"{"question":"Sky colour?"}"#,
                &plugin,
                &invocation(),
            )
            .await
            .expect("tool should run");

        assert_eq!(text, format!("{TOOL_ANSWER_LABEL}blue"));
        let request = &stub.requests()[0];
        assert_eq!(request.body["messages"][0]["content"], "Sky colour?");
        let temperature = request.body["temperature"].as_f64().expect("number");
        assert!((temperature - 0.7).abs() < 1e-9);
    }

    #[tokio::test]
    async fn explicit_temperature_is_passed_through() {
        let stub = StubProvider::spawn(answering_stub()).await;
        let plugin = DeepSeekPlugin::with_client(stub.client("sk-test"));

        ToolRegistry::new()
            .execute(
                "deepseek_query",
                r#"{"question":"Sky colour?","temperature":0.2}"#,
                &plugin,
                &invocation(),
            )
            .await
            .expect("tool should run");

        let temperature = stub.requests()[0].body["temperature"]
            .as_f64()
            .expect("number");
        assert!((temperature - 0.2).abs() < 1e-9);
    }

    #[tokio::test]
    async fn bad_arguments_are_rejected() {
        let plugin = DeepSeekPlugin::new(Some("sk-test".to_string()));

        let err = ToolRegistry::new()
            .execute("deepseek_query", r#"{"temperature":0.5}"#, &plugin, &invocation())
            .await
            .expect_err("question is required");

        assert!(matches!(err, BotError::ToolArguments(_)));
    }

    #[tokio::test]
    async fn unknown_tool_is_rejected() {
        let plugin = DeepSeekPlugin::new(None);

        let err = ToolRegistry::new()
            .execute("web_search", "{}", &plugin, &invocation())
            .await
            .expect_err("not registered");

        assert!(matches!(err, BotError::UnknownTool(name) if name == "web_search"));
    }
}
