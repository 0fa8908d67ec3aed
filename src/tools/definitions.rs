//! Function-calling schema types and the `deepseek_query` definition.

use serde::Serialize;
use serde_json::json;

/// A tool in the OpenAI-compatible function-calling format.
#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionDefinition,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// Definition of the `deepseek_query` tool.
pub fn deepseek_query_definition() -> Tool {
    Tool {
        tool_type: "function".to_string(),
        function: FunctionDefinition {
            name: super::deepseek_query::NAME.to_string(),
            description: "Use DeepSeek to answer complex questions. Sends the question \
                to the DeepSeek chat model and returns its answer."
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "question": {
                        "type": "string",
                        "description": "The question to answer"
                    },
                    "temperature": {
                        "type": "number",
                        "description": "Creativity between 0 and 1 (default: 0.7)"
                    }
                },
                "required": ["question"]
            }),
        },
    }
}
