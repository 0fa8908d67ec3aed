//! Tools exposed to an orchestrating agent through function calling.

mod deepseek_query;
mod definitions;
mod registry;

pub use definitions::{FunctionDefinition, Tool};
pub use registry::{ToolFuture, ToolHandler, ToolRegistry};
