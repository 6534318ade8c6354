//! Named operations with JSON arguments and JSON results.
//!
//! Domains implement [`Tool`] for each operation they expose. A
//! [`ToolRegistry`] routes [`ToolCall`]s by name and always answers with a JSON
//! value: the tool's output on success, or `{status: "error", message}` when
//! the call cannot be parsed, names no tool, or fails.
//!
//! [`serve_lines`] runs a registry over newline-delimited calls, which is what
//! the `pulse serve` command does with stdin.

use anyhow::{Context, Result};
use async_trait::async_trait;
use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

/// One operation callable by name.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name callers use in `ToolCall::name`.
    const NAME: &'static str;

    /// Parsed from `ToolCall::arguments`; its schema is published in the definition.
    type Args: DeserializeOwned + JsonSchema + Send;

    type Output: Serialize + Send;

    type Error: std::error::Error + Send + Sync + 'static;

    fn description(&self) -> &str;

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error>;

    /// JSON result returned in place of output when `call` fails.
    fn error_result(&self, error: &Self::Error) -> Value {
        error_value(error.to_string())
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: self.description().to_string(),
            parameters: parameters_schema::<Self::Args>(),
        }
    }
}

/// JSON schema for an argument type, without the `$schema` preamble.
pub fn parameters_schema<T: JsonSchema>() -> Value {
    let mut value = serde_json::to_value(schema_for!(T)).unwrap_or_default();

    if let Value::Object(map) = &mut value {
        map.remove("$schema");
        map.remove("definitions");
    }

    value
}

/// `{status: "error", message}` result structure.
pub fn error_value(message: impl Into<String>) -> Value {
    json!({
        "status": "error",
        "message": message.into(),
    })
}

/// Published description of a tool: `{name, description, parameters}`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// `{"name": ..., "arguments": {...}}`. Missing or null arguments mean `{}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default = "empty_arguments")]
    pub arguments: Value,
}

fn empty_arguments() -> Value {
    json!({})
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: Value) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// Failures outside a tool's own `call`.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Failed to parse arguments: {0}")]
    ArgumentParse(String),

    #[error("Failed to serialize output: {0}")]
    OutputSerialize(String),
}

/// Object-safe view of a [`Tool`], so a registry can hold mixed tools.
#[async_trait]
pub trait ErasedTool: Send + Sync {
    fn name(&self) -> &str;

    fn definition(&self) -> ToolDefinition;

    /// Errors from the tool itself come back as `Ok(error_result)`.
    async fn call_json(&self, arguments: Value) -> Result<Value, ToolError>;
}

#[async_trait]
impl<T: Tool> ErasedTool for T {
    fn name(&self) -> &str {
        T::NAME
    }

    fn definition(&self) -> ToolDefinition {
        Tool::definition(self)
    }

    async fn call_json(&self, arguments: Value) -> Result<Value, ToolError> {
        let arguments = match arguments {
            Value::Null => empty_arguments(),
            other => other,
        };
        let args: T::Args = serde_json::from_value(arguments)
            .map_err(|e| ToolError::ArgumentParse(e.to_string()))?;

        match self.call(args).await {
            Ok(output) => serde_json::to_value(&output)
                .map_err(|e| ToolError::OutputSerialize(e.to_string())),
            Err(e) => Ok(self.error_result(&e)),
        }
    }
}

// =============================================================================
// Tool Registry
// =============================================================================

/// Routes tool calls by name.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Box<dyn ErasedTool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool. On a name clash the earlier tool wins.
    pub fn with_tool(mut self, tool: impl ErasedTool + 'static) -> Self {
        self.tools.push(Box::new(tool));
        self
    }

    /// Registration order
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    /// Run a tool call, always producing a JSON result structure.
    pub async fn dispatch(&self, call: ToolCall) -> Value {
        let Some(tool) = self.tools.iter().find(|t| t.name() == call.name) else {
            warn!(tool = %call.name, "Unknown tool requested");
            return error_value(ToolError::UnknownTool(call.name).to_string());
        };

        debug!(tool = %call.name, "Dispatching tool call");

        match tool.call_json(call.arguments).await {
            Ok(value) => value,
            Err(e) => {
                warn!(tool = %call.name, error = %e, "Tool call failed");
                error_value(e.to_string())
            }
        }
    }
}

// =============================================================================
// Line protocol
// =============================================================================

/// Answer each non-blank input line with one JSON result line.
///
/// Lines that are not a `ToolCall` get an error result. The writer is flushed
/// after every result. Returns the number of results written.
pub async fn serve_lines<R, W>(registry: &ToolRegistry, reader: R, mut writer: W) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut answered = 0;

    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let result = match serde_json::from_str::<ToolCall>(line) {
            Ok(call) => registry.dispatch(call).await,
            Err(e) => {
                warn!(error = %e, "Malformed tool call");
                error_value(format!("Malformed tool call: {e}"))
            }
        };

        let mut out = serde_json::to_string(&result).context("Failed to serialize result")?;
        out.push('\n');
        writer
            .write_all(out.as_bytes())
            .await
            .context("Failed to write result")?;
        writer.flush().await.context("Failed to flush output")?;
        answered += 1;
    }

    Ok(answered)
}
