//! Kernel module - workflow infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod tools;
pub mod traits;
pub mod transport;

pub use deps::ServerDeps;
pub use test_dependencies::{MockTransport, SentMessage, TestDependencies};
pub use tools::{ErasedTool, Tool, ToolCall, ToolDefinition, ToolError, ToolRegistry};
pub use traits::*;
pub use transport::SimulatedTransport;
