//! Test harness for integration testing.
//!
//! Each test gets a fresh orchestrator with its own registries, wired to a
//! recording mock transport.

use std::sync::Arc;

use pulse_core::domains::surveys::{survey_tools, SurveyOrchestrator};
use pulse_core::kernel::{MockTransport, TestDependencies, ToolRegistry};
use test_context::AsyncTestContext;

/// Test harness that manages test infrastructure.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let result = ctx.tools.dispatch(call).await;
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    /// Records every invitation sent through the orchestrator.
    pub transport: MockTransport,
    pub orchestrator: Arc<SurveyOrchestrator>,
    /// The four survey tools bound to `orchestrator`.
    pub tools: ToolRegistry,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::with_transport(MockTransport::new())
    }

    async fn teardown(self) {}
}

impl TestHarness {
    /// Harness around a specific transport, e.g. `MockTransport::failing()`.
    pub fn with_transport(transport: MockTransport) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let deps = TestDependencies::new()
            .with_transport(transport.clone())
            .server_deps();
        let orchestrator = Arc::new(SurveyOrchestrator::from_deps(&deps));
        let tools = survey_tools(orchestrator.clone());

        Self {
            transport,
            orchestrator,
            tools,
        }
    }
}
