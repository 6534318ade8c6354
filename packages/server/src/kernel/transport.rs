//! Simulated message transport.
//!
//! Real delivery is handled outside this process. The simulated transport logs
//! each message and reports success, which is what the invitation workflow
//! runs against by default.

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, info};

use super::BaseMessageTransport;

/// Transport that logs messages instead of delivering them.
#[derive(Debug, Default, Clone)]
pub struct SimulatedTransport;

impl SimulatedTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BaseMessageTransport for SimulatedTransport {
    async fn send_message(&self, recipient: &str, subject: &str, body: &str) -> Result<()> {
        info!(recipient = %recipient, subject = %subject, "Simulated message send");
        debug!(recipient = %recipient, body = %body, "Simulated message body");
        Ok(())
    }
}
