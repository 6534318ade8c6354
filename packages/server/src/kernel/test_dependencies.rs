// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use super::{BaseMessageTransport, ServerDeps};
use crate::config::Config;

// =============================================================================
// Mock Message Transport
// =============================================================================

/// Arguments captured from a send call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Transport that records every send and fails on demand.
#[derive(Clone, Default)]
pub struct MockTransport {
    sent: Arc<Mutex<Vec<SentMessage>>>,
    fail_all: Arc<Mutex<bool>>,
    failing_recipients: Arc<Mutex<HashSet<String>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every send fail
    pub fn failing() -> Self {
        let transport = Self::new();
        *transport.fail_all.lock().unwrap() = true;
        transport
    }

    /// Make sends to one recipient fail
    pub fn with_failing_recipient(self, recipient: &str) -> Self {
        self.failing_recipients
            .lock()
            .unwrap()
            .insert(recipient.to_string());
        self
    }

    /// Get all send attempts, successful or not, in call order
    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// Number of send attempts
    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Recipients in call order
    pub fn recipients(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|m| m.recipient.clone())
            .collect()
    }
}

#[async_trait]
impl BaseMessageTransport for MockTransport {
    async fn send_message(&self, recipient: &str, subject: &str, body: &str) -> Result<()> {
        // Record the call
        self.sent.lock().unwrap().push(SentMessage {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });

        let fail_all = *self.fail_all.lock().unwrap();
        if fail_all || self.failing_recipients.lock().unwrap().contains(recipient) {
            anyhow::bail!("Mock delivery failure for {}", recipient);
        }

        Ok(())
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Bundle of mocks plus the ServerDeps wired to them
pub struct TestDependencies {
    pub transport: MockTransport,
    pub config: Config,
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            transport: MockTransport::new(),
            config: Config::default(),
        }
    }

    pub fn with_transport(mut self, transport: MockTransport) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Build ServerDeps sharing this bundle's mocks
    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(self.config.clone(), Arc::new(self.transport.clone()))
    }
}
