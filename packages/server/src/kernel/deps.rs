//! Server dependencies for the survey workflow (using traits for testability)
//!
//! This module provides the central dependency container the domains are
//! built from. External services sit behind trait objects so tests can swap
//! in the mocks from `test_dependencies`.

use std::sync::Arc;

use crate::config::Config;
use crate::kernel::{BaseMessageTransport, SimulatedTransport};

// =============================================================================
// ServerDeps
// =============================================================================

/// Dependencies shared by every component of one workflow instance
#[derive(Clone)]
pub struct ServerDeps {
    pub config: Config,
    /// Delivery channel for invitations
    pub transport: Arc<dyn BaseMessageTransport>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(config: Config, transport: Arc<dyn BaseMessageTransport>) -> Self {
        Self { config, transport }
    }

    /// Dependencies backed by the simulated transport
    pub fn simulated(config: Config) -> Self {
        Self::new(config, Arc::new(SimulatedTransport::new()))
    }
}

impl std::fmt::Debug for ServerDeps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerDeps")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
