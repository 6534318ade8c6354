// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "compose an invitation") lives in the domains and uses these traits.
//
// Naming convention: Base* for trait names (e.g., BaseMessageTransport)

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// Message Transport Trait (Infrastructure - email/notification delivery)
// =============================================================================

#[async_trait]
pub trait BaseMessageTransport: Send + Sync {
    /// Deliver a single message to one recipient.
    ///
    /// An `Err` means this recipient was not reached; callers decide whether
    /// the rest of a batch continues.
    async fn send_message(&self, recipient: &str, subject: &str, body: &str) -> Result<()>;
}
