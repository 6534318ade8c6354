//! Typed ID definitions for all domain entities.
//!
//! ```rust
//! use pulse_core::common::{ApprovalRequestId, SurveyId};
//!
//! let survey_id = SurveyId::new("s1");
//! let request_id = ApprovalRequestId::new("approval_001");
//!
//! // This would be a compile error:
//! // let wrong: SurveyId = request_id;
//! # let _ = (survey_id, request_id);
//! ```

// Re-export the core Id type
pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Survey entities (one pulse-check campaign).
pub struct Survey;

/// Marker type for ApprovalRequest entities.
pub struct ApprovalRequest;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Survey entities (caller supplied).
pub type SurveyId = Id<Survey>;

/// Typed ID for ApprovalRequest entities (minted by the tracker).
pub type ApprovalRequestId = Id<ApprovalRequest>;
