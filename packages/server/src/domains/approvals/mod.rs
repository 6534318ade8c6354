//! Approvals - human sign-off before a survey is distributed
//!
//! Components:
//! - models: ApprovalRequest, ApprovalStatus, ApprovalSubject
//! - tracker: per-instance registry that issues ids and records decisions

pub mod models;
pub mod tracker;

pub use models::{ApprovalRequest, ApprovalStatus, ApprovalSubject};
pub use tracker::ApprovalTracker;
