//! Surveys - pulse survey lifecycle from initiation to distribution
//!
//! Components:
//! - models: Survey, SurveyParams, SurveyStatus
//! - data: operation outcomes returned to callers
//! - error: SurveyError and its result-structure rendering
//! - orchestrator: the state machine over questionnaire, approvals and invitations
//! - tools: the four operations as named tools

pub mod data;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod tools;

pub use data::{InitiateOutcome, ResolveOutcome};
pub use error::SurveyError;
pub use models::{Survey, SurveyParams, SurveyStatus};
pub use orchestrator::{SurveyOrchestrator, SurveyRegistry};
pub use tools::{
    survey_tools, HandleApprovalTool, InitiateSurveyTool, ListSurveysTool, SurveyStatusTool,
};
