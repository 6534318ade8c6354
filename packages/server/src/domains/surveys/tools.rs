//! Survey operations exposed as tools.
//!
//! Each tool wraps one orchestrator operation. Errors are rendered as
//! `{status: "error", message, survey_id?}` so a caller always gets a result
//! structure back.

use std::sync::Arc;

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::data::{InitiateOutcome, ResolveOutcome};
use super::error::SurveyError;
use super::models::{Survey, SurveyParams};
use super::orchestrator::{SurveyOrchestrator, SurveyRegistry};
use crate::kernel::{Tool, ToolRegistry};

// =============================================================================
// Initiate Survey Tool
// =============================================================================

/// Arguments for starting a survey.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct InitiateSurveyArgs {
    /// A unique identifier for the survey.
    pub survey_id: String,
    /// The title of the survey.
    pub title: String,
    /// The main topic of the survey (e.g. 'wellness', 'engagement').
    pub topic: String,
    /// The number of questions to include from the topic.
    pub num_questions: i64,
    /// Email addresses of the target audience.
    #[serde(alias = "target_audience")]
    pub target_audience_emails: Vec<String>,
    /// Email address of the person who needs to approve the survey.
    pub approver_contact: String,
}

impl From<InitiateSurveyArgs> for SurveyParams {
    fn from(args: InitiateSurveyArgs) -> Self {
        SurveyParams::builder()
            .survey_id(args.survey_id)
            .title(args.title)
            .topic(args.topic)
            .num_questions(args.num_questions)
            .target_audience(args.target_audience_emails)
            .approver_contact(args.approver_contact)
            .build()
    }
}

pub struct InitiateSurveyTool {
    orchestrator: Arc<SurveyOrchestrator>,
}

impl InitiateSurveyTool {
    pub fn new(orchestrator: Arc<SurveyOrchestrator>) -> Self {
        Self { orchestrator }
    }
}

#[async_trait]
impl Tool for InitiateSurveyTool {
    const NAME: &'static str = "initiate_survey_tool";
    type Args = InitiateSurveyArgs;
    type Output = InitiateOutcome;
    type Error = SurveyError;

    fn description(&self) -> &str {
        "Initiates a new employee pulse survey. Requires survey_id, title, topic, num_questions, \
         target_audience_emails (list), and approver_contact email."
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        self.orchestrator.initiate_survey(args.into()).await
    }

    fn error_result(&self, error: &Self::Error) -> Value {
        error.to_result_value()
    }
}

// =============================================================================
// Handle Approval Tool
// =============================================================================

/// Arguments for recording an approval decision.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct HandleApprovalArgs {
    /// The ID of the approval request.
    pub approval_request_id: String,
    /// The decision: 'approved' or 'rejected'.
    #[serde(alias = "decision")]
    pub approval_decision: String,
}

pub struct HandleApprovalTool {
    orchestrator: Arc<SurveyOrchestrator>,
}

impl HandleApprovalTool {
    pub fn new(orchestrator: Arc<SurveyOrchestrator>) -> Self {
        Self { orchestrator }
    }
}

#[async_trait]
impl Tool for HandleApprovalTool {
    const NAME: &'static str = "handle_survey_approval_tool";
    type Args = HandleApprovalArgs;
    type Output = ResolveOutcome;
    type Error = SurveyError;

    fn description(&self) -> &str {
        "Handles the approval decision for a pending survey. Requires approval_request_id and \
         approval_decision ('approved' or 'rejected')."
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        self.orchestrator
            .resolve_approval(&args.approval_request_id, &args.approval_decision)
            .await
    }

    fn error_result(&self, error: &Self::Error) -> Value {
        error.to_result_value()
    }
}

// =============================================================================
// Survey Status Tool
// =============================================================================

/// Arguments for looking up one survey.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SurveyStatusArgs {
    /// The unique identifier of the survey to query.
    pub survey_id: String,
}

pub struct SurveyStatusTool {
    orchestrator: Arc<SurveyOrchestrator>,
}

impl SurveyStatusTool {
    pub fn new(orchestrator: Arc<SurveyOrchestrator>) -> Self {
        Self { orchestrator }
    }
}

#[async_trait]
impl Tool for SurveyStatusTool {
    const NAME: &'static str = "get_survey_status_tool";
    type Args = SurveyStatusArgs;
    type Output = Survey;
    type Error = SurveyError;

    fn description(&self) -> &str {
        "Gets the current status and details of a specific survey by its ID."
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        self.orchestrator.get_status(&args.survey_id).await
    }

    // Not-found lookups carry no survey_id, matching the other lookup errors
    fn error_result(&self, error: &Self::Error) -> Value {
        let mut value = error.to_result_value();
        if let Value::Object(map) = &mut value {
            map.remove("survey_id");
        }
        value
    }
}

// =============================================================================
// List Surveys Tool
// =============================================================================

/// No arguments.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListSurveysArgs {}

pub struct ListSurveysTool {
    orchestrator: Arc<SurveyOrchestrator>,
}

impl ListSurveysTool {
    pub fn new(orchestrator: Arc<SurveyOrchestrator>) -> Self {
        Self { orchestrator }
    }
}

#[async_trait]
impl Tool for ListSurveysTool {
    const NAME: &'static str = "list_all_surveys_tool";
    type Args = ListSurveysArgs;
    type Output = SurveyRegistry;
    type Error = std::convert::Infallible;

    fn description(&self) -> &str {
        "Lists all currently active surveys and their statuses."
    }

    async fn call(&self, _args: Self::Args) -> Result<Self::Output, Self::Error> {
        Ok(self.orchestrator.list_surveys().await)
    }
}

// =============================================================================
// Registry
// =============================================================================

/// All survey tools bound to one orchestrator
pub fn survey_tools(orchestrator: Arc<SurveyOrchestrator>) -> ToolRegistry {
    ToolRegistry::new()
        .with_tool(InitiateSurveyTool::new(orchestrator.clone()))
        .with_tool(HandleApprovalTool::new(orchestrator.clone()))
        .with_tool(SurveyStatusTool::new(orchestrator.clone()))
        .with_tool(ListSurveysTool::new(orchestrator))
}
