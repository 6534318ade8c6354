use serde::{Deserialize, Serialize};

use crate::common::{ApprovalRequestId, SurveyId};
use crate::domains::surveys::models::SurveyStatus;

/// Handle returned when a survey enters the approval queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitiateOutcome {
    pub status: SurveyStatus,
    pub survey_id: SurveyId,
    pub approval_request_id: ApprovalRequestId,
}

/// Final state reached after an approval decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOutcome {
    pub status: SurveyStatus,
    pub survey_id: SurveyId,
}
