use serde_json::{json, Value};
use thiserror::Error;

use crate::common::{ApprovalRequestId, SurveyId};

use super::models::SurveyStatus;

/// Recoverable failures of survey operations.
///
/// None of these are faults: each is surfaced to the caller as an error result
/// and leaves both registries unchanged unless noted otherwise.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SurveyError {
    #[error("Survey ID not found: {survey_id}")]
    SurveyNotFound { survey_id: SurveyId },

    #[error("Approval request ID {approval_request_id} not found")]
    ApprovalRequestNotFound {
        approval_request_id: ApprovalRequestId,
    },

    #[error("Failed to get questions for topic '{topic}'")]
    NoQuestions { survey_id: SurveyId, topic: String },

    /// The tracker accepted the decision but no survey references the request.
    /// The tracker's record has already been updated when this is returned.
    #[error("Survey not found for approval ID {approval_request_id}")]
    SurveyOrphaned {
        approval_request_id: ApprovalRequestId,
    },

    #[error("Survey ID {survey_id} already exists")]
    DuplicateSurvey { survey_id: SurveyId },

    #[error("Survey {survey_id} was already resolved (status: {status})")]
    AlreadyResolved {
        survey_id: SurveyId,
        status: SurveyStatus,
    },
}

impl SurveyError {
    /// Survey the error concerns, when one is known
    pub fn survey_id(&self) -> Option<&SurveyId> {
        match self {
            SurveyError::SurveyNotFound { survey_id }
            | SurveyError::NoQuestions { survey_id, .. }
            | SurveyError::DuplicateSurvey { survey_id }
            | SurveyError::AlreadyResolved { survey_id, .. } => Some(survey_id),
            SurveyError::ApprovalRequestNotFound { .. } | SurveyError::SurveyOrphaned { .. } => {
                None
            }
        }
    }

    /// `{status: "error", message, survey_id?}`
    pub fn to_result_value(&self) -> Value {
        let mut value = json!({
            "status": "error",
            "message": self.to_string(),
        });
        if let (Some(survey_id), Value::Object(map)) = (self.survey_id(), &mut value) {
            map.insert("survey_id".to_string(), json!(survey_id));
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_value_includes_survey_id_when_known() {
        let err = SurveyError::NoQuestions {
            survey_id: SurveyId::new("s1"),
            topic: "wellness".to_string(),
        };
        assert_eq!(
            err.to_result_value(),
            json!({
                "status": "error",
                "message": "Failed to get questions for topic 'wellness'",
                "survey_id": "s1",
            })
        );
    }

    #[test]
    fn result_value_omits_survey_id_for_approval_lookups() {
        let err = SurveyError::ApprovalRequestNotFound {
            approval_request_id: ApprovalRequestId::new("approval_999"),
        };
        let value = err.to_result_value();
        assert_eq!(value["status"], "error");
        assert_eq!(value["message"], "Approval request ID approval_999 not found");
        assert!(value.get("survey_id").is_none());
    }
}
