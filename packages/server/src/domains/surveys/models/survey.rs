use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use typed_builder::TypedBuilder;

use crate::common::{ApprovalRequestId, SurveyId};
use crate::domains::approvals::{ApprovalStatus, ApprovalSubject};
use crate::domains::questionnaire::Question;

// =============================================================================
// Lifecycle
// =============================================================================

/// Survey lifecycle status
///
/// `pending_approval → approved_ready_to_send → sent | send_failed`, or
/// `pending_approval → rejected`. The last three are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyStatus {
    PendingApproval,
    ApprovedReadyToSend,
    Sent,
    SendFailed,
    Rejected,
}

impl SurveyStatus {
    pub fn can_transition_to(self, next: SurveyStatus) -> bool {
        use SurveyStatus::*;
        matches!(
            (self, next),
            (PendingApproval, ApprovedReadyToSend)
                | (PendingApproval, Rejected)
                | (ApprovedReadyToSend, Sent)
                | (ApprovedReadyToSend, SendFailed)
        )
    }
}

impl std::fmt::Display for SurveyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurveyStatus::PendingApproval => write!(f, "pending_approval"),
            SurveyStatus::ApprovedReadyToSend => write!(f, "approved_ready_to_send"),
            SurveyStatus::Sent => write!(f, "sent"),
            SurveyStatus::SendFailed => write!(f, "send_failed"),
            SurveyStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for SurveyStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending_approval" => Ok(SurveyStatus::PendingApproval),
            "approved_ready_to_send" => Ok(SurveyStatus::ApprovedReadyToSend),
            "sent" => Ok(SurveyStatus::Sent),
            "send_failed" => Ok(SurveyStatus::SendFailed),
            "rejected" => Ok(SurveyStatus::Rejected),
            _ => Err(anyhow::anyhow!("Invalid survey status: {}", s)),
        }
    }
}

// =============================================================================
// Params
// =============================================================================

/// Caller-validated parameters for a new survey
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct SurveyParams {
    pub survey_id: SurveyId,
    pub title: String,
    pub topic: String,
    pub num_questions: i64,
    /// Recipient addresses, in send order
    pub target_audience: Vec<String>,
    pub approver_contact: String,
}

impl SurveyParams {
    /// Snapshot handed to the approver: every parameter plus the chosen questions
    pub fn approval_subject(&self, questions: &[Question]) -> ApprovalSubject {
        let snapshot = serde_json::json!({
            "survey_id": self.survey_id,
            "title": self.title,
            "topic": self.topic,
            "num_questions": self.num_questions,
            "target_audience": self.target_audience,
            "approver_contact": self.approver_contact,
            "questions": questions,
            "lifecycle_status": SurveyStatus::PendingApproval,
        });

        ApprovalSubject {
            survey_id: self.survey_id.clone(),
            title: self.title.clone(),
            snapshot,
        }
    }
}

// =============================================================================
// Survey
// =============================================================================

/// One pulse-check campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    pub survey_id: SurveyId,
    pub title: String,
    pub topic: String,
    pub num_questions: i64,
    pub target_audience: Vec<String>,
    pub approver_contact: String,
    pub questions: Vec<Question>,
    pub approval_request_id: ApprovalRequestId,
    /// Cached copy of the tracker's status for `approval_request_id`
    pub approval_status: ApprovalStatus,
    pub lifecycle_status: SurveyStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Survey {
    pub fn new(
        params: SurveyParams,
        questions: Vec<Question>,
        approval_request_id: ApprovalRequestId,
        approval_status: ApprovalStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            survey_id: params.survey_id,
            title: params.title,
            topic: params.topic,
            num_questions: params.num_questions,
            target_audience: params.target_audience,
            approver_contact: params.approver_contact,
            questions,
            approval_request_id,
            approval_status,
            lifecycle_status: SurveyStatus::PendingApproval,
            created_at: now,
            updated_at: now,
        }
    }

    /// Move to `next`. Callers only request edges of the lifecycle graph.
    pub(crate) fn transition(&mut self, next: SurveyStatus) {
        debug_assert!(
            self.lifecycle_status.can_transition_to(next),
            "illegal transition {} -> {}",
            self.lifecycle_status,
            next
        );

        info!(
            survey_id = %self.survey_id,
            approval_request_id = %self.approval_request_id,
            from = %self.lifecycle_status,
            to = %next,
            "Survey status changed"
        );

        self.lifecycle_status = next;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> SurveyParams {
        SurveyParams::builder()
            .survey_id("s1")
            .title("Q3 Check")
            .topic("wellness")
            .num_questions(2)
            .target_audience(vec!["a@x.com".to_string()])
            .approver_contact("hr@x.com")
            .build()
    }

    #[test]
    fn only_lifecycle_edges_are_allowed() {
        use SurveyStatus::*;
        let all = [PendingApproval, ApprovedReadyToSend, Sent, SendFailed, Rejected];
        let allowed = [
            (PendingApproval, ApprovedReadyToSend),
            (PendingApproval, Rejected),
            (ApprovedReadyToSend, Sent),
            (ApprovedReadyToSend, SendFailed),
        ];

        for from in all {
            for to in all {
                assert_eq!(
                    from.can_transition_to(to),
                    allowed.contains(&(from, to)),
                    "{} -> {}",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn status_string_forms_agree() {
        for status in [
            SurveyStatus::PendingApproval,
            SurveyStatus::ApprovedReadyToSend,
            SurveyStatus::Sent,
            SurveyStatus::SendFailed,
            SurveyStatus::Rejected,
        ] {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, serde_json::Value::String(status.to_string()));
            assert_eq!(status.to_string().parse::<SurveyStatus>().unwrap(), status);
        }
        assert!("archived".parse::<SurveyStatus>().is_err());
    }

    #[test]
    fn approval_subject_snapshots_all_params() {
        let questions = vec![Question::new("wel1", "How?")];
        let subject = params().approval_subject(&questions);

        assert_eq!(subject.survey_id, "s1");
        assert_eq!(subject.title, "Q3 Check");
        assert_eq!(subject.snapshot["topic"], "wellness");
        assert_eq!(subject.snapshot["target_audience"][0], "a@x.com");
        assert_eq!(subject.snapshot["questions"][0]["id"], "wel1");
        assert_eq!(subject.snapshot["lifecycle_status"], "pending_approval");
    }

    #[test]
    fn new_survey_starts_pending_approval() {
        let survey = Survey::new(
            params(),
            vec![],
            ApprovalRequestId::new("approval_001"),
            ApprovalStatus::Pending,
        );
        assert_eq!(survey.lifecycle_status, SurveyStatus::PendingApproval);
        assert_eq!(survey.created_at, survey.updated_at);
    }

    #[test]
    fn transition_updates_status_and_timestamp() {
        let mut survey = Survey::new(
            params(),
            vec![],
            ApprovalRequestId::new("approval_001"),
            ApprovalStatus::Pending,
        );
        survey.transition(SurveyStatus::Rejected);
        assert_eq!(survey.lifecycle_status, SurveyStatus::Rejected);
        assert!(survey.updated_at >= survey.created_at);
    }
}
