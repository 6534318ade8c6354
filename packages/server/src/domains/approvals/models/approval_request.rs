use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{ApprovalRequestId, SurveyId};

/// Approval request status
///
/// The tracker stores whatever decision the caller recorded, so values
/// outside the known vocabulary are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
    Other(String),
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
            ApprovalStatus::Other(value) => value,
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, ApprovalStatus::Approved)
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ApprovalStatus {
    fn from(value: &str) -> Self {
        match value {
            "pending" => ApprovalStatus::Pending,
            "approved" => ApprovalStatus::Approved,
            "rejected" => ApprovalStatus::Rejected,
            other => ApprovalStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for ApprovalStatus {
    fn from(value: String) -> Self {
        ApprovalStatus::from(value.as_str())
    }
}

impl From<ApprovalStatus> for String {
    fn from(status: ApprovalStatus) -> Self {
        match status {
            ApprovalStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

/// What an approver is asked to sign off on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalSubject {
    pub survey_id: SurveyId,
    pub title: String,
    /// Full survey record at the time approval was requested
    pub snapshot: serde_json::Value,
}

/// Approval request record, owned by the tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalRequest {
    pub id: ApprovalRequestId,
    pub status: ApprovalStatus,
    pub approver_contact: String,
    pub subject: ApprovalSubject,
    pub created_at: DateTime<Utc>,
    pub decided_at: Option<DateTime<Utc>>,
}

impl ApprovalRequest {
    pub fn new(id: ApprovalRequestId, subject: ApprovalSubject, approver_contact: String) -> Self {
        Self {
            id,
            status: ApprovalStatus::Pending,
            approver_contact,
            subject,
            created_at: Utc::now(),
            decided_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_parse_to_variants() {
        assert_eq!(ApprovalStatus::from("approved"), ApprovalStatus::Approved);
        assert_eq!(ApprovalStatus::from("rejected"), ApprovalStatus::Rejected);
        assert_eq!(ApprovalStatus::from("pending"), ApprovalStatus::Pending);
    }

    #[test]
    fn unknown_decision_is_kept_verbatim() {
        let status = ApprovalStatus::from("Approved");
        assert_eq!(status, ApprovalStatus::Other("Approved".to_string()));
        assert!(!status.is_approved());
        assert_eq!(status.to_string(), "Approved");
        assert_eq!(serde_json::to_value(&status).unwrap(), "Approved");
    }

    #[test]
    fn status_serializes_as_plain_string() {
        assert_eq!(
            serde_json::to_value(ApprovalStatus::Pending).unwrap(),
            serde_json::json!("pending")
        );
        let parsed: ApprovalStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(parsed, ApprovalStatus::Rejected);
    }
}
