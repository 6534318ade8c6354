use chrono::Utc;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::{info, warn};

use super::models::{ApprovalRequest, ApprovalStatus, ApprovalSubject};
use crate::common::ApprovalRequestId;

#[derive(Debug, Default)]
struct TrackerState {
    requests: HashMap<ApprovalRequestId, ApprovalRequest>,
    /// Number of ids issued so far; never decreases
    issued: u64,
}

/// In-memory registry of approval requests.
///
/// Each instance issues its own id sequence (`approval_001`, `approval_002`, ...).
/// Nothing is ever removed.
#[derive(Debug, Default)]
pub struct ApprovalTracker {
    state: RwLock<TrackerState>,
}

impl ApprovalTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new pending request for `subject`.
    pub fn request_approval(
        &self,
        subject: ApprovalSubject,
        approver_contact: &str,
    ) -> (ApprovalRequestId, ApprovalStatus) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());

        state.issued += 1;
        let id = ApprovalRequestId::new(format!("approval_{:03}", state.issued));

        info!(
            approval_request_id = %id,
            survey_id = %subject.survey_id,
            title = %subject.title,
            approver = %approver_contact,
            "Approval requested"
        );

        let request = ApprovalRequest::new(id.clone(), subject, approver_contact.to_string());
        let status = request.status.clone();
        state.requests.insert(id.clone(), request);

        (id, status)
    }

    /// Current status, or `None` when the id was never issued.
    pub fn get_status(&self, id: &str) -> Option<ApprovalStatus> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .requests
            .get(id)
            .map(|r| r.status.clone())
    }

    /// Full audit record for a request.
    pub fn get_request(&self, id: &str) -> Option<ApprovalRequest> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .requests
            .get(id)
            .cloned()
    }

    /// Overwrite a request's status with `decision`.
    ///
    /// Returns `false` (and creates nothing) for unknown ids. The decision
    /// vocabulary is not checked here.
    pub fn record_decision(&self, id: &str, decision: impl Into<ApprovalStatus>) -> bool {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());

        match state.requests.get_mut(id) {
            Some(request) => {
                request.status = decision.into();
                request.decided_at = Some(Utc::now());
                info!(
                    approval_request_id = %id,
                    title = %request.subject.title,
                    status = %request.status,
                    "Approval decision recorded"
                );
                true
            }
            None => {
                warn!(approval_request_id = %id, "Approval request not found");
                false
            }
        }
    }

    /// Number of requests ever issued
    pub fn len(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .requests
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
