//! Survey workflow coordinator
//!
//! Flow:
//!   initiate_survey → QuestionProvider → ApprovalTracker.request_approval → pending handle
//!   resolve_approval → ApprovalTracker.record_decision
//!     - approved → InvitationDispatcher.send_invitations → sent | send_failed
//!     - anything else → rejected
//!
//! The survey registry lock is held for the whole of each operation, so a
//! resolution (including its dispatch) is atomic to every other caller.

use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use super::data::{InitiateOutcome, ResolveOutcome};
use super::error::SurveyError;
use super::models::{Survey, SurveyParams, SurveyStatus};
use crate::common::{ApprovalRequestId, SurveyId};
use crate::domains::approvals::{ApprovalStatus, ApprovalTracker};
use crate::domains::invitations::InvitationDispatcher;
use crate::domains::questionnaire::QuestionProvider;
use crate::kernel::ServerDeps;

pub type SurveyRegistry = BTreeMap<SurveyId, Survey>;

/// Owns the survey lifecycle and sequences the three collaborating services.
///
/// Every instance has its own registries; nothing is shared between instances
/// and nothing outlives the process.
pub struct SurveyOrchestrator {
    questions: QuestionProvider,
    approvals: ApprovalTracker,
    dispatcher: InvitationDispatcher,
    surveys: RwLock<SurveyRegistry>,
}

impl SurveyOrchestrator {
    pub fn new(
        questions: QuestionProvider,
        approvals: ApprovalTracker,
        dispatcher: InvitationDispatcher,
    ) -> Self {
        Self {
            questions,
            approvals,
            dispatcher,
            surveys: RwLock::new(SurveyRegistry::new()),
        }
    }

    /// Builtin catalog, fresh tracker, dispatcher on the configured transport
    pub fn from_deps(deps: &ServerDeps) -> Self {
        Self::new(
            QuestionProvider::from_config(&deps.config),
            ApprovalTracker::new(),
            InvitationDispatcher::from_deps(deps),
        )
    }

    pub fn approvals(&self) -> &ApprovalTracker {
        &self.approvals
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Assemble questions and open an approval request.
    ///
    /// Nothing is registered when the survey id is taken or the topic yields
    /// no questions.
    pub async fn initiate_survey(
        &self,
        params: SurveyParams,
    ) -> Result<InitiateOutcome, SurveyError> {
        info!(
            survey_id = %params.survey_id,
            title = %params.title,
            topic = %params.topic,
            "Initiating pulse survey"
        );

        let mut surveys = self.surveys.write().await;

        if surveys.contains_key(params.survey_id.as_str()) {
            warn!(survey_id = %params.survey_id, "Survey ID already in use");
            return Err(SurveyError::DuplicateSurvey {
                survey_id: params.survey_id,
            });
        }

        let questions = self
            .questions
            .get_questions(&params.topic, params.num_questions);
        if questions.is_empty() {
            warn!(
                survey_id = %params.survey_id,
                topic = %params.topic,
                num_questions = params.num_questions,
                "No questions available, aborting survey initiation"
            );
            return Err(SurveyError::NoQuestions {
                survey_id: params.survey_id,
                topic: params.topic,
            });
        }

        let subject = params.approval_subject(&questions);
        let (approval_request_id, approval_status) = self
            .approvals
            .request_approval(subject, &params.approver_contact);

        let survey = Survey::new(
            params,
            questions,
            approval_request_id.clone(),
            approval_status,
        );
        let survey_id = survey.survey_id.clone();
        surveys.insert(survey_id.clone(), survey);

        info!(
            survey_id = %survey_id,
            approval_request_id = %approval_request_id,
            "Survey pending approval"
        );

        Ok(InitiateOutcome {
            status: SurveyStatus::PendingApproval,
            survey_id,
            approval_request_id,
        })
    }

    /// Apply an approver's decision and, when approved, send the invitations.
    ///
    /// Only `"approved"` counts as approval; any other decision rejects the
    /// survey. Surveys that already left `pending_approval` are refused
    /// without touching either registry.
    pub async fn resolve_approval(
        &self,
        approval_request_id: &str,
        decision: &str,
    ) -> Result<ResolveOutcome, SurveyError> {
        info!(
            approval_request_id = %approval_request_id,
            decision = %decision,
            "Handling approval response"
        );

        let mut surveys = self.surveys.write().await;

        if self.approvals.get_status(approval_request_id).is_none() {
            return Err(SurveyError::ApprovalRequestNotFound {
                approval_request_id: ApprovalRequestId::new(approval_request_id),
            });
        }

        if let Some(survey) = find_by_request(&surveys, approval_request_id) {
            if survey.lifecycle_status != SurveyStatus::PendingApproval {
                warn!(
                    survey_id = %survey.survey_id,
                    status = %survey.lifecycle_status,
                    "Approval response for a survey that is no longer pending"
                );
                return Err(SurveyError::AlreadyResolved {
                    survey_id: survey.survey_id.clone(),
                    status: survey.lifecycle_status,
                });
            }
        }

        if !self.approvals.record_decision(approval_request_id, decision) {
            return Err(SurveyError::ApprovalRequestNotFound {
                approval_request_id: ApprovalRequestId::new(approval_request_id),
            });
        }

        let Some(survey) = surveys
            .values_mut()
            .find(|s| s.approval_request_id == approval_request_id)
        else {
            error!(
                approval_request_id = %approval_request_id,
                "Approval recorded but no survey references it; registries are inconsistent"
            );
            return Err(SurveyError::SurveyOrphaned {
                approval_request_id: ApprovalRequestId::new(approval_request_id),
            });
        };

        let decision = ApprovalStatus::from(decision);
        survey.approval_status = decision.clone();

        if decision.is_approved() {
            survey.transition(SurveyStatus::ApprovedReadyToSend);

            let delivered = self
                .dispatcher
                .send_invitations(&survey.target_audience, &survey.survey_id, &survey.title)
                .await;

            if delivered {
                survey.transition(SurveyStatus::Sent);
            } else {
                warn!(survey_id = %survey.survey_id, "Failed to send all invitations");
                survey.transition(SurveyStatus::SendFailed);
            }
        } else {
            info!(
                survey_id = %survey.survey_id,
                decision = %decision,
                "Survey not approved, no invitations will be sent"
            );
            survey.transition(SurveyStatus::Rejected);
        }

        Ok(ResolveOutcome {
            status: survey.lifecycle_status,
            survey_id: survey.survey_id.clone(),
        })
    }

    /// Current record for one survey
    pub async fn get_status(&self, survey_id: &str) -> Result<Survey, SurveyError> {
        self.surveys
            .read()
            .await
            .get(survey_id)
            .cloned()
            .ok_or_else(|| SurveyError::SurveyNotFound {
                survey_id: SurveyId::new(survey_id),
            })
    }

    /// Every survey this instance knows about
    pub async fn list_surveys(&self) -> SurveyRegistry {
        let surveys = self.surveys.read().await;
        if surveys.is_empty() {
            info!("No active surveys");
        }
        surveys.clone()
    }
}

fn find_by_request<'a>(
    surveys: &'a SurveyRegistry,
    approval_request_id: &str,
) -> Option<&'a Survey> {
    surveys
        .values()
        .find(|s| s.approval_request_id == approval_request_id)
}
