use std::sync::Arc;
use tracing::{info, warn};

use super::models::{AckStatus, IncomingAck, IncomingMessage, Invitation};
use crate::common::SurveyId;
use crate::kernel::{BaseMessageTransport, ServerDeps};

const OUT_OF_OFFICE_MARKER: &str = "out of office";

/// Sends survey invitations, one message per recipient.
///
/// Batch outcome is all-or-nothing: a single failed recipient makes the whole
/// batch report failure, and which recipients were reached is not retained.
pub struct InvitationDispatcher {
    transport: Arc<dyn BaseMessageTransport>,
    base_url: String,
    signature: String,
}

impl InvitationDispatcher {
    pub fn new(
        transport: Arc<dyn BaseMessageTransport>,
        base_url: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            signature: signature.into(),
        }
    }

    pub fn from_deps(deps: &ServerDeps) -> Self {
        Self::new(
            deps.transport.clone(),
            deps.config.survey_base_url.clone(),
            deps.config.sender_signature.clone(),
        )
    }

    /// Deterministic link for a survey: `<base_url>/s/<survey_id>`
    pub fn survey_link(&self, survey_id: &SurveyId) -> String {
        format!("{}/s/{}", self.base_url, survey_id)
    }

    /// Subject, body and link for a survey's invitation
    pub fn compose(&self, survey_id: &SurveyId, title: &str) -> Invitation {
        let survey_link = self.survey_link(survey_id);
        let subject = format!("Invitation: Please participate in the {}", title);
        let body = format!(
            "Dear Employee,\n\n\
             Please take a few moments to complete our pulse survey: {title}.\n\
             Your feedback is valuable.\n\n\
             Access the survey here: {link}\n\n\
             Thank you,\n{signature}",
            title = title,
            link = survey_link,
            signature = self.signature,
        );

        Invitation {
            subject,
            body,
            survey_link,
        }
    }

    /// Deliver one message. Transport errors are logged and reported as `false`.
    pub async fn send_one(&self, recipient: &str, subject: &str, body: &str) -> bool {
        match self.transport.send_message(recipient, subject, body).await {
            Ok(()) => true,
            Err(e) => {
                warn!(recipient = %recipient, error = %e, "Invitation delivery failed");
                false
            }
        }
    }

    /// Invite every recipient in order; `true` only if all deliveries succeeded.
    pub async fn send_invitations(
        &self,
        recipients: &[String],
        survey_id: &SurveyId,
        title: &str,
    ) -> bool {
        let invitation = self.compose(survey_id, title);
        info!(
            survey_id = %survey_id,
            recipients = recipients.len(),
            "Sending survey invitations"
        );

        let mut delivered = 0usize;
        for recipient in recipients {
            if self
                .send_one(recipient, &invitation.subject, &invitation.body)
                .await
            {
                delivered += 1;
            }
        }

        info!(
            survey_id = %survey_id,
            delivered = delivered,
            total = recipients.len(),
            "Survey invitations processed"
        );

        delivered == recipients.len()
    }

    /// Inspect an incoming message; only out-of-office detection is logged.
    pub fn handle_incoming(&self, message: &IncomingMessage) -> IncomingAck {
        info!(from = %message.from, subject = %message.subject, "Incoming message received");

        let out_of_office = message
            .subject
            .to_lowercase()
            .contains(OUT_OF_OFFICE_MARKER);
        if out_of_office {
            info!(from = %message.from, "Out of office reply detected");
        }

        IncomingAck {
            status: AckStatus::Processed,
            out_of_office,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::MockTransport;

    fn dispatcher(transport: &MockTransport) -> InvitationDispatcher {
        InvitationDispatcher::new(
            Arc::new(transport.clone()),
            "http://survey.example.com/",
            "HR Department",
        )
    }

    fn recipients(list: &[&str]) -> Vec<String> {
        list.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn link_uses_base_url_without_double_slash() {
        let transport = MockTransport::new();
        let link = dispatcher(&transport).survey_link(&SurveyId::new("s1"));
        assert_eq!(link, "http://survey.example.com/s/s1");
    }

    #[test]
    fn compose_builds_subject_and_body_from_title() {
        let transport = MockTransport::new();
        let invitation = dispatcher(&transport).compose(&SurveyId::new("s1"), "Q3 Check");

        assert_eq!(invitation.subject, "Invitation: Please participate in the Q3 Check");
        assert_eq!(
            invitation.body,
            "Dear Employee,\n\n\
             Please take a few moments to complete our pulse survey: Q3 Check.\n\
             Your feedback is valuable.\n\n\
             Access the survey here: http://survey.example.com/s/s1\n\n\
             Thank you,\nHR Department"
        );
    }

    #[tokio::test]
    async fn sends_once_per_recipient_in_order() {
        let transport = MockTransport::new();
        let ok = dispatcher(&transport)
            .send_invitations(&recipients(&["a@x.com", "b@x.com"]), &SurveyId::new("s1"), "T")
            .await;

        assert!(ok);
        assert_eq!(transport.recipients(), vec!["a@x.com", "b@x.com"]);
        assert!(transport.sent()[1].body.contains("/s/s1"));
    }

    #[tokio::test]
    async fn one_failure_fails_batch_but_later_recipients_still_sent() {
        let transport = MockTransport::new().with_failing_recipient("a@x.com");
        let ok = dispatcher(&transport)
            .send_invitations(
                &recipients(&["a@x.com", "b@x.com", "c@x.com"]),
                &SurveyId::new("s1"),
                "T",
            )
            .await;

        assert!(!ok);
        assert_eq!(transport.call_count(), 3);
    }

    #[tokio::test]
    async fn empty_recipient_list_succeeds() {
        let transport = MockTransport::new();
        let ok = dispatcher(&transport)
            .send_invitations(&[], &SurveyId::new("s1"), "T")
            .await;
        assert!(ok);
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn send_one_reports_transport_error_as_false() {
        let transport = MockTransport::failing();
        assert!(!dispatcher(&transport).send_one("a@x.com", "s", "b").await);
    }

    #[test]
    fn out_of_office_detection_is_case_insensitive() {
        let transport = MockTransport::new();
        let dispatcher = dispatcher(&transport);

        let ack = dispatcher.handle_incoming(&IncomingMessage {
            from: "a@x.com".to_string(),
            subject: "Re: Invitation - OUT OF OFFICE until Monday".to_string(),
            body: String::new(),
        });
        assert!(ack.out_of_office);
        assert_eq!(ack.status, AckStatus::Processed);

        let ack = dispatcher.handle_incoming(&IncomingMessage {
            from: "b@x.com".to_string(),
            subject: "Re: Invitation".to_string(),
            body: "I am out of office".to_string(),
        });
        assert!(!ack.out_of_office);
        assert_eq!(transport.call_count(), 0);
    }
}
