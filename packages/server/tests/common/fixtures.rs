//! Test fixtures for building survey requests.

use pulse_core::domains::surveys::SurveyParams;
use pulse_core::kernel::ToolCall;
use serde_json::json;

pub const APPROVER: &str = "hr@example.com";

pub fn audience() -> Vec<String> {
    vec![
        "alice@example.com".to_string(),
        "bob@example.com".to_string(),
    ]
}

/// Survey params with the default audience and approver
pub fn survey_params(survey_id: &str, topic: &str, num_questions: i64) -> SurveyParams {
    SurveyParams::builder()
        .survey_id(survey_id)
        .title("Q3 Check")
        .topic(topic)
        .num_questions(num_questions)
        .target_audience(audience())
        .approver_contact(APPROVER)
        .build()
}

/// `initiate_survey_tool` call with the default audience and approver
pub fn initiate_call(survey_id: &str, topic: &str, num_questions: i64) -> ToolCall {
    ToolCall::new(
        "initiate_survey_tool",
        json!({
            "survey_id": survey_id,
            "title": "Q3 Check",
            "topic": topic,
            "num_questions": num_questions,
            "target_audience_emails": audience(),
            "approver_contact": APPROVER,
        }),
    )
}

pub fn approval_call(approval_request_id: &str, decision: &str) -> ToolCall {
    ToolCall::new(
        "handle_survey_approval_tool",
        json!({
            "approval_request_id": approval_request_id,
            "approval_decision": decision,
        }),
    )
}
