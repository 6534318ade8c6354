// Business domains
pub mod approvals;
pub mod invitations;
pub mod questionnaire;
pub mod surveys;
