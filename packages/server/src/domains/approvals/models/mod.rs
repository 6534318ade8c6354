pub mod approval_request;

pub use approval_request::{ApprovalRequest, ApprovalStatus, ApprovalSubject};
