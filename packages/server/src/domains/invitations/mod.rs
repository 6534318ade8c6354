//! Invitations - survey invitation delivery and inbound message handling
//!
//! Components:
//! - models: Invitation, IncomingMessage, IncomingAck
//! - dispatcher: composes invitations and sends them through the message transport

pub mod dispatcher;
pub mod models;

pub use dispatcher::InvitationDispatcher;
pub use models::{AckStatus, IncomingAck, IncomingMessage, Invitation};
