pub mod message;

pub use message::{AckStatus, IncomingAck, IncomingMessage, Invitation};
