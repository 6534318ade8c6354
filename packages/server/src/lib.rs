// Employee Pulse Survey - Workflow Core
//
// This crate runs the pulse survey workflow: question assembly, approval
// gating and invitation dispatch, exposed to callers as named tools.
//
// Domains live in domains/*; infrastructure seams and test doubles in kernel/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
