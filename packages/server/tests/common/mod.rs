// Common test utilities

#[allow(dead_code)]
pub mod fixtures;
pub mod harness;

#[allow(unused_imports)]
pub use fixtures::*;
pub use harness::*;
