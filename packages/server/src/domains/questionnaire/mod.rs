//! Questionnaire - topic-keyed question catalog
//!
//! Components:
//! - models: Question and QuestionCatalog
//! - provider: bounded lookups with default-topic fallback

pub mod models;
pub mod provider;

pub use models::{Question, QuestionCatalog};
pub use provider::QuestionProvider;
