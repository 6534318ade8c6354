use tracing::debug;

use super::models::{Question, QuestionCatalog};
use crate::config::{Config, DEFAULT_TOPIC};

/// Looks up bounded question lists from a fixed catalog.
///
/// Never fails: an unknown topic resolves to the default topic and an
/// oversized count truncates to what the resolved topic has.
#[derive(Debug, Clone)]
pub struct QuestionProvider {
    catalog: QuestionCatalog,
    default_topic: String,
}

impl Default for QuestionProvider {
    fn default() -> Self {
        Self::new(QuestionCatalog::builtin())
    }
}

impl QuestionProvider {
    pub fn new(catalog: QuestionCatalog) -> Self {
        Self {
            catalog,
            default_topic: DEFAULT_TOPIC.to_string(),
        }
    }

    /// Builtin catalog with the configured fallback topic
    pub fn from_config(config: &Config) -> Self {
        Self::new(QuestionCatalog::builtin()).with_default_topic(config.default_topic.clone())
    }

    pub fn with_default_topic(mut self, topic: impl Into<String>) -> Self {
        self.default_topic = topic.into();
        self
    }

    /// First `count` questions for `topic`.
    ///
    /// Returns an empty list for `count <= 0`, and also when neither the topic
    /// nor the default topic is cataloged.
    pub fn get_questions(&self, topic: &str, count: i64) -> Vec<Question> {
        let resolved = match self.catalog.get(topic) {
            Some(questions) => questions,
            None => {
                debug!(topic = %topic, fallback = %self.default_topic, "Unknown topic, using fallback");
                self.catalog.get(&self.default_topic).unwrap_or(&[])
            }
        };

        let take = usize::try_from(count).unwrap_or(0);
        let selected: Vec<Question> = resolved.iter().take(take).cloned().collect();

        debug!(topic = %topic, requested = count, provided = selected.len(), "Questions selected");
        selected
    }

    /// Topics a caller may choose from
    pub fn topics(&self) -> Vec<String> {
        self.catalog.topics().map(str::to_string).collect()
    }
}
