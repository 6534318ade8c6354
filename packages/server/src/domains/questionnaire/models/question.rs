use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One survey question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
}

impl Question {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Fixed question sets keyed by topic (exact-match keys)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionCatalog {
    topics: BTreeMap<String, Vec<Question>>,
}

impl QuestionCatalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog every deployment ships with
    pub fn builtin() -> Self {
        Self::new()
            .with_topic(
                "engagement",
                vec![
                    Question::new("eng1", "How motivated are you at work?"),
                    Question::new("eng2", "Do you feel your contributions are valued?"),
                ],
            )
            .with_topic(
                "wellness",
                vec![
                    Question::new("wel1", "How would you rate your current work-life balance?"),
                    Question::new(
                        "wel2",
                        "Do you have access to resources that support your well-being?",
                    ),
                ],
            )
            .with_topic(
                "default",
                vec![Question::new(
                    "def1",
                    "Any other feedback you would like to share?",
                )],
            )
    }

    /// Add or replace a topic's question set
    pub fn with_topic(mut self, topic: impl Into<String>, questions: Vec<Question>) -> Self {
        self.topics.insert(topic.into(), questions);
        self
    }

    /// Question set for a topic, if the topic is cataloged
    pub fn get(&self, topic: &str) -> Option<&[Question]> {
        self.topics.get(topic).map(Vec::as_slice)
    }

    /// Cataloged topics, sorted
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.topics.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_three_topics() {
        let catalog = QuestionCatalog::builtin();
        let topics: Vec<&str> = catalog.topics().collect();
        assert_eq!(topics, vec!["default", "engagement", "wellness"]);
        assert_eq!(catalog.get("wellness").unwrap()[0].id, "wel1");
    }

    #[test]
    fn question_serializes_as_id_and_text() {
        let value = serde_json::to_value(Question::new("def1", "Anything else?")).unwrap();
        assert_eq!(value, serde_json::json!({"id": "def1", "text": "Anything else?"}));
    }
}
