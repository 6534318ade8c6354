use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

pub const DEFAULT_SURVEY_BASE_URL: &str = "http://survey.example.com";
pub const DEFAULT_SENDER_SIGNATURE: &str = "HR Department";
pub const DEFAULT_TOPIC: &str = "default";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base of every survey link (`<base>/s/<survey_id>`)
    pub survey_base_url: String,
    /// Sign-off line at the end of invitation bodies
    pub sender_signature: String,
    /// Catalog topic used when a requested topic is unknown
    pub default_topic: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            survey_base_url: DEFAULT_SURVEY_BASE_URL.to_string(),
            sender_signature: DEFAULT_SENDER_SIGNATURE.to_string(),
            default_topic: DEFAULT_TOPIC.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Missing keys fall back to defaults; present-but-blank values are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| -> Result<String> {
            match lookup(key) {
                Some(value) => {
                    let trimmed = value.trim();
                    if trimmed.is_empty() {
                        return Err(anyhow::anyhow!("{} must not be blank", key));
                    }
                    Ok(trimmed.to_string())
                }
                None => Ok(default.to_string()),
            }
        };

        Ok(Self {
            survey_base_url: read("SURVEY_BASE_URL", DEFAULT_SURVEY_BASE_URL)
                .context("Invalid SURVEY_BASE_URL")?,
            sender_signature: read("SURVEY_SENDER_SIGNATURE", DEFAULT_SENDER_SIGNATURE)
                .context("Invalid SURVEY_SENDER_SIGNATURE")?,
            default_topic: read("SURVEY_DEFAULT_TOPIC", DEFAULT_TOPIC)
                .context("Invalid SURVEY_DEFAULT_TOPIC")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.survey_base_url, "http://survey.example.com");
    }

    #[test]
    fn present_keys_override_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("SURVEY_BASE_URL", "https://pulse.acme.test"),
            ("SURVEY_SENDER_SIGNATURE", "People Team"),
        ]))
        .unwrap();

        assert_eq!(config.survey_base_url, "https://pulse.acme.test");
        assert_eq!(config.sender_signature, "People Team");
        assert_eq!(config.default_topic, "default");
    }

    #[test]
    fn blank_value_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("SURVEY_BASE_URL", "   ")])).unwrap_err();
        assert!(format!("{:#}", err).contains("SURVEY_BASE_URL"));
    }
}
