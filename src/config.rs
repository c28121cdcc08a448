//! Configuration for trigger matching and speech sessions
//!
//! Configuration is layered: file values deserialize over the defaults, and
//! `SPEECHGATE_*` environment variables override both.

use serde::Deserialize;

use crate::Result;
use crate::trigger::{PhraseBuilder, TriggerMatcher};

/// Top-level speechgate configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeechConfig {
    /// Trigger phrase configuration
    #[serde(default)]
    pub trigger: TriggerConfig,

    /// Speech session configuration
    #[serde(default)]
    pub session: SessionConfig,
}

impl SpeechConfig {
    /// Load configuration from `SPEECHGATE_*` environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            trigger: TriggerConfig::from_env(),
            session: SessionConfig::from_env(),
        }
    }
}

/// Trigger phrase configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TriggerConfig {
    /// Assistant name the trigger listens for
    #[serde(default = "default_name")]
    pub name: String,

    /// Greeting words that may precede the name
    #[serde(default = "default_greetings")]
    pub greetings: Vec<String>,

    /// Full pattern override; when set, name and greetings are ignored
    #[serde(default)]
    pub pattern: Option<String>,
}

impl TriggerConfig {
    /// Load trigger configuration from environment variables
    ///
    /// `SPEECHGATE_NAME` sets the name, `SPEECHGATE_GREETINGS` a
    /// comma-separated greeting list, and `SPEECHGATE_PATTERN` the full
    /// pattern override.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            name: std::env::var("SPEECHGATE_NAME").unwrap_or(defaults.name),
            greetings: std::env::var("SPEECHGATE_GREETINGS")
                .map_or(defaults.greetings, |raw| parse_greetings(&raw)),
            pattern: std::env::var("SPEECHGATE_PATTERN").ok(),
        }
    }

    /// Build the matcher this configuration describes
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`](crate::Error::Pattern) if the pattern
    /// override or the composed pattern does not compile.
    pub fn matcher(&self) -> Result<TriggerMatcher> {
        match &self.pattern {
            Some(pattern) => TriggerMatcher::new(pattern),
            None => PhraseBuilder::new()
                .name(self.name.as_str())
                .greetings(self.greetings.clone())
                .build(),
        }
    }
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            greetings: default_greetings(),
            pattern: None,
        }
    }
}

/// Speech session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Recognition language as a `BCP-47` tag
    #[serde(default = "default_language")]
    pub language: String,
}

impl SessionConfig {
    /// Load session configuration from environment variables
    ///
    /// `SPEECHGATE_LANGUAGE` sets the recognition language.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            language: std::env::var("SPEECHGATE_LANGUAGE")
                .unwrap_or_else(|_| default_language()),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

fn default_name() -> String {
    "Ava".to_string()
}

fn default_greetings() -> Vec<String> {
    vec![
        "Hello".to_string(),
        "Howdy".to_string(),
        "Hi".to_string(),
        "Hey".to_string(),
    ]
}

fn default_language() -> String {
    crate::session::DEFAULT_LANGUAGE.to_string()
}

/// Split a comma-separated greeting list, trimming entries and dropping
/// blank ones
fn parse_greetings(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|greeting| greeting.trim().to_string())
        .filter(|greeting| !greeting.is_empty())
        .collect()
}
