//! Trigger phrase matching and removal

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::{Error, Result};

/// Default trigger: "Ava" optionally preceded by a greeting.
///
/// The greeting branch comes first so the full phrase wins over the bare
/// name under leftmost-first alternation.
const DEFAULT_PATTERN: &str = "((Hi|Hello|Hey|Howdy) Ava)|Ava";

/// Compiled default trigger, shared by every default matcher
static DEFAULT_TRIGGER: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(DEFAULT_PATTERN)
        .case_insensitive(true)
        .build()
        .expect("valid regex")
});

/// Detects and removes a trigger phrase in utterance text
///
/// Matching is case-insensitive and finds the phrase anywhere in the text.
/// The matcher holds no per-call state: `is_match` and `strip` are pure
/// functions of their input regardless of call history.
#[derive(Debug, Clone)]
pub struct TriggerMatcher {
    trigger: Regex,
}

impl TriggerMatcher {
    /// Create a matcher from an explicit pattern
    ///
    /// The pattern is compiled case-insensitively and matches anywhere in
    /// the input unless it carries its own anchors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`] if the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self> {
        let trigger = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| Error::Pattern(e.to_string()))?;

        tracing::debug!(pattern, "trigger matcher compiled");

        Ok(Self { trigger })
    }

    /// Check whether the trigger phrase appears anywhere in `text`
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.trigger.is_match(text)
    }

    /// Remove every occurrence of the trigger phrase from `text`
    ///
    /// Separator characters the excised phrase leaves at the front of the
    /// remainder (whitespace, commas, periods) are trimmed along with
    /// trailing whitespace. Text without a match comes back with only its
    /// leading and trailing whitespace removed.
    #[must_use]
    pub fn strip(&self, text: &str) -> String {
        if !self.is_match(text) {
            return text.trim().to_string();
        }

        self.trigger
            .replace_all(text, "")
            .trim_start_matches(is_separator)
            .trim_end()
            .to_string()
    }

    /// Get the source text of the trigger pattern
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.trigger.as_str()
    }
}

impl Default for TriggerMatcher {
    /// Matcher for an assistant named "Ava", with or without a greeting
    fn default() -> Self {
        Self {
            trigger: DEFAULT_TRIGGER.clone(),
        }
    }
}

/// Separators left behind when a phrase is cut out of an utterance
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == '.'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_greeting_and_name() {
        let matcher = TriggerMatcher::default();

        assert!(matcher.is_match("Hey Ava, what time is it?"));
        assert!(matcher.is_match("Ava, are you there?"));
        assert!(!matcher.is_match("what time is it?"));
    }

    #[test]
    fn test_strip_removes_phrase_and_separators() {
        let matcher = TriggerMatcher::default();

        assert_eq!(
            matcher.strip("Hey Ava, what time is it?"),
            "what time is it?"
        );
        assert_eq!(matcher.strip("Ava play some music"), "play some music");
    }

    #[test]
    fn test_strip_without_match_only_trims_whitespace() {
        let matcher = TriggerMatcher::default();

        assert_eq!(matcher.strip("  turn on the lights  "), "turn on the lights");
        assert_eq!(matcher.strip("no trigger, here."), "no trigger, here.");
    }

    #[test]
    fn test_case_insensitive() {
        let matcher = TriggerMatcher::default();

        assert!(matcher.is_match("hey ava"));
        assert!(matcher.is_match("HEY AVA"));
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let matcher = TriggerMatcher::default();

        assert!(matcher.is_match("Hey Ava"));
        assert!(!matcher.is_match("unrelated text"));
        assert!(matcher.is_match("Hey Ava"));
        assert!(matcher.is_match("Hey Ava"));
    }

    #[test]
    fn test_strip_removes_every_occurrence() {
        let matcher = TriggerMatcher::default();

        assert_eq!(matcher.strip("Ava please Ava"), "please");
    }

    #[test]
    fn test_invalid_pattern_fails_at_construction() {
        let result = TriggerMatcher::new("(unclosed");
        assert!(matches!(result, Err(Error::Pattern(_))));
    }

    #[test]
    fn test_custom_pattern() {
        let matcher = TriggerMatcher::new("(OK|Okay) Jarvis").unwrap();

        assert!(matcher.is_match("ok jarvis, lights on"));
        assert_eq!(matcher.strip("OK Jarvis, lights on"), "lights on");
        assert_eq!(matcher.pattern(), "(OK|Okay) Jarvis");
    }
}
