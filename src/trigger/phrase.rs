//! Trigger pattern composition from a name and greeting words

use crate::Result;
use crate::trigger::TriggerMatcher;

/// Default assistant name
const DEFAULT_NAME: &str = "Ava";

/// Default greeting words, in composition order
const DEFAULT_GREETINGS: [&str; 4] = ["Hello", "Howdy", "Hi", "Hey"];

/// Composes a [`TriggerMatcher`] pattern from an assistant name and greetings
///
/// The composed pattern is one greeting, a space, then the name, matched
/// case-insensitively anywhere in the text. Name and greetings are inserted
/// into the pattern verbatim; pattern metacharacters are not escaped, so a
/// name like `R2(D2` either fails to compile at [`build`](Self::build) or
/// matches in surprising ways.
#[derive(Debug, Clone)]
pub struct PhraseBuilder {
    name: String,
    greetings: Vec<String>,
}

impl PhraseBuilder {
    /// Create a builder with the default name and greetings
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            greetings: DEFAULT_GREETINGS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Set the assistant name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the greeting words
    #[must_use]
    pub fn greetings<I, S>(mut self, greetings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.greetings = greetings.into_iter().map(Into::into).collect();
        self
    }

    /// Append one greeting word
    #[must_use]
    pub fn greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greetings.push(greeting.into());
        self
    }

    /// Compose the pattern and compile it into a [`TriggerMatcher`]
    ///
    /// With no greetings configured the pattern matches the bare name, so an
    /// empty list does not yield a matcher that can never match.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`](crate::Error::Pattern) if the composed
    /// pattern does not compile, e.g. when the name or a greeting contains
    /// unbalanced pattern metacharacters.
    pub fn build(&self) -> Result<TriggerMatcher> {
        let pattern = if self.greetings.is_empty() {
            self.name.clone()
        } else {
            format!("(({}) {})", self.greetings.join("|"), self.name)
        };

        tracing::debug!(pattern = %pattern, "trigger pattern composed");

        TriggerMatcher::new(&pattern)
    }
}

impl Default for PhraseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builder_requires_greeting() {
        let matcher = PhraseBuilder::new().build().unwrap();

        assert!(matcher.is_match("Howdy Ava"));
        assert!(matcher.is_match("hello ava, good morning"));
        assert!(!matcher.is_match("Ava on her own"));
    }

    #[test]
    fn test_custom_name_and_greetings() {
        let matcher = PhraseBuilder::new()
            .name("Nova")
            .greetings(["Yo", "Sup"])
            .build()
            .unwrap();

        assert!(matcher.is_match("Yo Nova, play music"));
        assert_eq!(matcher.strip("Yo Nova, play music"), "play music");
        assert!(!matcher.is_match("Yo Ava, play music"));
    }

    #[test]
    fn test_append_greeting() {
        let matcher = PhraseBuilder::new().greeting("Oi").build().unwrap();

        assert!(matcher.is_match("Oi Ava"));
        assert!(matcher.is_match("Hey Ava"));
    }

    #[test]
    fn test_empty_greetings_matches_bare_name() {
        let matcher = PhraseBuilder::new()
            .name("Nova")
            .greetings(Vec::<String>::new())
            .build()
            .unwrap();

        assert!(matcher.is_match("Nova, are you there?"));
        assert_eq!(matcher.strip("Nova, start a timer"), "start a timer");
    }

    #[test]
    fn test_metacharacters_fail_at_build() {
        let result = PhraseBuilder::new().name("A(va").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_composed_pattern_shape() {
        let matcher = PhraseBuilder::new().build().unwrap();
        assert_eq!(matcher.pattern(), "((Hello|Howdy|Hi|Hey) Ava)");
    }
}
