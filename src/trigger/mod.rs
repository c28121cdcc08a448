//! Trigger phrase detection
//!
//! A [`TriggerMatcher`] decides whether an utterance addresses the assistant
//! and cuts the address phrase out, leaving the command payload.
//! [`PhraseBuilder`] composes the matcher pattern from an assistant name and
//! a set of greeting words.

mod matcher;
mod phrase;

pub use matcher::TriggerMatcher;
pub use phrase::PhraseBuilder;
