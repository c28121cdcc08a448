//! Recognition event names and payloads

use serde::{Deserialize, Serialize};

/// Names of the events a recognition session can emit
///
/// The first eleven mirror the engine's raw lifecycle events one to one.
/// [`Data`](Self::Data) and [`Final`](Self::Final) are derived by the
/// session from [`Result`](Self::Result) events, split on finality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Audio capture has started
    AudioStart,
    /// Audio capture has ended
    AudioEnd,
    /// The recognition service has ended
    End,
    /// The engine reported a recognition error
    Error,
    /// The engine produced no recognizable speech
    NoMatch,
    /// A recognition result is available
    Result,
    /// Sound of any kind has been detected
    SoundStart,
    /// Sound is no longer detected
    SoundEnd,
    /// Speech has been detected
    SpeechStart,
    /// Speech is no longer detected
    SpeechEnd,
    /// The recognition service has started listening
    Start,
    /// An interim recognition result is available
    Data,
    /// A final recognition result is available
    Final,
}

impl EventKind {
    /// Parse an event name
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "audiostart" => Some(Self::AudioStart),
            "audioend" => Some(Self::AudioEnd),
            "end" => Some(Self::End),
            "error" => Some(Self::Error),
            "nomatch" => Some(Self::NoMatch),
            "result" => Some(Self::Result),
            "soundstart" => Some(Self::SoundStart),
            "soundend" => Some(Self::SoundEnd),
            "speechstart" => Some(Self::SpeechStart),
            "speechend" => Some(Self::SpeechEnd),
            "start" => Some(Self::Start),
            "data" => Some(Self::Data),
            "final" => Some(Self::Final),
            _ => None,
        }
    }

    /// Event name as a static string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AudioStart => "audiostart",
            Self::AudioEnd => "audioend",
            Self::End => "end",
            Self::Error => "error",
            Self::NoMatch => "nomatch",
            Self::Result => "result",
            Self::SoundStart => "soundstart",
            Self::SoundEnd => "soundend",
            Self::SpeechStart => "speechstart",
            Self::SpeechEnd => "speechend",
            Self::Start => "start",
            Self::Data => "data",
            Self::Final => "final",
        }
    }
}

/// A recognition event with its payload
///
/// Lifecycle events carry no payload. [`Error`](Self::Error) carries the
/// engine's reason string and [`Result`](Self::Result) carries the
/// transcript alongside its finality flag and result index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RecognitionEvent {
    /// Audio capture has started
    AudioStart,
    /// Audio capture has ended
    AudioEnd,
    /// The recognition service has ended
    End,
    /// The engine reported a recognition error
    Error {
        /// Engine-supplied error reason, passed through opaquely
        reason: String,
    },
    /// The engine produced no recognizable speech
    NoMatch,
    /// A recognition result is available
    Result {
        /// Recognized text
        transcript: String,
        /// Whether the engine considers this result final
        is_final: bool,
        /// Index of this result in the engine's result list
        index: usize,
    },
    /// Sound of any kind has been detected
    SoundStart,
    /// Sound is no longer detected
    SoundEnd,
    /// Speech has been detected
    SpeechStart,
    /// Speech is no longer detected
    SpeechEnd,
    /// The recognition service has started listening
    Start,
}

impl RecognitionEvent {
    /// The raw event name this payload arrives under
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::AudioStart => EventKind::AudioStart,
            Self::AudioEnd => EventKind::AudioEnd,
            Self::End => EventKind::End,
            Self::Error { .. } => EventKind::Error,
            Self::NoMatch => EventKind::NoMatch,
            Self::Result { .. } => EventKind::Result,
            Self::SoundStart => EventKind::SoundStart,
            Self::SoundEnd => EventKind::SoundEnd,
            Self::SpeechStart => EventKind::SpeechStart,
            Self::SpeechEnd => EventKind::SpeechEnd,
            Self::Start => EventKind::Start,
        }
    }
}
