//! Speechgate - trigger phrase detection and speech session adaptation
//!
//! This library provides the voice-facing front end for an assistant:
//! - Trigger phrase detection (match and strip the wake phrase from text)
//! - Trigger pattern composition from a name and greeting words
//! - Speech sessions that adapt a recognition engine into typed events
//! - Configuration from files and `SPEECHGATE_*` environment variables
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                 Host application                     │
//! │   handlers  │  channel receiver  │  command text    │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │                   Speechgate                         │
//! │   SpeechSession  │  TriggerMatcher  │  Config       │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │              RecognitionEngine                       │
//! │   platform speech recognition backend               │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod session;
pub mod trigger;

pub use config::{SessionConfig, SpeechConfig, TriggerConfig};
pub use error::{Error, Result};
pub use session::{
    DEFAULT_LANGUAGE, EventKind, EventSink, RecognitionEngine, RecognitionEvent, SpeechSession,
    Subscription,
};
pub use trigger::{PhraseBuilder, TriggerMatcher};
