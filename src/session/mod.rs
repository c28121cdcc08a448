//! Speech recognition session management
//!
//! [`SpeechSession`] adapts a platform [`RecognitionEngine`] into an
//! event-driven session: raw engine events are forwarded under their own
//! names, and recognition results surface a second time as `data` or `final`
//! events split on finality.

mod adapter;
mod emitter;
mod engine;
mod event;

pub use adapter::{DEFAULT_LANGUAGE, SpeechSession};
pub use emitter::Subscription;
pub use engine::{EventSink, RecognitionEngine};
pub use event::{EventKind, RecognitionEvent};
