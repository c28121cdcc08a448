//! Recognition engine abstraction

use crate::session::event::RecognitionEvent;

/// Callback an engine invokes for each event it produces
pub type EventSink = Box<dyn FnMut(RecognitionEvent) + Send>;

/// A speech recognition engine the session can drive
///
/// Implementations wrap whatever recognition backend the platform offers.
/// Engines report failures as [`RecognitionEvent::Error`] events through the
/// installed sink rather than returning errors from the control methods.
pub trait RecognitionEngine {
    /// Begin listening for speech
    fn start(&mut self);

    /// Stop listening and deliver any pending results
    fn stop(&mut self);

    /// Stop listening and discard any pending results
    fn abort(&mut self);

    /// Current recognition language as a `BCP-47` tag
    fn language(&self) -> String;

    /// Set the recognition language to a `BCP-47` tag, unvalidated
    fn set_language(&mut self, language: &str);

    /// Control whether recognition continues after a final result
    fn set_continuous(&mut self, continuous: bool);

    /// Control whether interim results are delivered
    fn set_interim_results(&mut self, interim_results: bool);

    /// Install the sink all engine events are delivered through
    fn subscribe(&mut self, sink: EventSink);

    /// Whether this engine can run on the current platform
    fn is_supported(&self) -> bool {
        true
    }
}
