//! Shared test utilities

use speechgate::{EventSink, RecognitionEngine, RecognitionEvent};

/// Initialize tracing output for tests
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    drop(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init(),
    );
}

/// Recognition engine double that records calls and replays scripted events
pub struct ScriptedEngine {
    language: String,
    continuous: bool,
    interim_results: bool,
    supported: bool,
    calls: Vec<&'static str>,
    sink: Option<EventSink>,
}

impl ScriptedEngine {
    /// Create a supported engine with browser-like initial settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: "en-US".to_string(),
            continuous: true,
            interim_results: false,
            supported: true,
            calls: Vec::new(),
            sink: None,
        }
    }

    /// Create an engine that reports no platform support
    #[must_use]
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::new()
        }
    }

    /// Control method calls observed so far, in order
    #[must_use]
    pub fn calls(&self) -> &[&'static str] {
        &self.calls
    }

    /// Current continuous setting
    #[must_use]
    pub fn continuous(&self) -> bool {
        self.continuous
    }

    /// Current interim results setting
    #[must_use]
    pub fn interim_results(&self) -> bool {
        self.interim_results
    }

    /// Whether a sink has been installed
    #[must_use]
    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    /// Deliver one event through the installed sink
    pub fn push(&mut self, event: RecognitionEvent) {
        let sink = self.sink.as_mut().expect("sink installed");
        sink(event);
    }
}

impl Default for ScriptedEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecognitionEngine for ScriptedEngine {
    fn start(&mut self) {
        self.calls.push("start");
    }

    fn stop(&mut self) {
        self.calls.push("stop");
    }

    fn abort(&mut self) {
        self.calls.push("abort");
    }

    fn language(&self) -> String {
        self.language.clone()
    }

    fn set_language(&mut self, language: &str) {
        self.language = language.to_string();
    }

    fn set_continuous(&mut self, continuous: bool) {
        self.continuous = continuous;
    }

    fn set_interim_results(&mut self, interim_results: bool) {
        self.interim_results = interim_results;
    }

    fn subscribe(&mut self, sink: EventSink) {
        self.sink = Some(sink);
    }

    fn is_supported(&self) -> bool {
        self.supported
    }
}

/// Build an interim recognition result event
#[must_use]
pub fn interim_result(transcript: &str, index: usize) -> RecognitionEvent {
    RecognitionEvent::Result {
        transcript: transcript.to_string(),
        is_final: false,
        index,
    }
}

/// Build a final recognition result event
#[must_use]
pub fn final_result(transcript: &str, index: usize) -> RecognitionEvent {
    RecognitionEvent::Result {
        transcript: transcript.to_string(),
        is_final: true,
        index,
    }
}
