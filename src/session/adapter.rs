//! Speech session wrapping one recognition engine

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::session::emitter::{EventBus, Subscription};
use crate::session::engine::RecognitionEngine;
use crate::session::event::{EventKind, RecognitionEvent};
use crate::{Error, Result};

/// Default recognition language
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Drives a [`RecognitionEngine`] and fans its events out to subscribers
///
/// Construction configures the engine for single-utterance recognition with
/// interim results and installs the session's event sink; the engine's raw
/// events are forwarded under their own names, and each `result` event
/// additionally surfaces as `final` or `data` depending on its finality.
pub struct SpeechSession<E: RecognitionEngine> {
    engine: E,
    bus: Arc<EventBus>,
}

impl<E: RecognitionEngine> SpeechSession<E> {
    /// Create a session over `engine` using [`DEFAULT_LANGUAGE`]
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] if the engine reports that speech
    /// recognition cannot run on this platform.
    pub fn new(engine: E) -> Result<Self> {
        Self::with_language(engine, DEFAULT_LANGUAGE)
    }

    /// Create a session over `engine` recognizing `language`
    ///
    /// The language tag is handed to the engine as-is; engines decide for
    /// themselves what to do with tags they do not recognize.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] if the engine reports that speech
    /// recognition cannot run on this platform.
    pub fn with_language(mut engine: E, language: &str) -> Result<Self> {
        if !engine.is_supported() {
            return Err(Error::Unsupported(
                "recognition engine reports no platform support".to_string(),
            ));
        }

        engine.set_language(language);
        engine.set_continuous(false);
        engine.set_interim_results(true);

        let bus = Arc::new(EventBus::new());
        let sink_bus = Arc::clone(&bus);
        engine.subscribe(Box::new(move |event| dispatch(&sink_bus, &event)));

        tracing::debug!(language, "speech session wired to engine");

        Ok(Self { engine, bus })
    }

    /// Create a session that also yields every event on a channel
    ///
    /// The receiver sees events in dispatch order, derived events included.
    /// Dropping the receiver disables the channel without affecting handlers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] if the engine reports that speech
    /// recognition cannot run on this platform.
    pub fn with_receiver(
        engine: E,
        language: &str,
    ) -> Result<(Self, UnboundedReceiver<(EventKind, RecognitionEvent)>)> {
        let session = Self::with_language(engine, language)?;
        let (tx, rx) = mpsc::unbounded_channel();
        session.bus.set_tap(tx);

        Ok((session, rx))
    }

    /// Begin listening for speech
    pub fn start(&mut self) -> &mut Self {
        tracing::debug!("session start requested");
        self.engine.start();
        self
    }

    /// Stop listening and let pending results arrive
    pub fn stop(&mut self) -> &mut Self {
        tracing::debug!("session stop requested");
        self.engine.stop();
        self
    }

    /// Stop listening and discard pending results
    pub fn abort(&mut self) -> &mut Self {
        tracing::debug!("session abort requested");
        self.engine.abort();
        self
    }

    /// Current recognition language
    #[must_use]
    pub fn language(&self) -> String {
        self.engine.language()
    }

    /// Set the recognition language, unvalidated
    pub fn set_language(&mut self, language: &str) {
        self.engine.set_language(language);
    }

    /// Register a handler for one event kind
    #[must_use]
    pub fn on<F>(&self, kind: EventKind, handler: F) -> Subscription
    where
        F: Fn(&RecognitionEvent) + Send + Sync + 'static,
    {
        self.bus.subscribe(kind, Arc::new(handler))
    }

    /// Remove one handler, returning whether it was still registered
    #[must_use]
    pub fn off(&self, subscription: Subscription) -> bool {
        self.bus.unsubscribe(subscription)
    }

    /// Borrow the wrapped engine
    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutably borrow the wrapped engine
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}

/// Forward one engine event, deriving `final`/`data` from results
fn dispatch(bus: &EventBus, event: &RecognitionEvent) {
    tracing::trace!(kind = event.kind().as_str(), "engine event");

    if let RecognitionEvent::Error { reason } = event {
        tracing::warn!(reason = %reason, "recognition error forwarded");
    }

    bus.publish(event.kind(), event);

    if let RecognitionEvent::Result { is_final, .. } = event {
        let derived = if *is_final {
            EventKind::Final
        } else {
            EventKind::Data
        };
        bus.publish(derived, event);
    }
}
