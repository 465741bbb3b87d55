#![forbid(unsafe_code)]

//! Per-chat-field processing context.
//!
//! [`ChatSession`] bundles what a host needs for one chat input field:
//! settings, destination policy, the processing gate and a preview worker.
//! The host feeds it input changes and polls it for results to apply.
//!
//! ```no_run
//! use std::time::Instant;
//! use tint_core::{ChatSession, DestinationPolicy, Settings};
//!
//! let mut session = ChatSession::new(Settings::default(), DestinationPolicy::default())?;
//! session.set_destination(Some("play.example.net".into()));
//!
//! session.on_input_changed("&X&e&1&8&6&c&9hi", Instant::now());
//! // ...later, on the host's main loop:
//! if let Some(result) = session.poll_preview("&X&e&1&8&6&c&9hi") {
//!     assert_eq!(result.processed, "#e186c9hi");
//! }
//! # Ok::<(), std::io::Error>(())
//! ```

use std::borrow::Cow;
use std::time::Instant;

use tint_text::{MarkupParser, StyledText};

use crate::gate::{ProcessingGate, ToggleHandle};
use crate::policy::DestinationPolicy;
use crate::settings::Settings;
use crate::worker::{PreviewResult, PreviewWorker, RevisionToken};

/// Processing state for one chat input field.
#[derive(Debug)]
pub struct ChatSession {
    settings: Settings,
    policy: DestinationPolicy,
    destination: Option<String>,
    gate: ProcessingGate,
    worker: PreviewWorker,
    previous_text: String,
}

impl ChatSession {
    /// New session with a default gate. Starts the preview worker thread.
    pub fn new(settings: Settings, policy: DestinationPolicy) -> std::io::Result<Self> {
        Self::with_gate(settings, policy, ProcessingGate::default())
    }

    /// New session using `gate`.
    pub fn with_gate(
        settings: Settings,
        policy: DestinationPolicy,
        gate: ProcessingGate,
    ) -> std::io::Result<Self> {
        let worker = PreviewWorker::spawn(settings.markup_options())?;
        Ok(Self {
            settings,
            policy,
            destination: None,
            gate,
            worker,
            previous_text: String::new(),
        })
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the settings; later jobs use the new hex flags.
    pub fn set_settings(&mut self, settings: Settings) {
        self.worker.set_options(settings.markup_options());
        self.settings = settings;
    }

    #[must_use]
    pub fn policy(&self) -> &DestinationPolicy {
        &self.policy
    }

    pub fn policy_mut(&mut self) -> &mut DestinationPolicy {
        &mut self.policy
    }

    #[must_use]
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    /// Set the current destination (e.g. the server the client joined).
    pub fn set_destination(&mut self, destination: Option<String>) {
        tracing::debug!(destination = ?destination, "chat destination changed");
        self.destination = destination;
    }

    #[must_use]
    pub fn gate(&self) -> &ProcessingGate {
        &self.gate
    }

    #[must_use]
    pub fn toggle_handle(&self) -> ToggleHandle {
        self.gate.toggle_handle()
    }

    /// Settings, destination policy and gate all allow processing.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.settings.enabled
            && self.policy.is_enabled(self.destination.as_deref())
            && self.gate.is_enabled()
    }

    /// Flip the gate and return the new state.
    pub fn toggle_processing(&self) -> bool {
        self.gate.toggle()
    }

    /// React to the field changing to `new_text`.
    ///
    /// Submits a preview job when the session is active and the gate lets
    /// the change through; returns the job's token in that case.
    pub fn on_input_changed(&mut self, new_text: &str, now: Instant) -> Option<RevisionToken> {
        let submit = self.is_active() && self.gate.poll(new_text, &self.previous_text, now);
        self.previous_text.clear();
        self.previous_text.push_str(new_text);
        submit.then(|| self.worker.submit(new_text))
    }

    /// The newest finished preview that still applies to `current_input`.
    #[must_use]
    pub fn poll_preview(&self, current_input: &str) -> Option<PreviewResult> {
        self.worker.poll_current(current_input)
    }

    /// Text to re-inject for `text`; unchanged when the session is inactive.
    #[must_use]
    pub fn process_text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if !self.is_active() {
            return Cow::Borrowed(text);
        }
        self.gate.process_text(text, self.settings.markup_options())
    }

    /// Parse `text` synchronously with the current settings.
    #[must_use]
    pub fn preview(&self, text: &str) -> StyledText {
        MarkupParser::new(self.settings.markup_options()).parse(text)
    }

    /// Parse the configured preview line.
    #[must_use]
    pub fn preview_sample(&self) -> StyledText {
        self.preview(&self.settings.preview_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn session() -> ChatSession {
        ChatSession::new(Settings::default(), DestinationPolicy::default()).unwrap()
    }

    fn wait_for(session: &ChatSession, input: &str) -> Option<PreviewResult> {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let Some(result) = session.poll_preview(input) {
                return Some(result);
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn active_by_default() {
        assert!(session().is_active());
    }

    #[test]
    fn destination_rule_deactivates() {
        let mut s = session();
        s.policy_mut().set_rule("blocked.example", false);
        s.set_destination(Some("blocked.example".into()));
        assert!(!s.is_active());
        assert_eq!(s.process_text("&X&1&2&3&4&5&6"), "&X&1&2&3&4&5&6");
        s.set_destination(None);
        assert!(s.is_active());
    }

    #[test]
    fn settings_switch_deactivates() {
        let mut s = session();
        s.set_settings(Settings {
            enabled: false,
            ..Settings::default()
        });
        assert!(!s.is_active());
        assert_eq!(s.on_input_changed("x", Instant::now()), None);
    }

    #[test]
    fn toggle_deactivates() {
        let s = session();
        assert!(!s.toggle_processing());
        assert!(!s.is_active());
        let handle = s.toggle_handle();
        handle.set_enabled(true);
        assert!(s.is_active());
    }

    #[test]
    fn input_change_round_trip() {
        let mut s = session();
        let t0 = Instant::now();
        let token = s.on_input_changed("&X&e&1&8&6&c&9hi", t0).expect("submitted");
        let result = wait_for(&s, "&X&e&1&8&6&c&9hi").expect("preview");
        assert_eq!(result.token, token);
        assert_eq!(result.processed, "#e186c9hi");
    }

    #[test]
    fn debounced_changes_are_not_submitted() {
        let mut s = session();
        let t0 = Instant::now();
        assert!(s.on_input_changed("a", t0).is_some());
        assert!(s.on_input_changed("ab", t0 + Duration::from_millis(5)).is_none());
        assert!(s.on_input_changed("ab", t0 + Duration::from_millis(100)).is_none());
        assert!(s.on_input_changed("abc", t0 + Duration::from_millis(200)).is_some());
    }

    #[test]
    fn stale_preview_is_not_returned() {
        let mut s = session();
        let t0 = Instant::now();
        s.on_input_changed("old", t0);
        s.on_input_changed("new", t0 + Duration::from_millis(100));
        let result = wait_for(&s, "new").expect("preview");
        assert_eq!(result.source, "new");
        assert!(s.poll_preview("old").is_none());
    }

    #[test]
    fn preview_uses_settings() {
        let mut s = session();
        assert_eq!(s.preview("#ff0000x").runs()[0].color.map(|c| c.as_u24()), Some(0xff0000));
        s.set_settings(Settings {
            enable_hex_color: false,
            ..Settings::default()
        });
        assert_eq!(s.preview("#ff0000x").to_plain_text(), "#ff0000x");
    }

    #[test]
    fn preview_sample_parses_default_line() {
        let s = session();
        let text = s.preview_sample();
        assert!(text.to_plain_text().starts_with("Hello, World!"));
    }
}
