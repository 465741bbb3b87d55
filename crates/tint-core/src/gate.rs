#![forbid(unsafe_code)]

//! Processing gate: enable toggle plus debounce.
//!
//! Decides whether a changed input should run through the markup pipeline.
//! Input that arrives faster than the debounce window is skipped; the caller
//! re-polls on the next change.
//!
//! # Usage
//!
//! ```
//! use std::time::{Duration, Instant};
//! use tint_core::gate::ProcessingGate;
//!
//! let mut gate = ProcessingGate::default();
//! let t0 = Instant::now();
//!
//! assert!(gate.poll("&ahi", "", t0));
//! // Inside the window: skipped even though the text changed.
//! assert!(!gate.poll("&ahi!", "&ahi", t0 + Duration::from_millis(10)));
//! assert!(gate.poll("&ahi!", "&ahi", t0 + Duration::from_millis(60)));
//! ```

use std::borrow::Cow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use tint_text::{MarkupOptions, normalize_segmented};

/// Minimum spacing between two processing passes.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(50);

/// Enable flag plus last-processed timestamp.
///
/// `should_process` is pure; `mark_processed` (or `poll`) records a pass.
/// The enable flag is shared through [`ToggleHandle`] so a key-binding
/// handler on another thread can flip it.
#[derive(Debug, Clone)]
pub struct ProcessingGate {
    enabled: Arc<AtomicBool>,
    last_processed: Option<Instant>,
    debounce: Duration,
}

impl Default for ProcessingGate {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl ProcessingGate {
    /// Enabled gate with the given debounce window.
    #[must_use]
    pub fn new(debounce: Duration) -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(true)),
            last_processed: None,
            debounce,
        }
    }

    #[must_use]
    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    #[must_use]
    pub fn last_processed(&self) -> Option<Instant> {
        self.last_processed
    }

    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Set the enable flag, logging the change.
    pub fn set_enabled(&self, enabled: bool) {
        let was = self.enabled.swap(enabled, Ordering::AcqRel);
        if was != enabled {
            log_state(enabled);
        }
    }

    /// Flip the enable flag and return the new state.
    pub fn toggle(&self) -> bool {
        toggle_flag(&self.enabled)
    }

    /// Shareable handle over the enable flag.
    #[must_use]
    pub fn toggle_handle(&self) -> ToggleHandle {
        ToggleHandle {
            enabled: Arc::clone(&self.enabled),
        }
    }

    /// Whether `new_text` should be processed at `now`.
    ///
    /// True only when the gate is enabled, the text changed, and either
    /// nothing was processed yet or more than the debounce window has passed.
    #[must_use]
    pub fn should_process(&self, new_text: &str, previous_text: &str, now: Instant) -> bool {
        if !self.is_enabled() || new_text == previous_text {
            return false;
        }
        match self.last_processed {
            None => true,
            Some(last) => now.saturating_duration_since(last) > self.debounce,
        }
    }

    /// Record a processing pass at `now`.
    pub fn mark_processed(&mut self, now: Instant) {
        self.last_processed = Some(now);
    }

    /// [`should_process`](Self::should_process), recording the pass on `true`.
    pub fn poll(&mut self, new_text: &str, previous_text: &str, now: Instant) -> bool {
        let go = self.should_process(new_text, previous_text, now);
        if go {
            self.mark_processed(now);
        }
        go
    }

    /// Text to re-inject into the input field.
    ///
    /// Returns `text` untouched when disabled or when segmented colors are
    /// off; otherwise segmented colors are rewritten to `#RRGGBB`.
    #[must_use]
    pub fn process_text<'a>(&self, text: &'a str, options: MarkupOptions) -> Cow<'a, str> {
        if !self.is_enabled() || !options.segmented_hex {
            return Cow::Borrowed(text);
        }
        normalize_segmented(text)
    }
}

/// Clonable, thread-safe handle over a gate's enable flag.
#[derive(Debug, Clone)]
pub struct ToggleHandle {
    enabled: Arc<AtomicBool>,
}

impl ToggleHandle {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    pub fn set_enabled(&self, enabled: bool) {
        let was = self.enabled.swap(enabled, Ordering::AcqRel);
        if was != enabled {
            log_state(enabled);
        }
    }

    /// Flip the flag and return the new state.
    pub fn toggle(&self) -> bool {
        toggle_flag(&self.enabled)
    }
}

fn toggle_flag(flag: &AtomicBool) -> bool {
    let enabled = !flag.fetch_xor(true, Ordering::AcqRel);
    log_state(enabled);
    enabled
}

fn log_state(enabled: bool) {
    if enabled {
        tracing::info!("text processing enabled");
    } else {
        tracing::info!("text processing disabled");
    }
}
