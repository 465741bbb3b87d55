#![forbid(unsafe_code)]

//! Per-destination enable policy.
//!
//! Maps a destination identifier (server address, channel name, ...) to
//! whether processing is allowed there. Identifiers without a rule fall back
//! to the default.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Destination id → enabled, with a default for unknown ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationPolicy {
    default_enabled: bool,
    rules: HashMap<String, bool>,
}

impl Default for DestinationPolicy {
    fn default() -> Self {
        Self::new(true)
    }
}

impl DestinationPolicy {
    /// Empty policy with the given default.
    #[must_use]
    pub fn new(default_enabled: bool) -> Self {
        Self {
            default_enabled,
            rules: HashMap::new(),
        }
    }

    /// Whether processing is enabled for `destination`.
    ///
    /// `None` and the empty string resolve to the default.
    #[must_use]
    pub fn is_enabled(&self, destination: Option<&str>) -> bool {
        match destination {
            Some(id) if !id.is_empty() => {
                self.rules.get(id).copied().unwrap_or(self.default_enabled)
            }
            _ => self.default_enabled,
        }
    }

    #[must_use]
    pub fn default_enabled(&self) -> bool {
        self.default_enabled
    }

    pub fn set_default(&mut self, enabled: bool) {
        self.default_enabled = enabled;
    }

    /// Store a rule for `destination`, replacing any previous one.
    pub fn set_rule(&mut self, destination: impl Into<String>, enabled: bool) {
        let destination = destination.into();
        tracing::debug!(destination = %destination, enabled, "destination rule set");
        self.rules.insert(destination, enabled);
    }

    /// Remove the rule for `destination`, returning its old value.
    pub fn remove_rule(&mut self, destination: &str) -> Option<bool> {
        self.rules.remove(destination)
    }

    /// Stored rule for `destination`, without the default applied.
    #[must_use]
    pub fn rule(&self, destination: &str) -> Option<bool> {
        self.rules.get(destination).copied()
    }

    /// Iterate over stored rules (unordered).
    pub fn rules(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.rules.iter().map(|(k, &v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
