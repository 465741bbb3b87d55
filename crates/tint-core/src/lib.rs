#![forbid(unsafe_code)]

//! Processing control around the tint markup parser.
//!
//! - [`gate`] - enable toggle and debounce for live input
//! - [`policy`] - per-destination enable rules
//! - [`settings`] - user settings document
//! - [`store`] - JSON documents on disk
//! - [`worker`] - background preview with stale-result protection
//! - [`session`] - everything above for one chat input field
//! - [`logging`] - tracing re-exports and subscriber setup

pub mod gate;
pub mod logging;
pub mod policy;
pub mod session;
pub mod settings;
pub mod store;
pub mod worker;

pub use gate::{DEFAULT_DEBOUNCE, ProcessingGate, ToggleHandle};
pub use policy::DestinationPolicy;
pub use session::ChatSession;
pub use settings::Settings;
pub use store::{ConfigError, ConfigResult, JsonStore, POLICY_FILE, SETTINGS_FILE, default_dir};
pub use worker::{PreviewResult, PreviewWorker, RevisionToken};
