#![forbid(unsafe_code)]

//! `tint-preview` harness: feeds text through the tint pipeline and prints
//! the result.

pub mod cli;

use serde_json::json;
use tint::{ChatSession, DestinationPolicy, JsonStore, Settings, StyledRun, StyledText};

use crate::cli::{Format, Opts};

/// Settings, rules and session configured from command-line options.
#[derive(Debug)]
pub struct Pipeline {
    session: ChatSession,
    format: Format,
}

impl Pipeline {
    /// Load the documents named in `opts` and start a session.
    pub fn from_opts(opts: &Opts) -> tint::Result<Self> {
        let mut settings = match &opts.config {
            Some(path) => JsonStore::<Settings>::new(path).load()?,
            None => Settings::default(),
        };
        if opts.no_hex {
            settings.enable_hex_color = false;
        }
        if opts.no_segmented {
            settings.enable_segmented_hex_color = false;
        }
        let policy = match &opts.servers {
            Some(path) => JsonStore::<DestinationPolicy>::new(path).load()?,
            None => DestinationPolicy::default(),
        };

        let mut session = ChatSession::new(settings, policy)?;
        session.set_destination(opts.destination.clone());
        tracing::debug!(
            active = session.is_active(),
            format = ?opts.format,
            "pipeline ready"
        );
        Ok(Self {
            session,
            format: opts.format,
        })
    }

    #[must_use]
    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Styled runs for `line`; a single unstyled run when processing is off.
    #[must_use]
    pub fn runs(&self, line: &str) -> StyledText {
        if self.session.is_active() {
            self.session.preview(line)
        } else {
            StyledText::from(vec![StyledRun::plain(line)])
        }
    }

    /// Render one input line in the configured format.
    #[must_use]
    pub fn render(&self, line: &str) -> String {
        match self.format {
            Format::Json => {
                let runs = self.runs(line);
                json!({
                    "input": line,
                    "processed": self.session.process_text(line),
                    "segmented": tint::text::count_segmented(line),
                    "runs": runs,
                })
                .to_string()
            }
            Format::Plain => self.runs(line).to_plain_text(),
            Format::Markup => self.runs(line).to_markup(),
            Format::Normalized => self.session.process_text(line).into_owned(),
        }
    }
}
