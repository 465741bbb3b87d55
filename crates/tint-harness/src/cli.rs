#![forbid(unsafe_code)]

//! Command-line argument parsing for `tint-preview`.
//!
//! Parses args manually to keep the binary lean. Supports environment
//! variable overrides via the `TINT_PREVIEW_*` prefix.

use std::env;
use std::path::PathBuf;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
tint-preview - render chat color markup as styled runs

USAGE:
    tint-preview [OPTIONS] [TEXT...]

Without TEXT, every line of standard input is processed.

OPTIONS:
    --format=FMT         Output: 'json' (default), 'plain', 'markup', 'normalized'
    --no-hex             Do not recognize #RRGGBB
    --no-segmented       Do not rewrite &X&R&R&G&G&B&B
    --destination=ID     Destination id checked against the server rules
    --config=PATH        Settings document (created with defaults if missing)
    --servers=PATH       Server rules document (created with defaults if missing)
    --help, -h           Show this help message
    --version, -V        Show version

MARKUP:
    #RRGGBB              Hex color, keeps decorations
    &X&R&R&G&G&B&B       Segmented hex color
    &0-&9, &a-&f         Named color, clears decorations
    &k &l &m &n &o       Obfuscated, bold, strikethrough, underline, italic
    &r                   Reset

ENVIRONMENT VARIABLES:
    TINT_PREVIEW_FORMAT       Override --format
    TINT_PREVIEW_DESTINATION  Override --destination
    TINT_PREVIEW_CONFIG       Override --config
    TINT_PREVIEW_SERVERS      Override --servers
    TINT_LOG                  Log filter (default: warn)";

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// One JSON object per input line.
    #[default]
    Json,
    /// Markup stripped.
    Plain,
    /// Canonical re-serialized markup.
    Markup,
    /// Segmented colors rewritten, everything else untouched.
    Normalized,
}

impl Format {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "json" => Some(Self::Json),
            "plain" => Some(Self::Plain),
            "markup" => Some(Self::Markup),
            "normalized" => Some(Self::Normalized),
            _ => None,
        }
    }
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    pub format: Format,
    /// Force `#RRGGBB` off regardless of settings.
    pub no_hex: bool,
    /// Force segmented colors off regardless of settings.
    pub no_segmented: bool,
    pub destination: Option<String>,
    pub config: Option<PathBuf>,
    pub servers: Option<PathBuf>,
    /// Text from the command line; `None` means read stdin.
    pub text: Option<String>,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            format: Format::Json,
            no_hex: false,
            no_segmented: false,
            destination: None,
            config: None,
            servers: None,
            text: None,
        }
    }
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Opts),
    Help,
    Version,
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags. Exits the process on `--help`,
    /// `--version` or bad input.
    pub fn parse() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();
        match Self::parse_from(&args, |key| env::var(key).ok()) {
            Ok(Command::Run(opts)) => opts,
            Ok(Command::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Command::Version) => {
                println!("tint-preview {VERSION}");
                process::exit(0);
            }
            Err(msg) => {
                eprintln!("{msg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Parse `args` with `env_var` as the environment lookup.
    pub fn parse_from(
        args: &[String],
        env_var: impl Fn(&str) -> Option<String>,
    ) -> Result<Command, String> {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Some(val) = env_var("TINT_PREVIEW_FORMAT") {
            opts.format =
                Format::parse(&val).ok_or_else(|| format!("Invalid TINT_PREVIEW_FORMAT: {val}"))?;
        }
        if let Some(val) = env_var("TINT_PREVIEW_DESTINATION") {
            opts.destination = Some(val);
        }
        if let Some(val) = env_var("TINT_PREVIEW_CONFIG") {
            opts.config = Some(PathBuf::from(val));
        }
        if let Some(val) = env_var("TINT_PREVIEW_SERVERS") {
            opts.servers = Some(PathBuf::from(val));
        }

        // Parse command-line args (override env vars)
        let mut words: Vec<&str> = Vec::new();
        let mut rest_is_text = false;
        for arg in args {
            if rest_is_text {
                words.push(arg);
                continue;
            }
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                "--no-hex" => opts.no_hex = true,
                "--no-segmented" => opts.no_segmented = true,
                "--" => rest_is_text = true,
                other => {
                    if let Some(val) = other.strip_prefix("--format=") {
                        opts.format = Format::parse(val)
                            .ok_or_else(|| format!("Invalid --format value: {val}"))?;
                    } else if let Some(val) = other.strip_prefix("--destination=") {
                        opts.destination = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--config=") {
                        opts.config = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--servers=") {
                        opts.servers = Some(PathBuf::from(val));
                    } else if other.starts_with("--") {
                        return Err(format!("Unknown argument: {other}"));
                    } else {
                        words.push(other);
                    }
                }
            }
        }

        if !words.is_empty() {
            opts.text = Some(words.join(" "));
        }
        Ok(Command::Run(opts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn run(list: &[&str]) -> Opts {
        match Opts::parse_from(&args(list), no_env) {
            Ok(Command::Run(opts)) => opts,
            other => panic!("expected Run, got {other:?}"),
        }
    }

    #[test]
    fn default_opts() {
        let opts = Opts::default();
        assert_eq!(opts.format, Format::Json);
        assert!(!opts.no_hex);
        assert!(!opts.no_segmented);
        assert!(opts.text.is_none());
    }

    #[test]
    fn version_string_nonempty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn help_text_lists_markup() {
        assert!(HELP_TEXT.contains("&X&R&R&G&G&B&B"));
        assert!(HELP_TEXT.contains("--format=FMT"));
        assert!(HELP_TEXT.contains("TINT_LOG"));
    }

    #[test]
    fn flags_and_text() {
        let opts = run(&["--format=plain", "--no-hex", "&lHello", "world"]);
        assert_eq!(opts.format, Format::Plain);
        assert!(opts.no_hex);
        assert_eq!(opts.text.as_deref(), Some("&lHello world"));
    }

    #[test]
    fn double_dash_keeps_flags_as_text() {
        let opts = run(&["--", "--no-hex"]);
        assert!(!opts.no_hex);
        assert_eq!(opts.text.as_deref(), Some("--no-hex"));
    }

    #[test]
    fn help_and_version() {
        assert_eq!(Opts::parse_from(&args(&["-h"]), no_env), Ok(Command::Help));
        assert_eq!(
            Opts::parse_from(&args(&["--version"]), no_env),
            Ok(Command::Version)
        );
    }

    #[test]
    fn bad_values_are_errors() {
        assert!(Opts::parse_from(&args(&["--format=xml"]), no_env).is_err());
        assert!(Opts::parse_from(&args(&["--frobnicate"]), no_env).is_err());
    }

    #[test]
    fn env_overrides_and_cli_precedence() {
        let env = |key: &str| match key {
            "TINT_PREVIEW_FORMAT" => Some("markup".to_string()),
            "TINT_PREVIEW_DESTINATION" => Some("env.example".to_string()),
            _ => None,
        };
        let Ok(Command::Run(opts)) = Opts::parse_from(&args(&["--destination=cli.example"]), env)
        else {
            panic!("expected Run");
        };
        assert_eq!(opts.format, Format::Markup);
        assert_eq!(opts.destination.as_deref(), Some("cli.example"));
    }
}
