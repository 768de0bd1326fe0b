//! Command-line configuration.

use std::ffi::OsString;
use std::path::PathBuf;
use tracing::Level;

pub const HELP_TEXT: &str = "kilo - minimal terminal text viewer

USAGE:
    kilo [OPTIONS] [FILE]

ARGS:
    [FILE]                  Show the first line of FILE

OPTIONS:
    -h, --help              Print this help message and exit
    -V, --version           Print version and exit
    --log-file <PATH>       Append diagnostic logs to PATH
    --log-level <LEVEL>     error, warn, info, debug or trace (default: info)

KEYS:
    Arrows, Home/End, PgUp/PgDn   Move the cursor
    Ctrl-X                        Quit
";

/// Application configuration parsed from command-line arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// File whose first line is shown.
    pub file: Option<PathBuf>,
    /// Where to write logs. Logging is off without one.
    pub log_file: Option<PathBuf>,
    /// Most verbose level written to the log file.
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: None,
            log_file: None,
            log_level: Level::INFO,
        }
    }
}

/// Result of CLI parsing.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// User requested the version.
    Version,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// The first item is the program name and is skipped.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,
                "-V" | "--version" => return ParseResult::Version,

                "--log-file" => match args.next() {
                    Some(path) => config.log_file = Some(PathBuf::from(path)),
                    None => return ParseResult::Error("--log-file requires a value".to_string()),
                },

                "--log-level" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => {
                            return ParseResult::Error("--log-level requires a value".to_string());
                        }
                    };
                    match value.parse::<Level>() {
                        Ok(level) => config.log_level = level,
                        Err(_) => {
                            return ParseResult::Error(format!(
                                "Invalid --log-level: {value} \
                                 (valid: error, warn, info, debug, trace)"
                            ));
                        }
                    }
                }

                other => {
                    if other.starts_with('-') && other != "-" {
                        return ParseResult::Error(format!("Unknown option: {other}"));
                    }
                    if config.file.is_some() {
                        return ParseResult::Error(format!("Unexpected argument: {other}"));
                    }
                    config.file = Some(PathBuf::from(arg));
                }
            }
        }

        ParseResult::Config(config)
    }
}
