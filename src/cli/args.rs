/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// addycsv — back up addy.io email aliases to a CSV file.
#[derive(Debug, Parser)]
#[command(
    name = "addycsv",
    about = "Back up addy.io email aliases to a CSV file",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// The addy.io API token, or the path of a file whose first line is the token.
    pub token: String,

    /// Destination CSV file. Overwritten (atomically) on success.
    pub output: PathBuf,

    /// Severity threshold for log output on stderr.
    #[arg(long, value_enum, value_name = "LEVEL", default_value_t = LogLevel::Warning)]
    pub log_level: LogLevel,

    /// Comma-separated column names to export, in order.
    /// Defaults to all known columns in schema order.
    #[arg(long, value_name = "NAMES")]
    pub columns: Option<String>,
}

/// Log severity levels selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum LogLevel {
    /// Everything, including per-page progress.
    Debug,
    /// Coarse progress (pages fetched, rows written).
    Info,
    /// Only warnings and errors.
    #[default]
    Warning,
    /// Only errors.
    Error,
    /// Alias for `error`; nothing below a fatal message.
    Critical,
}

impl LogLevel {
    /// The `tracing` filter directive equivalent to this level.
    #[must_use]
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error | Self::Critical => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_positional_args() {
        let cli = Cli::try_parse_from(["addycsv", "tok", "out.csv"]).unwrap();
        assert_eq!(cli.token, "tok");
        assert_eq!(cli.output, PathBuf::from("out.csv"));
        assert_eq!(cli.log_level, LogLevel::Warning);
        assert!(cli.columns.is_none());
    }

    #[test]
    fn test_parses_options() {
        let cli = Cli::try_parse_from([
            "addycsv",
            "tok",
            "out.csv",
            "--log-level",
            "debug",
            "--columns",
            "id,email",
        ])
        .unwrap();
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert_eq!(cli.columns.as_deref(), Some("id,email"));
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let result = Cli::try_parse_from(["addycsv", "tok", "out.csv", "--log-level", "loud"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_critical_maps_to_error_directive() {
        assert_eq!(LogLevel::Critical.as_directive(), "error");
        assert_eq!(LogLevel::Warning.as_directive(), "warn");
    }
}
