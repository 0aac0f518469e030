//! Command-line interface definition using clap.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};

use crate::config::ParserConfig;

/// Recover structured messages from an exported WhatsApp-style chat log.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt -f csv -o chat.csv
    chatlens chat.txt --summary
    chatlens old_chat.txt --min-year 1995 -f text")]
pub struct Args {
    /// Path to the exported chat log
    pub input: PathBuf,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Fail instead of running lenient recovery when no header line matches
    #[arg(long)]
    pub no_fallback: bool,

    /// Earliest accepted timestamp year
    #[arg(long, value_name = "YEAR", default_value_t = ParserConfig::DEFAULT_MIN_YEAR)]
    pub min_year: i32,

    /// Latest accepted timestamp year
    #[arg(long, value_name = "YEAR", default_value_t = ParserConfig::DEFAULT_MAX_YEAR)]
    pub max_year: i32,

    /// Print participants, date range and counts instead of messages
    #[arg(long)]
    pub summary: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parses arguments and checks constraints that span several flags.
    pub fn try_parse_checked_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Self::try_parse_from(args)?;
        args.check_year_range()?;
        Ok(args)
    }

    fn check_year_range(&self) -> Result<(), clap::Error> {
        if self.min_year > self.max_year {
            return Err(Self::command().error(
                ErrorKind::ArgumentConflict,
                format!(
                    "--min-year {} is after --max-year {}",
                    self.min_year, self.max_year
                ),
            ));
        }
        Ok(())
    }

    /// Builds the parser configuration these arguments describe.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new()
            .with_year_range(self.min_year, self.max_year)
            .with_lenient_fallback(!self.no_fallback)
    }
}

/// Output formats accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    /// The whole chat with its summary as pretty JSON
    #[default]
    Json,

    /// One JSON message object per line
    #[value(alias = "ndjson")]
    Jsonl,

    /// Semicolon-delimited message table
    Csv,

    /// Re-exported log text, one canonical header per message
    Text,
}

impl OutputFormat {
    /// Maps to the library format, or `None` for plain-text re-export.
    pub fn to_library(self) -> Option<crate::format::OutputFormat> {
        match self {
            OutputFormat::Json => Some(crate::format::OutputFormat::Json),
            OutputFormat::Jsonl => Some(crate::format::OutputFormat::Jsonl),
            OutputFormat::Csv => Some(crate::format::OutputFormat::Csv),
            OutputFormat::Text => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_library() {
            Some(format) => write!(f, "{format}"),
            None => write!(f, "TEXT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["chatlens", "chat.txt"]).unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.output.is_none());
        assert!(!args.summary);
        assert_eq!(args.parser_config(), ParserConfig::default());
    }

    #[test]
    fn test_parser_config_from_flags() {
        let args = Args::try_parse_from([
            "chatlens",
            "chat.txt",
            "--no-fallback",
            "--min-year",
            "1990",
            "--max-year",
            "2040",
        ])
        .unwrap();
        let config = args.parser_config();
        assert!(!config.lenient_fallback);
        assert_eq!(config.years(), 1990..=2040);
    }

    #[test]
    fn test_inverted_year_range_rejected() {
        let err = Args::try_parse_checked_from([
            "chatlens",
            "chat.txt",
            "--min-year",
            "2030",
            "--max-year",
            "2000",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        let single_year = Args::try_parse_checked_from([
            "chatlens",
            "chat.txt",
            "--min-year",
            "2020",
            "--max-year",
            "2020",
        ])
        .unwrap();
        assert_eq!(single_year.parser_config().years(), 2020..=2020);
    }

    #[test]
    fn test_format_values() {
        let args = Args::try_parse_from(["chatlens", "chat.txt", "-f", "ndjson"]).unwrap();
        assert_eq!(args.format, OutputFormat::Jsonl);
        assert_eq!(OutputFormat::Text.to_library(), None);
        assert_eq!(OutputFormat::Text.to_string(), "TEXT");
        assert_eq!(OutputFormat::Csv.to_string(), "CSV");
        assert!(Args::try_parse_from(["chatlens", "chat.txt", "-f", "xml"]).is_err());
    }
}
