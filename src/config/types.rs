//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_BASE_URL, DEFAULT_MAX_WORKERS, DEFAULT_OUTPUT_DIR, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_ROLL_LIMIT, DEFAULT_USER_AGENT, MAX_WORKERS_HARD_CAP,
};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use exam_results::Config;
///
/// let config = Config {
///     max_workers: 2,
///     request_timeout_secs: 10,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Result form URL (GET for the first page, POST for every postback)
    pub base_url: String,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// Concurrent form sessions in bulk mode
    pub max_workers: usize,

    /// Upper bound on generated enrollment numbers in bulk mode
    pub roll_limit: usize,

    /// Directory receiving archived pages and the CSV summary
    pub output_dir: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_workers: DEFAULT_MAX_WORKERS,
            roll_limit: DEFAULT_ROLL_LIMIT,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks the values the run depends on before any request is made.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first offending option.
    pub fn validate(&self) -> Result<(), ConfigError> {
        url::Url::parse(&self.base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(self.base_url.clone(), e))?;
        if self.max_workers == 0 || self.max_workers > MAX_WORKERS_HARD_CAP {
            return Err(ConfigError::WorkersOutOfRange {
                requested: self.max_workers,
                max: MAX_WORKERS_HARD_CAP,
            });
        }
        if self.roll_limit == 0 {
            return Err(ConfigError::ZeroRollLimit);
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Command-line options.
///
/// Every run option can also come from the environment (or a `.env` file),
/// under the name shown in `--help`.
///
/// ```bash
/// # Interactive: pick institute/degree/semester/exam and the mode from menus
/// exam_results
///
/// # Non-interactive single lookup
/// exam_results --institute 1 --degree 3 --semester 2 --exam 41 single 25CE099
///
/// # Bulk over 25CE001..25CE060 with two workers
/// MAX_WORKERS=2 exam_results bulk 25CE --count 60
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "exam_results",
    about = "Fetches exam results for one enrollment number or a numbered batch."
)]
pub struct Opt {
    /// Result form URL
    #[arg(long, env = "RESULT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// HTTP User-Agent header value
    #[arg(long, env = "USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout: u64,

    /// Concurrent form sessions in bulk mode (2-3 recommended, 4 max)
    #[arg(long, env = "MAX_WORKERS", default_value_t = DEFAULT_MAX_WORKERS)]
    pub max_workers: usize,

    /// Upper bound on generated enrollment numbers in bulk mode
    #[arg(long, env = "ROLL_LIMIT", default_value_t = DEFAULT_ROLL_LIMIT)]
    pub roll_limit: usize,

    /// Directory for archived result pages and the CSV summary
    #[arg(long, env = "OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    #[command(flatten)]
    pub selection: SelectionArgs,

    #[command(subcommand)]
    pub mode: Option<Mode>,
}

/// Pre-selected dropdown values. Any value left out is picked from a menu.
#[derive(Debug, Clone, Default, Args)]
pub struct SelectionArgs {
    /// Institute option value
    #[arg(long)]
    pub institute: Option<String>,

    /// Degree option value
    #[arg(long)]
    pub degree: Option<String>,

    /// Semester option value
    #[arg(long)]
    pub semester: Option<String>,

    /// Exam option value
    #[arg(long)]
    pub exam: Option<String>,
}

/// Run mode.
#[derive(Debug, Clone, Subcommand)]
pub enum Mode {
    /// Fetch the result of one enrollment number
    Single {
        /// Full enrollment number, e.g. 25CE099
        enrollment: String,
    },
    /// Fetch results for PREFIX001, PREFIX002, ... concurrently
    Bulk {
        /// Roll prefix, e.g. 25CE
        prefix: String,

        /// How many numbers to try (defaults to, and is capped at, the roll limit)
        #[arg(long)]
        count: Option<usize>,
    },
}

impl Opt {
    /// Builds the library configuration from the parsed options.
    pub fn config(&self) -> Config {
        Config {
            base_url: self.base_url.clone(),
            user_agent: self.user_agent.clone(),
            request_timeout_secs: self.request_timeout,
            max_workers: self.max_workers,
            roll_limit: self.roll_limit,
            output_dir: self.output_dir.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_workers, 3);
        assert_eq!(config.roll_limit, 120);
        assert_eq!(config.request_timeout_secs, 20);
        assert_eq!(config.user_agent, "Mozilla/5.0");
        assert_eq!(config.output_dir, PathBuf::from("results"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_worker_counts_outside_cap() {
        let zero = Config {
            max_workers: 0,
            ..Default::default()
        };
        assert!(matches!(
            zero.validate(),
            Err(ConfigError::WorkersOutOfRange { requested: 0, .. })
        ));

        let five = Config {
            max_workers: 5,
            ..Default::default()
        };
        assert!(matches!(
            five.validate(),
            Err(ConfigError::WorkersOutOfRange { requested: 5, max: 4 })
        ));

        let four = Config {
            max_workers: 4,
            ..Default::default()
        };
        assert!(four.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_limits_and_bad_url() {
        let no_rolls = Config {
            roll_limit: 0,
            ..Default::default()
        };
        assert!(matches!(no_rolls.validate(), Err(ConfigError::ZeroRollLimit)));

        let no_timeout = Config {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(no_timeout.validate(), Err(ConfigError::ZeroTimeout)));

        let bad_url = Config {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            bad_url.validate(),
            Err(ConfigError::InvalidBaseUrl(..))
        ));
    }

    #[test]
    fn test_opt_parses_bulk_mode_with_selection() {
        let opt = Opt::try_parse_from([
            "exam_results",
            "--institute",
            "1",
            "--degree",
            "3",
            "--max-workers",
            "2",
            "bulk",
            "25CE",
            "--count",
            "40",
        ])
        .expect("arguments should parse");

        assert_eq!(opt.selection.institute.as_deref(), Some("1"));
        assert_eq!(opt.selection.degree.as_deref(), Some("3"));
        assert!(opt.selection.semester.is_none());
        assert_eq!(opt.config().max_workers, 2);
        match opt.mode {
            Some(Mode::Bulk { prefix, count }) => {
                assert_eq!(prefix, "25CE");
                assert_eq!(count, Some(40));
            }
            other => panic!("expected bulk mode, got {:?}", other),
        }
    }

    #[test]
    fn test_opt_without_mode_is_interactive() {
        let opt = Opt::try_parse_from(["exam_results"]).expect("no arguments should parse");
        assert!(opt.mode.is_none());
    }
}
