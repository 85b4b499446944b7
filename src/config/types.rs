//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
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
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Mirror list output format of the CLI.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// One mirror per line: hostname, URL, country, region, tier
    Text,
    /// A JSON document per queried address
    Json,
}

/// Command-line options.
#[derive(Debug, Parser)]
#[command(
    name = "mirrorselect",
    about = "Ranks content mirrors by geographic proximity to a client address"
)]
pub struct Opt {
    /// Client addresses to select mirrors for
    #[arg(value_name = "ADDR", required = true)]
    pub addresses: Vec<IpAddr>,

    /// Mirror definition file or directory of definition files
    #[arg(short, long, value_name = "PATH")]
    pub mirrors: PathBuf,

    /// GeoLite2-City database (.mmdb); defaults to the GEOIP_DB env var
    #[arg(short, long, value_name = "PATH")]
    pub geoip: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}
