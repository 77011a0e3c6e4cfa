//! Configuration file loading and settings resolution.
//!
//! Settings come from three layers, highest priority first: command-line
//! flags, the TOML config file, built-in defaults.

use std::path::Path;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::ElfInfoError;
use crate::output::OutputFormat;

/// Bytes per row in hex dumps when nothing else is configured.
pub const DEFAULT_HEXDUMP_WIDTH: usize = 16;
/// Widest hex dump row accepted from a config file.
pub const MAX_HEXDUMP_WIDTH: usize = 256;

/// Contents of an elfinfo TOML config file. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputFormat>,
    /// One of off, error, warn, info, debug, trace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hexdump_width: Option<usize>,
}

/// Parse a config file from a path.
pub fn load_config(path: &Path) -> Result<Config, ElfInfoError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ElfInfoError::ConfigParseError(format!("config file not found: {}", path.display()))
        } else {
            ElfInfoError::Io(e)
        }
    })?;
    parse_config_str(&content)
}

/// Parse a config file from a TOML string.
pub fn parse_config_str(content: &str) -> Result<Config, ElfInfoError> {
    let config: Config = toml::from_str(content)
        .map_err(|e| ElfInfoError::ConfigParseError(format!("invalid TOML: {e}")))?;
    if let Some(width) = config.hexdump_width {
        check_width(width)?;
    }
    if let Some(level) = &config.log_level {
        parse_level(level)?;
    }
    Ok(config)
}

fn check_width(width: usize) -> Result<usize, ElfInfoError> {
    if !(1..=MAX_HEXDUMP_WIDTH).contains(&width) {
        return Err(ElfInfoError::ConfigParseError(format!(
            "hexdump_width must be between 1 and {MAX_HEXDUMP_WIDTH}, got {width}"
        )));
    }
    Ok(width)
}

fn parse_level(level: &str) -> Result<LevelFilter, ElfInfoError> {
    LevelFilter::from_str(level)
        .map_err(|_| ElfInfoError::ConfigParseError(format!("invalid log_level '{level}'")))
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub output: OutputFormat,
    pub log_level: LevelFilter,
    pub hexdump_width: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: OutputFormat::Human,
            log_level: LevelFilter::Warn,
            hexdump_width: DEFAULT_HEXDUMP_WIDTH,
        }
    }
}

impl Settings {
    /// Merge command-line flags over a config file over defaults.
    ///
    /// `verbose` counts `-v` flags; zero defers to the config file.
    pub fn resolve(
        output: Option<OutputFormat>,
        verbose: u8,
        config: &Config,
    ) -> Result<Self, ElfInfoError> {
        let defaults = Self::default();

        let log_level = match verbose {
            0 => match &config.log_level {
                Some(level) => parse_level(level)?,
                None => defaults.log_level,
            },
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        Ok(Self {
            output: output.or(config.output).unwrap_or(defaults.output),
            log_level,
            hexdump_width: match config.hexdump_width {
                Some(width) => check_width(width)?,
                None => defaults.hexdump_width,
            },
        })
    }

    /// Resolve settings for a parsed command line, loading `--config` if given.
    pub fn from_cli(cli: &Cli) -> Result<Self, ElfInfoError> {
        let config = match &cli.config {
            Some(path) => load_config(path)?,
            None => Config::default(),
        };
        Self::resolve(cli.output, cli.verbose, &config)
    }
}
