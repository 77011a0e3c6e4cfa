use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::output::OutputFormat;

/// Inspect the headers, segments, sections and names of ELF32 files.
#[derive(Parser, Debug)]
#[command(name = "elfinfo", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format for all subcommands (overrides the config file).
    #[arg(long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// TOML config file with defaults for output, log level and dump width.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the file and print its ELF header.
    Header(FileArg),

    /// List the program header table.
    Programs(FileArg),

    /// List the section header table with resolved names.
    Sections(SectionsArgs),

    /// Dump the file bytes of one segment.
    SegmentData(SegmentDataArgs),

    /// Dump the file bytes of one section, by index or name.
    SectionData(SectionDataArgs),

    /// Resolve an offset in the section-header string table.
    Name(NameArgs),
}

// ── Shared argument structs ──────────────────────────────────────────

/// Argument struct for subcommands that only need a file.
#[derive(clap::Args, Debug)]
pub struct FileArg {
    /// Path to the ELF32 file.
    pub file: PathBuf,
}

// ── sections ─────────────────────────────────────────────────────────

#[derive(clap::Args, Debug)]
pub struct SectionsArgs {
    /// Path to the ELF32 file.
    pub file: PathBuf,

    /// Only list sections whose name matches this regex.
    #[arg(long = "match")]
    pub pattern: Option<String>,
}

// ── segment-data / section-data ──────────────────────────────────────

#[derive(clap::Args, Debug)]
pub struct SegmentDataArgs {
    /// Path to the ELF32 file.
    pub file: PathBuf,

    /// Zero-based program header index.
    pub index: usize,

    /// Write the raw bytes to stdout instead of a dump.
    #[arg(long, default_value_t = false)]
    pub raw: bool,
}

#[derive(clap::Args, Debug)]
pub struct SectionDataArgs {
    /// Path to the ELF32 file.
    pub file: PathBuf,

    /// Zero-based section index, or a section name such as `.text`.
    pub section: String,

    /// Write the raw bytes to stdout instead of a dump.
    #[arg(long, default_value_t = false)]
    pub raw: bool,
}

// ── name ─────────────────────────────────────────────────────────────

#[derive(clap::Args, Debug)]
pub struct NameArgs {
    /// Path to the ELF32 file.
    pub file: PathBuf,

    /// Byte offset into the section-header string table (decimal or 0x-prefixed hex).
    #[arg(value_parser = parse_offset)]
    pub offset: u32,
}

/// Parse a decimal or `0x`-prefixed hexadecimal offset.
pub fn parse_offset(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    };
    parsed.map_err(|e| format!("invalid offset '{s}': {e}"))
}
