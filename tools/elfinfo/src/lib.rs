//! elfinfo: inspection front end over the ELF32 loader.
//!
//! Each subcommand maps onto one loader capability: header validation,
//! program segments, sections, and section-name resolution.

pub mod cli;
pub mod config;
pub mod error;
pub mod inspect;
pub mod logger;
pub mod output;

use std::io::Write;

use crate::cli::{Cli, Command};
use crate::config::Settings;
use crate::error::ElfInfoError;
use crate::inspect::{Inspector, SectionSelector};
use crate::output::emit;

/// Execute one parsed command line with resolved settings.
pub fn run(cli: &Cli, settings: &Settings) -> Result<(), ElfInfoError> {
    let format = settings.output;
    let width = settings.hexdump_width;

    match &cli.command {
        Command::Header(args) => emit(format, &Inspector::open(&args.file)?.header()?)?,
        Command::Programs(args) => emit(format, &Inspector::open(&args.file)?.programs()?)?,
        Command::Sections(args) => {
            let table = Inspector::open(&args.file)?.sections(args.pattern.as_deref())?;
            emit(format, &table)?
        }
        Command::SegmentData(args) => {
            let report = Inspector::open(&args.file)?.segment_data(args.index, width)?;
            if args.raw {
                write_raw(&report.bytes)?;
            } else {
                emit(format, &report)?;
            }
        }
        Command::SectionData(args) => {
            let selector = SectionSelector::parse(&args.section);
            let report = Inspector::open(&args.file)?.section_data(&selector, width)?;
            if args.raw {
                write_raw(&report.bytes)?;
            } else {
                emit(format, &report)?;
            }
        }
        Command::Name(args) => emit(format, &Inspector::open(&args.file)?.name(args.offset)?)?,
    }
    Ok(())
}

fn write_raw(bytes: &[u8]) -> Result<(), ElfInfoError> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(bytes)?;
    stdout.flush()?;
    Ok(())
}
