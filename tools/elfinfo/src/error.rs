use std::process::ExitCode;

use elf32_loader::ElfError;

/// All errors produced by elfinfo.
///
/// Variants are split into two categories:
/// - **Infrastructure errors** (exit code 2): unreadable files, bad config, I/O failures
/// - **Image errors** (exit code 1): the file was read but is not a usable ELF32 image
#[derive(thiserror::Error, Debug)]
pub enum ElfInfoError {
    // ── Infrastructure errors (exit code 2) ──────────────────────────

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("Invalid section name pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Image errors (exit code 1) ───────────────────────────────────

    /// Loader failure; `ElfError::Io` is still an infrastructure error.
    #[error("{0}")]
    Elf(#[from] ElfError),

    #[error("Section not found: {name}")]
    SectionNotFound { name: String },
}

impl ElfInfoError {
    /// Map each error variant to its process exit code.
    ///
    /// - `2` — infrastructure error (I/O, config, bad arguments)
    /// - `1` — the image is malformed or lacks what was asked for
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_code_num())
    }

    /// Short machine-readable category used in JSON error reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConfigParseError(_) => "config",
            Self::InvalidPattern { .. } => "pattern",
            Self::Io(_) | Self::Elf(ElfError::Io { .. }) => "io",
            Self::Json(_) => "json",
            Self::Elf(_) => "image",
            Self::SectionNotFound { .. } => "section-not-found",
        }
    }

    pub fn exit_code_num(&self) -> u8 {
        match self {
            Self::ConfigParseError(_)
            | Self::InvalidPattern { .. }
            | Self::Io(_)
            | Self::Json(_)
            | Self::Elf(ElfError::Io { .. }) => 2,

            Self::Elf(_) | Self::SectionNotFound { .. } => 1,
        }
    }
}
