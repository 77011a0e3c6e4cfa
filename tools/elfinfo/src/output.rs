use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::MAX_HEXDUMP_WIDTH;
use crate::error::ElfInfoError;

/// Output format selection for all subcommands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Single JSON object on stdout.
    Json,
    /// Human-readable listing on stdout.
    #[default]
    Human,
}

impl OutputFormat {
    /// Spelling shared by `--output` and the config file.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Human => "human",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a successful result.
///
/// - **Json**: a single JSON object, no extraneous text.
/// - **Human**: the `Display` representation.
pub fn render<T: Serialize + fmt::Display>(format: OutputFormat, value: &T) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string(value),
        OutputFormat::Human => Ok(value.to_string()),
    }
}

/// Write a successful result to stdout.
pub fn emit<T: Serialize + fmt::Display>(format: OutputFormat, value: &T) -> Result<(), serde_json::Error> {
    let text = render(format, value)?;
    println!("{}", text.trim_end_matches('\n'));
    Ok(())
}

/// JSON shape of a failed run.
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub error: String,
    pub kind: &'static str,
    pub exit_code: u8,
}

impl From<&ElfInfoError> for ErrorReport {
    fn from(err: &ElfInfoError) -> Self {
        Self {
            error: err.to_string(),
            kind: err.kind(),
            exit_code: err.exit_code_num(),
        }
    }
}

/// Report a failed run. JSON goes to stdout so scripted callers always get
/// one object there; human text goes to stderr.
pub fn emit_error(format: OutputFormat, err: &ElfInfoError) {
    let report = ErrorReport::from(err);
    match format {
        OutputFormat::Json => match serde_json::to_string(&report) {
            Ok(text) => println!("{text}"),
            Err(_) => eprintln!("elfinfo: {}", report.error),
        },
        OutputFormat::Human => eprintln!("elfinfo: {}", report.error),
    }
}

/// Classic 16-column style hex dump; `base` is the file offset of `bytes[0]`.
///
/// `width` is clamped to `1..=MAX_HEXDUMP_WIDTH`.
pub fn hexdump(bytes: &[u8], base: u64, width: usize) -> String {
    let width = width.clamp(1, MAX_HEXDUMP_WIDTH);
    let mut out = String::new();
    for (row, chunk) in bytes.chunks(width).enumerate() {
        let offset = base.wrapping_add((row * width) as u64);
        let hex: Vec<String> = chunk.iter().map(|b| format!("{b:02x}")).collect();
        let ascii: String = chunk
            .iter()
            .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' })
            .collect();
        out.push_str(&format!(
            "  {offset:08x}  {:<pad$}  |{ascii}|\n",
            hex.join(" "),
            pad = width * 3 - 1
        ));
    }
    out
}
