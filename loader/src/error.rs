//! Loader error types.

use core::fmt;

#[cfg(feature = "std")]
use std::path::PathBuf;

/// Which header table an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Program,
    Section,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Program => write!(f, "program header"),
            Self::Section => write!(f, "section header"),
        }
    }
}

/// ELF32 loading errors.
///
/// Every variant is an expected outcome for malformed input. None of them
/// is produced by reading outside the image.
#[derive(thiserror::Error, Debug)]
pub enum ElfError {
    /// The file could not be read from storage.
    #[cfg(feature = "std")]
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A declared offset/size runs past the end of the image.
    #[error("{size:#x} bytes at offset {offset:#x} exceed image length {len:#x}")]
    TruncatedFile { offset: u64, size: u64, len: usize },

    /// The first four bytes are not 0x7F 'E' 'L' 'F'.
    #[error("bad ELF magic {found:02x?}")]
    BadMagic { found: [u8; 4] },

    /// The file class is not ELFCLASS32.
    #[error("unsupported ELF class {class}")]
    UnsupportedClass { class: u8 },

    /// `EI_DATA` is neither little nor big endian.
    #[error("unsupported data encoding {encoding}")]
    UnsupportedEncoding { encoding: u8 },

    /// `EI_VERSION` is not EV_CURRENT.
    #[error("unsupported ELF version {version}")]
    UnsupportedVersion { version: u8 },

    /// A non-empty table declares entries smaller than the ELF32 record.
    #[error("{table} entry size {size} is too small")]
    InvalidEntrySize { table: Table, size: u16 },

    /// Requested entry is beyond the table's entry count.
    #[error("{table} index {index} out of range (count {count})")]
    IndexOutOfRange {
        table: Table,
        index: usize,
        count: usize,
    },

    /// `e_shstrndx` is SHN_UNDEF.
    #[error("no section header string table")]
    NoStringTable,

    /// Name offset is outside the string table or is not NUL-terminated.
    #[error("malformed string at offset {offset:#x}")]
    MalformedString { offset: u32 },

    /// The section is SHT_NOBITS and has no bytes in the file.
    #[error("section {index} occupies no file space")]
    NoFileStorage { index: usize },
}

pub type Result<T> = core::result::Result<T, ElfError>;
