//! Owned ELF image buffers.

use alloc::vec::Vec;

#[cfg(feature = "std")]
use std::path::Path;

use log::debug;

use crate::error::{ElfError, Result};
use crate::file::ElfFile;
use crate::header::Elf32Header;

/// The complete bytes of one ELF32 file.
///
/// The buffer is never modified after construction; every view handed out
/// by [`Image::parse`] borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    bytes: Vec<u8>,
}

impl Image {
    /// Smallest buffer that can hold the fixed ELF32 header.
    pub const MIN_LEN: usize = Elf32Header::SIZE;

    /// Take ownership of bytes the caller already has.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.len() < Self::MIN_LEN {
            return Err(ElfError::TruncatedFile {
                offset: 0,
                size: Self::MIN_LEN as u64,
                len: bytes.len(),
            });
        }
        Ok(Self { bytes })
    }

    /// Read a whole file from storage.
    ///
    /// The result is a private copy; later changes to the file are not
    /// observed.
    #[cfg(feature = "std")]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ElfError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("[ELF32] read {} bytes from {}", bytes.len(), path.display());
        Self::from_bytes(bytes)
    }

    /// Validate the header and tables and return a navigable view.
    pub fn parse(&self) -> Result<ElfFile<'_>> {
        ElfFile::parse(&self.bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for Image {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
