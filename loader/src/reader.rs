//! Bounds-checked field access over the image bytes.

use crate::consts::{ELFDATA2LSB, ELFDATA2MSB};
use crate::error::{ElfError, Result};

/// Byte order of multi-byte fields, as declared by `EI_DATA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    pub fn from_ident(data: u8) -> Option<Self> {
        match data {
            ELFDATA2LSB => Some(Self::Little),
            ELFDATA2MSB => Some(Self::Big),
            _ => None,
        }
    }
}

/// Borrow `size` bytes at `offset`, or fail with `TruncatedFile`.
pub(crate) fn bytes_at(data: &[u8], offset: u64, size: u64) -> Result<&[u8]> {
    let truncated = || ElfError::TruncatedFile {
        offset,
        size,
        len: data.len(),
    };

    let end = offset.checked_add(size).ok_or_else(truncated)?;
    let start = usize::try_from(offset).map_err(|_| truncated())?;
    let end = usize::try_from(end).map_err(|_| truncated())?;
    data.get(start..end).ok_or_else(truncated)
}

/// Sequential field decoder starting at an absolute image offset.
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: u64,
    endian: Endian,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8], pos: u64, endian: Endian) -> Self {
        Self { data, pos, endian }
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        let chunk = bytes_at(self.data, self.pos, N as u64)?;
        let mut out = [0u8; N];
        out.copy_from_slice(chunk);
        self.pos += N as u64;
        Ok(out)
    }

    pub fn bytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.take()
    }

    pub fn u16(&mut self) -> Result<u16> {
        let raw = self.take()?;
        Ok(match self.endian {
            Endian::Little => u16::from_le_bytes(raw),
            Endian::Big => u16::from_be_bytes(raw),
        })
    }

    pub fn u32(&mut self) -> Result<u32> {
        let raw = self.take()?;
        Ok(match self.endian {
            Endian::Little => u32::from_le_bytes(raw),
            Endian::Big => u32::from_be_bytes(raw),
        })
    }
}
