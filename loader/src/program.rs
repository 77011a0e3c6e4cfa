//! ELF32 program headers (segments).

use bitflags::bitflags;

use crate::consts::*;
use crate::error::Result;
use crate::reader::{Cursor, Endian};

bitflags! {
    /// Segment permission flags (`p_flags`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SegmentFlags: u32 {
        /// Executable.
        const X = PF_X;
        /// Writable.
        const W = PF_W;
        /// Readable.
        const R = PF_R;
        /// Processor-specific bits.
        const MASKPROC = PF_MASKPROC;
    }
}

/// ELF32 program header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProgramHeader {
    /// Segment type
    pub p_type: u32,
    /// Segment file offset
    pub p_offset: u32,
    /// Segment virtual address
    pub p_vaddr: u32,
    /// Segment physical address
    pub p_paddr: u32,
    /// Segment size in file
    pub p_filesz: u32,
    /// Segment size in memory
    pub p_memsz: u32,
    /// Segment flags
    pub p_flags: u32,
    /// Segment alignment
    pub p_align: u32,
}

impl ProgramHeader {
    pub const SIZE: usize = 32;

    pub(crate) fn parse(data: &[u8], offset: u64, endian: Endian) -> Result<Self> {
        let mut cursor = Cursor::new(data, offset, endian);
        Ok(Self {
            p_type: cursor.u32()?,
            p_offset: cursor.u32()?,
            p_vaddr: cursor.u32()?,
            p_paddr: cursor.u32()?,
            p_filesz: cursor.u32()?,
            p_memsz: cursor.u32()?,
            p_flags: cursor.u32()?,
            p_align: cursor.u32()?,
        })
    }

    /// Permission flags; unknown bits are retained.
    pub fn flags(&self) -> SegmentFlags {
        SegmentFlags::from_bits_retain(self.p_flags)
    }

    pub fn is_load(&self) -> bool {
        self.p_type == PT_LOAD
    }

    /// Check if segment is readable
    pub fn is_readable(&self) -> bool {
        self.flags().contains(SegmentFlags::R)
    }

    /// Check if segment is writable
    pub fn is_writable(&self) -> bool {
        self.flags().contains(SegmentFlags::W)
    }

    /// Check if segment is executable
    pub fn is_executable(&self) -> bool {
        self.flags().contains(SegmentFlags::X)
    }

    pub fn type_name(&self) -> &'static str {
        segment_type_name(self.p_type)
    }
}
