//! ELF32 section headers.

use bitflags::bitflags;

use crate::consts::*;
use crate::error::Result;
use crate::reader::{Cursor, Endian};

bitflags! {
    /// Section attribute flags (`sh_flags`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SectionFlags: u32 {
        const WRITE = SHF_WRITE;
        const ALLOC = SHF_ALLOC;
        const EXECINSTR = SHF_EXECINSTR;
        const MERGE = SHF_MERGE;
        const STRINGS = SHF_STRINGS;
        const INFO_LINK = SHF_INFO_LINK;
        const LINK_ORDER = SHF_LINK_ORDER;
        const OS_NONCONFORMING = SHF_OS_NONCONFORMING;
        const GROUP = SHF_GROUP;
        const TLS = SHF_TLS;
        const MASKOS = SHF_MASKOS;
        const ORDERED = SHF_ORDERED;
        const EXCLUDE = SHF_EXCLUDE;
        // overlaps ORDERED and EXCLUDE
        const MASKPROC = SHF_MASKPROC;
    }
}

/// ELF32 section header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SectionHeader {
    /// Section name (string table offset)
    pub sh_name: u32,
    /// Section type
    pub sh_type: u32,
    /// Section flags
    pub sh_flags: u32,
    /// Section virtual address
    pub sh_addr: u32,
    /// Section file offset
    pub sh_offset: u32,
    /// Section size
    pub sh_size: u32,
    /// Link to another section
    pub sh_link: u32,
    /// Additional section information
    pub sh_info: u32,
    /// Section alignment
    pub sh_addralign: u32,
    /// Entry size if section holds table
    pub sh_entsize: u32,
}

impl SectionHeader {
    pub const SIZE: usize = 40;

    pub(crate) fn parse(data: &[u8], offset: u64, endian: Endian) -> Result<Self> {
        let mut cursor = Cursor::new(data, offset, endian);
        Ok(Self {
            sh_name: cursor.u32()?,
            sh_type: cursor.u32()?,
            sh_flags: cursor.u32()?,
            sh_addr: cursor.u32()?,
            sh_offset: cursor.u32()?,
            sh_size: cursor.u32()?,
            sh_link: cursor.u32()?,
            sh_info: cursor.u32()?,
            sh_addralign: cursor.u32()?,
            sh_entsize: cursor.u32()?,
        })
    }

    pub fn flags(&self) -> SectionFlags {
        SectionFlags::from_bits_retain(self.sh_flags)
    }

    /// False for SHT_NOBITS sections, which declare a size but have no
    /// bytes in the file.
    pub fn has_file_data(&self) -> bool {
        self.sh_type != SHT_NOBITS
    }

    #[inline]
    pub fn is_alloc(&self) -> bool {
        self.flags().contains(SectionFlags::ALLOC)
    }

    #[inline]
    pub fn is_writable(&self) -> bool {
        self.flags().contains(SectionFlags::WRITE)
    }

    #[inline]
    pub fn is_executable(&self) -> bool {
        self.flags().contains(SectionFlags::EXECINSTR)
    }

    pub fn type_name(&self) -> &'static str {
        section_type_name(self.sh_type)
    }
}
