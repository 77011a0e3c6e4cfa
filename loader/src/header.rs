//! ELF32 file header.

use log::debug;

use crate::consts::*;
use crate::error::{ElfError, Result};
use crate::reader::{bytes_at, Cursor, Endian};

/// ELF32 file header, decoded in the byte order declared by `EI_DATA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Elf32Header {
    /// Magic number and other info
    pub e_ident: [u8; EI_NIDENT],
    /// Object file type
    pub e_type: u16,
    /// Machine type
    pub e_machine: u16,
    /// Object file version
    pub e_version: u32,
    /// Entry point virtual address
    pub e_entry: u32,
    /// Program header table file offset
    pub e_phoff: u32,
    /// Section header table file offset
    pub e_shoff: u32,
    /// Processor-specific flags
    pub e_flags: u32,
    /// ELF header size
    pub e_ehsize: u16,
    /// Program header table entry size
    pub e_phentsize: u16,
    /// Program header table entry count
    pub e_phnum: u16,
    /// Section header table entry size
    pub e_shentsize: u16,
    /// Section header table entry count
    pub e_shnum: u16,
    /// Section name string table index
    pub e_shstrndx: u16,
}

impl Elf32Header {
    /// Identification block plus the fixed ELF32 fields.
    pub const SIZE: usize = 52;

    /// Validate the identification block and decode the header.
    ///
    /// Checks run in a fixed order: length, magic, class, data encoding,
    /// version. The magic is checked before any other byte is looked at.
    /// Table bounds are not checked here; see [`crate::ElfFile::parse`].
    pub fn parse(data: &[u8]) -> Result<Self> {
        bytes_at(data, 0, Self::SIZE as u64)?;
        // byte order is irrelevant for the identification block
        let ident: [u8; EI_NIDENT] = Cursor::new(data, 0, Endian::Little).bytes()?;

        let magic = [ident[EI_MAG0], ident[EI_MAG1], ident[EI_MAG2], ident[EI_MAG3]];
        if magic != ELF_MAGIC {
            return Err(ElfError::BadMagic { found: magic });
        }

        // Check class (must be 32-bit)
        if ident[EI_CLASS] != ELFCLASS32 {
            return Err(ElfError::UnsupportedClass {
                class: ident[EI_CLASS],
            });
        }

        let endian = Endian::from_ident(ident[EI_DATA]).ok_or(ElfError::UnsupportedEncoding {
            encoding: ident[EI_DATA],
        })?;

        if ident[EI_VERSION] != EV_CURRENT {
            return Err(ElfError::UnsupportedVersion {
                version: ident[EI_VERSION],
            });
        }

        let mut cursor = Cursor::new(data, EI_NIDENT as u64, endian);
        let header = Self {
            e_ident: ident,
            e_type: cursor.u16()?,
            e_machine: cursor.u16()?,
            e_version: cursor.u32()?,
            e_entry: cursor.u32()?,
            e_phoff: cursor.u32()?,
            e_shoff: cursor.u32()?,
            e_flags: cursor.u32()?,
            e_ehsize: cursor.u16()?,
            e_phentsize: cursor.u16()?,
            e_phnum: cursor.u16()?,
            e_shentsize: cursor.u16()?,
            e_shnum: cursor.u16()?,
            e_shstrndx: cursor.u16()?,
        };

        debug!(
            "[ELF32] header: type={:#x} machine={:#x} entry={:#x} {:?}-endian",
            header.e_type, header.e_machine, header.e_entry, endian
        );

        Ok(header)
    }

    pub fn class(&self) -> u8 {
        self.e_ident[EI_CLASS]
    }

    /// Raw `EI_DATA` byte.
    pub fn data_encoding(&self) -> u8 {
        self.e_ident[EI_DATA]
    }

    /// Byte order used to decode every multi-byte field.
    pub fn endian(&self) -> Endian {
        // parse() rejected anything else
        Endian::from_ident(self.data_encoding()).unwrap_or(Endian::Little)
    }

    pub fn ident_version(&self) -> u8 {
        self.e_ident[EI_VERSION]
    }

    /// Check if this is an executable
    pub fn is_executable(&self) -> bool {
        self.e_type == ET_EXEC
    }

    /// Check if this is a relocatable object
    pub fn is_relocatable(&self) -> bool {
        self.e_type == ET_REL
    }

    pub fn type_name(&self) -> &'static str {
        object_type_name(self.e_type)
    }

    pub fn machine_name(&self) -> &'static str {
        machine_name(self.e_machine)
    }
}
