//! Validated view over an ELF32 image.
//!
//! [`ElfFile`] is only constructed after the header and both table extents
//! have been checked against the image length. Every accessor still
//! bounds-checks the bytes it touches, so a malformed entry yields an error
//! instead of an out-of-bounds read.

use log::{debug, trace};

use crate::consts::{PN_XNUM, SHN_UNDEF, SHN_XINDEX, SHT_NOBITS};
use crate::error::{ElfError, Result, Table};
use crate::header::Elf32Header;
use crate::program::ProgramHeader;
use crate::reader::{bytes_at, Endian};
use crate::section::SectionHeader;
use crate::strtab::StringTable;

/// A parsed ELF32 file borrowing its image bytes.
#[derive(Debug, Clone, Copy)]
pub struct ElfFile<'a> {
    data: &'a [u8],
    header: Elf32Header,
    /// Program header count after extended numbering is resolved.
    phnum: usize,
    /// Section count after extended numbering is resolved.
    shnum: usize,
    /// String table index after extended numbering is resolved.
    shstrndx: usize,
}

impl<'a> ElfFile<'a> {
    /// Parse and validate an ELF32 image.
    ///
    /// # Returns
    ///
    /// * `Ok(ElfFile)` - header valid, both tables lie inside `data`
    /// * `Err(ElfError)` - the first failed check, in header order
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        let header = Elf32Header::parse(data)?;
        let endian = header.endian();

        let mut phnum = usize::from(header.e_phnum);
        let mut shnum = usize::from(header.e_shnum);
        let mut shstrndx = usize::from(header.e_shstrndx);

        // Extended numbering keeps the real values in section 0.
        let extended = shnum == 0 || header.e_shstrndx == SHN_XINDEX || header.e_phnum == PN_XNUM;
        if header.e_shoff != 0 && extended {
            check_entry_size(Table::Section, header.e_shentsize)?;
            let first = SectionHeader::parse(data, u64::from(header.e_shoff), endian)?;
            if shnum == 0 {
                shnum = first.sh_size as usize;
            }
            if header.e_shstrndx == SHN_XINDEX {
                shstrndx = first.sh_link as usize;
            }
            if header.e_phnum == PN_XNUM {
                phnum = first.sh_info as usize;
            }
            debug!(
                "[ELF32] extended numbering: phnum={} shnum={} shstrndx={}",
                phnum, shnum, shstrndx
            );
        }

        check_table(data, Table::Program, header.e_phoff, header.e_phentsize, phnum)?;
        check_table(data, Table::Section, header.e_shoff, header.e_shentsize, shnum)?;

        debug!(
            "[ELF32] parsed image: {} bytes, {} program headers, {} sections",
            data.len(),
            phnum,
            shnum
        );

        Ok(Self {
            data,
            header,
            phnum,
            shnum,
            shstrndx,
        })
    }

    /// The whole image.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn header(&self) -> &Elf32Header {
        &self.header
    }

    pub fn endian(&self) -> Endian {
        self.header.endian()
    }

    pub fn program_count(&self) -> usize {
        self.phnum
    }

    pub fn section_count(&self) -> usize {
        self.shnum
    }

    /// Index of the section-name string table, or `None` for SHN_UNDEF.
    pub fn string_table_index(&self) -> Option<usize> {
        (self.shstrndx != usize::from(SHN_UNDEF)).then_some(self.shstrndx)
    }

    // ── Program headers ──────────────────────────────────────────────

    /// The `index`-th program header.
    pub fn program(&self, index: usize) -> Result<ProgramHeader> {
        let offset = entry_offset(
            Table::Program,
            self.header.e_phoff,
            self.header.e_phentsize,
            index,
            self.program_count(),
        )?;
        trace!("[ELF32] program {} at {:#x}", index, offset);
        ProgramHeader::parse(self.data, offset, self.endian())
    }

    /// File bytes of the `index`-th segment (`p_filesz` bytes at `p_offset`).
    pub fn program_data(&self, index: usize) -> Result<&'a [u8]> {
        let ph = self.program(index)?;
        bytes_at(self.data, u64::from(ph.p_offset), u64::from(ph.p_filesz))
    }

    /// Iterate over all program headers in table order.
    pub fn programs(&self) -> impl Iterator<Item = Result<ProgramHeader>> + 'a {
        let file = *self;
        (0..file.program_count()).map(move |i| file.program(i))
    }

    // ── Section headers ──────────────────────────────────────────────

    /// The `index`-th section header.
    pub fn section(&self, index: usize) -> Result<SectionHeader> {
        let offset = entry_offset(
            Table::Section,
            self.header.e_shoff,
            self.header.e_shentsize,
            index,
            self.shnum,
        )?;
        trace!("[ELF32] section {} at {:#x}", index, offset);
        SectionHeader::parse(self.data, offset, self.endian())
    }

    /// File bytes of the `index`-th section.
    ///
    /// SHT_NOBITS sections fail with `NoFileStorage`: they declare a size
    /// but have nothing in the file.
    pub fn section_data(&self, index: usize) -> Result<&'a [u8]> {
        let sh = self.section(index)?;
        if sh.sh_type == SHT_NOBITS {
            return Err(ElfError::NoFileStorage { index });
        }
        bytes_at(self.data, u64::from(sh.sh_offset), u64::from(sh.sh_size))
    }

    /// Iterate over all section headers in table order.
    pub fn sections(&self) -> impl Iterator<Item = Result<SectionHeader>> + 'a {
        let file = *self;
        (0..file.shnum).map(move |i| file.section(i))
    }

    // ── Names ────────────────────────────────────────────────────────

    /// The section-header string table.
    ///
    /// A table declared past the end of the image is cut at the image end,
    /// so a name whose terminator is missing fails as `MalformedString`.
    pub fn string_table(&self) -> Result<StringTable<'a>> {
        let index = self.string_table_index().ok_or(ElfError::NoStringTable)?;
        let sh = self.section(index)?;
        if sh.sh_type == SHT_NOBITS {
            return Err(ElfError::NoFileStorage { index });
        }
        let len = self.data.len() as u64;
        let start = u64::from(sh.sh_offset).min(len);
        let end = (start + u64::from(sh.sh_size)).min(len);
        Ok(StringTable::new(&self.data[start as usize..end as usize]))
    }

    /// Resolve `offset` in the section-header string table to a name.
    pub fn section_name(&self, offset: u32) -> Result<&'a str> {
        self.string_table()?.get(offset)
    }

    /// Name of a section header.
    pub fn name_of(&self, section: &SectionHeader) -> Result<&'a str> {
        self.section_name(section.sh_name)
    }

    /// First section whose name is `name`, with its index.
    pub fn section_by_name(&self, name: &str) -> Result<Option<(usize, SectionHeader)>> {
        let strtab = self.string_table()?;
        for index in 0..self.shnum {
            let sh = self.section(index)?;
            // a bad name on an unrelated section must not hide a later match
            if strtab.get_bytes(sh.sh_name).ok() == Some(name.as_bytes()) {
                return Ok(Some((index, sh)));
            }
        }
        Ok(None)
    }
}

fn record_size(table: Table) -> usize {
    match table {
        Table::Program => ProgramHeader::SIZE,
        Table::Section => SectionHeader::SIZE,
    }
}

fn check_entry_size(table: Table, entsize: u16) -> Result<()> {
    if usize::from(entsize) < record_size(table) {
        return Err(ElfError::InvalidEntrySize {
            table,
            size: entsize,
        });
    }
    Ok(())
}

/// Validate that a table of `count` entries lies inside the image.
fn check_table(data: &[u8], table: Table, offset: u32, entsize: u16, count: usize) -> Result<()> {
    if count == 0 {
        return Ok(());
    }

    let size = u64::from(entsize)
        .checked_mul(count as u64)
        .ok_or(ElfError::TruncatedFile {
            offset: u64::from(offset),
            size: u64::MAX,
            len: data.len(),
        })?;
    bytes_at(data, u64::from(offset), size)?;
    check_entry_size(table, entsize)
}

fn entry_offset(table: Table, base: u32, entsize: u16, index: usize, count: usize) -> Result<u64> {
    if index >= count {
        return Err(ElfError::IndexOutOfRange {
            table,
            index,
            count,
        });
    }
    // index < count <= u32::MAX, entsize <= u16::MAX: fits in u64
    Ok(u64::from(base) + index as u64 * u64::from(entsize))
}
