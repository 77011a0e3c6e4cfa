//! Subcommand handlers: open an image and build printable reports.

use std::fmt;
use std::path::Path;

use elf32_loader::consts::{class_name, encoding_name};
use elf32_loader::{
    Elf32Header, ElfError, ElfFile, Image, ProgramHeader, SectionFlags, SectionHeader,
};
use log::{debug, warn};
use regex::Regex;
use serde::Serialize;

use crate::error::ElfInfoError;
use crate::output::hexdump;

// ── Reports ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct HeaderReport {
    pub class: &'static str,
    pub encoding: &'static str,
    pub file_type: &'static str,
    pub machine: &'static str,
    pub fields: Elf32Header,
    /// Section count / string table index after extended numbering.
    pub section_count: usize,
    pub string_table_index: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgramRow {
    pub index: usize,
    pub kind: &'static str,
    pub flags: String,
    pub header: ProgramHeader,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgramTable {
    pub programs: Vec<ProgramRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionRow {
    pub index: usize,
    /// `None` when the name cannot be resolved.
    pub name: Option<String>,
    pub kind: &'static str,
    pub flags: String,
    pub header: SectionHeader,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionTable {
    pub sections: Vec<SectionRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DataReport {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub offset: u32,
    pub size: usize,
    /// Lowercase hex, two digits per byte.
    pub hex: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
    #[serde(skip)]
    pub width: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct NameReport {
    pub offset: u32,
    pub name: String,
}

/// How `section-data` picks its section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionSelector {
    Index(usize),
    Name(String),
}

impl SectionSelector {
    /// A plain decimal number is an index; anything else is a name.
    pub fn parse(s: &str) -> Self {
        match s.parse::<usize>() {
            Ok(index) => Self::Index(index),
            Err(_) => Self::Name(s.to_string()),
        }
    }
}

// ── Inspector ────────────────────────────────────────────────────────

/// One loaded image plus the handlers that report on it.
pub struct Inspector {
    image: Image,
}

impl Inspector {
    pub fn open(path: &Path) -> Result<Self, ElfInfoError> {
        debug!("opening {}", path.display());
        Ok(Self {
            image: Image::open(path)?,
        })
    }

    pub fn from_image(image: Image) -> Self {
        Self { image }
    }

    fn elf(&self) -> Result<ElfFile<'_>, ElfInfoError> {
        Ok(self.image.parse()?)
    }

    /// `header <file>` handler.
    pub fn header(&self) -> Result<HeaderReport, ElfInfoError> {
        let elf = self.elf()?;
        let h = *elf.header();
        Ok(HeaderReport {
            class: class_name(h.class()),
            encoding: encoding_name(h.data_encoding()),
            file_type: h.type_name(),
            machine: h.machine_name(),
            fields: h,
            section_count: elf.section_count(),
            string_table_index: elf.string_table_index(),
        })
    }

    /// `programs <file>` handler.
    pub fn programs(&self) -> Result<ProgramTable, ElfInfoError> {
        let elf = self.elf()?;
        let programs = elf
            .programs()
            .enumerate()
            .map(|(index, ph)| {
                let ph = ph?;
                Ok(ProgramRow {
                    index,
                    kind: ph.type_name(),
                    flags: segment_flags(&ph),
                    header: ph,
                })
            })
            .collect::<Result<Vec<_>, ElfError>>()?;
        Ok(ProgramTable { programs })
    }

    /// `sections <file> [--match <regex>]` handler.
    ///
    /// Unresolvable names are listed as missing rather than failing the
    /// whole table; `--match` never matches a missing name.
    pub fn sections(&self, pattern: Option<&str>) -> Result<SectionTable, ElfInfoError> {
        let filter = pattern
            .map(|p| {
                Regex::new(p).map_err(|e| ElfInfoError::InvalidPattern {
                    pattern: p.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        let elf = self.elf()?;
        let mut sections = Vec::new();
        for (index, sh) in elf.sections().enumerate() {
            let sh = sh?;
            let name = match elf.name_of(&sh) {
                Ok(name) => Some(name.to_string()),
                Err(e) => {
                    warn!("section {index}: {e}");
                    None
                }
            };

            if let Some(re) = &filter {
                if !name.as_deref().is_some_and(|n| re.is_match(n)) {
                    continue;
                }
            }

            sections.push(SectionRow {
                index,
                name,
                kind: sh.type_name(),
                flags: section_flags(&sh),
                header: sh,
            });
        }
        Ok(SectionTable { sections })
    }

    /// `segment-data <file> <index>` handler.
    pub fn segment_data(&self, index: usize, width: usize) -> Result<DataReport, ElfInfoError> {
        let elf = self.elf()?;
        let ph = elf.program(index)?;
        let data = elf.program_data(index)?;
        Ok(DataReport::new(index, None, ph.p_offset, data, width))
    }

    /// `section-data <file> <index|name>` handler.
    pub fn section_data(
        &self,
        selector: &SectionSelector,
        width: usize,
    ) -> Result<DataReport, ElfInfoError> {
        let elf = self.elf()?;
        let (index, sh) = match selector {
            SectionSelector::Index(index) => (*index, elf.section(*index)?),
            SectionSelector::Name(name) => elf
                .section_by_name(name)?
                .ok_or_else(|| ElfInfoError::SectionNotFound { name: name.clone() })?,
        };
        let data = elf.section_data(index)?;
        let name = elf.name_of(&sh).ok().map(str::to_string);
        Ok(DataReport::new(index, name, sh.sh_offset, data, width))
    }

    /// `name <file> <offset>` handler.
    pub fn name(&self, offset: u32) -> Result<NameReport, ElfInfoError> {
        let elf = self.elf()?;
        Ok(NameReport {
            offset,
            name: elf.section_name(offset)?.to_string(),
        })
    }
}

impl DataReport {
    fn new(index: usize, name: Option<String>, offset: u32, data: &[u8], width: usize) -> Self {
        Self {
            index,
            name,
            offset,
            size: data.len(),
            hex: data.iter().map(|b| format!("{b:02x}")).collect(),
            bytes: data.to_vec(),
            width,
        }
    }
}

/// readelf-style `RWE` column.
fn segment_flags(ph: &ProgramHeader) -> String {
    [
        (ph.is_readable(), 'R'),
        (ph.is_writable(), 'W'),
        (ph.is_executable(), 'E'),
    ]
    .iter()
    .map(|&(set, c)| if set { c } else { ' ' })
    .collect()
}

/// readelf-style flag letters.
fn section_flags(sh: &SectionHeader) -> String {
    const LETTERS: [(SectionFlags, char); 11] = [
        (SectionFlags::WRITE, 'W'),
        (SectionFlags::ALLOC, 'A'),
        (SectionFlags::EXECINSTR, 'X'),
        (SectionFlags::MERGE, 'M'),
        (SectionFlags::STRINGS, 'S'),
        (SectionFlags::INFO_LINK, 'I'),
        (SectionFlags::LINK_ORDER, 'L'),
        (SectionFlags::OS_NONCONFORMING, 'O'),
        (SectionFlags::GROUP, 'G'),
        (SectionFlags::TLS, 'T'),
        (SectionFlags::EXCLUDE, 'E'),
    ];
    let flags = sh.flags();
    LETTERS
        .iter()
        .filter(|(flag, _)| flags.contains(*flag))
        .map(|&(_, c)| c)
        .collect()
}

// ── Human-readable rendering ─────────────────────────────────────────

impl fmt::Display for HeaderReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = &self.fields;
        let magic: Vec<String> = h.e_ident.iter().map(|b| format!("{b:02x}")).collect();
        writeln!(f, "ELF Header:")?;
        writeln!(f, "  Magic:   {}", magic.join(" "))?;
        writeln!(f, "  Class:                             {}", self.class)?;
        writeln!(f, "  Data:                              {}", self.encoding)?;
        writeln!(f, "  Version:                           {}", h.ident_version())?;
        writeln!(f, "  Type:                              {}", self.file_type)?;
        writeln!(f, "  Machine:                           {} ({})", self.machine, h.e_machine)?;
        writeln!(f, "  Version:                           {:#x}", h.e_version)?;
        writeln!(f, "  Entry point address:               {:#x}", h.e_entry)?;
        writeln!(f, "  Start of program headers:          {} (bytes into file)", h.e_phoff)?;
        writeln!(f, "  Start of section headers:          {} (bytes into file)", h.e_shoff)?;
        writeln!(f, "  Flags:                             {:#x}", h.e_flags)?;
        writeln!(f, "  Size of this header:               {} (bytes)", h.e_ehsize)?;
        writeln!(f, "  Size of program headers:           {} (bytes)", h.e_phentsize)?;
        writeln!(f, "  Number of program headers:         {}", h.e_phnum)?;
        writeln!(f, "  Size of section headers:           {} (bytes)", h.e_shentsize)?;
        writeln!(f, "  Number of section headers:         {}", self.section_count)?;
        match self.string_table_index {
            Some(index) => writeln!(f, "  Section header string table index: {index}"),
            None => writeln!(f, "  Section header string table index: none"),
        }
    }
}

impl fmt::Display for ProgramTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.programs.is_empty() {
            return writeln!(f, "There are no program headers in this file.");
        }
        writeln!(f, "Program Headers:")?;
        writeln!(
            f,
            "  [Nr] Type     Offset   VirtAddr   PhysAddr   FileSiz MemSiz  Flg Align"
        )?;
        for row in &self.programs {
            let p = &row.header;
            writeln!(
                f,
                "  [{:>2}] {:<8} {:#08x} {:#010x} {:#010x} {:#07x} {:#07x} {} {:#x}",
                row.index, row.kind, p.p_offset, p.p_vaddr, p.p_paddr, p.p_filesz, p.p_memsz, row.flags, p.p_align
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for SectionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sections.is_empty() {
            return writeln!(f, "There are no sections to list.");
        }
        writeln!(f, "Section Headers:")?;
        writeln!(
            f,
            "  [Nr] Name               Type         Addr     Off    Size   ES Flg Lk Inf Al"
        )?;
        for row in &self.sections {
            let s = &row.header;
            writeln!(
                f,
                "  [{:>2}] {:<18} {:<12} {:08x} {:06x} {:06x} {:02x} {:>3} {:>2} {:>3} {:>2}",
                row.index,
                row.name.as_deref().unwrap_or("<malformed>"),
                row.kind,
                s.sh_addr,
                s.sh_offset,
                s.sh_size,
                s.sh_entsize,
                row.flags,
                s.sh_link,
                s.sh_info,
                s.sh_addralign
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for DataReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => writeln!(f, "Hex dump of section [{}] '{}' ({} bytes):", self.index, name, self.size)?,
            None => writeln!(f, "Hex dump of segment [{}] ({} bytes):", self.index, self.size)?,
        }
        write!(f, "{}", hexdump(&self.bytes, u64::from(self.offset), self.width))
    }
}

impl fmt::Display for NameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)
    }
}
