//! Conformant ELF32 writer used by the property tests.
//!
//! Layout: header, program header table, segment bytes, section bytes,
//! `.shstrtab`, then the section header table (4-byte aligned). Section 0 is
//! the SHT_NULL entry and `.shstrtab` is always the last section.

#![allow(dead_code)]

use elf32_loader::consts::*;
use elf32_loader::{Elf32Header, Endian, ProgramHeader, SectionHeader};

#[derive(Debug, Clone)]
pub struct Segment {
    pub p_type: u32,
    pub vaddr: u32,
    pub flags: u32,
    pub align: u32,
    /// Extra bytes beyond `data` in memory (zero-filled, like .bss).
    pub zero_fill: u32,
    pub data: Vec<u8>,
}

impl Segment {
    pub fn load(vaddr: u32, flags: u32, data: Vec<u8>) -> Self {
        Self {
            p_type: PT_LOAD,
            vaddr,
            flags,
            align: 4,
            zero_fill: 0,
            data,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Section {
    pub name: String,
    pub sh_type: u32,
    pub flags: u32,
    pub addr: u32,
    pub data: Vec<u8>,
    /// Declared size for SHT_NOBITS sections.
    pub nobits_size: u32,
}

impl Section {
    pub fn progbits(name: &str, flags: u32, data: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            sh_type: SHT_PROGBITS,
            flags,
            addr: 0,
            data,
            nobits_size: 0,
        }
    }

    pub fn nobits(name: &str, size: u32) -> Self {
        Self {
            name: name.to_string(),
            sh_type: SHT_NOBITS,
            flags: SHF_ALLOC | SHF_WRITE,
            addr: 0,
            data: Vec::new(),
            nobits_size: size,
        }
    }
}

/// Everything the writer put into the file, for comparison after parsing.
#[derive(Debug, Clone)]
pub struct Written {
    pub bytes: Vec<u8>,
    pub header: Elf32Header,
    pub programs: Vec<ProgramHeader>,
    /// Includes the null section and `.shstrtab`.
    pub sections: Vec<SectionHeader>,
    pub section_names: Vec<String>,
    pub shstrtab: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct ElfWriter {
    pub endian: Endian,
    pub e_type: u16,
    pub e_machine: u16,
    pub e_entry: u32,
    pub e_flags: u32,
    pub segments: Vec<Segment>,
    pub sections: Vec<Section>,
}

impl ElfWriter {
    pub fn new(endian: Endian) -> Self {
        Self {
            endian,
            e_type: ET_EXEC,
            e_machine: EM_TEAK,
            e_entry: 0,
            e_flags: 0,
            segments: Vec::new(),
            sections: Vec::new(),
        }
    }

    pub fn segment(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn build(&self) -> Written {
        let phoff = Elf32Header::SIZE as u32;
        let mut cursor = phoff + (self.segments.len() * ProgramHeader::SIZE) as u32;

        let mut payload = Vec::new();
        let mut programs = Vec::new();
        for seg in &self.segments {
            programs.push(ProgramHeader {
                p_type: seg.p_type,
                p_offset: cursor,
                p_vaddr: seg.vaddr,
                p_paddr: seg.vaddr,
                p_filesz: seg.data.len() as u32,
                p_memsz: seg.data.len() as u32 + seg.zero_fill,
                p_flags: seg.flags,
                p_align: seg.align,
            });
            payload.extend_from_slice(&seg.data);
            cursor += seg.data.len() as u32;
        }

        let mut shstrtab = vec![0u8];
        let mut section_names = vec![String::new()];
        let mut sections = vec![SectionHeader::default()];
        for sec in &self.sections {
            let name_off = shstrtab.len() as u32;
            shstrtab.extend_from_slice(sec.name.as_bytes());
            shstrtab.push(0);
            section_names.push(sec.name.clone());

            let size = if sec.sh_type == SHT_NOBITS {
                sec.nobits_size
            } else {
                sec.data.len() as u32
            };
            sections.push(SectionHeader {
                sh_name: name_off,
                sh_type: sec.sh_type,
                sh_flags: sec.flags,
                sh_addr: sec.addr,
                sh_offset: cursor,
                sh_size: size,
                sh_link: 0,
                sh_info: 0,
                sh_addralign: 1,
                sh_entsize: 0,
            });
            if sec.sh_type != SHT_NOBITS {
                payload.extend_from_slice(&sec.data);
                cursor += sec.data.len() as u32;
            }
        }

        let shstrtab_name = shstrtab.len() as u32;
        shstrtab.extend_from_slice(b".shstrtab\0");
        section_names.push(".shstrtab".to_string());
        sections.push(SectionHeader {
            sh_name: shstrtab_name,
            sh_type: SHT_STRTAB,
            sh_offset: cursor,
            sh_size: shstrtab.len() as u32,
            sh_addralign: 1,
            ..SectionHeader::default()
        });
        payload.extend_from_slice(&shstrtab);
        cursor += shstrtab.len() as u32;

        let padding = (4 - cursor % 4) % 4;
        payload.extend(std::iter::repeat(0).take(padding as usize));
        let shoff = cursor + padding;

        let mut e_ident = [0u8; EI_NIDENT];
        e_ident[..4].copy_from_slice(&ELF_MAGIC);
        e_ident[EI_CLASS] = ELFCLASS32;
        e_ident[EI_DATA] = match self.endian {
            Endian::Little => ELFDATA2LSB,
            Endian::Big => ELFDATA2MSB,
        };
        e_ident[EI_VERSION] = EV_CURRENT;

        let header = Elf32Header {
            e_ident,
            e_type: self.e_type,
            e_machine: self.e_machine,
            e_version: u32::from(EV_CURRENT),
            e_entry: self.e_entry,
            e_phoff: if self.segments.is_empty() { 0 } else { phoff },
            e_shoff: shoff,
            e_flags: self.e_flags,
            e_ehsize: Elf32Header::SIZE as u16,
            e_phentsize: ProgramHeader::SIZE as u16,
            e_phnum: self.segments.len() as u16,
            e_shentsize: SectionHeader::SIZE as u16,
            e_shnum: sections.len() as u16,
            e_shstrndx: (sections.len() - 1) as u16,
        };

        let mut out = Out {
            bytes: Vec::new(),
            endian: self.endian,
        };
        out.header(&header);
        for ph in &programs {
            out.program(ph);
        }
        out.bytes.extend_from_slice(&payload);
        for sh in &sections {
            out.section(sh);
        }

        Written {
            bytes: out.bytes,
            header,
            programs,
            sections,
            section_names,
            shstrtab,
        }
    }
}

struct Out {
    bytes: Vec<u8>,
    endian: Endian,
}

impl Out {
    fn u16(&mut self, v: u16) {
        match self.endian {
            Endian::Little => self.bytes.extend_from_slice(&v.to_le_bytes()),
            Endian::Big => self.bytes.extend_from_slice(&v.to_be_bytes()),
        }
    }

    fn u32(&mut self, v: u32) {
        match self.endian {
            Endian::Little => self.bytes.extend_from_slice(&v.to_le_bytes()),
            Endian::Big => self.bytes.extend_from_slice(&v.to_be_bytes()),
        }
    }

    fn header(&mut self, h: &Elf32Header) {
        self.bytes.extend_from_slice(&h.e_ident);
        self.u16(h.e_type);
        self.u16(h.e_machine);
        self.u32(h.e_version);
        self.u32(h.e_entry);
        self.u32(h.e_phoff);
        self.u32(h.e_shoff);
        self.u32(h.e_flags);
        self.u16(h.e_ehsize);
        self.u16(h.e_phentsize);
        self.u16(h.e_phnum);
        self.u16(h.e_shentsize);
        self.u16(h.e_shnum);
        self.u16(h.e_shstrndx);
    }

    fn program(&mut self, p: &ProgramHeader) {
        for v in [
            p.p_type, p.p_offset, p.p_vaddr, p.p_paddr, p.p_filesz, p.p_memsz, p.p_flags, p.p_align,
        ] {
            self.u32(v);
        }
    }

    fn section(&mut self, s: &SectionHeader) {
        for v in [
            s.sh_name,
            s.sh_type,
            s.sh_flags,
            s.sh_addr,
            s.sh_offset,
            s.sh_size,
            s.sh_link,
            s.sh_info,
            s.sh_addralign,
            s.sh_entsize,
        ] {
            self.u32(v);
        }
    }
}

/// Small Teak-style executable: one LOAD segment, .text, .data, .bss.
pub fn sample(endian: Endian) -> Written {
    ElfWriter::new(endian)
        .segment(Segment::load(0x0, PF_R | PF_X, vec![0x90; 12]))
        .section(Section::progbits(".text", SHF_ALLOC | SHF_EXECINSTR, vec![0x90; 12]))
        .section(Section::progbits(".data", SHF_ALLOC | SHF_WRITE, vec![1, 2, 3, 4]))
        .section(Section::nobits(".bss", 0x200))
        .build()
}
