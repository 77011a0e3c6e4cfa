//! ELF32 constant tables.
//!
//! Values are kept as plain integers so that vendor-specific or unknown
//! values found in a file are preserved as-is. The `*_name` helpers map the
//! well-known ones to display names and fall back to `"UNKNOWN"`.

/// Size of the `e_ident` identification block.
pub const EI_NIDENT: usize = 16;

/// Identification byte indices.
pub const EI_MAG0: usize = 0;
pub const EI_MAG1: usize = 1;
pub const EI_MAG2: usize = 2;
pub const EI_MAG3: usize = 3;
pub const EI_CLASS: usize = 4;
pub const EI_DATA: usize = 5;
pub const EI_VERSION: usize = 6;
pub const EI_PAD: usize = 7;

/// ELF magic number: 0x7F 'E' 'L' 'F'
pub const ELF_MAGIC: [u8; 4] = [0x7F, b'E', b'L', b'F'];

/// File class
pub const ELFCLASSNONE: u8 = 0;
pub const ELFCLASS32: u8 = 1;
pub const ELFCLASS64: u8 = 2;

/// Data encoding
pub const ELFDATANONE: u8 = 0;
pub const ELFDATA2LSB: u8 = 1;
pub const ELFDATA2MSB: u8 = 2;

/// Object file version
pub const EV_NONE: u8 = 0;
pub const EV_CURRENT: u8 = 1;

/// Object file type
pub const ET_NONE: u16 = 0;
pub const ET_REL: u16 = 1;
pub const ET_EXEC: u16 = 2;
pub const ET_DYN: u16 = 3;
pub const ET_CORE: u16 = 4;

/// Target machine
pub const EM_NONE: u16 = 0;
pub const EM_M32: u16 = 1;
pub const EM_SPARC: u16 = 2;
pub const EM_386: u16 = 3;
pub const EM_68K: u16 = 4;
pub const EM_88K: u16 = 5;
pub const EM_860: u16 = 7;
pub const EM_MIPS: u16 = 8;
pub const EM_ARM: u16 = 40;
/// Teak DSP, as emitted by the Teak toolchain.
pub const EM_TEAK: u16 = 998;

/// Program header type: unused entry
pub const PT_NULL: u32 = 0;
/// Program header type: loadable segment
pub const PT_LOAD: u32 = 1;
/// Program header type: dynamic linking info
pub const PT_DYNAMIC: u32 = 2;
/// Program header type: interpreter path
pub const PT_INTERP: u32 = 3;
/// Program header type: auxiliary notes
pub const PT_NOTE: u32 = 4;
pub const PT_SHLIB: u32 = 5;
/// Program header type: program header table
pub const PT_PHDR: u32 = 6;

/// Segment permission: executable
pub const PF_X: u32 = 1;
/// Segment permission: writable
pub const PF_W: u32 = 2;
/// Segment permission: readable
pub const PF_R: u32 = 4;
pub const PF_MASKPROC: u32 = 0xf000_0000;

/// `e_phnum` value meaning the real count is section 0's `sh_info`.
pub const PN_XNUM: u16 = 0xffff;

/// Special section indices
pub const SHN_UNDEF: u16 = 0;
pub const SHN_LORESERVE: u16 = 0xff00;
pub const SHN_LOPROC: u16 = 0xff00;
pub const SHN_BEFORE: u16 = 0xff00;
pub const SHN_AFTER: u16 = 0xff01;
pub const SHN_HIPROC: u16 = 0xff1f;
pub const SHN_LOOS: u16 = 0xff20;
pub const SHN_HIOS: u16 = 0xff3f;
pub const SHN_ABS: u16 = 0xfff1;
pub const SHN_COMMON: u16 = 0xfff2;
/// The real index lives in section 0 (`sh_link` for the string table).
pub const SHN_XINDEX: u16 = 0xffff;
pub const SHN_HIRESERVE: u16 = 0xffff;

/// Section types
pub const SHT_NULL: u32 = 0;
pub const SHT_PROGBITS: u32 = 1;
pub const SHT_SYMTAB: u32 = 2;
pub const SHT_STRTAB: u32 = 3;
pub const SHT_RELA: u32 = 4;
pub const SHT_HASH: u32 = 5;
pub const SHT_DYNAMIC: u32 = 6;
pub const SHT_NOTE: u32 = 7;
/// Occupies no file space despite a nonzero `sh_size` (e.g. `.bss`).
pub const SHT_NOBITS: u32 = 8;
pub const SHT_REL: u32 = 9;
pub const SHT_SHLIB: u32 = 10;
pub const SHT_DYNSYM: u32 = 11;
pub const SHT_INIT_ARRAY: u32 = 14;
pub const SHT_FINI_ARRAY: u32 = 15;
pub const SHT_PREINIT_ARRAY: u32 = 16;
pub const SHT_GROUP: u32 = 17;
pub const SHT_SYMTAB_SHNDX: u32 = 18;
pub const SHT_LOOS: u32 = 0x6000_0000;
pub const SHT_LOSUNW: u32 = 0x6fff_fff7;
pub const SHT_SUNW_ANNOTATE: u32 = 0x6fff_fff7;
pub const SHT_SUNW_DEBUGSTR: u32 = 0x6fff_fff8;
pub const SHT_SUNW_DEBUG: u32 = 0x6fff_fff9;
pub const SHT_SUNW_MOVE: u32 = 0x6fff_fffa;
pub const SHT_SUNW_COMDAT: u32 = 0x6fff_fffb;
pub const SHT_SUNW_SYMINFO: u32 = 0x6fff_fffc;
pub const SHT_SUNW_VERDEF: u32 = 0x6fff_fffd;
pub const SHT_SUNW_VERNEED: u32 = 0x6fff_fffe;
pub const SHT_SUNW_VERSYM: u32 = 0x6fff_ffff;
pub const SHT_HISUNW: u32 = 0x6fff_ffff;
pub const SHT_HIOS: u32 = 0x6fff_ffff;
pub const SHT_LOPROC: u32 = 0x7000_0000;
pub const SHT_SPARC_GOTDATA: u32 = 0x7000_0000;
pub const SHT_HIPROC: u32 = 0x7fff_ffff;
pub const SHT_LOUSER: u32 = 0x8000_0000;
pub const SHT_HIUSER: u32 = 0xffff_ffff;

/// Section flags
pub const SHF_WRITE: u32 = 0x1;
pub const SHF_ALLOC: u32 = 0x2;
pub const SHF_EXECINSTR: u32 = 0x4;
pub const SHF_MERGE: u32 = 0x10;
pub const SHF_STRINGS: u32 = 0x20;
pub const SHF_INFO_LINK: u32 = 0x40;
pub const SHF_LINK_ORDER: u32 = 0x80;
pub const SHF_OS_NONCONFORMING: u32 = 0x100;
pub const SHF_GROUP: u32 = 0x200;
pub const SHF_TLS: u32 = 0x400;
pub const SHF_MASKOS: u32 = 0x0ff0_0000;
pub const SHF_ORDERED: u32 = 0x4000_0000;
pub const SHF_EXCLUDE: u32 = 0x8000_0000;
pub const SHF_MASKPROC: u32 = 0xf000_0000;

pub fn class_name(class: u8) -> &'static str {
    match class {
        ELFCLASSNONE => "NONE",
        ELFCLASS32 => "ELF32",
        ELFCLASS64 => "ELF64",
        _ => "UNKNOWN",
    }
}

pub fn encoding_name(data: u8) -> &'static str {
    match data {
        ELFDATANONE => "NONE",
        ELFDATA2LSB => "2's complement, little endian",
        ELFDATA2MSB => "2's complement, big endian",
        _ => "UNKNOWN",
    }
}

pub fn object_type_name(e_type: u16) -> &'static str {
    match e_type {
        ET_NONE => "NONE",
        ET_REL => "REL (Relocatable file)",
        ET_EXEC => "EXEC (Executable file)",
        ET_DYN => "DYN (Shared object file)",
        ET_CORE => "CORE (Core file)",
        _ => "UNKNOWN",
    }
}

pub fn machine_name(e_machine: u16) -> &'static str {
    match e_machine {
        EM_NONE => "None",
        EM_M32 => "AT&T WE 32100",
        EM_SPARC => "SPARC",
        EM_386 => "Intel 80386",
        EM_68K => "Motorola 68000",
        EM_88K => "Motorola 88000",
        EM_860 => "Intel 80860",
        EM_MIPS => "MIPS R3000",
        EM_ARM => "ARM",
        EM_TEAK => "Teak",
        _ => "UNKNOWN",
    }
}

pub fn segment_type_name(p_type: u32) -> &'static str {
    match p_type {
        PT_NULL => "NULL",
        PT_LOAD => "LOAD",
        PT_DYNAMIC => "DYNAMIC",
        PT_INTERP => "INTERP",
        PT_NOTE => "NOTE",
        PT_SHLIB => "SHLIB",
        PT_PHDR => "PHDR",
        _ => "UNKNOWN",
    }
}

pub fn section_type_name(sh_type: u32) -> &'static str {
    match sh_type {
        SHT_NULL => "NULL",
        SHT_PROGBITS => "PROGBITS",
        SHT_SYMTAB => "SYMTAB",
        SHT_STRTAB => "STRTAB",
        SHT_RELA => "RELA",
        SHT_HASH => "HASH",
        SHT_DYNAMIC => "DYNAMIC",
        SHT_NOTE => "NOTE",
        SHT_NOBITS => "NOBITS",
        SHT_REL => "REL",
        SHT_SHLIB => "SHLIB",
        SHT_DYNSYM => "DYNSYM",
        SHT_INIT_ARRAY => "INIT_ARRAY",
        SHT_FINI_ARRAY => "FINI_ARRAY",
        SHT_PREINIT_ARRAY => "PREINIT_ARRAY",
        SHT_GROUP => "GROUP",
        SHT_SYMTAB_SHNDX => "SYMTAB_SHNDX",
        SHT_SUNW_ANNOTATE..=SHT_SUNW_VERSYM => "SUNW",
        SHT_LOOS..=SHT_HIOS => "LOOS+",
        SHT_LOPROC..=SHT_HIPROC => "LOPROC+",
        SHT_LOUSER..=SHT_HIUSER => "LOUSER+",
        _ => "UNKNOWN",
    }
}
