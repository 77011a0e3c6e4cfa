//! Header round-trip
//!
//! Bytes produced by a conformant ELF32 writer read back with every header
//! and table field identical to what was written, in either byte order.

mod common;

use common::{ElfWriter, Section, Segment};
use elf32_loader::consts::*;
use elf32_loader::{ElfFile, Endian, Image};
use proptest::prelude::*;

fn arb_writer() -> impl Strategy<Value = ElfWriter> {
    (
        prop_oneof![Just(Endian::Little), Just(Endian::Big)],
        prop_oneof![Just(ET_REL), Just(ET_EXEC), Just(ET_DYN), any::<u16>()],
        prop_oneof![Just(EM_TEAK), Just(EM_ARM), Just(EM_386), any::<u16>()],
        any::<u32>(),
        any::<u32>(),
        proptest::collection::vec((any::<u32>(), 0u32..8, proptest::collection::vec(any::<u8>(), 0..32)), 0..4),
        proptest::collection::vec(("\\.[a-z_]{1,12}", proptest::collection::vec(any::<u8>(), 0..32)), 0..6),
    )
        .prop_map(|(endian, e_type, e_machine, e_entry, e_flags, segments, sections)| {
            let mut w = ElfWriter::new(endian);
            w.e_type = e_type;
            w.e_machine = e_machine;
            w.e_entry = e_entry;
            w.e_flags = e_flags;
            for (vaddr, flags, data) in segments {
                w = w.segment(Segment::load(vaddr, flags, data));
            }
            for (name, data) in sections {
                w = w.section(Section::progbits(&name, SHF_ALLOC, data));
            }
            w
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn header_fields_round_trip(writer in arb_writer()) {
        let written = writer.build();
        let file = ElfFile::parse(&written.bytes).unwrap();
        prop_assert_eq!(file.header(), &written.header);
        prop_assert_eq!(file.endian(), writer.endian);
        prop_assert_eq!(file.program_count(), written.programs.len());
        prop_assert_eq!(file.section_count(), written.sections.len());
    }

    #[test]
    fn table_entries_round_trip(writer in arb_writer()) {
        let written = writer.build();
        let image = Image::from_bytes(written.bytes.clone()).unwrap();
        let file = image.parse().unwrap();

        for (n, expected) in written.programs.iter().enumerate() {
            prop_assert_eq!(&file.program(n).unwrap(), expected);
        }
        for (n, expected) in written.sections.iter().enumerate() {
            prop_assert_eq!(&file.section(n).unwrap(), expected);
        }
    }
}

#[test]
fn teak_sample_header() {
    let written = common::sample(Endian::Little);
    let file = ElfFile::parse(&written.bytes).unwrap();
    let header = file.header();

    assert_eq!(header.class(), ELFCLASS32);
    assert_eq!(header.data_encoding(), ELFDATA2LSB);
    assert_eq!(header.ident_version(), EV_CURRENT);
    assert_eq!(header.machine_name(), "Teak");
    assert!(header.is_executable());
    assert!(!header.is_relocatable());
    assert_eq!(header.e_ehsize, 52);
    assert_eq!(file.string_table_index(), Some(4));
}
