//! Exit code contract
//!
//! For any `ElfInfoError`, `exit_code_num()` is 1 or 2. Infrastructure
//! errors (including a loader I/O failure) map to 2, image errors to 1.

use elf32_loader::{ElfError, Table};
use elfinfo::error::ElfInfoError;
use proptest::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;

fn arb_image_error() -> impl Strategy<Value = ElfError> {
    (0..=9u8, any::<u64>(), any::<u32>(), any::<u8>(), 0..1000usize).prop_map(
        |(tag, off, word, byte, count)| match tag {
            0 => ElfError::TruncatedFile {
                offset: off,
                size: u64::from(word),
                len: count,
            },
            1 => ElfError::BadMagic { found: [byte; 4] },
            2 => ElfError::UnsupportedClass { class: byte },
            3 => ElfError::UnsupportedEncoding { encoding: byte },
            4 => ElfError::UnsupportedVersion { version: byte },
            5 => ElfError::InvalidEntrySize {
                table: Table::Section,
                size: word as u16,
            },
            6 => ElfError::IndexOutOfRange {
                table: Table::Program,
                index: count,
                count,
            },
            7 => ElfError::NoStringTable,
            8 => ElfError::MalformedString { offset: word },
            _ => ElfError::NoFileStorage { index: count },
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn image_errors_exit_1(err in arb_image_error()) {
        let err = ElfInfoError::from(err);
        prop_assert_eq!(err.exit_code_num(), 1);
        prop_assert_eq!(err.exit_code(), ExitCode::from(1));
    }

    #[test]
    fn section_not_found_exits_1(name in "[a-z.]{0,16}") {
        let err = ElfInfoError::SectionNotFound { name };
        prop_assert_eq!(err.exit_code_num(), 1);
    }

    #[test]
    fn config_errors_exit_2(msg in "[a-zA-Z0-9 ]{0,40}") {
        prop_assert_eq!(ElfInfoError::ConfigParseError(msg.clone()).exit_code_num(), 2);
        let err = ElfInfoError::InvalidPattern { pattern: msg.clone(), reason: msg };
        prop_assert_eq!(err.exit_code_num(), 2);
    }
}

#[test]
fn io_errors_exit_2() {
    let err = ElfInfoError::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
    assert_eq!(err.exit_code_num(), 2);

    let err = ElfInfoError::Elf(ElfError::Io {
        path: PathBuf::from("/missing.elf"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    });
    assert_eq!(err.exit_code_num(), 2);
    assert_eq!(err.exit_code(), ExitCode::from(2));
}

#[test]
fn json_error_exits_2() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert_eq!(ElfInfoError::Json(json_err).exit_code_num(), 2);
}
