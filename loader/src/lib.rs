//! ELF32 Image Loader
//!
//! Reads one ELF32 object file held in memory and exposes its tables
//! without ever reading outside the buffer.
//!
//! # Capabilities
//!
//! - Open and validate an image ([`Image`], [`ElfFile::parse`])
//! - Enumerate and read program segments ([`ElfFile::program`],
//!   [`ElfFile::program_data`])
//! - Enumerate and read sections ([`ElfFile::section`],
//!   [`ElfFile::section_data`])
//! - Resolve section names ([`ElfFile::section_name`])
//!
//! Both little- and big-endian files are decoded according to `EI_DATA`.
//! 64-bit files are rejected.
//!
//! # Example
//!
//! ```no_run
//! use elf32_loader::Image;
//!
//! # fn main() -> Result<(), elf32_loader::ElfError> {
//! let image = Image::open("firmware.elf")?;
//! let elf = image.parse()?;
//! for section in elf.sections() {
//!     let section = section?;
//!     println!("{}", elf.name_of(&section)?);
//! }
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod consts;
pub mod error;
pub mod file;
pub mod header;
pub mod image;
pub mod program;
pub mod section;
pub mod strtab;

mod reader;

pub use error::{ElfError, Result, Table};
pub use file::ElfFile;
pub use header::Elf32Header;
pub use image::Image;
pub use program::{ProgramHeader, SegmentFlags};
pub use reader::Endian;
pub use section::{SectionFlags, SectionHeader};
pub use strtab::StringTable;
