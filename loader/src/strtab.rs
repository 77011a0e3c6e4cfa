//! String table resolution.

use crate::error::{ElfError, Result};

/// A string-table section: NUL-terminated strings indexed by byte offset.
///
/// Lookups never scan past the section's bytes.
#[derive(Debug, Clone, Copy)]
pub struct StringTable<'a> {
    bytes: &'a [u8],
}

impl<'a> StringTable<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Raw bytes of the string at `offset`, without the terminating NUL.
    pub fn get_bytes(&self, offset: u32) -> Result<&'a [u8]> {
        let malformed = || ElfError::MalformedString { offset };
        let tail = usize::try_from(offset)
            .ok()
            .and_then(|start| self.bytes.get(start..))
            .ok_or_else(malformed)?;

        let len = tail.iter().position(|&b| b == 0).ok_or_else(malformed)?;
        Ok(&tail[..len])
    }

    /// The string at `offset`; non-UTF-8 names are reported as malformed.
    pub fn get(&self, offset: u32) -> Result<&'a str> {
        let bytes = self.get_bytes(offset)?;
        core::str::from_utf8(bytes).map_err(|_| ElfError::MalformedString { offset })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[u8] = b"\0.text\0.bss\0.shstrtab\0";

    #[test]
    fn test_lookup() {
        let strtab = StringTable::new(TABLE);
        assert_eq!(strtab.get(0).unwrap(), "");
        assert_eq!(strtab.get(1).unwrap(), ".text");
        assert_eq!(strtab.get(7).unwrap(), ".bss");
        assert_eq!(strtab.get(12).unwrap(), ".shstrtab");
        // suffix sharing, as linkers do for ".rel.text" / ".text"
        assert_eq!(strtab.get(3).unwrap(), "ext");
    }

    #[test]
    fn test_offset_past_end() {
        let strtab = StringTable::new(TABLE);
        let len = TABLE.len() as u32;
        assert!(matches!(strtab.get(len), Err(ElfError::MalformedString { offset }) if offset == len));
        assert!(matches!(strtab.get(u32::MAX), Err(ElfError::MalformedString { .. })));
    }

    #[test]
    fn test_unterminated() {
        let strtab = StringTable::new(b"\0abc");
        assert!(matches!(strtab.get(1), Err(ElfError::MalformedString { offset: 1 })));
    }

    #[test]
    fn test_invalid_utf8() {
        let strtab = StringTable::new(b"\0\xff\xfe\0");
        assert_eq!(strtab.get_bytes(1).unwrap(), b"\xff\xfe");
        assert!(matches!(strtab.get(1), Err(ElfError::MalformedString { offset: 1 })));
    }
}
