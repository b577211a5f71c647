/**
 * MO Binary Reader
 *
 * Endian-aware bounds-checked accessors over an in-memory MO file
 * buffer. The checked accessors fail with an EOF-class diagnostic; the
 * unchecked variants are for addresses the loader has already
 * validated.
 */
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Byte order of a MO file, detected from its magic number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Endianness {
    Little,
    Big,
}

/// A `(length, address)` string descriptor from an originals or
/// translations table slot. `length` is in bytes, excluding the
/// trailing NUL; `address` is a buffer offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringInfo {
    pub length: u32,
    pub address: u32,
}

/// Reader over an immutable MO file buffer.
#[derive(Debug)]
pub struct MoReader {
    buf: Vec<u8>,
    endian: Endianness,
}

impl MoReader {
    pub fn new(buf: Vec<u8>, endian: Endianness) -> Self {
        MoReader { buf, endian }
    }

    pub fn endian(&self) -> Endianness {
        self.endian
    }

    /// Buffer size in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn eof_error(&self, addr: u64) -> Error {
        Error::format(format!(
            "unexpected EOF (addr:0x{:x} file size:0x{:x})",
            addr,
            self.len()
        ))
    }

    /// Read one byte.
    pub fn u8_at(&self, addr: u32) -> Result<u8> {
        if (addr as usize) < self.buf.len() {
            Ok(self.buf[addr as usize])
        } else {
            Err(self.eof_error(u64::from(addr)))
        }
    }

    /// Read a 32-bit value in the file's byte order.
    pub fn u32_at(&self, addr: u32) -> Result<u32> {
        if u64::from(addr) + 4 <= self.buf.len() as u64 {
            Ok(self.u32_at_unchecked(addr))
        } else {
            Err(self.eof_error(u64::from(addr)))
        }
    }

    /// Read a 32-bit value without a range check. The address must have
    /// been validated beforehand.
    pub fn u32_at_unchecked(&self, addr: u32) -> u32 {
        let addr = addr as usize;
        let bytes: [u8; 4] = self.buf[addr..addr + 4].try_into().unwrap();
        match self.endian {
            Endianness::Little => u32::from_le_bytes(bytes),
            Endianness::Big => u32::from_be_bytes(bytes),
        }
    }

    /// Read a `(length, address)` string descriptor (8 bytes).
    pub fn string_info_at(&self, addr: u32) -> Result<StringInfo> {
        if u64::from(addr) + 8 <= self.buf.len() as u64 {
            Ok(self.string_info_at_unchecked(addr))
        } else {
            Err(self.eof_error(u64::from(addr)))
        }
    }

    /// Read a string descriptor without a range check. The address must
    /// have been validated beforehand.
    pub fn string_info_at_unchecked(&self, addr: u32) -> StringInfo {
        StringInfo {
            length: self.u32_at_unchecked(addr),
            address: self.u32_at_unchecked(addr + 4),
        }
    }

    /// The raw bytes of a validated string descriptor's range.
    pub fn slice_at(&self, info: StringInfo) -> &[u8] {
        let start = info.address as usize;
        &self.buf[start..start + info.length as usize]
    }

    /// The full string of a validated descriptor, internal NULs
    /// included.
    pub fn str_at(&self, info: StringInfo) -> &str {
        // UTF-8 validity is checked once during load.
        std::str::from_utf8(self.slice_at(info)).expect("catalogue strings are validated on load")
    }

    /// The string starting at `addr`, up to but not including the next
    /// NUL byte. The loader guarantees the terminator exists.
    pub fn cstr_at(&self, addr: u32) -> &str {
        let bytes = &self.buf[addr as usize..];
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        std::str::from_utf8(&bytes[..end]).expect("catalogue strings are validated on load")
    }
}
