/**
 * Catalogue Loader
 *
 * Validates a MO file's structure and wraps it as a queryable
 * translation catalogue.
 *
 * A MO file starts with a 20-byte header: magic number, format
 * version, string count, and the offsets of the originals and
 * translations tables. Each table holds one `(length, address)`
 * descriptor per entry. Entry 0 is the metadata block (empty msgid);
 * plural originals are stored as `singular NUL plural` and plural
 * translations as `form0 NUL form1 NUL ...`.
 */
use std::fs;
use std::path::Path;

use crate::catalogue::metadata::MetaHeaders;
use crate::catalogue::reader::{Endianness, MoReader, StringInfo};
use crate::error::{Error, Result};
use crate::plural_rules::PlfNode;

/// MO magic number as stored in a little-endian file.
const MO_MAGIC: u32 = 0x950412de;
/// MO magic number as read little-endian from a big-endian file.
const MO_MAGIC_SWAPPED: u32 = 0xde120495;

/// Size of the fixed MO header: magic, version, string count and the
/// two table offsets.
const MO_HEADER_SIZE: usize = 20;

/// A loaded translation catalogue. Corresponds to a single MO file.
///
/// Immutable once loaded; every returned string borrows from the
/// catalogue's own buffer.
#[derive(Debug)]
pub struct Catalogue {
    reader: MoReader,
    number_of_strings: u32,
    offs_orig_table: u32,
    offs_trans_table: u32,
    num_plural_forms: u32,
    plf_rules: PlfNode,
}

impl Catalogue {
    /// Load a translation catalogue from the MO file at `path`.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Catalogue> {
        let buf = fs::read(path).map_err(|_| Error::io("failed to open file"))?;
        Self::load_from_bytes(buf)
    }

    /// Load a translation catalogue from an in-memory MO file image.
    pub fn load_from_bytes(buf: Vec<u8>) -> Result<Catalogue> {
        // Table offsets are 32-bit, so anything the header cannot
        // describe is rejected up front.
        if buf.len() < MO_HEADER_SIZE || buf.len() > u32::MAX as usize {
            return Err(Error::format("not a MO file"));
        }

        let magic = u32::from_le_bytes(buf[0..4].try_into().unwrap());
        let endian = match magic {
            MO_MAGIC => Endianness::Little,
            MO_MAGIC_SWAPPED => Endianness::Big,
            _ => return Err(Error::format("not a MO file")),
        };

        let reader = MoReader::new(buf, endian);

        let version = reader.u32_at(4)?;
        if version >> 16 != 0 {
            return Err(Error::format("unsupported MO version"));
        }

        let number_of_strings = reader.u32_at(8)?;
        let offs_orig_table = reader.u32_at(12)?;
        let offs_trans_table = reader.u32_at(16)?;

        check_table_bounds(&reader, offs_orig_table, number_of_strings)?;
        check_table_bounds(&reader, offs_trans_table, number_of_strings)?;
        check_string_terminators(&reader, offs_orig_table, number_of_strings)?;
        check_string_terminators(&reader, offs_trans_table, number_of_strings)?;

        let headers = get_metadata(&reader, offs_orig_table, offs_trans_table, number_of_strings)?;
        headers.check_encoding()?;
        let (num_plural_forms, plf_rules) = headers.plural_forms()?;

        let catalogue = Catalogue {
            reader,
            number_of_strings,
            offs_orig_table,
            offs_trans_table,
            num_plural_forms,
            plf_rules,
        };
        catalogue.check_string_plurals()?;

        Ok(catalogue)
    }

    /// Number of entries, the metadata entry included.
    pub fn num_strings(&self) -> u32 {
        self.number_of_strings
    }

    /// Declared number of plural forms (at least 1).
    pub fn num_plural_forms(&self) -> u32 {
        self.num_plural_forms
    }

    /// Byte order the file was stored in.
    pub fn endian(&self) -> Endianness {
        self.reader.endian()
    }

    /// The original (msgid) string of entry `n`. For a plural entry
    /// only the singular form is returned.
    ///
    /// Panics if `n` is out of range.
    pub fn nth_orig_string(&self, n: u32) -> &str {
        self.reader.cstr_at(self.orig_info(n).address)
    }

    /// The translation of entry `n`. For a plural entry this is the
    /// first form.
    ///
    /// Panics if `n` is out of range.
    pub fn nth_translation(&self, n: u32) -> &str {
        self.reader.cstr_at(self.trans_info(n).address)
    }

    /// The plural translation of entry `n` for a quantity of `num`,
    /// selected by the catalogue's plural rules. Falls back to the
    /// first form if the selected index exceeds the stored forms.
    ///
    /// Panics if `n` is out of range.
    pub fn nth_pl_translation(&self, n: u32, num: u64) -> &str {
        let full = self.reader.str_at(self.trans_info(n));
        let k = self.plf_rules.eval(num);

        usize::try_from(k)
            .ok()
            .and_then(|k| full.split('\0').nth(k))
            .unwrap_or_else(|| full.split('\0').next().unwrap_or(""))
    }

    fn orig_info(&self, n: u32) -> StringInfo {
        assert!(n < self.number_of_strings);
        self.reader
            .string_info_at_unchecked(self.offs_orig_table + 8 * n)
    }

    fn trans_info(&self, n: u32) -> StringInfo {
        assert!(n < self.number_of_strings);
        self.reader
            .string_info_at_unchecked(self.offs_trans_table + 8 * n)
    }

    /// Every plural entry must carry exactly the declared number of
    /// NUL-separated forms.
    fn check_string_plurals(&self) -> Result<()> {
        for n in 0..self.number_of_strings {
            let orig = self.reader.slice_at(self.orig_info(n));
            if !orig.contains(&0) {
                continue;
            }

            let trans = self.reader.slice_at(self.trans_info(n));
            let forms = trans.iter().filter(|&&b| b == 0).count() as u64 + 1;
            if forms != u64::from(self.num_plural_forms) {
                return Err(Error::format(format!(
                    "string_info at 0x{:x}: expected {} plural forms, got {}",
                    self.offs_trans_table + 8 * n,
                    self.num_plural_forms,
                    forms
                )));
            }
        }
        Ok(())
    }
}

/// A string table must fit entirely inside the buffer.
fn check_table_bounds(reader: &MoReader, offs: u32, count: u32) -> Result<()> {
    let end = u64::from(offs) + 8 * u64::from(count);
    if end > reader.len() as u64 {
        return Err(Error::format(format!(
            "string table at 0x{:x} extends beyond EOF",
            offs
        )));
    }
    Ok(())
}

/// Every descriptor must reference a range inside the buffer, ending
/// with a NUL byte, and holding valid UTF-8.
fn check_string_terminators(reader: &MoReader, offs_table: u32, count: u32) -> Result<()> {
    for n in 0..count {
        let entry_addr = offs_table + 8 * n;
        let info = reader.string_info_at_unchecked(entry_addr);

        let end = u64::from(info.address) + u64::from(info.length);
        if end + 1 > reader.len() as u64 {
            return Err(Error::format(format!(
                "string_info at 0x{:x}: extends beyond EOF (len:0x{:x} addr:0x{:x} file size:0x{:x})",
                entry_addr,
                info.length,
                info.address,
                reader.len()
            )));
        }

        if reader.u8_at(info.address + info.length)? != 0 {
            return Err(Error::format(format!(
                "string_info at 0x{:x}: missing null terminator",
                entry_addr
            )));
        }

        if std::str::from_utf8(reader.slice_at(info)).is_err() {
            return Err(Error::format(format!(
                "string_info at 0x{:x}: invalid UTF-8 string",
                entry_addr
            )));
        }
    }
    Ok(())
}

/// Extract the metadata headers from entry 0, whose original string
/// must be empty.
fn get_metadata(
    reader: &MoReader,
    offs_orig_table: u32,
    offs_trans_table: u32,
    count: u32,
) -> Result<MetaHeaders> {
    if count == 0 {
        return Err(Error::format("missing metadata"));
    }

    let orig = reader.string_info_at_unchecked(offs_orig_table);
    if orig.length != 0 {
        return Err(Error::format("missing metadata"));
    }

    let trans = reader.string_info_at_unchecked(offs_trans_table);
    Ok(MetaHeaders::parse(reader.str_at(trans)))
}
