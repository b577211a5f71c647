//! Shared test helpers: an in-memory MO file builder.
#![allow(dead_code)]

use gettext_mo::Endianness;

/// MO entries used by the builder: `(msgid, translation)` pairs, with
/// internal NULs for plural forms and `\u{4}` separators for contexts,
/// exactly as stored on disk.
pub type MoEntry<'a> = (&'a str, &'a str);

const MO_MAGIC: u32 = 0x950412de;

/// Offset of the originals table: directly after the 28-byte header
/// produced by msgfmt (magic, revision, count, two table offsets, and
/// the unused hash table fields).
const OFFS_ORIG_TABLE: u32 = 28;

pub fn write_u32(buf: &mut Vec<u8>, value: u32, endian: Endianness) {
    match endian {
        Endianness::Little => buf.extend_from_slice(&value.to_le_bytes()),
        Endianness::Big => buf.extend_from_slice(&value.to_be_bytes()),
    }
}

pub fn read_u32(buf: &[u8], offset: usize, endian: Endianness) -> u32 {
    let bytes: [u8; 4] = buf[offset..offset + 4].try_into().unwrap();
    match endian {
        Endianness::Little => u32::from_le_bytes(bytes),
        Endianness::Big => u32::from_be_bytes(bytes),
    }
}

pub fn patch_u32(buf: &mut [u8], offset: usize, value: u32, endian: Endianness) {
    let bytes = match endian {
        Endianness::Little => value.to_le_bytes(),
        Endianness::Big => value.to_be_bytes(),
    };
    buf[offset..offset + 4].copy_from_slice(&bytes);
}

/// Build a structurally valid MO file image from the given entries.
pub fn build_mo(entries: &[MoEntry], endian: Endianness) -> Vec<u8> {
    let n = entries.len() as u32;
    let offs_trans_table = OFFS_ORIG_TABLE + 8 * n;
    let strings_base = offs_trans_table + 8 * n;

    // Lay out all strings (originals, then translations), each with a
    // trailing NUL, and remember their descriptors.
    let mut blob: Vec<u8> = Vec::new();
    let mut infos: Vec<(u32, u32)> = Vec::new();
    for text in entries
        .iter()
        .map(|(orig, _)| *orig)
        .chain(entries.iter().map(|(_, trans)| *trans))
    {
        infos.push((text.len() as u32, strings_base + blob.len() as u32));
        blob.extend_from_slice(text.as_bytes());
        blob.push(0);
    }

    let mut buf = Vec::new();
    write_u32(&mut buf, MO_MAGIC, endian);
    write_u32(&mut buf, 0, endian); // format revision
    write_u32(&mut buf, n, endian);
    write_u32(&mut buf, OFFS_ORIG_TABLE, endian);
    write_u32(&mut buf, offs_trans_table, endian);
    write_u32(&mut buf, 0, endian); // hash table size
    write_u32(&mut buf, 0, endian); // hash table offset
    for (length, address) in infos {
        write_u32(&mut buf, length, endian);
        write_u32(&mut buf, address, endian);
    }
    buf.extend_from_slice(&blob);
    buf
}

/// Offset of entry `n`'s descriptor in the originals table.
pub fn orig_entry_addr(_entries: &[MoEntry], n: u32) -> u32 {
    OFFS_ORIG_TABLE + 8 * n
}

/// Offset of entry `n`'s descriptor in the translations table.
pub fn trans_entry_addr(entries: &[MoEntry], n: u32) -> u32 {
    OFFS_ORIG_TABLE + 8 * entries.len() as u32 + 8 * n
}

/// A standard metadata block for the entry with the empty msgid.
pub fn meta_block(plural_forms: Option<&str>) -> String {
    let mut block = String::from(
        "Project-Id-Version: test 1.0\n\
         MIME-Version: 1.0\n\
         Content-Type: text/plain; charset=UTF-8\n\
         Content-Transfer-Encoding: 8bit\n",
    );
    if let Some(rules) = plural_forms {
        block.push_str("Plural-Forms: ");
        block.push_str(rules);
        block.push('\n');
    }
    block
}

pub const RU_PLURAL_FORMS: &str =
    "nplurals=3; plural=(n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2);";

pub const FR_PLURAL_FORMS: &str = "nplurals=2; plural=(n > 1);";

/// Russian message entries matching the query scenarios.
pub const RU_ENTRIES: &[MoEntry] = &[
    ("Cataclysm", "Катаклизм"),
    ("noun\u{4}Test", "Тест"),
    ("verb\u{4}Test", "Тестировать"),
    ("%d item\0%d items", "%d предмет\0%d предмета\0%d предметов"),
    (
        "source of water\u{4}%d spring\0%d springs",
        "%d родник\0%d родника\0%d родников",
    ),
    (
        "metal coil\u{4}%d spring\0%d springs",
        "%d пружина\0%d пружины\0%d пружин",
    ),
];

/// A complete single-catalogue Russian MO image.
pub fn ru_mo(endian: Endianness) -> Vec<u8> {
    let meta = meta_block(Some(RU_PLURAL_FORMS));
    let mut entries: Vec<MoEntry> = vec![("", meta.as_str())];
    entries.extend_from_slice(RU_ENTRIES);
    build_mo(&entries, endian)
}
