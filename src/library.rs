/**
 * Translation Library
 *
 * Merges loaded catalogues into a single pool and dispatches message
 * queries against it, in the style of the GNU gettext API.
 */
use crate::catalogue::Catalogue;

/// Separator between a context and a msgid in a context-qualified
/// lookup key, per the gettext on-disk convention for `msgctxt`.
const CONTEXT_SEPARATOR: char = '\u{4}';

/// Locates one string within the library's pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StringDescriptor {
    catalogue: u32,
    entry: u32,
}

/// A merged, queryable collection of translation catalogues.
///
/// Catalogues are handed over by value and never mutated afterwards;
/// lookups may be shared freely between readers. When several
/// catalogues translate the same msgid, the earliest catalogue in the
/// list wins.
#[derive(Default)]
pub struct TranslationLibrary {
    /// Index of all loaded strings, sorted by singular msgid.
    string_table: Vec<StringDescriptor>,
    catalogues: Vec<Catalogue>,
}

impl TranslationLibrary {
    /// Build a library from an ordered list of catalogues.
    pub fn create(catalogues: Vec<Catalogue>) -> TranslationLibrary {
        let mut library = TranslationLibrary {
            string_table: Vec::new(),
            catalogues,
        };
        library.build_string_table();
        library
    }

    /// Translate `msgid`. Returns `msgid` itself on a miss.
    pub fn get<'a>(&'a self, msgid: &'a str) -> &'a str {
        self.lookup_string_in_table(msgid).unwrap_or(msgid)
    }

    /// Translate with plural forms. On a miss, English plural rules
    /// apply to the fallback: `msgid` for `n == 1`, `msgid_pl`
    /// otherwise.
    pub fn get_pl<'a>(&'a self, msgid: &'a str, msgid_pl: &'a str, n: u64) -> &'a str {
        match self.lookup_pl_string_in_table(msgid, n) {
            Some(translation) => translation,
            None if n == 1 => msgid,
            None => msgid_pl,
        }
    }

    /// Translate a context-qualified msgid. Returns the bare `msgid`
    /// on a miss.
    pub fn get_ctx<'a>(&'a self, ctx: &str, msgid: &'a str) -> &'a str {
        self.lookup_string_in_table(&context_key(ctx, msgid))
            .unwrap_or(msgid)
    }

    /// Translate a context-qualified msgid with plural forms.
    pub fn get_ctx_pl<'a>(&'a self, ctx: &str, msgid: &'a str, msgid_pl: &'a str, n: u64) -> &'a str {
        match self.lookup_pl_string_in_table(&context_key(ctx, msgid), n) {
            Some(translation) => translation,
            None if n == 1 => msgid,
            None => msgid_pl,
        }
    }

    /// Append a descriptor for every non-metadata entry, then sort by
    /// singular msgid. The sort is stable, so equal msgids keep their
    /// (catalogue, entry) insertion order and the first catalogue wins
    /// at query time.
    fn build_string_table(&mut self) {
        let mut table = Vec::new();
        for (ci, catalogue) in self.catalogues.iter().enumerate() {
            for entry in 0..catalogue.num_strings() {
                if catalogue.nth_orig_string(entry).is_empty() {
                    continue;
                }
                table.push(StringDescriptor {
                    catalogue: ci as u32,
                    entry,
                });
            }
        }

        let catalogues = &self.catalogues;
        table.sort_by(|a, b| msgid_of(catalogues, *a).cmp(msgid_of(catalogues, *b)));
        self.string_table = table;
    }

    /// Binary search for the first descriptor whose msgid equals `id`.
    fn find_in_table(&self, id: &str) -> Option<StringDescriptor> {
        let idx = self
            .string_table
            .partition_point(|&d| msgid_of(&self.catalogues, d) < id);
        let descriptor = *self.string_table.get(idx)?;
        (msgid_of(&self.catalogues, descriptor) == id).then_some(descriptor)
    }

    fn lookup_string_in_table<'a>(&'a self, id: &str) -> Option<&'a str> {
        self.find_in_table(id)
            .map(|d| self.catalogues[d.catalogue as usize].nth_translation(d.entry))
    }

    /// Plural lookup. The plural form is selected by the rules of the
    /// catalogue the hit came from, so mixed-arity catalogues resolve
    /// independently.
    fn lookup_pl_string_in_table<'a>(&'a self, id: &str, n: u64) -> Option<&'a str> {
        self.find_in_table(id)
            .map(|d| self.catalogues[d.catalogue as usize].nth_pl_translation(d.entry, n))
    }
}

fn msgid_of(catalogues: &[Catalogue], descriptor: StringDescriptor) -> &str {
    catalogues[descriptor.catalogue as usize].nth_orig_string(descriptor.entry)
}

fn context_key(ctx: &str, msgid: &str) -> String {
    let mut key = String::with_capacity(ctx.len() + msgid.len() + 1);
    key.push_str(ctx);
    key.push(CONTEXT_SEPARATOR);
    key.push_str(msgid);
    key
}
