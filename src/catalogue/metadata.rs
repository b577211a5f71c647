//! Metadata header block parsing.
//!
//! The translation of a catalogue's first entry (empty msgid) is a
//! block of `Name: value` lines. Of these, `Content-Type` carries the
//! declared charset and `Plural-Forms` carries the plural arity and
//! rule expression.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::plural_rules::{parse_plural_rules, PlfNode};

static CHARSET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)charset=(\S+)\s*$").unwrap());

static PLURAL_FORMS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*nplurals\s*=\s*([0-9]+)\s*;\s*plural\s*=\s*(.+?)\s*;?\s*$").unwrap()
});

/// Parsed metadata headers of a catalogue.
#[derive(Debug, Clone)]
pub struct MetaHeaders {
    headers: Vec<(String, String)>,
}

impl MetaHeaders {
    /// Split a metadata block into headers. Lines without a `:` are
    /// ignored.
    pub fn parse(block: &str) -> Self {
        let mut headers = Vec::new();
        for line in block.split('\n') {
            if let Some((name, value)) = line.split_once(':') {
                headers.push((name.trim().to_string(), value.trim().to_string()));
            }
        }
        MetaHeaders { headers }
    }

    /// Value of the first header with the given name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Require the declared charset to be UTF-8.
    ///
    /// The `Content-Type` value must end with `charset=UTF-8`; the
    /// `charset` keyword is matched case-insensitively, the encoding
    /// name exactly.
    pub fn check_encoding(&self) -> Result<()> {
        let charset = self
            .get("Content-Type")
            .and_then(|value| CHARSET_RE.captures(value))
            .map(|caps| caps.get(1).map_or("", |m| m.as_str()).to_string());
        if charset.as_deref() == Some("UTF-8") {
            Ok(())
        } else {
            Err(Error::format(
                "unexpected value in Content-Type header (wrong charset?)",
            ))
        }
    }

    /// Number of plural forms and the parsed rule expression.
    ///
    /// The `Plural-Forms` header has the form
    /// `nplurals=<N>; plural=<EXPR>;` with optional whitespace around
    /// `=` and an optional trailing `;`. A catalogue without the header
    /// declares a single plural form selected by the constant rule `0`.
    pub fn plural_forms(&self) -> Result<(u32, PlfNode)> {
        let value = match self.get("Plural-Forms") {
            Some(value) => value,
            None => return Ok((1, parse_plural_rules("0")?)),
        };

        let caps = PLURAL_FORMS_RE
            .captures(value)
            .ok_or_else(|| Error::format("invalid Plural-Forms header"))?;

        let num: u32 = caps[1]
            .parse()
            .map_err(|_| Error::format("invalid nplurals"))?;
        if num < 1 {
            return Err(Error::format("invalid nplurals"));
        }

        let rules = parse_plural_rules(&caps[2])?;
        Ok((num, rules))
    }
}
