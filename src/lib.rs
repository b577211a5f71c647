#![deny(clippy::all)]

//! Gettext-compatible message translation library.
//!
//! Loads compiled message-object (MO) catalogues, validates their binary
//! structure, parses their plural-form rule expressions, and merges them
//! into a single lookup pool that resolves translation requests in the
//! style of the GNU gettext API, including context-qualified
//! (`msgctxt`) and plural-form-sensitive queries.
//!
//! For reference on the MO file format, see the 'GNU gettext utilities'
//! manual: <https://www.gnu.org/software/gettext/manual/html_node/MO-Files.html>

pub mod chars;
pub mod error;

// Parser modules
pub mod plural_rules;

// Catalogue loading and querying
pub mod catalogue;
pub mod library;

// Re-exports
pub use catalogue::{Catalogue, Endianness};
pub use error::{Error, Result};
pub use library::TranslationLibrary;
pub use plural_rules::{parse_plural_rules, PlfNode, PlfOp};
