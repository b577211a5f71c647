/*
 * Character Codes
 *
 * Character constants used by the plural-rule lexer.
 */
#![allow(non_upper_case_globals)]
#![allow(clippy::manual_range_contains)]

// Whitespace
pub const TAB: char = '\t';
pub const NEWLINE: char = '\n';
pub const SPACE: char = ' ';

// Punctuation
pub const BANG: char = '!';
pub const PERCENT: char = '%';
pub const AMPERSAND: char = '&';
pub const LPAREN: char = '(';
pub const RPAREN: char = ')';
pub const COLON: char = ':';
pub const LT: char = '<';
pub const EQ: char = '=';
pub const GT: char = '>';
pub const QUESTION: char = '?';
pub const BAR: char = '|';

// Digits
pub const ZERO: char = '0';
pub const NINE: char = '9';

// Letters (for quick checks)
pub const A: char = 'A';
pub const Z: char = 'Z';
pub const a: char = 'a';
pub const z: char = 'z';

/// The plural-form variable.
pub const VAR_N: char = 'n';

/// Check if character is whitespace between plural-rule tokens
/// (ASCII space, tab or newline only).
pub fn is_whitespace(ch: char) -> bool {
    ch == SPACE || ch == TAB || ch == NEWLINE
}

/// Check if character is a decimal digit
pub fn is_digit(ch: char) -> bool {
    ch >= ZERO && ch <= NINE
}

/// Check if character is ASCII letter
pub fn is_ascii_letter(ch: char) -> bool {
    (ch >= a && ch <= z) || (ch >= A && ch <= Z)
}
