//! Static symbol tables for the 5-bit character codec.
//!
//! URLs are mostly lower case letters and a handful of punctuation, so the
//! codec spends 5 bits on those and pays for everything else with escape
//! symbols. Four tables are involved:
//!
//! | Table       | Contents                                   | Cost per char |
//! |-------------|--------------------------------------------|---------------|
//! | `MAP_ONE`   | lower case letters, `= / _ + &`            | 1 symbol      |
//! | `MAP_TWO`   | digits, common capitals, `x z %`           | 1 or 2        |
//! | `MAP_THREE` | remaining capitals and punctuation         | 2 symbols     |
//! | `RARE_MAP`  | space, `` ` { } ' * `` and shorthands      | 3 symbols     |
//!
//! The escape codes live at ordinals 0–31, which never occur in printable
//! input. Shorthand outputs live in the extended range 0x80–0x86.

use once_cell::sync::Lazy;

/// A 5-bit symbol, always in `0..32`.
pub type Symbol = u8;

/// Number of distinct symbols in a 5-bit stream.
pub const SYMBOL_COUNT: usize = 32;

/// One of the three full 32-entry tables.
pub type SymbolMap = [u8; SYMBOL_COUNT];

/// Persistently swap the active and inactive primary maps.
pub const SWITCH_MAP: u8 = 0x00;
/// Take the next symbol from the inactive primary map, once.
pub const SHIFT_MAP: u8 = 0x01;
/// Take the next symbol from `MAP_THREE`.
pub const NEXT_MAP_THREE: u8 = 0x02;
/// Inside `MAP_THREE`: take the next symbol from `RARE_MAP`.
pub const NEXT_RARE_MAP: u8 = 0x1F;

pub const HTTP_COLON_SLASH_SLASH: u8 = 0x80;
pub const DOT_HTML: u8 = 0x81;
pub const DOT_COM: u8 = 0x82;
pub const DOT_ORG: u8 = 0x83;
pub const INDEX: u8 = 0x84;
pub const WWW_DOT: u8 = 0x85;
pub const HTTP_COLON_SLASH_SLASH_WWW_DOT: u8 = 0x86;

#[rustfmt::skip]
pub const MAP_ONE: SymbolMap = [
    SWITCH_MAP, SHIFT_MAP, NEXT_MAP_THREE, b'=', b'/', b'_', b'+', b'&',
    b'a', b'b', b'c', b'd', b'e', b'f', b'g', b'h',
    b'i', b'j', b'k', b'l', b'm', b'n', b'o', b'p',
    b'q', b'r', b's', b't', b'u', b'v', b'w', b'y',
];

#[rustfmt::skip]
pub const MAP_TWO: SymbolMap = [
    SWITCH_MAP, SHIFT_MAP, NEXT_MAP_THREE, b'x', b'z', b'0', b'1', b'2',
    b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'%',
    b'A', b'B', b'C', b'D', b'E', b'F', b'H', b'I',
    b'L', b'M', b'N', b'O', b'R', b'S', b'T', b'U',
];

#[rustfmt::skip]
pub const MAP_THREE: SymbolMap = [
    b'G', b'J', b'K', b'P', b'Q', b'V', b'W', b'X',
    b'Y', b'Z', b'!', b'"', b'#', b'$', b'(', b')',
    b'?', b',', b';', b'<', b':', b'>', b'@', b'[',
    b'\\', b']', b'^', b'.', b'-', b'~', b'|', NEXT_RARE_MAP,
];

/// Least frequent characters followed by the shorthand outputs.
///
/// `^` is deliberately absent: it already has a cheaper slot in `MAP_THREE`.
#[rustfmt::skip]
pub const RARE_MAP: [u8; 13] = [
    b' ', b'`', b'{', b'}', b'\'', b'*',
    HTTP_COLON_SLASH_SLASH, DOT_HTML, DOT_COM, DOT_ORG, INDEX, WWW_DOT,
    HTTP_COLON_SLASH_SLASH_WWW_DOT,
];

/// A literal substring collapsed to a single `RARE_MAP` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shorthand {
    pub literal: &'static str,
    pub code: u8,
}

/// Shorthands in declaration order.
#[rustfmt::skip]
pub const SHORTHANDS: [Shorthand; 7] = [
    Shorthand { literal: "http://www.", code: HTTP_COLON_SLASH_SLASH_WWW_DOT },
    Shorthand { literal: "http://", code: HTTP_COLON_SLASH_SLASH },
    Shorthand { literal: "www.", code: WWW_DOT },
    Shorthand { literal: ".com/", code: DOT_COM },
    Shorthand { literal: ".org/", code: DOT_ORG },
    Shorthand { literal: "index", code: INDEX },
    Shorthand { literal: ".html", code: DOT_HTML },
];

/// Shorthands ordered longest literal first, ties kept in declaration order.
static SHORTHANDS_LONGEST_FIRST: Lazy<Vec<Shorthand>> = Lazy::new(|| {
    let mut ordered = SHORTHANDS.to_vec();
    ordered.sort_by(|a, b| b.literal.len().cmp(&a.literal.len()));
    ordered
});

/// Find the shorthand that should replace the start of `input`, if any.
///
/// The longest matching literal wins, so the result does not depend on the
/// order of `SHORTHANDS`.
pub fn match_shorthand(input: &[u8]) -> Option<&'static Shorthand> {
    SHORTHANDS_LONGEST_FIRST
        .iter()
        .find(|sh| input.starts_with(sh.literal.as_bytes()))
}

/// Look up the literal a shorthand code expands to.
pub fn shorthand_literal(code: u8) -> Option<&'static str> {
    SHORTHANDS
        .iter()
        .find(|sh| sh.code == code)
        .map(|sh| sh.literal)
}

/// Whether `c` is in the encodable input alphabet (printable 7-bit ASCII).
pub fn is_encodable(c: char) -> bool {
    (' '..='~').contains(&c)
}

/// Index of `code` within `table`, if present.
pub fn index_in(table: &[u8], code: u8) -> Option<Symbol> {
    table.iter().position(|&c| c == code).map(|i| i as Symbol)
}

/// Whether a table entry is one of the escape codes rather than a character.
pub fn is_escape(code: u8) -> bool {
    matches!(code, SWITCH_MAP | SHIFT_MAP | NEXT_MAP_THREE | NEXT_RARE_MAP)
}
