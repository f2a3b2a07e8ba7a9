//! Stateful 5-bit character codec.
//!
//! Converts printable ASCII into a stream of 5-bit symbols and back. Two
//! primary maps share the cheap one-symbol slots; the codec either *shifts*
//! into the inactive map for a single character or *switches* to it when the
//! following character wants the same map. Everything else costs an escape
//! into `MAP_THREE`, and the rarest characters plus shorthand substrings cost
//! a further escape into `RARE_MAP`.

use tracing::trace;

use crate::codec::tables::{
    index_in, is_encodable, is_escape, match_shorthand, shorthand_literal, Symbol, SymbolMap,
    MAP_ONE, MAP_THREE, MAP_TWO, NEXT_MAP_THREE, NEXT_RARE_MAP, RARE_MAP, SHIFT_MAP,
    SWITCH_MAP, SYMBOL_COUNT,
};
use crate::error::GlyphUrlError;

/// One of the two primary maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryMap {
    One,
    Two,
}

impl PrimaryMap {
    /// The table backing this map.
    pub fn table(self) -> &'static SymbolMap {
        match self {
            PrimaryMap::One => &MAP_ONE,
            PrimaryMap::Two => &MAP_TWO,
        }
    }
}

/// The `(active, inactive)` cursor over the two primary maps.
///
/// A cursor lives for exactly one `encode` or `decode` call and is threaded
/// through it by value, so concurrent calls never share state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapCursor {
    active: PrimaryMap,
    inactive: PrimaryMap,
}

impl MapCursor {
    /// A fresh cursor: `MAP_ONE` active, `MAP_TWO` inactive.
    pub fn new() -> Self {
        Self {
            active: PrimaryMap::One,
            inactive: PrimaryMap::Two,
        }
    }

    pub fn active(&self) -> PrimaryMap {
        self.active
    }

    pub fn inactive(&self) -> PrimaryMap {
        self.inactive
    }

    /// Swap active and inactive maps.
    pub fn switched(self) -> Self {
        Self {
            active: self.inactive,
            inactive: self.active,
        }
    }
}

impl Default for MapCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a printable ASCII string into 5-bit symbols.
///
/// At every position the longest matching shorthand is tried first. Failing
/// that, the character is written from the cheapest table that holds it:
/// the active primary map, then `RARE_MAP`, then `MAP_THREE`, then the
/// inactive primary map via a shift or a switch.
///
/// # Errors
///
/// Returns [`GlyphUrlError::UnencodableCharacter`] for the first character
/// outside printable 7-bit ASCII. No symbols are returned in that case.
///
/// # Examples
///
/// ```
/// use glyphurl::encode_symbols;
///
/// // "http://www." collapses to one three-symbol shorthand.
/// assert_eq!(encode_symbols("http://www.").unwrap(), vec![2, 31, 12]);
/// assert_eq!(encode_symbols("abc").unwrap(), vec![8, 9, 10]);
/// ```
pub fn encode(input: &str) -> Result<Vec<Symbol>, GlyphUrlError> {
    if let Some(bad) = input.chars().find(|&c| !is_encodable(c)) {
        return Err(GlyphUrlError::UnencodableCharacter(bad));
    }

    let mut out = Vec::with_capacity(input.len());
    let mut cursor = MapCursor::new();
    let mut rest = input.as_bytes();

    while !rest.is_empty() {
        let (next_cursor, consumed) = encode_step(cursor, rest, &mut out)?;
        cursor = next_cursor;
        rest = &rest[consumed..];
    }

    Ok(out)
}

/// Emit the symbols for the start of `rest` and report how many input bytes
/// were consumed along with the cursor to use for the remainder.
fn encode_step(
    cursor: MapCursor,
    rest: &[u8],
    out: &mut Vec<Symbol>,
) -> Result<(MapCursor, usize), GlyphUrlError> {
    if let Some(sh) = match_shorthand(rest) {
        trace!(literal = sh.literal, "shorthand");
        out.extend_from_slice(&[NEXT_MAP_THREE, NEXT_RARE_MAP, rare_index(sh.code)?]);
        return Ok((cursor, sh.literal.len()));
    }

    let c = rest[0];
    let active = cursor.active().table();
    let inactive = cursor.inactive().table();

    if let Some(i) = index_in(active, c) {
        out.push(i);
        return Ok((cursor, 1));
    }

    if let Some(i) = index_in(&RARE_MAP, c) {
        out.extend_from_slice(&[NEXT_MAP_THREE, NEXT_RARE_MAP, i]);
        return Ok((cursor, 1));
    }

    if let Some(i) = index_in(&MAP_THREE, c) {
        out.extend_from_slice(&[NEXT_MAP_THREE, i]);
        return Ok((cursor, 1));
    }

    if let Some(i) = index_in(inactive, c) {
        let next_wants_switch = rest
            .get(1)
            .is_some_and(|&next| index_in(inactive, next).is_some());

        if next_wants_switch {
            let switched = cursor.switched();
            trace!(to = ?switched.active(), "switch map");
            out.extend_from_slice(&[SWITCH_MAP, i]);
            return Ok((switched, 1));
        }

        out.extend_from_slice(&[SHIFT_MAP, i]);
        return Ok((cursor, 1));
    }

    Err(GlyphUrlError::UnencodableCharacter(char::from(c)))
}

fn rare_index(code: u8) -> Result<Symbol, GlyphUrlError> {
    index_in(&RARE_MAP, code).ok_or(GlyphUrlError::UnencodableCharacter(char::from(code)))
}

/// Decode a 5-bit symbol stream back into the string it was encoded from.
///
/// The decoder replays the encoder's cursor: `switch` persists, `shift`
/// borrows one symbol from the inactive map, and the `MAP_THREE` and
/// `RARE_MAP` escapes select the table for the following symbol.
///
/// # Errors
///
/// Returns [`GlyphUrlError::MalformedSymbolStream`] when a symbol is 32 or
/// more, an escape is left dangling at the end of the stream, an index falls
/// outside `RARE_MAP`, or an escape lands on another escape code.
pub fn decode(symbols: &[Symbol]) -> Result<String, GlyphUrlError> {
    let mut reader = SymbolReader::new(symbols);
    let mut cursor = MapCursor::new();
    let mut out = String::with_capacity(symbols.len());

    while let Some((position, symbol)) = reader.next_symbol()? {
        let code = cursor.active().table()[symbol as usize];

        match code {
            SWITCH_MAP => {
                cursor = cursor.switched();
                let (at, s) = reader.expect_symbol("switch")?;
                push_char(&mut out, cursor.active().table()[s as usize], at)?;
            }
            SHIFT_MAP => {
                let (at, s) = reader.expect_symbol("shift")?;
                push_char(&mut out, cursor.inactive().table()[s as usize], at)?;
            }
            NEXT_MAP_THREE => {
                let (at, s) = reader.expect_symbol("map three")?;
                match MAP_THREE[s as usize] {
                    NEXT_RARE_MAP => {
                        let (at, r) = reader.expect_symbol("rare map")?;
                        let code = RARE_MAP.get(r as usize).copied().ok_or_else(|| {
                            GlyphUrlError::malformed(
                                at,
                                format!("index {} is outside the rare map", r),
                            )
                        })?;
                        push_rare(&mut out, code, at)?;
                    }
                    code => push_char(&mut out, code, at)?,
                }
            }
            code => push_char(&mut out, code, position)?,
        }
    }

    Ok(out)
}

fn push_char(out: &mut String, code: u8, position: usize) -> Result<(), GlyphUrlError> {
    if is_escape(code) {
        return Err(GlyphUrlError::malformed(
            position,
            "escape code where a character was expected",
        ));
    }
    out.push(char::from(code));
    Ok(())
}

fn push_rare(out: &mut String, code: u8, position: usize) -> Result<(), GlyphUrlError> {
    match shorthand_literal(code) {
        Some(literal) => {
            out.push_str(literal);
            Ok(())
        }
        None => push_char(out, code, position),
    }
}

/// Range-checked cursor over a symbol slice.
struct SymbolReader<'a> {
    symbols: &'a [Symbol],
    position: usize,
}

impl<'a> SymbolReader<'a> {
    fn new(symbols: &'a [Symbol]) -> Self {
        Self { symbols, position: 0 }
    }

    fn next_symbol(&mut self) -> Result<Option<(usize, Symbol)>, GlyphUrlError> {
        let Some(&symbol) = self.symbols.get(self.position) else {
            return Ok(None);
        };
        let at = self.position;
        if symbol as usize >= SYMBOL_COUNT {
            return Err(GlyphUrlError::malformed(
                at,
                format!("symbol {} is not a 5-bit value", symbol),
            ));
        }
        self.position += 1;
        Ok(Some((at, symbol)))
    }

    fn expect_symbol(&mut self, escape: &str) -> Result<(usize, Symbol), GlyphUrlError> {
        let at = self.position;
        self.next_symbol()?
            .ok_or_else(|| GlyphUrlError::malformed(at, format!("dangling {} escape", escape)))
    }
}
