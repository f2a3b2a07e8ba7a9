//! Glyph URL decoding functionality.
//!
//! The mirror image of the encoder: glyphs are unmapped to digits, the digits
//! are re-based to 5-bit symbols, the terminator is checked and stripped, and
//! the character codec rebuilds the URL.

use tracing::debug;

use crate::codec::based::BasedNumber;
use crate::codec::codepoints::CodepointMapper;
use crate::codec::encoder::TERMINATOR;
use crate::codec::fivebit;
use crate::codec::tables::{Symbol, SYMBOL_COUNT};
use crate::error::GlyphUrlError;
use crate::types::Endianness;

/// Decode glyphs produced by [`encode_url`](crate::encode_url).
///
/// # Errors
///
/// * [`GlyphUrlError::CodepointNotInAnyRange`] for a glyph outside the default ranges
/// * [`GlyphUrlError::MalformedSymbolStream`] if the glyphs do not carry a
///   valid symbol stream
///
/// # Examples
///
/// ```
/// use glyphurl::{decode_url, encode_url};
///
/// let glyphs = encode_url("http://www.example.com/index.html")?;
/// assert_eq!(decode_url(&glyphs)?, "http://www.example.com/index.html");
/// # Ok::<(), glyphurl::GlyphUrlError>(())
/// ```
pub fn decode_url(glyphs: &str) -> Result<String, GlyphUrlError> {
    decode_with(CodepointMapper::default_ranges(), glyphs)
}

/// Decode glyphs against a specific codepoint mapper.
pub fn decode_with(mapper: &CodepointMapper, glyphs: &str) -> Result<String, GlyphUrlError> {
    let digits = glyphs
        .chars()
        .map(|g| mapper.unmap(g))
        .collect::<Result<Vec<u32>, _>>()?;
    let symbols = digits_to_symbols(&digits, mapper.codomain_size())?;

    debug!(glyphs = digits.len(), symbols = symbols.len(), "decoding url");

    fivebit::decode(&symbols)
}

/// Inverse of [`symbols_to_digits`](crate::codec::encoder::symbols_to_digits).
pub fn digits_to_symbols(digits: &[u32], codomain_size: u32) -> Result<Vec<Symbol>, GlyphUrlError> {
    // Zero-padded glyph strings would otherwise alias the canonical one.
    if digits.last() == Some(&0) {
        return Err(GlyphUrlError::malformed(
            digits.len() - 1,
            "leading zero glyph",
        ));
    }

    let number = BasedNumber::from_digits(digits, codomain_size, Endianness::Little)?;
    let mut base32 = number.radix(SYMBOL_COUNT as u32)?;

    match base32.pop() {
        Some(TERMINATOR) => Ok(base32.into_iter().map(|s| s as Symbol).collect()),
        _ => Err(GlyphUrlError::malformed(
            base32.len(),
            "missing stream terminator",
        )),
    }
}
