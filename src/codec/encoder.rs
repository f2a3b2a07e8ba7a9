//! Glyph URL encoding functionality.
//!
//! This module provides the main API for turning a URL into a short string
//! of glyphs: 5-bit symbols, re-based into the codomain, rendered through the
//! codepoint mapper.

use once_cell::sync::Lazy;
use tracing::debug;

use crate::codec::based::BasedNumber;
use crate::codec::codepoints::CodepointMapper;
use crate::codec::decoder::decode_with;
use crate::codec::fivebit;
use crate::codec::tables::{Symbol, SYMBOL_COUNT};
use crate::error::GlyphUrlError;
use crate::types::{EncodedUrl, Endianness};

/// Most significant digit appended to every symbol stream before re-basing.
///
/// Re-basing drops leading zeros, so a stream ending in symbol 0 would
/// otherwise lose its last symbol.
pub const TERMINATOR: u32 = 1;

/// Encode a URL into glyphs using the default codepoint ranges.
///
/// # Arguments
///
/// * `url` - Printable ASCII string to encode
///
/// # Returns
///
/// Returns the glyph string, or an error if the URL contains a character
/// outside printable 7-bit ASCII.
///
/// # Examples
///
/// ```
/// use glyphurl::{decode_url, encode_url};
///
/// let url = "http://www.slashdot.org/";
/// let glyphs = encode_url(url)?;
/// assert!(glyphs.chars().count() < url.len());
/// assert_eq!(decode_url(&glyphs)?, url);
/// # Ok::<(), glyphurl::GlyphUrlError>(())
/// ```
pub fn encode_url(url: &str) -> Result<String, GlyphUrlError> {
    GlyphEncoder::shared().encode(url)
}

/// Encode a URL and keep every intermediate stage.
///
/// The returned [`EncodedUrl`] carries the symbol stream and digits, so
/// compression figures can be read from it without encoding again.
pub fn encode_url_detailed(url: &str) -> Result<EncodedUrl, GlyphUrlError> {
    GlyphEncoder::shared().encode_detailed(url)
}

/// Re-express a symbol stream as little-endian digits in `codomain_size`.
///
/// [`TERMINATOR`] is appended as the most significant base-32 digit first.
pub fn symbols_to_digits(symbols: &[Symbol], codomain_size: u32) -> Result<Vec<u32>, GlyphUrlError> {
    let mut base32: Vec<u32> = symbols.iter().map(|&s| u32::from(s)).collect();
    base32.push(TERMINATOR);

    let number = BasedNumber::from_digits(&base32, SYMBOL_COUNT as u32, Endianness::Little)?;
    number.radix(codomain_size)
}

/// Glyph encoder bound to one codepoint range table.
///
/// Encoders hold no per-call state and can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphEncoder {
    mapper: CodepointMapper,
}

impl GlyphEncoder {
    /// Create an encoder over the default codepoint ranges.
    pub fn new() -> Self {
        Self::with_mapper(CodepointMapper::default())
    }

    /// Create an encoder over a custom range table.
    pub fn with_mapper(mapper: CodepointMapper) -> Self {
        Self { mapper }
    }

    fn shared() -> &'static GlyphEncoder {
        static SHARED: Lazy<GlyphEncoder> = Lazy::new(GlyphEncoder::new);
        &SHARED
    }

    pub fn mapper(&self) -> &CodepointMapper {
        &self.mapper
    }

    /// Encode a URL to glyphs.
    pub fn encode(&self, url: &str) -> Result<String, GlyphUrlError> {
        self.encode_detailed(url).map(|encoded| encoded.glyphs)
    }

    /// Encode a URL and keep every intermediate stage.
    pub fn encode_detailed(&self, url: &str) -> Result<EncodedUrl, GlyphUrlError> {
        let symbols = fivebit::encode(url)?;
        let digits = symbols_to_digits(&symbols, self.mapper.codomain_size())?;
        let glyphs = digits
            .iter()
            .map(|&d| self.mapper.map(d))
            .collect::<Result<String, _>>()?;

        debug!(
            chars = url.len(),
            symbols = symbols.len(),
            glyphs = digits.len(),
            "encoded url"
        );

        Ok(EncodedUrl {
            original: url.to_string(),
            symbols,
            digits,
            glyphs,
            codomain_size: self.mapper.codomain_size(),
        })
    }

    /// Decode glyphs produced by this encoder back to the URL.
    pub fn decode(&self, glyphs: &str) -> Result<String, GlyphUrlError> {
        decode_with(&self.mapper, glyphs)
    }
}

impl Default for GlyphEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::codepoints::CodepointRange;
    use tracing_test::traced_test;

    #[test]
    fn test_encode_url_basic() {
        let glyphs = encode_url("http://www.slashdot.org/").unwrap();
        assert!(!glyphs.is_empty());
        let mapper = CodepointMapper::default_ranges();
        assert!(glyphs.chars().all(|g| mapper.unmap(g).is_ok()));
    }

    #[test]
    fn test_empty_url_is_one_glyph() {
        // Only the terminator is left, which is the value 1.
        let glyphs = encode_url("").unwrap();
        assert_eq!(glyphs, "\u{2F01}");
    }

    #[test]
    fn test_trailing_zero_symbol_survives() {
        // 'G' is MAP_THREE index 0, so the stream ends in symbol 0.
        let symbols = fivebit::encode("aG").unwrap();
        assert_eq!(symbols.last(), Some(&0));
        let glyphs = encode_url("aG").unwrap();
        assert_eq!(decode_with(CodepointMapper::default_ranges(), &glyphs).unwrap(), "aG");
    }

    #[test]
    fn test_symbols_to_digits_small_codomain() {
        // [3] + terminator = 3 + 1 * 32 = 35 = 0b100011
        assert_eq!(symbols_to_digits(&[3], 2).unwrap(), vec![1, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_detailed_keeps_stages() {
        let encoded = encode_url_detailed("http://example.com/").unwrap();
        assert_eq!(encoded.original, "http://example.com/");
        assert_eq!(encoded.symbols, fivebit::encode("http://example.com/").unwrap());
        assert_eq!(encoded.digits.len(), encoded.glyphs.chars().count());
        assert_eq!(encoded.codomain_size, 40336);
    }

    #[test]
    fn test_custom_mapper_roundtrip() {
        let mapper = CodepointMapper::new(vec![
            CodepointRange::new("upper", 0x41, 0x5A),
            CodepointRange::new("lower", 0x61, 0x7A),
        ])
        .unwrap();
        let encoder = GlyphEncoder::with_mapper(mapper);

        let glyphs = encoder.encode("https://docs.rs/glyphurl").unwrap();
        assert!(glyphs.chars().all(|c| c.is_ascii_alphabetic()));
        assert_eq!(encoder.decode(&glyphs).unwrap(), "https://docs.rs/glyphurl");
    }

    #[test]
    fn test_encode_rejects_non_ascii() {
        assert_eq!(
            encode_url("https://caf\u{e9}.com/"),
            Err(GlyphUrlError::UnencodableCharacter('\u{e9}'))
        );
    }

    #[test]
    #[traced_test]
    fn test_encode_logs_stage_sizes() {
        encode_url("http://www.slashdot.org/").unwrap();
        assert!(logs_contain("encoded url"));
        assert!(logs_contain("symbols=14"));
        assert!(logs_contain("glyphs=5"));
    }
}
