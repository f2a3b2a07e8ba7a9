//! glyphurl - Compact URLs as short strings of Unicode glyphs
//!
//! This crate squeezes printable URLs into a handful of CJK, Yi and Hangul
//! glyphs, short enough to paste anywhere a character count matters, and
//! restores them exactly.
//!
//! # Pipeline
//!
//! 1. **5-bit codec**: URLs mostly use lower case letters and a few symbols,
//!    so each character becomes one 5-bit symbol where possible, with escape
//!    symbols for rarer characters and single symbols for common substrings
//!    such as `http://www.` and `.com/`.
//! 2. **Re-basing**: the symbol stream is read as one big base-32 number and
//!    rewritten in base 40336, the number of glyphs available.
//! 3. **Glyph mapping**: every base-40336 digit picks one codepoint from six
//!    dense Unicode blocks.
//!
//! Every stage is invertible, and decoding walks the same tables backwards.
//!
//! # Quick Start
//!
//! ```
//! use glyphurl::{decode_url, encode_url, encode_url_detailed};
//!
//! let url = "http://www.lyricsmode.com/lyrics/f/florence_and_the_machine/a_kiss_with_a_fist_is_better_than_none.html";
//! let glyphs = encode_url(url)?;
//! assert_eq!(decode_url(&glyphs)?, url);
//!
//! // Keep the intermediate stages for diagnostics
//! let encoded = encode_url_detailed(url)?;
//! let stats = encoded.stats();
//! assert!(stats.glyph_count * 3 < stats.original_chars);
//! # Ok::<(), glyphurl::GlyphUrlError>(())
//! ```
//!
//! # Alphabet
//!
//! Any printable 7-bit ASCII string (`' '` to `'~'`) can be encoded. The
//! codec is not a URL validator: it never parses or normalizes its input.
//!
//! # Error Handling
//!
//! All fallible functions return `Result<T, GlyphUrlError>`. Common error cases:
//!
//! - Characters outside printable ASCII in the input URL
//! - Glyphs outside the configured codepoint ranges when decoding
//! - Corrupted glyph strings that do not carry a valid symbol stream

// Re-export main encoding functions
pub use crate::codec::{encode_url, encode_url_detailed, GlyphEncoder};

// Re-export main decoding functions
pub use crate::codec::{decode_url, decode_with};

// Re-export the individual stages
pub use crate::codec::fivebit::{decode as decode_symbols, encode as encode_symbols};
pub use crate::codec::{symbols_to_digits, digits_to_symbols, TERMINATOR};
pub use crate::codec::{BasedNumber, BasedNumberBuilder};
pub use crate::codec::{CodepointMapper, CodepointRange, UNICODE_RANGES};
pub use crate::codec::{MapCursor, PrimaryMap, Shorthand, Symbol, SHORTHANDS};

// Re-export public types
pub use error::GlyphUrlError;
pub use types::{CompressionStats, EncodedUrl, Endianness};

// Module declarations
pub mod error;
pub mod types;
pub mod codec;
pub mod report;
