//! Error types for glyph URL encoding and decoding operations.

use thiserror::Error;

/// Errors that can occur anywhere in the encoding pipeline.
///
/// Every variant is a rejection of one input. Nothing is retried and no
/// partial output is ever returned alongside an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GlyphUrlError {
    /// The input contains a character outside printable 7-bit ASCII.
    #[error("Unencodable character: {0:?}")]
    UnencodableCharacter(char),

    /// A symbol stream ended inside an escape sequence or indexed past a table.
    #[error("Malformed symbol stream at position {position}: {reason}")]
    MalformedSymbolStream {
        /// Index of the offending symbol in the stream.
        position: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// A digit is not smaller than the base it was declared in.
    #[error("Invalid digit {digit} for base {base}")]
    InvalidDigit { digit: u32, base: u32 },

    /// Bases below 2 cannot represent anything.
    #[error("Invalid base {0}: base must be at least 2")]
    InvalidBase(u32),

    /// Both a magnitude and a digit sequence were supplied.
    #[error("A BasedNumber cannot be built from both a magnitude and a digit sequence")]
    AmbiguousConstruction,

    /// A decimal magnitude string could not be parsed.
    #[error("Invalid decimal magnitude: {0}")]
    InvalidDecimal(String),

    /// A byte-string import saw a byte above 127.
    #[error("Extended character 0x{byte:02x} at position {position}")]
    ExtendedCharacter { byte: u8, position: usize },

    /// A digit is too large for the configured Unicode codomain.
    #[error("Value {value} exceeds the codomain size of {codomain} codepoints")]
    CodomainExhausted { value: u32, codomain: u32 },

    /// A glyph does not belong to any configured codepoint range.
    #[error("Codepoint U+{0:04X} is not in any configured range")]
    CodepointNotInAnyRange(u32),

    /// A codepoint range table is not usable as a codomain.
    #[error("Invalid codepoint range table: {0}")]
    InvalidRange(String),
}

impl GlyphUrlError {
    pub(crate) fn malformed(position: usize, reason: impl Into<String>) -> Self {
        GlyphUrlError::MalformedSymbolStream {
            position,
            reason: reason.into(),
        }
    }
}
