//! Glyph URL encoding and decoding functionality.
//!
//! This module contains the three pipeline stages and their composition:
//! - 5-bit character codec over static symbol tables
//! - Arbitrary-base integer conversion
//! - Dense-to-sparse codepoint mapping
//! - Encoding and decoding of complete URLs

pub mod tables;
pub mod fivebit;
pub mod based;
pub mod codepoints;
pub mod encoder;
pub mod decoder;

// Re-export main functionality
pub use encoder::{encode_url, encode_url_detailed, symbols_to_digits, GlyphEncoder, TERMINATOR};
pub use decoder::{decode_url, decode_with, digits_to_symbols};
pub use fivebit::{MapCursor, PrimaryMap};
pub use based::{BasedNumber, BasedNumberBuilder};
pub use codepoints::{CodepointMapper, CodepointRange, UNICODE_RANGES};
pub use tables::{Shorthand, Symbol, SHORTHANDS};
