//! Shared data types for the encoding pipeline.

use crate::codec::tables::Symbol;

/// Digit order of a digit sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    /// First digit is the least significant.
    #[default]
    Little,
    /// First digit is the most significant.
    Big,
}

/// The result of a full encode, with the intermediate symbol stream kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedUrl {
    /// The URL as given.
    pub original: String,
    /// 5-bit symbols produced by the character codec.
    pub symbols: Vec<Symbol>,
    /// Little-endian digits in base `codomain_size`, one per glyph.
    pub digits: Vec<u32>,
    /// The rendered glyphs.
    pub glyphs: String,
    /// Size of the codomain the digits were expressed in.
    pub codomain_size: u32,
}

impl EncodedUrl {
    /// Compression figures for this encoding. Nothing is re-encoded.
    pub fn stats(&self) -> CompressionStats {
        CompressionStats {
            original_chars: self.original.chars().count(),
            symbol_count: self.symbols.len(),
            glyph_count: self.glyphs.chars().count(),
            bits_per_glyph: f64::from(self.codomain_size).log2(),
        }
    }
}

/// Sizes at each stage of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionStats {
    pub original_chars: usize,
    pub symbol_count: usize,
    pub glyph_count: usize,
    pub bits_per_glyph: f64,
}

impl CompressionStats {
    /// Size of the input at 8 bits per character.
    pub fn original_bits(&self) -> usize {
        self.original_chars * 8
    }

    pub fn symbol_bits(&self) -> usize {
        self.symbol_count * 5
    }

    /// Information carried by the glyphs.
    pub fn glyph_bits(&self) -> f64 {
        self.glyph_count as f64 * self.bits_per_glyph
    }

    /// Symbol bits as a fraction of original bits.
    pub fn bit_ratio(&self) -> f64 {
        ratio(self.symbol_bits() as f64, self.original_bits() as f64)
    }

    /// Glyph count as a fraction of original character count.
    pub fn char_ratio(&self) -> f64 {
        ratio(self.glyph_count as f64, self.original_chars as f64)
    }
}

fn ratio(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole
    }
}
