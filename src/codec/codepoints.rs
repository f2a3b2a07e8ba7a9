//! Dense-to-sparse mapping between integers and Unicode codepoints.
//!
//! The integers `[0, N)` are laid end to end over an ordered list of
//! codepoint ranges: the first range takes the lowest integers, the next
//! range continues where it stopped, and so on. `N`, the codomain size, is
//! the base the symbol stream is re-expressed in before rendering.

use once_cell::sync::Lazy;

use crate::error::GlyphUrlError;

/// A labelled, inclusive block of codepoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodepointRange {
    pub label: &'static str,
    pub first: u32,
    pub last: u32,
}

impl CodepointRange {
    pub const fn new(label: &'static str, first: u32, last: u32) -> Self {
        Self { label, first, last }
    }

    /// Number of codepoints in the range. Inverted ranges are empty.
    pub fn size(&self) -> u32 {
        self.last
            .checked_sub(self.first)
            .map_or(0, |span| span.saturating_add(1))
    }

    pub fn contains(&self, codepoint: u32) -> bool {
        (self.first..=self.last).contains(&codepoint)
    }
}

/// Ideographs, syllables and radicals with dependable glyph coverage.
///
/// The CJK Unified Ideographs block stops at U+9FB1 because the few
/// codepoints above it lack glyphs on common platforms. Extension B is left
/// out for the same reason.
pub const UNICODE_RANGES: &[CodepointRange] = &[
    CodepointRange::new("Kangxi Radicals", 0x2F00, 0x2FD5),
    CodepointRange::new("CJK Unified Ideographs Ext. A", 0x3400, 0x4DB5),
    CodepointRange::new("CJK Unified Ideographs", 0x4E00, 0x9FB1),
    CodepointRange::new("Yi Syllables", 0xA000, 0xA48C),
    CodepointRange::new("Hangul Syllables", 0xAC00, 0xD7A3),
    CodepointRange::new("CJK Compatibility Ideographs", 0xF900, 0xFA20),
];

const SURROGATES: CodepointRange = CodepointRange::new("Surrogates", 0xD800, 0xDFFF);

static DEFAULT_MAPPER: Lazy<CodepointMapper> = Lazy::new(|| CodepointMapper {
    ranges: UNICODE_RANGES.to_vec(),
    distances: distances(UNICODE_RANGES),
    codomain_size: UNICODE_RANGES.iter().map(CodepointRange::size).sum(),
});

/// Bijection between `[0, codomain_size)` and the codepoints of a range table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodepointMapper {
    ranges: Vec<CodepointRange>,
    /// `(size, first)` per range, in declaration order.
    distances: Vec<(u32, u32)>,
    codomain_size: u32,
}

impl CodepointMapper {
    /// Build a mapper over a custom range table.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphUrlError::InvalidRange`] if a range is inverted, runs
    /// past U+10FFFF, touches the surrogate block, overlaps another range,
    /// or if the table holds fewer than two codepoints in total.
    pub fn new(ranges: Vec<CodepointRange>) -> Result<Self, GlyphUrlError> {
        for (i, range) in ranges.iter().enumerate() {
            if range.first > range.last {
                return Err(GlyphUrlError::InvalidRange(format!(
                    "{}: first U+{:04X} is after last U+{:04X}",
                    range.label, range.first, range.last
                )));
            }
            if range.last > char::MAX as u32 {
                return Err(GlyphUrlError::InvalidRange(format!(
                    "{}: U+{:04X} is beyond the Unicode codespace",
                    range.label, range.last
                )));
            }
            if overlaps(range, &SURROGATES) {
                return Err(GlyphUrlError::InvalidRange(format!(
                    "{}: surrogate codepoints cannot be rendered",
                    range.label
                )));
            }
            if let Some(other) = ranges[..i].iter().find(|other| overlaps(range, other)) {
                return Err(GlyphUrlError::InvalidRange(format!(
                    "{} overlaps {}",
                    range.label, other.label
                )));
            }
        }

        let codomain_size = ranges
            .iter()
            .try_fold(0u32, |total, range| total.checked_add(range.size()))
            .ok_or_else(|| GlyphUrlError::InvalidRange("codomain too large".to_string()))?;
        if codomain_size < 2 {
            return Err(GlyphUrlError::InvalidRange(
                "at least two codepoints are needed".to_string(),
            ));
        }

        Ok(Self {
            distances: distances(&ranges),
            ranges,
            codomain_size,
        })
    }

    /// The shared mapper over [`UNICODE_RANGES`].
    pub fn default_ranges() -> &'static CodepointMapper {
        &DEFAULT_MAPPER
    }

    pub fn ranges(&self) -> &[CodepointRange] {
        &self.ranges
    }

    /// Total number of codepoints across all ranges.
    pub fn codomain_size(&self) -> u32 {
        self.codomain_size
    }

    /// Information content of one glyph, `log2(codomain_size)`.
    pub fn bits_per_glyph(&self) -> f64 {
        f64::from(self.codomain_size).log2()
    }

    /// Map an integer in `[0, codomain_size)` to its codepoint.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphurl::CodepointMapper;
    ///
    /// let mapper = CodepointMapper::default_ranges();
    /// assert_eq!(mapper.map(0)?, '\u{2F00}');
    /// assert_eq!(mapper.map(214)?, '\u{3400}');
    /// # Ok::<(), glyphurl::GlyphUrlError>(())
    /// ```
    pub fn map(&self, n: u32) -> Result<char, GlyphUrlError> {
        let mut rest = n;
        for &(size, first) in &self.distances {
            if rest < size {
                return char::from_u32(first + rest)
                    .ok_or(GlyphUrlError::CodepointNotInAnyRange(first + rest));
            }
            rest -= size;
        }

        Err(GlyphUrlError::CodomainExhausted {
            value: n,
            codomain: self.codomain_size,
        })
    }

    /// Map a codepoint back to its integer.
    pub fn unmap(&self, glyph: char) -> Result<u32, GlyphUrlError> {
        let codepoint = glyph as u32;
        let mut offset = 0u32;
        for range in &self.ranges {
            if range.contains(codepoint) {
                return Ok(offset + (codepoint - range.first));
            }
            offset += range.size();
        }

        Err(GlyphUrlError::CodepointNotInAnyRange(codepoint))
    }
}

impl Default for CodepointMapper {
    fn default() -> Self {
        DEFAULT_MAPPER.clone()
    }
}

fn distances(ranges: &[CodepointRange]) -> Vec<(u32, u32)> {
    ranges.iter().map(|r| (r.size(), r.first)).collect()
}

fn overlaps(a: &CodepointRange, b: &CodepointRange) -> bool {
    a.first <= b.last && b.first <= a.last
}
