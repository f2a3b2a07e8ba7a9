//! Arbitrary-precision non-negative integers viewed as digit sequences.
//!
//! A [`BasedNumber`] stores its value as little-endian 32-bit limbs and can
//! be read out in any base of at least 2. Conversion is exact: the 5-bit
//! symbol stream of a long URL easily exceeds any machine word, so nothing
//! here ever narrows the value.

use std::fmt;

use crate::error::GlyphUrlError;
use crate::types::Endianness;

const LIMB_BITS: u32 = 32;

/// An unbounded non-negative integer.
///
/// The value is immutable once built. [`BasedNumber::radix`] produces a new
/// digit sequence and leaves the number untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BasedNumber {
    /// Little-endian base 2^32 limbs with no trailing zero limbs. Zero is the
    /// empty vector.
    limbs: Vec<u32>,
}

impl BasedNumber {
    /// The value zero.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build from a native magnitude.
    pub fn from_magnitude(magnitude: u128) -> Self {
        let mut limbs = Vec::with_capacity(4);
        let mut rest = magnitude;
        while rest > 0 {
            limbs.push(rest as u32);
            rest >>= LIMB_BITS;
        }
        Self { limbs }
    }

    /// Parse an unbounded decimal magnitude such as `"340282366920938463463374607431768211456"`.
    pub fn from_decimal_str(decimal: &str) -> Result<Self, GlyphUrlError> {
        if decimal.is_empty() {
            return Err(GlyphUrlError::InvalidDecimal("empty string".to_string()));
        }

        let mut value = Self::zero();
        for c in decimal.chars() {
            let digit = c
                .to_digit(10)
                .ok_or_else(|| GlyphUrlError::InvalidDecimal(format!("unexpected {:?}", c)))?;
            value.mul_add_small(10, digit);
        }
        Ok(value)
    }

    /// Build from a digit sequence in `base`.
    ///
    /// With [`Endianness::Little`] the first digit is the least significant;
    /// with [`Endianness::Big`] the first digit is the most significant.
    ///
    /// # Errors
    ///
    /// * [`GlyphUrlError::InvalidBase`] if `base < 2`
    /// * [`GlyphUrlError::InvalidDigit`] if any digit is `>= base`
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphurl::{BasedNumber, Endianness};
    ///
    /// let little = BasedNumber::from_digits(&[0, 0, 0, 1, 0, 1, 1, 1, 1, 1], 2, Endianness::Little)?;
    /// assert_eq!(little, BasedNumber::from_magnitude(1000));
    ///
    /// let big = BasedNumber::from_digits(&[1, 0, 0, 0], 10, Endianness::Big)?;
    /// assert_eq!(big, BasedNumber::from_magnitude(1000));
    /// # Ok::<(), glyphurl::GlyphUrlError>(())
    /// ```
    pub fn from_digits(
        digits: &[u32],
        base: u32,
        endianness: Endianness,
    ) -> Result<Self, GlyphUrlError> {
        check_base(base)?;
        if let Some(&digit) = digits.iter().find(|&&d| d >= base) {
            return Err(GlyphUrlError::InvalidDigit { digit, base });
        }

        // Horner's rule runs most significant digit first.
        let mut value = Self::zero();
        match endianness {
            Endianness::Little => digits
                .iter()
                .rev()
                .for_each(|&d| value.mul_add_small(base, d)),
            Endianness::Big => digits.iter().for_each(|&d| value.mul_add_small(base, d)),
        }
        Ok(value)
    }

    /// Build from 7-bit bytes taken as base-128 digits, first byte least
    /// significant.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphUrlError::ExtendedCharacter`] for the first byte above 127.
    pub fn from_byte_string(bytes: &[u8]) -> Result<Self, GlyphUrlError> {
        if let Some(position) = bytes.iter().position(|&b| b > 127) {
            return Err(GlyphUrlError::ExtendedCharacter {
                byte: bytes[position],
                position,
            });
        }
        let digits: Vec<u32> = bytes.iter().map(|&b| u32::from(b)).collect();
        Self::from_digits(&digits, 128, Endianness::Little)
    }

    /// String form of [`BasedNumber::from_byte_string`].
    pub fn from_7bit_str(s: &str) -> Result<Self, GlyphUrlError> {
        Self::from_byte_string(s.as_bytes())
    }

    /// Express the value in `base` as little-endian digits.
    ///
    /// Zero is the empty sequence. Every digit is in `0..base`.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphurl::BasedNumber;
    ///
    /// let bits = BasedNumber::from_magnitude(1000).radix(2)?;
    /// assert_eq!(bits, vec![0, 0, 0, 1, 0, 1, 1, 1, 1, 1]);
    /// assert!(BasedNumber::zero().radix(16)?.is_empty());
    /// # Ok::<(), glyphurl::GlyphUrlError>(())
    /// ```
    pub fn radix(&self, base: u32) -> Result<Vec<u32>, GlyphUrlError> {
        check_base(base)?;

        let mut digits = Vec::new();
        let mut carry = self.limbs.clone();
        while !carry.is_empty() {
            digits.push(div_rem_small(&mut carry, base));
        }
        Ok(digits)
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Number of significant bits in the value.
    pub fn bit_len(&self) -> u64 {
        match self.limbs.last() {
            Some(&top) => {
                (self.limbs.len() as u64 - 1) * u64::from(LIMB_BITS)
                    + u64::from(LIMB_BITS - top.leading_zeros())
            }
            None => 0,
        }
    }

    /// The value as a `u128`, if it fits.
    pub fn to_u128(&self) -> Option<u128> {
        if self.limbs.len() > 4 {
            return None;
        }
        Some(
            self.limbs
                .iter()
                .rev()
                .fold(0u128, |acc, &limb| (acc << LIMB_BITS) | u128::from(limb)),
        )
    }

    /// `self = self * multiplier + addend`, with `addend < 2^32`.
    fn mul_add_small(&mut self, multiplier: u32, addend: u32) {
        let mut carry = u64::from(addend);
        for limb in self.limbs.iter_mut() {
            let product = u64::from(*limb) * u64::from(multiplier) + carry;
            *limb = product as u32;
            carry = product >> LIMB_BITS;
        }
        if carry > 0 {
            self.limbs.push(carry as u32);
        }
        trim(&mut self.limbs);
    }
}

/// Divide little-endian limbs in place by `divisor`, returning the remainder.
fn div_rem_small(limbs: &mut Vec<u32>, divisor: u32) -> u32 {
    let divisor = u64::from(divisor);
    let mut remainder = 0u64;
    for limb in limbs.iter_mut().rev() {
        let current = (remainder << LIMB_BITS) | u64::from(*limb);
        *limb = (current / divisor) as u32;
        remainder = current % divisor;
    }
    trim(limbs);
    remainder as u32
}

fn trim(limbs: &mut Vec<u32>) {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
}

fn check_base(base: u32) -> Result<(), GlyphUrlError> {
    if base < 2 {
        return Err(GlyphUrlError::InvalidBase(base));
    }
    Ok(())
}

impl From<u128> for BasedNumber {
    fn from(magnitude: u128) -> Self {
        Self::from_magnitude(magnitude)
    }
}

impl From<u64> for BasedNumber {
    fn from(magnitude: u64) -> Self {
        Self::from_magnitude(u128::from(magnitude))
    }
}

impl fmt::Display for BasedNumber {
    /// Decimal rendering of the full value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.radix(10).map_err(|_| fmt::Error)?;
        if digits.is_empty() {
            return f.write_str("0");
        }
        let decimal: String = digits
            .iter()
            .rev()
            .filter_map(|&d| char::from_digit(d, 10))
            .collect();
        f.pad_integral(true, "", &decimal)
    }
}

/// Optional-argument construction of a [`BasedNumber`].
///
/// Supplying neither a magnitude nor digits yields zero. Supplying both is
/// rejected rather than silently preferring one.
///
/// ```
/// use glyphurl::{BasedNumberBuilder, Endianness, GlyphUrlError};
///
/// let n = BasedNumberBuilder::new().digits(vec![2, 1], 10, Endianness::Little).build()?;
/// assert_eq!(n.to_u128(), Some(12));
///
/// let both = BasedNumberBuilder::new()
///     .magnitude(5)
///     .digits(vec![5], 10, Endianness::Little)
///     .build();
/// assert_eq!(both, Err(GlyphUrlError::AmbiguousConstruction));
/// # Ok::<(), GlyphUrlError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BasedNumberBuilder {
    magnitude: Option<u128>,
    digits: Option<(Vec<u32>, u32, Endianness)>,
}

impl BasedNumberBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn magnitude(mut self, magnitude: u128) -> Self {
        self.magnitude = Some(magnitude);
        self
    }

    pub fn digits(mut self, digits: Vec<u32>, base: u32, endianness: Endianness) -> Self {
        self.digits = Some((digits, base, endianness));
        self
    }

    pub fn build(self) -> Result<BasedNumber, GlyphUrlError> {
        match (self.magnitude, self.digits) {
            (Some(_), Some(_)) => Err(GlyphUrlError::AmbiguousConstruction),
            (Some(magnitude), None) => Ok(BasedNumber::from_magnitude(magnitude)),
            (None, Some((digits, base, endianness))) => {
                BasedNumber::from_digits(&digits, base, endianness)
            }
            (None, None) => Ok(BasedNumber::zero()),
        }
    }
}
