//! Tests for arbitrary-base integer conversion.

use glyphurl::*;
use proptest::prelude::*;
use test_case::test_case;

#[test]
fn test_thousand_in_binary() {
    assert_eq!(
        BasedNumber::from_magnitude(1000).radix(2).unwrap(),
        vec![0, 0, 0, 1, 0, 1, 1, 1, 1, 1]
    );
}

#[test]
fn test_nine_low_bits_are_not_a_thousand() {
    let truncated = BasedNumber::from_digits(&[0, 0, 0, 1, 0, 1, 1, 1, 1], 2, Endianness::Little).unwrap();
    assert_eq!(truncated.to_u128(), Some(488));
}

#[test]
fn test_hello_world_base_128() {
    let hello = BasedNumber::from_7bit_str("Hello, world!").unwrap();
    let expected: Vec<u32> = "Hello, world!".bytes().map(u32::from).collect();
    assert_eq!(hello.radix(128).unwrap(), expected);
}

#[test]
fn test_byte_string_rejects_extended() {
    assert_eq!(
        BasedNumber::from_byte_string(&[72, 105, 200, 33]),
        Err(GlyphUrlError::ExtendedCharacter { byte: 200, position: 2 })
    );
}

#[test]
fn test_zero_is_empty() {
    assert!(BasedNumber::from_magnitude(0).radix(10).unwrap().is_empty());
    assert!(BasedNumber::from_digits(&[], 7, Endianness::Little).unwrap().is_zero());
    assert!(BasedNumber::from_digits(&[0, 0, 0], 7, Endianness::Big).unwrap().is_zero());
}

#[test_case(0; "zero")]
#[test_case(1; "one")]
fn test_invalid_base(base: u32) {
    assert_eq!(
        BasedNumber::from_magnitude(5).radix(base),
        Err(GlyphUrlError::InvalidBase(base))
    );
    assert_eq!(
        BasedNumber::from_digits(&[0], base, Endianness::Little),
        Err(GlyphUrlError::InvalidBase(base))
    );
}

#[test]
fn test_invalid_digit() {
    assert_eq!(
        BasedNumber::from_digits(&[31, 32], 32, Endianness::Little),
        Err(GlyphUrlError::InvalidDigit { digit: 32, base: 32 })
    );
}

#[test]
fn test_ambiguous_construction() {
    let result = BasedNumberBuilder::new()
        .magnitude(1000)
        .digits(vec![0, 0, 0, 1], 10, Endianness::Little)
        .build();
    assert_eq!(result, Err(GlyphUrlError::AmbiguousConstruction));
}

#[test]
fn test_big_endian_matches_reversed_little() {
    let little = BasedNumber::from_digits(&[4, 3, 2, 1], 10, Endianness::Little).unwrap();
    let big = BasedNumber::from_digits(&[1, 2, 3, 4], 10, Endianness::Big).unwrap();
    assert_eq!(little, big);
    assert_eq!(big.to_u128(), Some(1234));
}

#[test]
fn test_large_symbol_stream() {
    // 200 symbols of 31 is 32^200 - 1, far beyond any machine word.
    let digits = vec![31u32; 200];
    let n = BasedNumber::from_digits(&digits, 32, Endianness::Little).unwrap();
    assert_eq!(n.bit_len(), 1000);
    assert_eq!(n.radix(2).unwrap(), vec![1u32; 1000]);
    assert_eq!(n.radix(32).unwrap(), digits);
}

proptest! {
    #[test]
    fn test_radix_roundtrip(value in any::<u128>(), base in 2u32..100_000) {
        let n = BasedNumber::from_magnitude(value);
        let digits = n.radix(base).unwrap();
        prop_assert!(digits.iter().all(|&d| d < base));
        let back = BasedNumber::from_digits(&digits, base, Endianness::Little).unwrap();
        prop_assert_eq!(back.to_u128(), Some(value));
    }

    #[test]
    fn test_rebase_through_intermediate(
        value in any::<u128>(),
        b1 in 2u32..70_000,
        b2 in 2u32..70_000,
    ) {
        let first = BasedNumber::from_magnitude(value).radix(b1).unwrap();
        let through = BasedNumber::from_digits(&first, b1, Endianness::Little).unwrap();
        let second = through.radix(b2).unwrap();
        let back = BasedNumber::from_digits(&second, b2, Endianness::Little).unwrap();
        prop_assert_eq!(back, BasedNumber::from_magnitude(value));
    }

    #[test]
    fn test_decimal_display_roundtrip(value in any::<u128>()) {
        let n = BasedNumber::from_magnitude(value);
        prop_assert_eq!(n.to_string(), value.to_string());
        prop_assert_eq!(BasedNumber::from_decimal_str(&value.to_string()).unwrap(), n);
    }

    #[test]
    fn test_no_leading_zero_digit(value in 1u128.., base in 2u32..1000) {
        let digits = BasedNumber::from_magnitude(value).radix(base).unwrap();
        prop_assert_ne!(digits.last(), Some(&0));
    }
}
