//! Integration tests for the full URL to glyph pipeline.

use glyphurl::*;
use proptest::prelude::*;
use test_case::test_case;

const SLASHDOT: &str = "http://www.slashdot.org/";
const LYRICS: &str = "http://www.lyricsmode.com/lyrics/f/florence_and_the_machine/a_kiss_with_a_fist_is_better_than_none.html";
const AMAZON: &str = "http://www.amazon.co.uk/Pragmatic-Programmer-Andrew-Hunt/dp/020161622X/ref=sr_1_1?ie=UTF8&s=books&qid=1247419421&sr=8-1";

#[test]
fn test_slashdot_glyphs() {
    let glyphs = encode_url(SLASHDOT).unwrap();
    assert_eq!(glyphs, "\u{5096}\u{3436}\u{50A8}\u{D400}\u{3572}");
    assert_eq!(decode_url(&glyphs).unwrap(), SLASHDOT);
}

#[test_case(SLASHDOT, 5; "slashdot")]
#[test_case(LYRICS, 30; "lyrics")]
#[test_case(AMAZON, 44; "amazon")]
#[test_case("http://www.example.com/index.html", 7; "shorthands")]
#[test_case("", 1; "empty")]
fn test_glyph_counts(url: &str, expected: usize) {
    let glyphs = encode_url(url).unwrap();
    assert_eq!(glyphs.chars().count(), expected);
    assert_eq!(decode_url(&glyphs).unwrap(), url);
}

#[test]
fn test_compression_is_real() {
    let mapper = CodepointMapper::default_ranges();
    for url in [SLASHDOT, LYRICS, AMAZON] {
        let glyphs = encode_url(url).unwrap().chars().count();
        assert!(
            (glyphs as f64) * mapper.bits_per_glyph() < (url.len() * 8) as f64,
            "{} did not compress",
            url
        );
    }
}

#[test]
fn test_stats_without_reencoding() {
    let encoded = encode_url_detailed(LYRICS).unwrap();
    let stats = encoded.stats();

    assert_eq!(stats.original_chars, 103);
    assert_eq!(stats.symbol_count, 91);
    assert_eq!(stats.glyph_count, 30);
    assert!(stats.bit_ratio() < 0.6);
    assert!(stats.char_ratio() < 0.3);
}

#[test]
fn test_amazon_expands_symbols_but_not_glyphs() {
    // Mixed case costs escapes, yet the re-based form still shrinks.
    let stats = encode_url_detailed(AMAZON).unwrap().stats();
    assert_eq!(stats.symbol_count, 134);
    assert!(stats.symbol_count > stats.original_chars);
    assert!(stats.glyph_count < stats.original_chars / 2);
}

#[test]
fn test_stage_composition() {
    // Running the stages by hand gives the same glyphs as the pipeline.
    let mapper = CodepointMapper::default_ranges();
    let symbols = encode_symbols(SLASHDOT).unwrap();
    let digits = symbols_to_digits(&symbols, mapper.codomain_size()).unwrap();
    let glyphs: String = digits.iter().map(|&d| mapper.map(d).unwrap()).collect();
    assert_eq!(glyphs, encode_url(SLASHDOT).unwrap());
    assert_eq!(digits_to_symbols(&digits, mapper.codomain_size()).unwrap(), symbols);
}

#[test]
fn test_decode_rejects_zero_padding() {
    let glyphs = encode_url(SLASHDOT).unwrap();
    let padded = format!("{}\u{2F00}", glyphs);
    assert!(matches!(
        decode_url(&padded),
        Err(GlyphUrlError::MalformedSymbolStream { .. })
    ));
}

#[test]
fn test_decode_rejects_foreign_glyphs() {
    assert_eq!(
        decode_url("http"),
        Err(GlyphUrlError::CodepointNotInAnyRange('h' as u32))
    );
}

#[test]
fn test_encoder_shared_across_threads() {
    let encoder = std::sync::Arc::new(GlyphEncoder::default());
    let handles: Vec<_> = [SLASHDOT, LYRICS, AMAZON]
        .into_iter()
        .map(|url| {
            let encoder = encoder.clone();
            std::thread::spawn(move || {
                let glyphs = encoder.encode(url).unwrap();
                encoder.decode(&glyphs).unwrap() == url
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

proptest! {
    #[test]
    fn test_roundtrip_printable_ascii(url in "[ -~]{0,200}") {
        let glyphs = encode_url(&url).unwrap();
        prop_assert_eq!(decode_url(&glyphs).unwrap(), url);
    }

    #[test]
    fn test_roundtrip_url_shaped(
        host in "[a-z]{1,20}",
        tld in prop::sample::select(vec!["com", "org", "co.uk", "rs"]),
        path in "(/[a-zA-Z0-9_.~-]{0,12}){0,6}",
        query in "(\\?[a-z]{1,8}=[a-zA-Z0-9%]{0,12})?",
    ) {
        let url = format!("http://www.{}.{}{}{}", host, tld, path, query);
        let encoded = encode_url_detailed(&url).unwrap();
        prop_assert_eq!(decode_url(&encoded.glyphs).unwrap(), url);
    }

    #[test]
    fn test_lowercase_compresses(url in "[a-w/=_]{40,200}") {
        let mapper = CodepointMapper::default_ranges();
        let glyphs = encode_url(&url).unwrap().chars().count();
        prop_assert!((glyphs as f64) * mapper.bits_per_glyph() < (url.len() * 8) as f64);
    }
}
