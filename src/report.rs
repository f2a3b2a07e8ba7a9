//! Human-readable reports on encodings and on the glyph codomain.
//!
//! Nothing here feeds back into encoding; both reports only read data the
//! pipeline has already produced.

use std::fmt;

use crate::codec::based::BasedNumber;
use crate::codec::codepoints::CodepointMapper;
use crate::types::{EncodedUrl, Endianness};

/// Multi-line compression diagnostics for one encoded URL.
///
/// ```
/// use glyphurl::{encode_url_detailed, report::StatsReport};
///
/// let encoded = encode_url_detailed("http://www.slashdot.org/")?;
/// let text = StatsReport(&encoded).to_string();
/// assert!(text.contains("URL length (chars):            24"));
/// assert!(text.contains("5-bit encoded length (chars):  14"));
/// # Ok::<(), glyphurl::GlyphUrlError>(())
/// ```
pub struct StatsReport<'a>(pub &'a EncodedUrl);

impl fmt::Display for StatsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = self.0;
        let stats = encoded.stats();
        let decimal = BasedNumber::from_digits(
            &encoded.digits,
            encoded.codomain_size,
            Endianness::Little,
        )
        .map(|n| n.to_string())
        .unwrap_or_else(|_| "<invalid digits>".to_string());

        writeln!(f, "URL:                           {}", encoded.original)?;
        writeln!(f, "URL length (chars):            {}", stats.original_chars)?;
        writeln!(f, "URL length (bits):             {}", stats.original_bits())?;
        writeln!(f, "5-bit encoded length (chars):  {}", stats.symbol_count)?;
        writeln!(f, "5-bit encoded length (bits):   {}", stats.symbol_bits())?;
        writeln!(f, "Bit compression ratio:         {:.2}%", stats.bit_ratio() * 100.0)?;
        writeln!(f, "URL, 5-bit, decimal:           {}", decimal)?;
        let base_label = format!("URL, base {}:", encoded.codomain_size);
        writeln!(f, "{:<31}{:?}", base_label, encoded.digits)?;
        writeln!(f, "Glyphs:                        {}", encoded.glyphs)?;
        writeln!(f, "Glyph length (bits):           {:.1}", stats.glyph_bits())?;
        write!(f, "Char compression ratio:        {:.2}%", stats.char_ratio() * 100.0)
    }
}

/// Render the diagnostics block for an encoded URL.
pub fn render_stats(encoded: &EncodedUrl) -> String {
    StatsReport(encoded).to_string()
}

/// Render every codepoint of the mapper's codomain as an HTML page.
///
/// One group per range, headed by its label and size, with one cell per
/// codepoint showing its decimal value and the glyph itself.
pub fn render_ranges_html(mapper: &CodepointMapper) -> String {
    let mut html = String::new();

    html.push_str(HTML_HEAD);

    for range in mapper.ranges() {
        html.push_str("\n        <div class=\"group\">\n");
        html.push_str(&format!(
            "            <h2 class=\"name\">{}: {} characters</h2>\n",
            escape_html(range.label),
            range.size()
        ));
        html.push_str("            <div class=\"chars\">");
        for codepoint in range.first..=range.last {
            html.push_str(&format!(
                "\n                <div class=\"char\">\n                    {}\n                    <div class=\"graph\">&#{};</div>\n                </div>",
                codepoint, codepoint
            ));
        }
        html.push_str("</div>\n        </div>");
    }

    html.push_str(HTML_TAIL);
    html
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const HTML_HEAD: &str = r#"
        <html>
        <head>
            <meta charset="utf-8">
            <title>Unicodes</title>
        </head>
        <style>
            body {
                font-family: sans-serif;
            }

            .group {
                clear: both;
                padding-top: 30px;
            }

            .char {
                width: 80px;
                height: 70px;
                padding: 10px;
                text-align: center;
                float: left;
                border: 1px solid #888;
                margin-left: -1px;
                margin-top: -1px;
            }

            .graph {
                font-size: 50px;
            }
        </style>
        <body>"#;

const HTML_TAIL: &str = "
        </body>
        </html>
";
