use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use glyphurl::report::{render_ranges_html, render_stats};
use glyphurl::{decode_url, encode_url, encode_url_detailed, BasedNumber, CodepointMapper, GlyphUrlError};

/// Compact URLs into short strings of CJK, Yi and Hangul glyphs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Log pipeline stages to stderr.
    #[arg(short, long, global = true, env = "GLYPHURL_VERBOSE")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode each URL into glyphs, one per line.
    Encode {
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Decode each glyph string back into its URL, one per line.
    Decode {
        #[arg(required = true)]
        glyphs: Vec<String>,
    },
    /// Print compression diagnostics for each URL.
    Stats {
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Run the built-in sample URLs and number conversions.
    Demo,
    /// List the codepoint ranges glyphs are drawn from.
    Ranges {
        /// Emit an HTML page showing every glyph instead of a summary.
        #[arg(long)]
        html: bool,
    },
}

const SAMPLE_URLS: &[(&str, &str)] = &[
    ("A short URL with very low entropy.", "http://www.slashdot.org/"),
    (
        "A long URL primarily using lower case characters.",
        "http://www.lyricsmode.com/lyrics/f/florence_and_the_machine/a_kiss_with_a_fist_is_better_than_none.html",
    ),
    (
        "An Amazon URL with mixed case, special chars.",
        "http://www.amazon.co.uk/Pragmatic-Programmer-Andrew-Hunt/dp/020161622X/ref=sr_1_1?ie=UTF8&s=books&qid=1247419421&sr=8-1",
    ),
];

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(if args.verbose { "debug" } else { "warn" });

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(directives: &str) {
    let main_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives)))
        .with(main_layer)
        .init()
}

fn run(command: Command) -> Result<(), GlyphUrlError> {
    match command {
        Command::Encode { urls } => {
            for url in urls {
                println!("{}", encode_url(&url)?);
            }
        }
        Command::Decode { glyphs } => {
            for glyph_str in glyphs {
                println!("{}", decode_url(&glyph_str)?);
            }
        }
        Command::Stats { urls } => {
            for url in urls {
                println!("{}\n", render_stats(&encode_url_detailed(&url)?));
            }
        }
        Command::Demo => demo()?,
        Command::Ranges { html } => {
            let mapper = CodepointMapper::default_ranges();
            if html {
                print!("{}", render_ranges_html(mapper));
            } else {
                for range in mapper.ranges() {
                    println!(
                        "{:<32} U+{:04X}..U+{:04X} {:>6}",
                        range.label,
                        range.first,
                        range.last,
                        range.size()
                    );
                }
                println!("{:<32} {:>21}", "Codomain size", mapper.codomain_size());
                println!("{:<32} {:>21.3}", "Bits per glyph", mapper.bits_per_glyph());
            }
        }
    }
    Ok(())
}

fn demo() -> Result<(), GlyphUrlError> {
    println!("glyphurl {}", env!("CARGO_PKG_VERSION"));
    println!();

    let thousand = BasedNumber::from_magnitude(1000);
    println!("1000:                          {}", thousand);
    println!("1000, base 10:                 {:?}", thousand.radix(10)?);
    println!("1000, base 2:                  {:?}", thousand.radix(2)?);
    println!();

    let five_twelve = BasedNumber::from_magnitude(512);
    println!("512:                           {}", five_twelve);
    println!("512, base 2:                   {:?}", five_twelve.radix(2)?);
    println!("512, base 16:                  {:?}", five_twelve.radix(16)?);
    println!();

    let hello = BasedNumber::from_7bit_str("Hello, world!")?;
    let codomain = CodepointMapper::default_ranges().codomain_size();
    println!("Hello, world!                  {}", hello);
    println!("Hello, world!, base 128:       {:?}", hello.radix(128)?);
    println!("Hello, world!, base {}:     {:?}", codomain, hello.radix(codomain)?);
    println!();

    for (description, url) in SAMPLE_URLS {
        let encoded = encode_url_detailed(url)?;
        let decoded = decode_url(&encoded.glyphs)?;
        println!("{}", description);
        println!("{}", render_stats(&encoded));
        println!("Round trip:                    {}", if decoded == *url { "ok" } else { "MISMATCH" });
        println!();
    }

    Ok(())
}
