use std::io::Read;

use anyhow::Result;
use clap::Parser;

use roman_numeral::convert;

/// Command-line arguments for the converter
#[derive(Debug, Parser)]
#[command(name = "roman")]
#[command(about = "Convert Roman numerals to Arabic values")]
#[command(version)]
struct Args {
    /// Numerals to convert; reads whitespace-separated numerals from
    /// stdin when none are given
    numerals: Vec<String>,

    /// Log level for the converter
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .init();

    let numerals = if args.numerals.is_empty() {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        input.split_whitespace().map(str::to_string).collect()
    } else {
        args.numerals
    };

    for numeral in &numerals {
        let value = convert(numeral)?;
        println!("{numeral} = {value}");
    }

    Ok(())
}
