use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[cfg(feature = "print-truecolor")]
use termion::color;

use websafe_palette::{Backend, Color, Options, Palette};

/// Print the dominant web-safe colors of one or more images.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// One or more input image paths
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Sample every n-th column and row
    #[arg(short, long, default_value_t = websafe_palette::settings::DEFAULT_PRECISION)]
    precision: u32,

    /// Number of colors to print
    #[arg(short = 'n', long, default_value_t = websafe_palette::settings::DEFAULT_PALETTE_LENGTH)]
    length: usize,

    /// Decoding backend (auto, image)
    #[arg(short, long, default_value = "auto")]
    backend: Backend,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Hex)]
    format: Format,

    /// Print the hit count next to each color
    #[arg(long)]
    counts: bool,

    /// Log decoding and sampling details
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// #rrggbb
    Hex,
    /// rgb(r,g,b)
    Rgb,
    /// Packed decimal integer
    Int,
    /// JSON array of hex strings
    Json,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(default)
        .parse_default_env()
        .init();
}

fn render(color: Color, format: Format) -> String {
    match format {
        Format::Hex | Format::Json => color.to_hex_string(),
        Format::Rgb => color.to_rgb_string(),
        Format::Int => color.to_u32().to_string(),
    }
}

#[cfg(feature = "print-truecolor")]
fn swatch(c: Color) -> String {
    let (r, g, b) = c.to_rgb();
    format!("{}███{} ", color::Fg(color::Rgb(r, g, b)), color::Fg(color::Reset))
}

#[cfg(not(feature = "print-truecolor"))]
fn swatch(_: Color) -> String {
    String::new()
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = Options::new()
        .precision(args.precision)
        .length(args.length)
        .backend(args.backend);

    for input in &args.inputs {
        let palette = Palette::new(input.as_path(), &options)
            .with_context(|| format!("Could not extract palette from {}", input.display()))?;

        if args.inputs.len() > 1 {
            println!("{}:", input.display());
        }

        if let Format::Json = args.format {
            println!("{}", palette.to_json()?);
            continue;
        }

        for &(color, hits) in palette.counts().iter().take(palette.length()) {
            let line = format!("{}{}", swatch(color), render(color, args.format));
            if args.counts {
                println!("{}\t{} samples", line, hits);
            } else {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
