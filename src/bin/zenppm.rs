//! Filter a P3 image, then overlay the result on the original.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use zenppm::{Filter, Grayscale, Image, Invert, Pipeline};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input P3 image
    input: PathBuf,

    /// Where to write the filtered image
    #[arg(short, long, default_value = "result.ppm")]
    output: PathBuf,

    /// Where to write the filtered image overlaid on the original
    #[arg(short, long, default_value = "combined.ppm")]
    combined: PathBuf,

    /// Filters to apply, in order
    #[arg(short, long = "filter", value_enum, default_values_t = [FilterArg::Grayscale, FilterArg::Invert])]
    filters: Vec<FilterArg>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FilterArg {
    Grayscale,
    Invert,
}

impl FilterArg {
    fn boxed(self) -> Box<dyn Filter> {
        match self {
            Self::Grayscale => Box::new(Grayscale),
            Self::Invert => Box::new(Invert),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let mut image = Image::load(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    println!("loaded image {}x{}", image.width(), image.height());

    let pipeline: Pipeline = args.filters.iter().map(|f| f.boxed()).collect();
    log::debug!("pipeline: {pipeline:?}");

    println!("applying filters");
    pipeline.run_with(&mut image, |kind, filter| {
        println!("{kind}");
        log::debug!("{filter}");
    });

    image
        .save(&args.output)
        .with_context(|| format!("failed to save {}", args.output.display()))?;
    println!("result saved to {}", args.output.display());

    let original = Image::load(&args.input)
        .with_context(|| format!("failed to reload {}", args.input.display()))?;
    let combined = &image + &original;
    combined
        .save(&args.combined)
        .with_context(|| format!("failed to save {}", args.combined.display()))?;
    println!("overlay saved to {}", args.combined.display());

    Ok(())
}
