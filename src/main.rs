use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use photosphere_pad::logger;
use photosphere_pad::photosphere::{PadConfig, PadPipeline, DEFAULT_QUALITY};

use tracing::info;

/// Pad a cropped Photo Sphere JPEG to a full 360x180 equirectangular image.
#[derive(Parser, Debug)]
#[command(name = "photosphere-pad", version)]
struct Args {
    /// Photo Sphere JPEG to read
    input: PathBuf,

    /// Where to write the padded JPEG
    output: PathBuf,

    /// JPEG quality of the output (1-100)
    #[arg(short, long, default_value_t = DEFAULT_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Refuse canvases wider or taller than this many pixels
    #[arg(long)]
    max_dimension: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    logger::init();
    let args = Args::parse();

    let config = PadConfig::builder()
        .quality(args.quality)
        .max_dimension(args.max_dimension)
        .build();
    let pipeline = PadPipeline::new(config);

    info!("Quality: {}", pipeline.config().effective_quality());

    let geometry = pipeline
        .pad_file(&args.input, &args.output)
        .with_context(|| format!("failed to pad {}", args.input.display()))?;

    info!(
        total_width = geometry.total_width,
        total_height = geometry.total_height,
        crop_left = geometry.crop_left,
        crop_top = geometry.crop_top,
        heading = geometry.heading_degrees,
        "Wrote {}",
        args.output.display()
    );

    Ok(())
}
