use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod driver;
mod error;
mod extract;
mod naming;
mod output;
mod paper;

use driver::BatchConfig;
use extract::PdfiumRasterizer;

/// Load every PDF in a folder, extract the 1st page and save it as an image
/// (default png) to an output folder (default coverpages).
#[derive(Parser, Debug)]
#[command(name = "coverpages", version)]
struct Args {
    /// Path to folder with all papers
    inpath: PathBuf,

    /// Output path of paper cover pages
    #[arg(short, long, default_value = "coverpages")]
    outpath: PathBuf,

    /// Output file extension, also picks the image encoder
    #[arg(short, long, default_value = "png")]
    ext: String,

    // Never read: only there so a later `-s` cancels an earlier `--no-scale`.
    /// Rescale pages to A4 (default)
    #[arg(short, long, overrides_with = "no_scale")]
    scale: bool,

    /// Keep each page's own size instead of rescaling to A4
    #[arg(long = "no-scale", overrides_with = "scale")]
    no_scale: bool,
}

impl Args {
    fn into_config(self) -> BatchConfig {
        BatchConfig {
            input_dir: self.inpath,
            output_dir: self.outpath,
            extension: self.ext,
            rescale: !self.no_scale,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "coverpages=info".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Args::parse().into_config();

    let rasterizer = PdfiumRasterizer::new().context("cannot render PDFs without PDFium")?;
    let report = driver::run_batch(&rasterizer, &config).with_context(|| {
        format!(
            "failed to extract cover pages from {}",
            config.input_dir.display()
        )
    })?;

    if report.is_empty() {
        warn!(input = %config.input_dir.display(), "no .pdf files found");
    }
    for conversion in &report.conversions {
        println!(
            "Converted {} to {}",
            conversion.source.display(),
            conversion.output.display()
        );
    }
    println!(
        "Extracted {} cover page(s) to {}",
        report.len(),
        config.output_dir.display()
    );
    Ok(())
}
