//! Run star detection on an image file and print the chart as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use star_detector::{detect_stars_with_config, ErrorResponse, StarsResponse};
use star_server::DetectorArgs;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Detect stars in an image file")]
struct Args {
    /// Image to analyze
    image: PathBuf,

    #[arg(long, help = "Pretty-print the JSON output")]
    pretty: bool,

    #[command(flatten)]
    detector: DetectorArgs,
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.detector.to_config();

    let bytes = std::fs::read(&args.image)
        .with_context(|| format!("Failed to read {}", args.image.display()))?;
    info!("Loaded {} ({} bytes)", args.image.display(), bytes.len());

    match detect_stars_with_config(&bytes, &config) {
        Ok(stars) => {
            info!("Found {} stars", stars.len());
            println!("{}", to_json(&StarsResponse::from(stars), args.pretty)?);
            Ok(())
        }
        Err(e) => {
            println!("{}", to_json(&ErrorResponse::new(e.to_string()), args.pretty)?);
            Err(e).context("Detection failed")
        }
    }
}
