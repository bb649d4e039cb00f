//! Blur check for a single image.
//!
//! Decodes the input as 8-bit luma, runs the Haar wavelet detector and prints
//! the decision with both scores. Optionally writes the full report as JSON.
//!
//! Color inputs are reduced with the BT.601 weights (0.299, 0.587, 0.114) in
//! 14-bit fixed point, matching OpenCV's grayscale load rather than the
//! Rec.709 weights of `image::DynamicImage::to_luma8`.
//!
//!   cargo run -p hb-cli --bin haar_blur -- --image photo.jpg
//!   RUST_LOG=debug cargo run -p hb-cli --bin haar_blur -- -i photo.jpg -t 30

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use haar_blur::{BlurConfig, BlurError, BlurReport, ImageView, analyze};
use log::{info, warn};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "haar_blur")]
#[command(about = "Detect blur in an image from Haar wavelet edge structure")]
struct Cli {
    /// Path to the input image.
    #[arg(short, long)]
    image: PathBuf,

    /// Edge energy a tile must exceed on some scale to count as an edge
    /// [default: 35].
    #[arg(short, long)]
    threshold: Option<f32>,

    /// Dirac/Astep ratio under which the image is reported blurred
    /// [default: 0.05].
    #[arg(long = "min-zero", visible_alias = "mz")]
    min_zero: Option<f32>,

    /// JSON file with `threshold` / `min_zero`; flags take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the full report as JSON to this path.
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ReportDto<'a> {
    image: &'a Path,
    #[serde(flatten)]
    report: &'a BlurReport,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => read_json(path)?,
        None => BlurConfig::default(),
    };
    let config = apply_overrides(base, cli.threshold, cli.min_zero);
    config.validate().context("invalid configuration")?;

    let gray = load_luma8(&cli.image)?;
    let (w, h) = (gray.width() as usize, gray.height() as usize);
    let view = ImageView::from_slice(w, h, w, gray.as_raw())
        .with_context(|| format!("wrapping {} pixels", cli.image.display()))?;
    info!("loaded {}: {w}x{h}", cli.image.display());

    let report = match analyze(&view, &config) {
        Ok(report) => report,
        Err(BlurError::NoEdgesDetected { tiles }) => {
            warn!(
                "no tile of {tiles} exceeded threshold {}",
                config.threshold
            );
            println!("\n\tImage location : {}", cli.image.display());
            println!("\tIs blur : undetermined (no analyzable edges)");
            return Ok(());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("analyzing {}", cli.image.display()));
        }
    };

    println!("\n\tImage location : {}", cli.image.display());
    println!(
        "\tIs blur : {}",
        if report.is_blurred { "Yes" } else { "No" }
    );
    println!("\tDirac/Astep ratio : {:.4}", report.dirac_astep_ratio);
    if report.blur_confidence_saturated {
        println!("\tBlur confidence : saturated (no roof-peak edges)");
    } else {
        println!("\tBlur confidence : {:.4}", report.blur_confidence);
    }

    if let Some(path) = &cli.json {
        write_json(
            path,
            &ReportDto {
                image: &cli.image,
                report: &report,
            },
        )?;
        info!("report written to {}", path.display());
    }

    Ok(())
}

fn apply_overrides(base: BlurConfig, threshold: Option<f32>, min_zero: Option<f32>) -> BlurConfig {
    BlurConfig {
        threshold: threshold.unwrap_or(base.threshold),
        min_zero: min_zero.unwrap_or(base.min_zero),
    }
}

fn load_luma8(path: &Path) -> Result<image::GrayImage> {
    let dyn_img =
        image::open(path).with_context(|| format!("opening input image {}", path.display()))?;
    Ok(match dyn_img {
        image::DynamicImage::ImageLuma8(gray) => gray,
        other => luma_bt601(&other.to_rgb8()),
    })
}

fn luma_bt601(rgb: &image::RgbImage) -> image::GrayImage {
    image::GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        image::Luma([bt601(r, g, b)])
    })
}

/// `round(0.299 R + 0.587 G + 0.114 B)` with weights scaled by 2^14.
fn bt601(r: u8, g: u8, b: u8) -> u8 {
    const R: u32 = 4899;
    const G: u32 = 9617;
    const B: u32 = 1868;
    let y = (R * u32::from(r) + G * u32::from(g) + B * u32::from(b) + (1 << 13)) >> 14;
    y.min(255) as u8
}

fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(path, bytes).with_context(|| format!("writing json {}", path.display()))
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("parsing json {}", path.display()))
}
