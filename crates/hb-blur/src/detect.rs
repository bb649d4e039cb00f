use hb_core::{ImageView, to_f32};
use hb_wavelet::EdgePyramid;
use log::debug;
use serde::Serialize;

use crate::BlurError;
use crate::classify::{StructureCounts, classify_tiles, count_structures};
use crate::config::BlurConfig;
use crate::crop::crop_to_tile_grid;
use crate::metrics::{BlurScores, aggregate, is_blurred};
use crate::tiles::{NUM_SCALES, TileMaxima, pool_tile_maxima};

/// Full outcome of one analysis, including the counts behind the scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlurReport {
    /// Dimensions after cropping to the tile grid.
    pub width: usize,
    pub height: usize,
    pub threshold: f32,
    pub min_zero: f32,
    pub counts: StructureCounts,
    pub dirac_astep_ratio: f32,
    pub blur_confidence: f32,
    pub blur_confidence_saturated: bool,
    pub is_blurred: bool,
}

impl BlurReport {
    pub fn scores(&self) -> BlurScores {
        BlurScores {
            dirac_astep_ratio: self.dirac_astep_ratio,
            blur_confidence: self.blur_confidence,
        }
    }
}

/// Scores `image` at the given edge threshold.
pub fn detect_blur<T: Copy + Into<f32>>(
    image: &ImageView<'_, T>,
    threshold: f32,
) -> Result<BlurScores, BlurError> {
    let config = BlurConfig {
        threshold,
        ..BlurConfig::default()
    };
    analyze(image, &config).map(|report| report.scores())
}

/// Crops `image`, decomposes it and pools per-tile edge maxima.
pub fn tile_maxima<T: Copy + Into<f32>>(image: &ImageView<'_, T>) -> Result<TileMaxima, BlurError> {
    cropped_tile_maxima(image).map(|(_, maxima)| maxima)
}

fn cropped_tile_maxima<T: Copy + Into<f32>>(
    image: &ImageView<'_, T>,
) -> Result<((usize, usize), TileMaxima), BlurError> {
    let cropped = crop_to_tile_grid(image)?;
    debug!(
        "cropped {}x{} -> {}x{}",
        image.width(),
        image.height(),
        cropped.width(),
        cropped.height()
    );

    let edges = {
        let plane = to_f32(&cropped);
        EdgePyramid::build(&plane.as_view(), NUM_SCALES)?
    };
    let maxima = pool_tile_maxima(&edges)?;
    Ok(((cropped.width(), cropped.height()), maxima))
}

pub fn analyze<T: Copy + Into<f32>>(
    image: &ImageView<'_, T>,
    config: &BlurConfig,
) -> Result<BlurReport, BlurError> {
    config.validate()?;

    let ((width, height), maxima) = cropped_tile_maxima(image)?;
    let counts = count_structures(&classify_tiles(&maxima, config.threshold));
    debug!("structure counts at threshold {}: {counts:?}", config.threshold);

    let scores = aggregate(&counts)?;
    let blurred = is_blurred(scores.dirac_astep_ratio, config.min_zero);
    debug!(
        "dirac/astep ratio {:.4}, blur confidence {:.4}, blurred: {blurred}",
        scores.dirac_astep_ratio, scores.blur_confidence
    );

    Ok(BlurReport {
        width,
        height,
        threshold: config.threshold,
        min_zero: config.min_zero,
        counts,
        dirac_astep_ratio: scores.dirac_astep_ratio,
        blur_confidence: scores.blur_confidence,
        blur_confidence_saturated: scores.is_confidence_saturated(),
        is_blurred: blurred,
    })
}
