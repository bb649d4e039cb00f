use serde::Serialize;

use crate::BlurError;
use crate::classify::StructureCounts;

/// `blur_confidence` reported when no tile has a mid-scale peak.
///
/// This is a saturation marker, not a ratio.
pub const BLUR_CONFIDENCE_SATURATED: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlurScores {
    /// Share of edge tiles with Dirac/Astep structure.
    pub dirac_astep_ratio: f32,
    /// Probable-blur tiles per Roof-peak tile, or [`BLUR_CONFIDENCE_SATURATED`].
    pub blur_confidence: f32,
}

impl BlurScores {
    pub fn is_confidence_saturated(&self) -> bool {
        self.blur_confidence == BLUR_CONFIDENCE_SATURATED
    }
}

pub fn aggregate(counts: &StructureCounts) -> Result<BlurScores, BlurError> {
    if counts.edges == 0 {
        return Err(BlurError::NoEdgesDetected {
            tiles: counts.tiles,
        });
    }

    let dirac_astep_ratio = counts.dirac_astep as f32 / counts.edges as f32;
    // Numerator spans Roof/Gstep and Roof-peak tiles, denominator only the
    // peaks, so the value can exceed 1.0.
    let blur_confidence = if counts.roof_peak == 0 {
        BLUR_CONFIDENCE_SATURATED
    } else {
        counts.probable_blur as f32 / counts.roof_peak as f32
    };

    Ok(BlurScores {
        dirac_astep_ratio,
        blur_confidence,
    })
}

/// An image is blurred when too few of its edges are sharp.
pub fn is_blurred(ratio: f32, min_zero: f32) -> bool {
    ratio < min_zero
}
