//! Edge-structure rules applied per tile.
//!
//! `dirac_astep`, `roof_gstep` and `roof_peak` are pairwise exclusive: each
//! one fixes a different strict order between neighbouring scales. Only
//! `probable_blur` spans a union, of `roof_gstep` and `roof_peak`.

use serde::Serialize;

use crate::tiles::TileMaxima;

/// Structure flags of one edge tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileClass {
    /// Energy strictly decreasing with scale.
    pub dirac_astep: bool,
    /// Energy strictly increasing with scale.
    pub roof_gstep: bool,
    /// Energy peaks at the middle scale.
    pub roof_peak: bool,
    /// Roof/Gstep structure whose finest-scale energy stays under the threshold.
    pub probable_blur: bool,
}

/// Returns `None` when the tile is not an edge at `threshold`.
pub fn classify_tile([e1, e2, e3]: [f32; 3], threshold: f32) -> Option<TileClass> {
    let is_edge = e1 > threshold || e2 > threshold || e3 > threshold;
    if !is_edge {
        return None;
    }

    let dirac_astep = e1 > e2 && e2 > e3;
    let roof_gstep = e1 < e2 && e2 < e3;
    let roof_peak = e2 > e1 && e2 > e3;
    let weak_fine_scale = e1 < threshold;

    Some(TileClass {
        dirac_astep,
        roof_gstep,
        roof_peak,
        probable_blur: (roof_gstep || roof_peak) && weak_fine_scale,
    })
}

pub fn classify_tiles(maxima: &TileMaxima, threshold: f32) -> Vec<Option<TileClass>> {
    maxima
        .iter()
        .map(|emax| classify_tile(emax, threshold))
        .collect()
}

/// Tallies of the tile classification of one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StructureCounts {
    pub tiles: usize,
    pub edges: usize,
    pub dirac_astep: usize,
    pub roof_gstep: usize,
    pub roof_peak: usize,
    pub probable_blur: usize,
}

pub fn count_structures(classes: &[Option<TileClass>]) -> StructureCounts {
    let mut counts = StructureCounts {
        tiles: classes.len(),
        ..StructureCounts::default()
    };

    for class in classes.iter().flatten() {
        counts.edges += 1;
        counts.dirac_astep += usize::from(class.dirac_astep);
        counts.roof_gstep += usize::from(class.roof_gstep);
        counts.roof_peak += usize::from(class.roof_peak);
        counts.probable_blur += usize::from(class.probable_blur);
    }

    counts
}
