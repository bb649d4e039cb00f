//! Tiled max pooling across the three edge-map scales.
//!
//! Tiles are defined on the finest edge map. The same tile at a coarser level
//! has its origin and side divided by `2^(level - 1)`, so tile `i` covers the
//! same image region in all three output vectors.

use hb_wavelet::EdgePyramid;
use log::debug;

use crate::BlurError;

/// Tile side on the finest (level 1) edge map.
pub const TILE_SIDE: usize = 8;

/// Number of pyramid levels pooled per tile.
pub const NUM_SCALES: usize = 3;

/// Maps a level-1 coordinate onto `level` (1-based).
#[inline]
pub fn scale_origin(origin: usize, level: usize) -> usize {
    debug_assert!((1..=NUM_SCALES).contains(&level), "level out of range");
    origin >> (level - 1)
}

/// Tile side on `level` (1-based): 8, 4, 2.
#[inline]
pub fn window_side(level: usize) -> usize {
    scale_origin(TILE_SIDE, level)
}

/// Top-left corner of a tile on the level-1 edge map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileOrigin {
    pub row: usize,
    pub col: usize,
}

impl TileOrigin {
    /// `(row, col)` of this tile on `level`.
    pub fn at_level(self, level: usize) -> (usize, usize) {
        (scale_origin(self.row, level), scale_origin(self.col, level))
    }
}

/// Raster scan of 8x8 tiles over a `width x height` level-1 edge map.
///
/// The column origin advances by one tile until it reaches `width - 8`, then
/// wraps to column 0 of the next tile row.
pub fn tile_origins(width: usize, height: usize) -> Result<Vec<TileOrigin>, BlurError> {
    if width < TILE_SIDE
        || height < TILE_SIDE
        || !width.is_multiple_of(TILE_SIDE)
        || !height.is_multiple_of(TILE_SIDE)
    {
        return Err(BlurError::NotTileAligned { width, height });
    }

    let count = (height / TILE_SIDE) * (width / TILE_SIDE);
    let col_limit = width - TILE_SIDE;

    let mut origins = Vec::with_capacity(count);
    let (mut row, mut col) = (0usize, 0usize);
    while origins.len() < count {
        origins.push(TileOrigin { row, col });
        if col == col_limit {
            row += TILE_SIDE;
            col = 0;
        } else {
            col += TILE_SIDE;
        }
    }
    Ok(origins)
}

/// Per-tile maxima, index-aligned across the three scales.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TileMaxima {
    pub emax1: Vec<f32>,
    pub emax2: Vec<f32>,
    pub emax3: Vec<f32>,
}

impl TileMaxima {
    pub fn len(&self) -> usize {
        self.emax1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emax1.is_empty()
    }

    /// `[emax1, emax2, emax3]` for tile `i`.
    pub fn get(&self, i: usize) -> Option<[f32; 3]> {
        Some([
            *self.emax1.get(i)?,
            *self.emax2.get(i)?,
            *self.emax3.get(i)?,
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.emax1
            .iter()
            .zip(&self.emax2)
            .zip(&self.emax3)
            .map(|((&e1, &e2), &e3)| [e1, e2, e3])
    }
}

/// Pools the maximum edge energy of every tile at all three scales.
pub fn pool_tile_maxima(edges: &EdgePyramid) -> Result<TileMaxima, BlurError> {
    let mut maps = Vec::with_capacity(NUM_SCALES);
    for i in 0..NUM_SCALES {
        let map = edges
            .map(i)
            .ok_or(BlurError::MissingScale { level: i + 1 })?;
        maps.push(map.as_view());
    }

    let finest = maps[0];
    let origins = tile_origins(finest.width(), finest.height())?;
    debug!(
        "tiling {}x{} edge map into {} tiles",
        finest.width(),
        finest.height(),
        origins.len()
    );

    let mut out = TileMaxima {
        emax1: Vec::with_capacity(origins.len()),
        emax2: Vec::with_capacity(origins.len()),
        emax3: Vec::with_capacity(origins.len()),
    };

    for origin in origins {
        let mut emax = [0.0f32; NUM_SCALES];
        for (idx, (map, slot)) in maps.iter().zip(emax.iter_mut()).enumerate() {
            let level = idx + 1;
            let (row, col) = origin.at_level(level);
            let side = window_side(level);
            *slot = map
                .window_max(col, row, side, side)
                .ok_or(BlurError::NotTileAligned {
                    width: map.width(),
                    height: map.height(),
                })?;
        }
        out.emax1.push(emax[0]);
        out.emax2.push(emax[1]);
        out.emax3.push(emax[2]);
    }

    Ok(out)
}
