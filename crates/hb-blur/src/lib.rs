//! Reference-free blur detection from Haar wavelet edge structure.
//!
//! Pipeline, each stage a pure function of the previous one:
//! 1. [`crop_to_tile_grid`] trims the input to multiples of 16.
//! 2. Three Haar steps and their edge maps ([`hb_wavelet::EdgePyramid`]).
//! 3. [`pool_tile_maxima`] takes the per-tile maximum at every scale, with
//!    8x8, 4x4 and 2x2 windows on co-located tiles.
//! 4. [`classify_tiles`] labels edge tiles by how energy changes with scale.
//! 5. [`aggregate`] reduces the labels to two scores.
//!
//! A low share of Dirac/Astep (sharp) edges means the image is blurred:
//! see [`is_blurred`].
//!
//! The core does no I/O and holds no state between calls.

mod classify;
mod config;
mod crop;
mod detect;
mod error;
mod metrics;
mod tiles;

pub use classify::{StructureCounts, TileClass, classify_tile, classify_tiles, count_structures};
pub use config::{BlurConfig, DEFAULT_MIN_ZERO, DEFAULT_THRESHOLD};
pub use crop::{GRID_MULTIPLE, crop_to_tile_grid};
pub use detect::{BlurReport, analyze, detect_blur, tile_maxima};
pub use error::BlurError;
pub use metrics::{BLUR_CONFIDENCE_SATURATED, BlurScores, aggregate, is_blurred};
pub use tiles::{
    NUM_SCALES, TILE_SIDE, TileMaxima, TileOrigin, pool_tile_maxima, scale_origin, tile_origins,
    window_side,
};
