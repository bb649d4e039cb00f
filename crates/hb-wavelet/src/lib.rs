//! Multiresolution Haar analysis for blur detection.
//!
//! One decomposition step maps an even-sized plane to four half-size subbands
//! using the orthonormal 2D Haar basis. For the row-major 2x2 block
//! `[[a, b], [c, d]]`:
//!
//! - approx: `(a + b + c + d) / 2`
//! - horizontal detail: `(a + b - c - d) / 2`
//! - vertical detail: `(a - b + c - d) / 2`
//! - diagonal detail: `(a - b - c + d) / 2`
//!
//! Odd-size policy:
//! - Unlike a plain mean pyramid, nothing is dropped. A step entering with an
//!   odd width or height fails with [`hb_core::Error::OddDimension`]; callers
//!   crop beforehand.
//!
//! Edge maps combine the three detail subbands of a level into one energy
//! value per cell: `sqrt(h^2 + v^2 + d^2)`.

mod edge_map;
mod haar;
mod pyramid;

pub use edge_map::{EdgePyramid, edge_map};
pub use haar::{HaarLevel, haar_step};
pub use pyramid::HaarPyramid;
