//! Umbrella crate for the `haar-blur` workspace.
//!
//! Re-exports the image primitives, the Haar pyramid and the blur detector so
//! callers depend on a single crate.

pub use hb_blur::*;
pub use hb_core::*;
pub use hb_wavelet::*;
