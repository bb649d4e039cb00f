//! Foundational image primitives for wavelet blur analysis.
//!
//! ## Image Views and Stride
//! Images use element stride (not byte stride). `stride` is the distance, in
//! elements, between adjacent row starts and may be greater than `width`.
//! Cropping an image therefore never copies: a crop is a subview that keeps the
//! parent's stride.
//!
//! ## Sample Types
//! Analysis runs in `f32`. Any sample type with a lossless `Into<f32>`
//! conversion (`u8`, `u16`) can be lifted with [`to_f32`].

mod error;
mod image;

pub use error::Error;
pub use image::{Image, ImageView, to_f32};
