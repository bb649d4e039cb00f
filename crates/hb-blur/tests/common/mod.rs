//! Synthetic grayscale scenes for blur-detection tests.

#![allow(dead_code)]

use hb_core::Image;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform 8-bit noise; every tile carries sharp, fine-scale detail.
pub fn noise_u8(width: usize, height: usize, seed: u64) -> Image<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..width * height).map(|_| rng.gen_range(0..=u8::MAX)).collect();
    Image::from_vec(width, height, data).expect("valid image")
}

/// Single bright pixels, one per 16x16 block, on black.
pub fn dot_grid_u8(width: usize, height: usize, value: u8) -> Image<u8> {
    let mut img = Image::new_fill(width, height, 0u8);
    for y in (5..height).step_by(16) {
        for x in (5..width).step_by(16) {
            img.data_mut()[y * width + x] = value;
        }
    }
    img
}

/// Vertical black/white boundary between columns `edge_col - 1` and `edge_col`.
pub fn hard_step_u8(width: usize, height: usize, edge_col: usize) -> Image<u8> {
    let row: Vec<u8> = (0..width)
        .map(|x| if x < edge_col { 0 } else { 255 })
        .collect();
    repeat_row(&row, height)
}

/// The same boundary convolved with a normalized Gaussian of `sigma` pixels.
pub fn smoothed_step_u8(width: usize, height: usize, edge_col: usize, sigma: f32) -> Image<u8> {
    let radius = (3.0 * sigma).ceil() as isize;
    let weights: Vec<f32> = (-radius..=radius)
        .map(|k| (-(k * k) as f32 / (2.0 * sigma * sigma)).exp())
        .collect();
    let total: f32 = weights.iter().sum();

    let row: Vec<u8> = (0..width as isize)
        .map(|x| {
            let lit: f32 = (-radius..=radius)
                .zip(&weights)
                .filter(|(k, _)| x - k >= edge_col as isize)
                .map(|(_, w)| w)
                .sum();
            (255.0 * lit / total).round().clamp(0.0, 255.0) as u8
        })
        .collect();
    repeat_row(&row, height)
}

/// Widens samples to u16 and multiplies them by `factor`.
pub fn scaled_u16(img: &Image<u8>, factor: u16) -> Image<u16> {
    let data = img.data().iter().map(|&v| v as u16 * factor).collect();
    Image::from_vec(img.width(), img.height(), data).expect("valid image")
}

fn repeat_row(row: &[u8], height: usize) -> Image<u8> {
    let mut data = Vec::with_capacity(row.len() * height);
    for _ in 0..height {
        data.extend_from_slice(row);
    }
    Image::from_vec(row.len(), height, data).expect("valid image")
}
