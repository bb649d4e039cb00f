use hb_core::{Error, ImageView};
use log::debug;

use crate::haar::{HaarLevel, haar_step};

/// Stack of successive Haar decompositions.
///
/// Level 0 decomposes the input plane; each next level decomposes the
/// previous level's approximation subband. Level dimensions are computed with
/// exact halving, so the input sides must be divisible by `2^num_levels`.
#[derive(Debug, Default, Clone)]
pub struct HaarPyramid {
    levels: Vec<HaarLevel>,
}

impl HaarPyramid {
    pub fn build(src: &ImageView<'_, f32>, num_levels: usize) -> Result<Self, Error> {
        let mut levels: Vec<HaarLevel> = Vec::with_capacity(num_levels);

        for level_idx in 0..num_levels {
            let next = match levels.last() {
                Some(prev) => haar_step(&prev.approx.as_view())?,
                None => haar_step(src)?,
            };
            debug!(
                "haar level {}: {}x{}",
                level_idx + 1,
                next.width(),
                next.height()
            );
            levels.push(next);
        }

        Ok(Self { levels })
    }

    pub fn level(&self, i: usize) -> Option<&HaarLevel> {
        self.levels.get(i)
    }

    pub fn levels(&self) -> &[HaarLevel] {
        &self.levels
    }

    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }
}
