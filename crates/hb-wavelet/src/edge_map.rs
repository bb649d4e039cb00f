use hb_core::{Error, Image, ImageView};

use crate::haar::HaarLevel;
use crate::pyramid::HaarPyramid;

/// Per-cell detail energy of one decomposition level.
///
/// Fails with `SizeMismatch` if a detail subband does not match `approx`.
pub fn edge_map(level: &HaarLevel) -> Result<Image<f32>, Error> {
    let h = level.horizontal.data();
    let v = level.vertical.data();
    let d = level.diagonal.data();

    let data = h
        .iter()
        .zip(v)
        .zip(d)
        .map(|((&h, &v), &d)| (h * h + v * v + d * d).sqrt())
        .collect();

    Image::from_vec(level.width(), level.height(), data)
}

/// Edge maps for every level of a Haar pyramid.
///
/// Index 0 is the finest scale. The subbands are released once the maps exist.
#[derive(Debug, Clone, Default)]
pub struct EdgePyramid {
    maps: Vec<Image<f32>>,
}

impl EdgePyramid {
    pub fn build(src: &ImageView<'_, f32>, num_levels: usize) -> Result<Self, Error> {
        let pyramid = HaarPyramid::build(src, num_levels)?;
        Self::from_pyramid(&pyramid)
    }

    pub fn from_pyramid(pyramid: &HaarPyramid) -> Result<Self, Error> {
        let maps = pyramid
            .levels()
            .iter()
            .map(edge_map)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { maps })
    }

    pub fn map(&self, i: usize) -> Option<&Image<f32>> {
        self.maps.get(i)
    }

    pub fn num_levels(&self) -> usize {
        self.maps.len()
    }
}
