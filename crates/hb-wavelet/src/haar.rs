use hb_core::{Error, Image, ImageView};

/// One level of a 2D Haar decomposition.
///
/// All four subbands share the same shape, exactly half of the source plane.
#[derive(Debug, Clone, PartialEq)]
pub struct HaarLevel {
    pub approx: Image<f32>,
    pub horizontal: Image<f32>,
    pub vertical: Image<f32>,
    pub diagonal: Image<f32>,
}

impl HaarLevel {
    fn zeros(width: usize, height: usize) -> Self {
        Self {
            approx: Image::new_fill(width, height, 0.0f32),
            horizontal: Image::new_fill(width, height, 0.0f32),
            vertical: Image::new_fill(width, height, 0.0f32),
            diagonal: Image::new_fill(width, height, 0.0f32),
        }
    }

    pub fn width(&self) -> usize {
        self.approx.width()
    }

    pub fn height(&self) -> usize {
        self.approx.height()
    }
}

#[inline]
fn dst_dims(src_w: usize, src_h: usize) -> Result<(usize, usize), Error> {
    if !src_w.is_multiple_of(2) || !src_h.is_multiple_of(2) {
        return Err(Error::OddDimension {
            width: src_w,
            height: src_h,
        });
    }
    Ok((src_w / 2, src_h / 2))
}

/// Applies one orthonormal 2D Haar step to `src`.
pub fn haar_step(src: &ImageView<'_, f32>) -> Result<HaarLevel, Error> {
    let (dst_w, dst_h) = dst_dims(src.width(), src.height())?;
    let mut dst = HaarLevel::zeros(dst_w, dst_h);
    haar_step_into(src, &mut dst);
    Ok(dst)
}

fn haar_step_into(src: &ImageView<'_, f32>, dst: &mut HaarLevel) {
    let dst_w = src.width() / 2;
    let dst_h = src.height() / 2;
    debug_assert_eq!(dst.width(), dst_w);
    debug_assert_eq!(dst.height(), dst_h);

    if dst_w == 0 || dst_h == 0 {
        return;
    }

    for y in 0..dst_h {
        let row0 = src.row(2 * y);
        let row1 = src.row(2 * y + 1);
        let range = y * dst_w..(y + 1) * dst_w;

        let approx = &mut dst.approx.data_mut()[range.clone()];
        for (x, out) in approx.iter_mut().enumerate() {
            let (a, b, c, d) = block(row0, row1, x);
            *out = (a + b + c + d) * 0.5;
        }

        let horizontal = &mut dst.horizontal.data_mut()[range.clone()];
        for (x, out) in horizontal.iter_mut().enumerate() {
            let (a, b, c, d) = block(row0, row1, x);
            *out = ((a + b) - (c + d)) * 0.5;
        }

        let vertical = &mut dst.vertical.data_mut()[range.clone()];
        for (x, out) in vertical.iter_mut().enumerate() {
            let (a, b, c, d) = block(row0, row1, x);
            *out = ((a + c) - (b + d)) * 0.5;
        }

        let diagonal = &mut dst.diagonal.data_mut()[range];
        for (x, out) in diagonal.iter_mut().enumerate() {
            let (a, b, c, d) = block(row0, row1, x);
            *out = ((a + d) - (b + c)) * 0.5;
        }
    }
}

#[inline(always)]
fn block(row0: &[f32], row1: &[f32], x: usize) -> (f32, f32, f32, f32) {
    let sx = 2 * x;
    (row0[sx], row0[sx + 1], row1[sx], row1[sx + 1])
}
