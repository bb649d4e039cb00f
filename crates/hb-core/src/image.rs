use crate::Error;

/// Owned, tightly packed row-major plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T> Image<T> {
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, Error> {
        let expected = width.checked_mul(height).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn as_view(&self) -> ImageView<'_, T> {
        ImageView {
            width: self.width,
            height: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}

impl<T: Clone> Image<T> {
    pub fn new_fill(width: usize, height: usize, value: T) -> Self {
        let len = width.checked_mul(height).expect("image size overflow");
        Self {
            width,
            height,
            data: vec![value; len],
        }
    }
}

/// Borrowed plane with an element stride.
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a, T> {
    width: usize,
    height: usize,
    stride: usize,
    data: &'a [T],
}

impl<'a, T> ImageView<'a, T> {
    pub fn from_slice(
        width: usize,
        height: usize,
        stride: usize,
        data: &'a [T],
    ) -> Result<Self, Error> {
        if stride < width {
            return Err(Error::InvalidStride);
        }

        let min_len = min_required_len(width, height, stride).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() < min_len {
            return Err(Error::SizeMismatch {
                expected: min_len,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn row(&self, y: usize) -> &'a [T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&'a T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.stride + x)
    }

    pub fn subview(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> Result<ImageView<'a, T>, Error> {
        if x > self.width
            || y > self.height
            || width > (self.width - x)
            || height > (self.height - y)
        {
            return Err(Error::OutOfBounds);
        }

        let start = y
            .checked_mul(self.stride)
            .and_then(|v| v.checked_add(x))
            .ok_or(Error::OutOfBounds)?;
        let min_len = min_required_len(width, height, self.stride).ok_or(Error::OutOfBounds)?;
        let tail = self.data.get(start..).ok_or(Error::OutOfBounds)?;

        if tail.len() < min_len {
            return Err(Error::OutOfBounds);
        }

        Ok(ImageView {
            width,
            height,
            stride: self.stride,
            data: tail,
        })
    }

    pub fn is_contiguous(&self) -> bool {
        self.stride == self.width
    }

    pub fn as_contiguous_slice(&self) -> Option<&'a [T]> {
        if !self.is_contiguous() {
            return None;
        }
        self.data.get(0..self.width * self.height)
    }
}

impl ImageView<'_, f32> {
    /// Largest sample inside the `width x height` window at `(x, y)`.
    ///
    /// Returns `None` when the window is empty or leaves the view.
    pub fn window_max(&self, x: usize, y: usize, width: usize, height: usize) -> Option<f32> {
        if width == 0 || height == 0 {
            return None;
        }
        let window = self.subview(x, y, width, height).ok()?;
        let mut best = f32::NEG_INFINITY;
        for wy in 0..window.height() {
            for &v in window.row(wy) {
                if v > best {
                    best = v;
                }
            }
        }
        Some(best)
    }
}

fn min_required_len(width: usize, height: usize, stride: usize) -> Option<usize> {
    if width == 0 || height == 0 {
        return Some(0);
    }

    let rows_before_last = height.checked_sub(1)?;
    let base = rows_before_last.checked_mul(stride)?;
    base.checked_add(width)
}

/// Lifts any lossless sample type into a packed `f32` plane.
pub fn to_f32<T: Copy + Into<f32>>(img: &ImageView<'_, T>) -> Image<f32> {
    if let Some(src) = img.as_contiguous_slice() {
        return Image {
            width: img.width(),
            height: img.height(),
            data: src.iter().map(|&px| px.into()).collect(),
        };
    }

    let mut out = Vec::with_capacity(img.width() * img.height());
    for y in 0..img.height() {
        out.extend(img.row(y).iter().map(|&px| px.into()));
    }

    Image {
        width: img.width(),
        height: img.height(),
        data: out,
    }
}
