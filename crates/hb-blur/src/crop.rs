use hb_core::ImageView;

use crate::BlurError;
use crate::tiles::TILE_SIDE;

/// Side multiple the input is cropped to: one halving step times the
/// finest tile side, so every pyramid level tiles exactly.
pub const GRID_MULTIPLE: usize = 2 * TILE_SIDE;

/// Drops the bottom rows and right columns that do not fill a whole
/// `GRID_MULTIPLE` block. The result borrows `image`.
pub fn crop_to_tile_grid<'a, T>(image: &ImageView<'a, T>) -> Result<ImageView<'a, T>, BlurError> {
    let width = image.width() / GRID_MULTIPLE * GRID_MULTIPLE;
    let height = image.height() / GRID_MULTIPLE * GRID_MULTIPLE;

    if width == 0 || height == 0 {
        return Err(BlurError::TooSmall {
            width: image.width(),
            height: image.height(),
        });
    }

    Ok(image.subview(0, 0, width, height)?)
}
