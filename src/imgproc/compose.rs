use crate::image::{ConstImage, Image, Point};
use crate::palette::Palette;

use super::colorspace::{self, ScaleFactors};
use super::ColorMode;

/// Pan/zoom applied identically to every pixel of a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub zoom: f32,
    pub offset: Point,
}

impl Default for ViewTransform {
    fn default() -> Self {
        ViewTransform {
            zoom: 1.0,
            offset: Point::default(),
        }
    }
}

/// Composite `src` into `canvas` at `origin` under `view`, running every
/// source pixel through the transform for `mode`. Nearest-neighbor inverse
/// scaling, full overwrite, no blending.
///
/// Writes are clipped to the canvas extent and to the left half of the
/// canvas width; the right half is reserved for the UI panel and is never
/// touched regardless of zoom, offset or image size.
///
/// Precondition: `view.zoom > 0`. Zero divides by zero; the configuration
/// layer keeps zoom inside (0.1, 5.0) and this function does not re-check.
pub fn compose(
    canvas: &mut impl Image,
    src: &impl ConstImage,
    origin: Point,
    view: &ViewTransform,
    mode: ColorMode,
    scales: &ScaleFactors,
    palette: &Palette,
) {
    if src.is_empty() {
        return;
    }

    let scaled_width = (src.width() as f32 * view.zoom) as i32;
    let scaled_height = (src.height() as f32 * view.zoom) as i32;
    let x_limit = canvas.width() / 2;

    for dst_y in 0..scaled_height {
        let final_y = origin.y + dst_y + view.offset.y;
        if final_y < 0 {
            continue;
        }
        if final_y >= canvas.height() {
            // final_y only grows from here
            break;
        }
        let src_y = (dst_y as f32 / view.zoom) as i32;
        for dst_x in 0..scaled_width {
            let final_x = origin.x + dst_x + view.offset.x;
            if final_x < 0 || final_x >= x_limit {
                continue;
            }
            let src_x = (dst_x as f32 / view.zoom) as i32;
            if src_x >= 0 && src_x < src.width() && src_y >= 0 && src_y < src.height() {
                let out = colorspace::apply(mode, src.pixel(src_x, src_y), scales, palette);
                canvas.put_pixel(final_x, final_y, out);
            }
        }
    }
}
