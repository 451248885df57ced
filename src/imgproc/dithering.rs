use anyhow::Context;

use crate::image::{blue, green, red, ConstImage, Image, ImageBuffer, OPAQUE_BLACK, OPAQUE_WHITE};

/// Floyd-Steinberg error diffusion to a 1-bit black/white image at double
/// resolution: each source pixel becomes a uniform 2x2 block in the output.
///
/// Works on raw RGB luma and ignores all per-channel scale factors; when
/// the result is displayed it still passes through the ARGB transform,
/// which may scale the binary pixels again.
///
/// The only failure is the output allocation (the result holds 4x the
/// source pixel count); on error nothing has been written anywhere.
pub fn floyd_steinberg(src: &impl ConstImage) -> anyhow::Result<ImageBuffer> {
    let mut out = ImageBuffer::try_new(src.width() * 2, src.height() * 2)
        .context("failed to allocate dithered output image")?;
    if src.is_empty() {
        return Ok(out);
    }

    let width = src.width() as usize;
    // diffusion errors for the row being scanned and the one below; the
    // extra slot absorbs spills past the right edge
    let mut current_row: Vec<f32> = vec![0.0; width + 1];
    let mut next_row: Vec<f32> = vec![0.0; width + 1];

    for y in 0..src.height() {
        for x in 0..src.width() {
            let pixel = src.pixel(x, y);
            let gray = 0.299f32 * red(pixel) as f32
                + 0.587f32 * green(pixel) as f32
                + 0.114f32 * blue(pixel) as f32
                + current_row[x as usize];
            let (output, quantized) = if gray >= 128.0 {
                (OPAQUE_WHITE, 255.0f32)
            } else {
                (OPAQUE_BLACK, 0.0f32)
            };
            let error = gray - quantized;

            out.put_pixel(x * 2, y * 2, output);
            out.put_pixel(x * 2 + 1, y * 2, output);
            out.put_pixel(x * 2, y * 2 + 1, output);
            out.put_pixel(x * 2 + 1, y * 2 + 1, output);

            // weights: 7/16 E, 3/16 SW, 5/16 S, 1/16 SE
            let x = x as usize;
            current_row[x + 1] += error * 7.0 / 16.0;
            if x >= 1 {
                next_row[x - 1] += error * 3.0 / 16.0;
            }
            next_row[x] += error * 5.0 / 16.0;
            next_row[x + 1] += error * 1.0 / 16.0;
        }
        std::mem::swap(&mut current_row, &mut next_row);
        next_row.fill(0.0);
    }
    Ok(out)
}
