use crate::image::{blue, green, red, ConstImage};

use super::colorspace::{narrow, ScaleFactors};
use super::ColorMode;

pub const BUCKETS: usize = 256;

/// 256-bucket intensity histogram of `src` under the active model. Buckets
/// always sum to width * height.
///
/// The intensity derivation mirrors the display transforms' arithmetic
/// without sharing code with it, asymmetries included. These are observable
/// behavior and must not be "fixed" independently of the display side:
/// - the ARGB red/green/blue scale factors are applied to the channels in
///   the ARGB, YUV, YIQ and CMY branches alike;
/// - the CMY branch never applies the CMY scale factors;
/// - Monochrome and Dithered share one branch reading the blue channel
///   scaled by the YUV y factor;
/// - Indexed reads the pixel's low 8 bits directly, assuming the pixel
///   already went through the palette.
pub fn compute(src: &impl ConstImage, mode: ColorMode, scales: &ScaleFactors) -> [u32; BUCKETS] {
    let mut histogram = [0u32; BUCKETS];
    for y in 0..src.height() {
        for x in 0..src.width() {
            let pixel = src.pixel(x, y);
            let intensity = match mode {
                ColorMode::Argb => {
                    let r = narrow((red(pixel) as f32 * scales.red) as f64);
                    let g = narrow((green(pixel) as f32 * scales.green) as f64);
                    let b = narrow((blue(pixel) as f32 * scales.blue) as f64);
                    ((r as u32 + g as u32 + b as u32) / 3) as u8
                }
                ColorMode::Yuv => {
                    let r = narrow((red(pixel) as f32 * scales.red) as f64);
                    let g = narrow((green(pixel) as f32 * scales.green) as f64);
                    let b = narrow((blue(pixel) as f32 * scales.blue) as f64);
                    let luma = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
                    narrow(luma * scales.yuv_y as f64)
                }
                ColorMode::Yiq => {
                    let r = narrow((red(pixel) as f32 * scales.red) as f64);
                    let g = narrow((green(pixel) as f32 * scales.green) as f64);
                    let b = narrow((blue(pixel) as f32 * scales.blue) as f64);
                    let luma = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
                    narrow(luma * scales.yiq_y as f64)
                }
                ColorMode::Cmy => {
                    let r = narrow((red(pixel) as f32 * scales.red) as f64);
                    let g = narrow((green(pixel) as f32 * scales.green) as f64);
                    let b = narrow((blue(pixel) as f32 * scales.blue) as f64);
                    let inverted = (255 - r as u32) + (255 - g as u32) + (255 - b as u32);
                    (inverted / 3) as u8
                }
                ColorMode::Monochrome | ColorMode::Dithered => {
                    narrow((blue(pixel) as f32 * scales.yuv_y) as f64)
                }
                ColorMode::Indexed => blue(pixel),
            };
            histogram[intensity as usize] += 1;
        }
    }
    histogram
}

/// Largest bucket count, floored at 1 so overlay bar heights can divide by
/// it even for an all-empty histogram.
pub fn max_count(histogram: &[u32; BUCKETS]) -> u32 {
    histogram.iter().copied().max().unwrap_or(0).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{pack_argb, ImageBuffer, Image};
    use crate::palette::Palette;

    fn gradient_image() -> ImageBuffer {
        let mut img = ImageBuffer::new(16, 16);
        for y in 0..16 {
            for x in 0..16 {
                let v = (y * 16 + x) as u8;
                img.put_pixel(x, y, pack_argb(0xff, v, v.wrapping_mul(3), 255 - v));
            }
        }
        img
    }

    #[test]
    fn test_buckets_sum_to_pixel_count() {
        let img = gradient_image();
        let scales = ScaleFactors {
            red: 1.7,
            yuv_y: 0.3,
            cmy_m: -2.0,
            ..Default::default()
        };
        for mode in [
            ColorMode::Argb,
            ColorMode::Yuv,
            ColorMode::Yiq,
            ColorMode::Cmy,
            ColorMode::Monochrome,
            ColorMode::Dithered,
            ColorMode::Indexed,
        ] {
            let histogram = compute(&img, mode, &scales);
            let total: u32 = histogram.iter().sum();
            assert_eq!(total, 16 * 16, "mode {:?}", mode);
        }
    }

    #[test]
    fn test_argb_branch_channel_average() {
        let mut img = ImageBuffer::new(1, 1);
        img.put_pixel(0, 0, pack_argb(0xff, 100, 150, 200));
        let histogram = compute(&img, ColorMode::Argb, &ScaleFactors::default());
        // (100 + 150 + 200) / 3 = 150
        assert_eq!(histogram[150], 1);
    }

    #[test]
    fn test_cmy_branch_ignores_cmy_scales() {
        let img = gradient_image();
        let base = compute(&img, ColorMode::Cmy, &ScaleFactors::default());
        let wild_cmy = ScaleFactors {
            cmy_c: 5.0,
            cmy_m: -1.0,
            cmy_y: 0.0,
            ..Default::default()
        };
        assert_eq!(compute(&img, ColorMode::Cmy, &wild_cmy), base);

        // ...but the ARGB channel scales do reach it
        let scaled_rgb = ScaleFactors {
            red: 0.5,
            ..Default::default()
        };
        assert_ne!(compute(&img, ColorMode::Cmy, &scaled_rgb), base);
    }

    #[test]
    fn test_cmy_branch_inverted_average() {
        let mut img = ImageBuffer::new(1, 1);
        img.put_pixel(0, 0, pack_argb(0xff, 100, 150, 200));
        let histogram = compute(&img, ColorMode::Cmy, &ScaleFactors::default());
        // (155 + 105 + 55) / 3 = 105
        assert_eq!(histogram[105], 1);
    }

    #[test]
    fn test_monochrome_and_dithered_read_scaled_blue() {
        let mut img = ImageBuffer::new(1, 1);
        img.put_pixel(0, 0, pack_argb(0xff, 10, 20, 200));
        let scales = ScaleFactors {
            yuv_y: 0.5,
            ..Default::default()
        };
        for mode in [ColorMode::Monochrome, ColorMode::Dithered] {
            let histogram = compute(&img, mode, &scales);
            // blue 200 * 0.5 = 100; red and green do not contribute
            assert_eq!(histogram[100], 1, "mode {:?}", mode);
        }
    }

    #[test]
    fn test_indexed_branch_reads_low_byte() {
        let palette = Palette::build();
        let mut img = ImageBuffer::new(1, 1);
        img.put_pixel(0, 0, palette.entry(0x07)); // blue bits 11 -> low byte 0xc0
        let histogram = compute(&img, ColorMode::Indexed, &ScaleFactors::default());
        assert_eq!(histogram[0xc0], 1);
    }

    #[test]
    fn test_max_count() {
        let img = gradient_image();
        let histogram = compute(&img, ColorMode::Argb, &ScaleFactors::default());
        let max = max_count(&histogram);
        assert!(histogram.iter().all(|&c| c <= max));
        assert!(max >= 1);

        let empty = compute(&ImageBuffer::empty(), ColorMode::Argb, &ScaleFactors::default());
        assert_eq!(max_count(&empty), 1);
    }
}
