use crate::image::{alpha, blue, green, pack_argb, red, OPAQUE_BLACK, OPAQUE_WHITE};
use crate::palette::{pixel_index, Palette};

use super::ColorMode;

/// Per-channel multipliers for each color model. Stepped in 0.1 increments
/// by the input layer; no bounds are enforced here, values may legally go
/// negative or large enough to overflow a channel (see `narrow`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFactors {
    pub alpha: f32,
    pub red: f32,
    pub green: f32,
    pub blue: f32,

    pub yuv_y: f32,
    pub yuv_u: f32,
    pub yuv_v: f32,

    pub yiq_y: f32,
    pub yiq_i: f32,
    pub yiq_q: f32,

    pub cmy_c: f32,
    pub cmy_m: f32,
    pub cmy_y: f32,
}

impl Default for ScaleFactors {
    fn default() -> Self {
        ScaleFactors {
            alpha: 1.0,
            red: 1.0,
            green: 1.0,
            blue: 1.0,
            yuv_y: 1.0,
            yuv_u: 1.0,
            yuv_v: 1.0,
            yiq_y: 1.0,
            yiq_i: 1.0,
            yiq_q: 1.0,
            cmy_c: 1.0,
            cmy_m: 1.0,
            cmy_y: 1.0,
        }
    }
}

/// One adjustable scale channel, for the discrete +-0.1 step events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ScaleChannel {
    Alpha,
    Red,
    Green,
    Blue,
    YuvY,
    YuvU,
    YuvV,
    YiqY,
    YiqI,
    YiqQ,
    CmyC,
    CmyM,
    CmyY,
}

impl ScaleFactors {
    pub fn channel_mut(&mut self, channel: ScaleChannel) -> &mut f32 {
        match channel {
            ScaleChannel::Alpha => &mut self.alpha,
            ScaleChannel::Red => &mut self.red,
            ScaleChannel::Green => &mut self.green,
            ScaleChannel::Blue => &mut self.blue,
            ScaleChannel::YuvY => &mut self.yuv_y,
            ScaleChannel::YuvU => &mut self.yuv_u,
            ScaleChannel::YuvV => &mut self.yuv_v,
            ScaleChannel::YiqY => &mut self.yiq_y,
            ScaleChannel::YiqI => &mut self.yiq_i,
            ScaleChannel::YiqQ => &mut self.yiq_q,
            ScaleChannel::CmyC => &mut self.cmy_c,
            ScaleChannel::CmyM => &mut self.cmy_m,
            ScaleChannel::CmyY => &mut self.cmy_y,
        }
    }
}

/// Narrow a scaled value back to one 8-bit channel: truncate toward zero,
/// keep the low 8 bits. Deliberately NOT saturating; values past 255 or
/// below 0 wrap instead of clamping.
#[inline]
pub fn narrow(value: f64) -> u8 {
    (value as i64) as u8
}

pub fn argb(pixel: u32, scales: &ScaleFactors) -> u32 {
    let a = narrow(alpha(pixel) as f64 * scales.alpha as f64);
    let r = narrow(red(pixel) as f64 * scales.red as f64);
    let g = narrow(green(pixel) as f64 * scales.green as f64);
    let b = narrow(blue(pixel) as f64 * scales.blue as f64);
    pack_argb(a, r, g, b)
}

pub fn yuv(pixel: u32, scales: &ScaleFactors) -> u32 {
    let a = alpha(pixel);
    let r = red(pixel) as f64;
    let g = green(pixel) as f64;
    let b = blue(pixel) as f64;
    let y = narrow((0.299 * r + 0.587 * g + 0.114 * b) * scales.yuv_y as f64);
    // U and V are derived from the already-narrowed Y, not the raw luma
    let u = narrow((0.492 * (b - y as f64) + 128.0) * scales.yuv_u as f64);
    let v = narrow((0.877 * (r - y as f64) + 128.0) * scales.yuv_v as f64);
    pack_argb(a, y, u, v)
}

pub fn yiq(pixel: u32, scales: &ScaleFactors) -> u32 {
    let a = alpha(pixel);
    let r = red(pixel) as f64;
    let g = green(pixel) as f64;
    let b = blue(pixel) as f64;
    let y = narrow((0.299 * r + 0.587 * g + 0.114 * b) * scales.yiq_y as f64);
    let i = narrow((0.596 * r - 0.275 * g - 0.321 * b + 128.0) * scales.yiq_i as f64);
    let q = narrow((0.212 * r - 0.523 * g + 0.311 * b + 128.0) * scales.yiq_q as f64);
    pack_argb(a, y, i, q)
}

pub fn cmy(pixel: u32, scales: &ScaleFactors) -> u32 {
    let a = alpha(pixel);
    let c = narrow((255 - red(pixel)) as f64 * scales.cmy_c as f64);
    let m = narrow((255 - green(pixel)) as f64 * scales.cmy_m as f64);
    let y = narrow((255 - blue(pixel)) as f64 * scales.cmy_y as f64);
    // converted back to RGB for display
    pack_argb(a, 255 - c, 255 - m, 255 - y)
}

// Scale factors are ignored by this model.
pub fn monochrome(pixel: u32) -> u32 {
    let r = red(pixel) as f64;
    let g = green(pixel) as f64;
    let b = blue(pixel) as f64;
    let luma = narrow(0.299 * r + 0.587 * g + 0.114 * b);
    if luma > 128 {
        OPAQUE_WHITE
    } else {
        OPAQUE_BLACK
    }
}

pub fn indexed(pixel: u32, palette: &Palette) -> u32 {
    palette.entry(pixel_index(pixel))
}

/// Dispatch on the active model. A dithered frame is composited through the
/// ARGB transform (the ditherer has already run by then), so the binary
/// black/white pixels get scaled a second time; that double application is
/// intended.
pub fn apply(mode: ColorMode, pixel: u32, scales: &ScaleFactors, palette: &Palette) -> u32 {
    match mode {
        ColorMode::Argb | ColorMode::Dithered => argb(pixel, scales),
        ColorMode::Yuv => yuv(pixel, scales),
        ColorMode::Yiq => yiq(pixel, scales),
        ColorMode::Cmy => cmy(pixel, scales),
        ColorMode::Monochrome => monochrome(pixel),
        ColorMode::Indexed => indexed(pixel, palette),
    }
}
