pub mod colorspace;
pub mod compose;
pub mod dithering;
pub mod histogram;

/// The selectable display modes. Everything downstream dispatches on this
/// tag instead of carrying per-model function pointers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Argb,
    Yuv,
    Yiq,
    Cmy,
    Monochrome,
    Dithered,
    Indexed,
}
