use crate::image::Point;
use crate::imgproc::colorspace::{ScaleChannel, ScaleFactors};
use crate::imgproc::compose::ViewTransform;
use crate::imgproc::ColorMode;

pub const SCALE_STEP: f32 = 0.1;
pub const PAN_STEP: i32 = 10;
pub const ZOOM_STEP: f32 = 0.1;
pub const ZOOM_MIN: f32 = 0.1;
pub const ZOOM_MAX: f32 = 5.0;

/// Process-lifetime viewer configuration: active color mode, the 13 scale
/// factors, pan/zoom, histogram toggle. Read by the pipeline every frame,
/// written only through the discrete step mutators below, one per UI
/// button/key event.
///
/// Scale factors are unclamped; zoom stepping clamps to (ZOOM_MIN, ZOOM_MAX)
/// here in the input layer, which is what keeps the compositor's zoom > 0
/// precondition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub mode: ColorMode,
    pub scales: ScaleFactors,
    pub view: ViewTransform,
    pub show_histogram: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            mode: ColorMode::Argb,
            scales: ScaleFactors::default(),
            view: ViewTransform::default(),
            show_histogram: false,
        }
    }
}

impl ViewState {
    pub fn select_mode(&mut self, mode: ColorMode) {
        self.mode = mode;
    }

    pub fn scale_up(&mut self, channel: ScaleChannel) {
        *self.scales.channel_mut(channel) += SCALE_STEP;
    }

    pub fn scale_down(&mut self, channel: ScaleChannel) {
        *self.scales.channel_mut(channel) -= SCALE_STEP;
    }

    pub fn zoom_in(&mut self) {
        if self.view.zoom < ZOOM_MAX {
            self.view.zoom += ZOOM_STEP;
        }
    }

    pub fn zoom_out(&mut self) {
        if self.view.zoom > ZOOM_MIN {
            self.view.zoom -= ZOOM_STEP;
        }
    }

    pub fn pan_left(&mut self) {
        self.view.offset.x -= PAN_STEP;
    }

    pub fn pan_right(&mut self) {
        self.view.offset.x += PAN_STEP;
    }

    pub fn pan_up(&mut self) {
        self.view.offset.y -= PAN_STEP;
    }

    pub fn pan_down(&mut self) {
        self.view.offset.y += PAN_STEP;
    }

    pub fn toggle_histogram(&mut self) {
        self.show_histogram = !self.show_histogram;
    }

    pub fn offset(&self) -> Point {
        self.view.offset
    }
}
