use log::debug;

use crate::image::{ConstImage, Image, Point};
use crate::imgproc::{compose, dithering, histogram, ColorMode};
use crate::palette::Palette;
use crate::state::ViewState;

// every frame starts from a zeroed canvas
const CLEAR_COLOR: u32 = 0x00000000;

/// Per-frame pixel pipeline: owns the palette (built once) and the viewer
/// configuration, and drives clear -> dither-if-selected -> composite ->
/// histogram-on-request against a caller-owned canvas.
pub struct Pipeline {
    pub state: ViewState,
    palette: Palette,
}

impl Pipeline {
    pub fn new(state: ViewState) -> Pipeline {
        Pipeline {
            state,
            palette: Palette::build(),
        }
    }

    /// Render one frame of `src` into `canvas` with the image placed at
    /// `origin`. An empty source clears the canvas and does nothing else.
    ///
    /// In dithered mode the ditherer runs before the canvas is touched, so
    /// its allocation failure leaves the canvas exactly as the previous
    /// frame left it.
    pub fn render_frame(
        &self,
        canvas: &mut impl Image,
        src: &impl ConstImage,
        origin: Point,
    ) -> anyhow::Result<()> {
        let t_start = std::time::Instant::now();

        if src.is_empty() {
            canvas.fill(CLEAR_COLOR);
            debug!("no source image, frame cleared only");
            return Ok(());
        }

        match self.state.mode {
            ColorMode::Dithered => {
                let dithered = dithering::floyd_steinberg(src)?;
                canvas.fill(CLEAR_COLOR);
                compose::compose(
                    canvas,
                    &dithered,
                    origin,
                    &self.state.view,
                    self.state.mode,
                    &self.state.scales,
                    &self.palette,
                );
            }
            mode => {
                canvas.fill(CLEAR_COLOR);
                compose::compose(
                    canvas,
                    src,
                    origin,
                    &self.state.view,
                    mode,
                    &self.state.scales,
                    &self.palette,
                );
            }
        }

        debug!(
            "frame rendered, mode {:?}, zoom {}, cost {:?}",
            self.state.mode,
            self.state.view.zoom,
            t_start.elapsed()
        );
        Ok(())
    }

    /// Intensity histogram of `src` under the active model.
    pub fn histogram(&self, src: &impl ConstImage) -> [u32; histogram::BUCKETS] {
        histogram::compute(src, self.state.mode, &self.state.scales)
    }
}
