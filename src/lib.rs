pub mod image;
pub mod imgproc;
pub mod palette;
pub mod pipeline;
pub mod state;
