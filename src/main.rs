use anyhow::bail;
use clap::Parser;
use log::info;
use std::path::PathBuf;

use chromaview::image::*;
use chromaview::imgproc::colorspace::ScaleChannel;
use chromaview::imgproc::{histogram, ColorMode};
use chromaview::pipeline::Pipeline;
use chromaview::state::ViewState;

use image as imagex; // external, for IO

#[derive(Parser, Debug)]
struct Args {
    image_file: PathBuf,

    #[arg(short, long, default_value = "out.png")]
    output: PathBuf,

    #[arg(short, long, value_enum, default_value = "argb")]
    mode: ColorMode,

    #[arg(long, default_value_t = 1120)]
    canvas_width: i32,

    #[arg(long, default_value_t = 630)]
    canvas_height: i32,

    #[arg(long, default_value_t = 10)]
    origin_x: i32,

    #[arg(long, default_value_t = 10)]
    origin_y: i32,

    /// Number of +0.1 zoom steps to apply (negative for -0.1 steps)
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    zoom_steps: i32,

    /// Number of +10px horizontal pan steps (negative pans left)
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pan_x_steps: i32,

    /// Number of +10px vertical pan steps (negative pans up)
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pan_y_steps: i32,

    /// Apply a +0.1 step to a scale channel (repeatable)
    #[arg(long, value_enum)]
    scale_up: Vec<ScaleChannel>,

    /// Apply a -0.1 step to a scale channel (repeatable)
    #[arg(long, value_enum)]
    scale_down: Vec<ScaleChannel>,

    /// Compute the histogram and print a summary
    #[arg(long, default_value_t = false)]
    histogram: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp_micros()
        .init();
    let args = Args::parse();

    if args.canvas_width <= 0 || args.canvas_height <= 0 {
        bail!(
            "invalid canvas size {}x{}",
            args.canvas_width,
            args.canvas_height
        );
    }

    let img_x = imagex::io::Reader::open(&args.image_file)?.decode()?.to_rgba8();

    // convert to our own packed-ARGB image
    let mut img = ImageBuffer::new(img_x.width() as i32, img_x.height() as i32);
    for y in 0..img.height() {
        for x in 0..img.width() {
            let p = img_x.get_pixel(x as u32, y as u32);
            img.put_pixel(x, y, pack_argb(p[3], p[0], p[1], p[2]));
        }
    }
    info!(
        "loaded {} ({}x{})",
        args.image_file.display(),
        img.width(),
        img.height()
    );

    let mut state = ViewState::default();
    state.select_mode(args.mode);
    for _ in 0..args.zoom_steps.abs() {
        if args.zoom_steps > 0 {
            state.zoom_in();
        } else {
            state.zoom_out();
        }
    }
    for _ in 0..args.pan_x_steps.abs() {
        if args.pan_x_steps > 0 {
            state.pan_right();
        } else {
            state.pan_left();
        }
    }
    for _ in 0..args.pan_y_steps.abs() {
        if args.pan_y_steps > 0 {
            state.pan_down();
        } else {
            state.pan_up();
        }
    }
    for channel in &args.scale_up {
        state.scale_up(*channel);
    }
    for channel in &args.scale_down {
        state.scale_down(*channel);
    }
    if args.histogram {
        state.toggle_histogram();
    }

    let pipeline = Pipeline::new(state);
    let mut canvas = ImageBuffer::new(args.canvas_width, args.canvas_height);
    pipeline.render_frame(&mut canvas, &img, (args.origin_x, args.origin_y).into())?;

    if pipeline.state.show_histogram {
        let hist = pipeline.histogram(&img);
        for (i, chunk) in hist.chunks(32).enumerate() {
            println!(
                "intensity {:3}..={:3}: {}",
                i * 32,
                i * 32 + 31,
                chunk.iter().sum::<u32>()
            );
        }
        println!("max bucket count: {}", histogram::max_count(&hist));
    }

    let mut out = imagex::RgbaImage::new(canvas.width() as u32, canvas.height() as u32);
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let p = canvas.pixel(x, y);
            out.put_pixel(
                x as u32,
                y as u32,
                imagex::Rgba([red(p), green(p), blue(p), alpha(p)]),
            );
        }
    }
    out.save(&args.output)?;
    info!("wrote {}", args.output.display());

    Ok(())
}
