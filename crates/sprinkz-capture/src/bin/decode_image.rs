//! Label decode check - run with: cargo run -p sprinkz-capture --bin decode_image -- [IMAGE]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sprinkz_config::capture::CaptureConfig;
use sprinkz_core::{DecodeResult, Frame};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Decode the coordinate label from a screenshot or a live window")]
struct Args {
    /// Screenshot to decode; the target window is captured when omitted
    image: Option<PathBuf>,

    /// Title fragment of the window to capture
    #[arg(long, default_value = "Minecraft")]
    window: String,

    /// Capture the window with this ID (see --list-windows)
    #[arg(long, conflicts_with = "image")]
    window_id: Option<u32>,

    /// Render VALUES (e.g. "100, 64, -32") as a synthetic label and decode that
    #[arg(long, value_name = "VALUES", conflicts_with = "image")]
    synthetic: Option<String>,

    /// Scale of the synthetic label
    #[arg(long, default_value_t = 2)]
    scale: usize,

    /// Print the visible windows and exit
    #[arg(long)]
    list_windows: bool,
}

/// Frame large enough for the label to fall inside the decoder's search region
fn synthetic_frame(values: &str, scale: usize) -> Frame {
    let scale = scale.max(1);
    let label_width = 10 + (44 + 6 * values.chars().count()) * scale;
    let label_height = 40 + 7 * scale;
    let width = (label_width * 3).max(900);
    let height = (label_height * 3).max(300);
    sprinkz_core::synth::label_frame(width, height, scale, values)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let args = Args::parse();

    if args.list_windows {
        for (id, title) in sprinkz_capture::list_windows()? {
            println!("{id:>10}  {title}");
        }
        return Ok(());
    }

    let start = std::time::Instant::now();
    let frame = match (&args.image, &args.synthetic, args.window_id) {
        (_, Some(values), _) => synthetic_frame(values, args.scale),
        (None, None, Some(id)) => sprinkz_capture::capture_window(id)?,
        (Some(path), None, _) => {
            let image = image::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?
                .to_rgba8();
            Frame::from_rgba8(image.width(), image.height(), image.as_raw())?
        }
        (None, None, None) => {
            let config = CaptureConfig {
                window_titles: vec![args.window.clone()],
                ..Default::default()
            };
            sprinkz_capture::capture_target(&config)?
        }
    };
    tracing::debug!(
        "Loaded {}x{} frame in {:?}",
        frame.width(),
        frame.height(),
        start.elapsed()
    );

    let start = std::time::Instant::now();
    match sprinkz_core::decode(&frame.view()) {
        DecodeResult::Found(position) => {
            let reading = sprinkz_core::reading_for(position);
            tracing::debug!("Decoded in {:?}", start.elapsed());
            println!("Player: {}", reading.position);
            println!("4x4: {}", reading.anchor);
            println!("Dist: {} blocks", reading.distance_blocks());
        }
        DecodeResult::NotFound => {
            println!("No coordinates found");
        }
    }

    Ok(())
}
