use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::style;
use fingercap_core::consts::CAPTURE_THRESHOLD;
use fingercap_core::io::image_io::load_frame;
use fingercap_core::quality::gate::is_capture_enabled;
use fingercap_core::quality::variance::{clarity_score, roi_bounds};

#[derive(Args)]
pub struct QualityArgs {
    /// Input image file
    pub file: PathBuf,

    /// Capture threshold to score against
    #[arg(long, default_value_t = CAPTURE_THRESHOLD)]
    pub threshold: f64,
}

pub fn run(args: &QualityArgs) -> Result<()> {
    let frame = load_frame(&args.file)?;
    let (x, y, w, h) = roi_bounds(frame.width, frame.height);
    let score = clarity_score(&frame);

    println!("File:       {}", args.file.display());
    println!("Dimensions: {}x{}", frame.width, frame.height);
    println!("ROI:        {}x{} at ({}, {})", w, h, x, y);
    println!("Score:      {:.1}", score);
    println!("Threshold:  {:.1}", args.threshold);

    if is_capture_enabled(score, args.threshold) {
        println!("{}", style("Capture enabled: image is sharp enough").green());
    } else {
        println!("{}", style("Capture blocked: image is too blurry").red());
    }

    Ok(())
}
