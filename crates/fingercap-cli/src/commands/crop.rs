use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use fingercap_core::editor::rect::CropRect;
use fingercap_core::editor::CropEditor;

#[derive(Args)]
pub struct CropArgs {
    /// Input image file
    pub file: PathBuf,

    /// Display viewport width the rect coordinates refer to
    #[arg(long, default_value = "360")]
    pub view_width: f32,

    /// Display viewport height the rect coordinates refer to
    #[arg(long, default_value = "640")]
    pub view_height: f32,

    /// Crop rect left edge in display units (defaults to centered square)
    #[arg(long)]
    pub left: Option<f32>,

    /// Crop rect top edge in display units
    #[arg(long)]
    pub top: Option<f32>,

    /// Crop rect width in display units
    #[arg(long)]
    pub width: Option<f32>,

    /// Crop rect height in display units
    #[arg(long)]
    pub height: Option<f32>,

    /// Quarter turns clockwise before cropping
    #[arg(long, default_value = "0")]
    pub rotate: u8,

    /// Directory for the cropped output
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,
}

pub fn run(args: &CropArgs) -> Result<()> {
    let mut editor = CropEditor::load(&args.file, args.view_width, args.view_height)?;
    for _ in 0..args.rotate % 4 {
        editor.rotate();
    }

    if let (Some(left), Some(top), Some(width), Some(height)) =
        (args.left, args.top, args.width, args.height)
    {
        editor.set_rect(CropRect {
            left,
            top,
            width,
            height,
        });
    }

    let region = editor.finalize();
    let output = editor.finalize_to_file(&args.out_dir)?;

    println!(
        "Cropped {}x{} at ({}, {}) from source",
        region.width, region.height, region.x, region.y
    );
    println!("Cropped image written to {}", output.display());
    Ok(())
}
