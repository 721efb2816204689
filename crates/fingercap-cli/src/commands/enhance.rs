use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use fingercap_core::consts::CONTRAST_FACTOR;
use fingercap_core::enhance::enhance_file_with;

#[derive(Args)]
pub struct EnhanceArgs {
    /// Input image file
    pub file: PathBuf,

    /// Directory for the enhanced output
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Contrast factor applied after sharpening
    #[arg(long, default_value_t = CONTRAST_FACTOR)]
    pub contrast: f32,
}

pub fn run(args: &EnhanceArgs) -> Result<()> {
    let output = enhance_file_with(&args.file, &args.out_dir, args.contrast)?;
    println!("Enhanced image written to {}", output.display());
    Ok(())
}
