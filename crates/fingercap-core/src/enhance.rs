use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

use ndarray::Array2;
use rayon::prelude::*;
use tracing::info;

use crate::consts::{
    CONTRAST_FACTOR, ENHANCED_FILENAME, PARALLEL_PIXEL_THRESHOLD, SHARPEN_KERNEL,
};
use crate::error::Result;
use crate::io::image_io::{load_luma, save_jpeg};
use crate::task::TaskRunner;

/// Apply the fixed 3x3 sharpening convolution (edge/ridge emphasis).
///
/// Borders sample the nearest edge pixel; output values are clamped to
/// [0, 1]. The kernel sums to 1, so a flat field passes through unchanged.
pub fn sharpen_3x3(data: &Array2<f32>) -> Array2<f32> {
    let (h, w) = data.dim();
    if h == 0 || w == 0 {
        return data.clone();
    }

    let sample = |r: isize, c: isize| -> f32 {
        let r = r.clamp(0, h as isize - 1) as usize;
        let c = c.clamp(0, w as isize - 1) as usize;
        data[[r, c]]
    };

    let fill_row = |(row, out_row): (usize, &mut [f32])| {
        for col in 0..w {
            let mut acc = 0.0f32;
            for kr in 0..3usize {
                for kc in 0..3usize {
                    let v = sample(
                        row as isize + kr as isize - 1,
                        col as isize + kc as isize - 1,
                    );
                    acc += v * SHARPEN_KERNEL[kr * 3 + kc];
                }
            }
            out_row[col] = acc.clamp(0.0, 1.0);
        }
    };

    let mut out = vec![0.0f32; h * w];
    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        out.par_chunks_mut(w).enumerate().for_each(fill_row);
    } else {
        out.chunks_mut(w).enumerate().for_each(fill_row);
    }

    Array2::from_shape_vec((h, w), out).expect("row buffer matches dimensions")
}

/// Adjust contrast around the 0.5 midpoint: out = (in - 0.5) * factor + 0.5,
/// clamped to [0, 1]. The same formula is applied to every pixel.
pub fn adjust_contrast(data: &Array2<f32>, factor: f32) -> Array2<f32> {
    data.mapv(|v| ((v - 0.5) * factor + 0.5).clamp(0.0, 1.0))
}

/// Full enhancement stage: sharpen, then contrast-boost.
pub fn enhance_image(data: &Array2<f32>) -> Array2<f32> {
    enhance_image_with(data, CONTRAST_FACTOR)
}

pub fn enhance_image_with(data: &Array2<f32>, contrast: f32) -> Array2<f32> {
    adjust_contrast(&sharpen_3x3(data), contrast)
}

/// Enhance the image at `input` and write the result to
/// `<work_dir>/enhanced_fingerprint.jpg`, overwriting any previous
/// enhancement for the session. The input file is never modified.
pub fn enhance_file(input: &Path, work_dir: &Path) -> Result<PathBuf> {
    enhance_file_with(input, work_dir, CONTRAST_FACTOR)
}

pub fn enhance_file_with(input: &Path, work_dir: &Path, contrast: f32) -> Result<PathBuf> {
    let data = load_luma(input)?;
    let enhanced = enhance_image_with(&data, contrast);
    let output = work_dir.join(ENHANCED_FILENAME);
    save_jpeg(&enhanced, &output)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        "enhancement complete"
    );
    Ok(output)
}

/// Run the enhancement stage off the caller's thread and deliver the result
/// over `done`. The interactive context must never stall on a convolution.
pub fn enhance_in_background(
    runner: &dyn TaskRunner,
    input: PathBuf,
    work_dir: PathBuf,
    contrast: f32,
    done: Sender<Result<PathBuf>>,
) {
    runner.run(Box::new(move || {
        let _ = done.send(enhance_file_with(&input, &work_dir, contrast));
    }));
}
