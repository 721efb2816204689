use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};
use ndarray::Array2;

use crate::error::{FingercapError, Result};
use crate::frame::Frame;

/// Load an image file as a grayscale plane with values in [0, 1].
pub fn load_luma(path: &Path) -> Result<Array2<f32>> {
    let img = image::open(path).map_err(|e| FingercapError::Decode(e.to_string()))?;
    let gray = img.to_luma8();
    let (w, h) = gray.dimensions();
    let mut data = Array2::<f32>::zeros((h as usize, w as usize));

    for row in 0..h as usize {
        for col in 0..w as usize {
            let pixel = gray.get_pixel(col as u32, row as u32);
            data[[row, col]] = pixel.0[0] as f32 / 255.0;
        }
    }

    Ok(data)
}

/// Decode an image file into a camera-style luma frame.
pub fn load_frame(path: &Path) -> Result<Frame> {
    let img = image::open(path).map_err(|e| FingercapError::Decode(e.to_string()))?;
    let gray = img.to_luma8();
    let (w, h) = gray.dimensions();
    Ok(Frame::new(w, h, gray.into_raw()))
}

/// Save a grayscale plane as 8-bit JPEG.
pub fn save_jpeg(data: &Array2<f32>, path: &Path) -> Result<()> {
    to_gray_image(data)
        .save_with_format(path, ImageFormat::Jpeg)
        .map_err(|e| FingercapError::Encode(e.to_string()))?;
    Ok(())
}

/// Save a grayscale plane as 8-bit PNG.
pub fn save_png(data: &Array2<f32>, path: &Path) -> Result<()> {
    to_gray_image(data)
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| FingercapError::Encode(e.to_string()))?;
    Ok(())
}

fn to_gray_image(data: &Array2<f32>) -> GrayImage {
    let (h, w) = data.dim();
    let mut img = GrayImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let val = (data[[row, col]].clamp(0.0, 1.0) * 255.0) as u8;
            img.put_pixel(col as u32, row as u32, Luma([val]));
        }
    }
    img
}
