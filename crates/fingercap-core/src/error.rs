use thiserror::Error;

#[derive(Error, Debug)]
pub enum FingercapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not decode image: {0}")]
    Decode(String),

    #[error("Could not encode image: {0}")]
    Encode(String),

    #[error("Crop failed: {0}")]
    Crop(String),

    #[error("Capture device error: {0}")]
    CaptureDevice(String),

    #[error("Clarity score {score:.1} is below the capture threshold {threshold:.1}")]
    GateClosed { score: f64, threshold: f64 },

    #[error("Network error: {0}")]
    Network(String),
}

pub type Result<T> = std::result::Result<T, FingercapError>;
