use std::path::PathBuf;

/// A single camera preview frame: one plane of 8-bit luma.
/// Created per camera tick and discarded after scoring, never retained.
#[derive(Clone, Debug)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    /// Row-major luma bytes, length width * height.
    pub luma: Vec<u8>,
}

impl Frame {
    pub fn new(width: u32, height: u32, luma: Vec<u8>) -> Self {
        Self { width, height, luma }
    }

    /// Whether the luma plane matches the declared dimensions.
    pub fn is_well_formed(&self) -> bool {
        self.luma.len() == self.width as usize * self.height as usize
    }
}

/// Processing stage of an on-disk capture artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Captured,
    Enhanced,
    Cropped,
}

/// One link in the capture -> enhance -> crop chain.
///
/// Each stage writes a new file instead of editing in place, so earlier
/// stages stay available for retry until the session ends.
#[derive(Clone, Debug)]
pub struct CapturedArtifact {
    pub path: PathBuf,
    pub stage: Stage,
}
