#![allow(dead_code)]

use std::path::Path;
use std::sync::Mutex;

use image::{GrayImage, Luma};

use fingercap_core::frame::Frame;
use fingercap_core::task::TaskRunner;

/// Build a frame filled with a single luma value.
pub fn flat_frame(width: u32, height: u32, value: u8) -> Frame {
    Frame::new(width, height, vec![value; (width * height) as usize])
}

/// Build a maximally textured frame: alternating 0/255 pixels.
pub fn checkerboard_frame(width: u32, height: u32) -> Frame {
    let mut luma = Vec::with_capacity((width * height) as usize);
    for row in 0..height {
        for col in 0..width {
            luma.push(if (row + col) % 2 == 0 { 255 } else { 0 });
        }
    }
    Frame::new(width, height, luma)
}

/// Write a grayscale PNG whose pixel values come from `f(col, row)`.
pub fn write_gray_png(path: &Path, width: u32, height: u32, f: impl Fn(u32, u32) -> u8) {
    let mut img = GrayImage::new(width, height);
    for row in 0..height {
        for col in 0..width {
            img.put_pixel(col, row, Luma([f(col, row)]));
        }
    }
    img.save(path).unwrap();
}

/// Task runner that queues jobs until the test releases them, making
/// in-flight states observable.
pub struct ManualRunner {
    jobs: Mutex<Vec<Box<dyn FnOnce() + Send>>>,
}

impl ManualRunner {
    pub fn new() -> Self {
        Self {
            jobs: Mutex::new(Vec::new()),
        }
    }

    pub fn pending(&self) -> usize {
        self.jobs.lock().unwrap().len()
    }

    /// Run every queued job in submission order.
    pub fn run_all(&self) {
        let jobs: Vec<_> = self.jobs.lock().unwrap().drain(..).collect();
        for job in jobs {
            job();
        }
    }
}

impl TaskRunner for ManualRunner {
    fn run(&self, job: Box<dyn FnOnce() + Send>) {
        self.jobs.lock().unwrap().push(job);
    }
}
