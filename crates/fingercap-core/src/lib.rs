//! Core pipeline for mobile fingerprint capture: live clarity scoring and
//! gating over a preview stream, still enhancement, interactive cropping,
//! and the client for the remote matching service.

pub mod capture;
pub mod consts;
pub mod editor;
pub mod enhance;
pub mod error;
pub mod frame;
pub mod io;
pub mod quality;
pub mod service;
pub mod task;
