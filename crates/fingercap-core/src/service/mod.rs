//! HTTP client for the remote fingerprint matching service.

pub mod client;
pub mod protocol;

pub use client::ServiceClient;
pub use protocol::{Message, UserDetail, UserSummary, VerifyOutcome, VerifyStatus};
