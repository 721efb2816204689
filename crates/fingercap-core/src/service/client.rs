use std::path::Path;
use std::thread;
use std::time::Duration;

use reqwest::blocking::{multipart, Client};
use tracing::{debug, warn};

use crate::consts::{VERIFY_BACKOFF_MS, VERIFY_MAX_ATTEMPTS};
use crate::error::{FingercapError, Result};

use super::protocol::{Message, UserDetail, UserSummary, VerifyOutcome};

fn net(e: reqwest::Error) -> FingercapError {
    FingercapError::Network(e.to_string())
}

/// Blocking client for the matching service.
///
/// Verification retries on transport failure with a fixed backoff;
/// registration and the user management calls do not retry, since
/// repeating a registration could enroll the same print twice.
pub struct ServiceClient {
    base: String,
    http: Client,
}

impl ServiceClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(net)?;
        Ok(Self {
            base: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Enroll a fingerprint image for a new user.
    pub fn register(
        &self,
        image: &Path,
        user_id: &str,
        username: &str,
        phone: &str,
    ) -> Result<Message> {
        let form = multipart::Form::new()
            .file("file", image)?
            .text("user_id", user_id.to_string())
            .text("username", username.to_string())
            .text("phone", phone.to_string());
        let resp = self
            .http
            .post(self.url("/register"))
            .multipart(form)
            .send()
            .map_err(net)?;
        let status = resp.status();
        let body: Message = resp.json().unwrap_or_default();
        if status.is_success() {
            Ok(body)
        } else {
            Err(FingercapError::Network(format!(
                "registration rejected ({status}): {}",
                body.message
            )))
        }
    }

    /// Verify a fingerprint image against an enrolled user.
    ///
    /// Transport failures are retried up to the attempt limit with a fixed
    /// backoff between attempts. A response from the server, whatever its
    /// status code, is a semantic outcome and ends the loop.
    pub fn verify(&self, image: &Path, user_id: &str) -> Result<VerifyOutcome> {
        let mut attempt = 1u32;
        loop {
            match self.try_verify(image, user_id) {
                Ok(outcome) => return Ok(outcome),
                Err(e) if attempt < VERIFY_MAX_ATTEMPTS => {
                    warn!(attempt, error = %e, "verification attempt failed, retrying");
                    thread::sleep(Duration::from_millis(VERIFY_BACKOFF_MS));
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn try_verify(&self, image: &Path, user_id: &str) -> Result<VerifyOutcome> {
        let form = multipart::Form::new()
            .file("file", image)?
            .text("user_id", user_id.to_string());
        let resp = self
            .http
            .post(self.url("/verify"))
            .multipart(form)
            .send()
            .map_err(net)?;
        let status = resp.status();
        let text = resp.text().map_err(net)?;
        debug!(%status, "verify response received");
        // Non-2xx codes carry meaningful bodies (no_match, blurry, ...);
        // an unparseable body falls back to the all-default outcome.
        Ok(serde_json::from_str(&text).unwrap_or_default())
    }

    /// List all enrolled users.
    pub fn users(&self) -> Result<Vec<UserSummary>> {
        self.http
            .get(self.url("/users"))
            .send()
            .map_err(net)?
            .error_for_status()
            .map_err(net)?
            .json()
            .map_err(net)
    }

    /// Fetch the full record for one user.
    pub fn user(&self, user_id: &str) -> Result<UserDetail> {
        self.http
            .get(self.url(&format!("/user/{user_id}")))
            .send()
            .map_err(net)?
            .error_for_status()
            .map_err(net)?
            .json()
            .map_err(net)
    }

    /// Update a user's name and phone number.
    pub fn update(&self, user_id: &str, username: &str, phone: &str) -> Result<Message> {
        self.http
            .put(self.url(&format!("/update/{user_id}")))
            .json(&serde_json::json!({ "username": username, "phone": phone }))
            .send()
            .map_err(net)?
            .error_for_status()
            .map_err(net)?
            .json()
            .map_err(net)
    }

    /// Remove a user and their enrolled fingerprint.
    pub fn delete(&self, user_id: &str) -> Result<Message> {
        self.http
            .delete(self.url(&format!("/delete/{user_id}")))
            .send()
            .map_err(net)?
            .error_for_status()
            .map_err(net)?
            .json()
            .map_err(net)
    }
}
