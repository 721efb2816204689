use serde::{Deserialize, Serialize};

/// Outcome category reported by the matching service.
///
/// The aliases absorb the legacy wire spellings (`match_found`,
/// `no_match`) still emitted by deployed servers. Servers may also grow
/// new categories, so anything unrecognized decodes to
/// [`VerifyStatus::Unknown`] instead of failing the whole response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyStatus {
    #[serde(rename = "ok", alias = "match_found")]
    Ok,
    #[serde(alias = "no_match")]
    NoUser,
    Blurry,
    NoFingerprint,
    LowQuality,
    Spoof,
    Anomaly,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Body of a verification response. All fields default, so partial or
/// unfamiliar bodies still decode to something usable.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct VerifyOutcome {
    #[serde(rename = "match")]
    pub matched: bool,
    pub status: VerifyStatus,
    pub message: String,
    pub username: Option<String>,
    pub accuracy: Option<f64>,
    pub orb_score: Option<f64>,
    pub minutiae_score: Option<f64>,
}

/// One row of the user listing.
#[derive(Clone, Debug, Deserialize)]
pub struct UserSummary {
    pub user_id: String,
    pub username: String,
}

/// Full record for a single user.
#[derive(Clone, Debug, Deserialize)]
pub struct UserDetail {
    pub user_id: String,
    pub username: String,
    pub phone: String,
}

/// Generic `{"message": ...}` body used by registration and the user
/// management endpoints.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Message {
    pub message: String,
}
