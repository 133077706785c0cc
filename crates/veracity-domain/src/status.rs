//! Verdict status - the classified truth value of a claim

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classified truth status of a verified claim.
///
/// `Inconclusive` is the fallback whenever the inference report does not
/// unambiguously match a recognized verdict pattern; it is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerdictStatus {
    /// The claim is supported by the evidence in the report
    Verified,

    /// The claim is contradicted by the evidence in the report
    Contradicted,

    /// No recognizable verdict could be extracted
    Inconclusive,
}

impl VerdictStatus {
    /// Canonical wire representation (`VERIFIED`, `CONTRADICTED`, `INCONCLUSIVE`)
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictStatus::Verified => "VERIFIED",
            VerdictStatus::Contradicted => "CONTRADICTED",
            VerdictStatus::Inconclusive => "INCONCLUSIVE",
        }
    }
}

impl Default for VerdictStatus {
    fn default() -> Self {
        VerdictStatus::Inconclusive
    }
}

impl fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
