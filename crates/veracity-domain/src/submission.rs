//! Claim submission - the input unit of the verification pipeline

/// A claim submitted for verification.
///
/// At least one of `claim_text` / `image_data` must carry content for the
/// submission to be valid. Empty strings count as absent - a caller that
/// sends `claim: ""` has submitted nothing.
#[derive(Debug, Clone, Default)]
pub struct ClaimSubmission {
    /// Textual claim to verify
    pub claim_text: Option<String>,

    /// Image payload as an opaque base64 string, passed through to the
    /// inference service untouched
    pub image_data: Option<String>,

    /// Optional identity of the requester, used to link the stored record
    pub requester_id: Option<String>,
}

impl ClaimSubmission {
    /// Create a text-only submission
    pub fn from_text(claim: impl Into<String>) -> Self {
        Self {
            claim_text: Some(claim.into()),
            ..Default::default()
        }
    }

    /// Whether the submission carries any content at all
    pub fn has_payload(&self) -> bool {
        let has_text = self.claim_text.as_deref().is_some_and(|s| !s.is_empty());
        let has_image = self.image_data.as_deref().is_some_and(|s| !s.is_empty());
        has_text || has_image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_submission_has_no_payload() {
        assert!(!ClaimSubmission::default().has_payload());
    }

    #[test]
    fn test_empty_string_counts_as_absent() {
        let submission = ClaimSubmission {
            claim_text: Some(String::new()),
            image_data: None,
            requester_id: None,
        };
        assert!(!submission.has_payload());
    }

    #[test]
    fn test_text_only_has_payload() {
        assert!(ClaimSubmission::from_text("The sky is green").has_payload());
    }

    #[test]
    fn test_image_only_has_payload() {
        let submission = ClaimSubmission {
            claim_text: None,
            image_data: Some("aGVsbG8=".to_string()),
            requester_id: None,
        };
        assert!(submission.has_payload());
    }
}
