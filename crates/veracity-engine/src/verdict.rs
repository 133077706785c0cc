//! Keyword-set classification of extracted verdict phrases

use veracity_domain::VerdictStatus;

/// Keyword sets checked in order against the upper-cased verdict phrase.
///
/// The negative set is checked before the positive set so that mixed
/// phrases like `VERIFIED FALSE` classify as contradicted. Extending a
/// set is a table edit; the control flow below never changes.
const VERDICT_CLASSES: &[(VerdictStatus, &[&str])] = &[
    (
        VerdictStatus::Contradicted,
        &[
            "CONTRADICTED",
            "FALSE",
            "FAKE",
            "DEBUNKED",
            "UNSUPPORTED",
            "NOT FACTUAL",
            "INCORRECT",
        ],
    ),
    (
        VerdictStatus::Verified,
        &[
            "VERIFIED",
            "SUPPORTED",
            "TRUE",
            "PARTIALLY TRUE",
            "FACTUAL",
            "CORRECT",
        ],
    ),
];

/// Classify an upper-cased, trimmed verdict phrase by substring
/// containment. Returns `Inconclusive` when no keyword matches.
pub(crate) fn classify_verdict(phrase: &str) -> VerdictStatus {
    for (status, keywords) in VERDICT_CLASSES {
        if keywords.iter().any(|keyword| phrase.contains(keyword)) {
            return *status;
        }
    }
    VerdictStatus::Inconclusive
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_keywords() {
        for phrase in [
            "CONTRADICTED",
            "FALSE",
            "FAKE",
            "DEBUNKED",
            "UNSUPPORTED",
            "NOT FACTUAL",
            "INCORRECT",
        ] {
            assert_eq!(
                classify_verdict(phrase),
                VerdictStatus::Contradicted,
                "phrase: {}",
                phrase
            );
        }
    }

    #[test]
    fn test_positive_keywords() {
        for phrase in [
            "VERIFIED",
            "SUPPORTED",
            "TRUE",
            "PARTIALLY TRUE",
            "FACTUAL",
            "CORRECT",
        ] {
            assert_eq!(
                classify_verdict(phrase),
                VerdictStatus::Verified,
                "phrase: {}",
                phrase
            );
        }
    }

    #[test]
    fn test_negative_takes_precedence_over_positive() {
        assert_eq!(
            classify_verdict("VERIFIED FALSE"),
            VerdictStatus::Contradicted
        );
        assert_eq!(
            classify_verdict("TRUE BUT DEBUNKED"),
            VerdictStatus::Contradicted
        );
        assert_eq!(
            classify_verdict("NOT FACTUAL"),
            VerdictStatus::Contradicted
        );
    }

    #[test]
    fn test_unrecognized_phrase_is_inconclusive() {
        assert_eq!(classify_verdict("UNCLEAR"), VerdictStatus::Inconclusive);
        assert_eq!(classify_verdict(""), VerdictStatus::Inconclusive);
    }
}
