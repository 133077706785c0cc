//! Parse free-text inference reports into structured verdict fragments
//!
//! The parser is pure and total: the worst input yields a fragment with
//! every field at its default (`INCONCLUSIVE`, `"N/A"`, no sources). It
//! works in two stages - line extraction isolates the verdict,
//! confidence, and sources sections, then the keyword table in
//! [`crate::verdict`] classifies the verdict phrase.

use crate::verdict::classify_verdict;
use regex::Regex;
use veracity_domain::{Explanation, SourceCitation, VerdictStatus};

/// Confidence value reported when the report carries none
const DEFAULT_CONFIDENCE: &str = "N/A";

/// Source label for citation lines that match no known format
const FALLBACK_SOURCE_LABEL: &str = "External Source";

/// Citation lines reduced below this many characters are dropped as noise
const MIN_CITATION_LEN: usize = 5;

/// The structured portion of a verification record produced by parsing,
/// before the orchestrator stamps timestamp and claim metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFragment {
    /// Classified verdict
    pub status: VerdictStatus,

    /// Confidence text captured verbatim, or `"N/A"`
    pub confidence: String,

    /// Citations extracted from the sources section
    pub sources: Vec<SourceCitation>,

    /// Explanation echoing the full raw report
    pub explanation: Explanation,
}

/// Deterministic parser for inference reports.
///
/// The grammar is compiled once at construction; `parse` holds no state
/// and two calls on the same text yield identical fragments.
pub struct ReportParser {
    verdict_line: Regex,
    confidence_line: Regex,
    sources_marker: Regex,
    citation_line: Regex,
    ordinal_prefix: Regex,
}

impl ReportParser {
    /// Compile the report grammar
    pub fn new() -> Self {
        Self {
            // Alphabetic phrase on the same line as the marker
            verdict_line: Regex::new(r"(?i)Verdict:[ \t]*([A-Za-z][A-Za-z \t]*)").unwrap(),
            confidence_line: Regex::new(r"(?i)Confidence:[ \t]*(.+)").unwrap(),
            sources_marker: Regex::new(r"(?i)Sources:").unwrap(),
            // "1. Source: Title (Date)" with optional quotes and date
            citation_line: Regex::new(r#"^\d+\.\s*([^:]+):\s*"?([^"(]+)"?\s*(?:\(([^)]+)\))?"#)
                .unwrap(),
            ordinal_prefix: Regex::new(r"^\d+\.\s*").unwrap(),
        }
    }

    /// Parse a raw report into a verdict fragment.
    ///
    /// Never fails; unrecognized text degrades to default field values.
    pub fn parse(&self, report: &str) -> ReportFragment {
        let status = self
            .verdict_line
            .captures(report)
            .map(|caps| classify_verdict(caps[1].to_uppercase().trim()))
            .unwrap_or_default();

        let confidence = self
            .confidence_line
            .captures(report)
            .map(|caps| caps[1].trim().to_string())
            .unwrap_or_else(|| DEFAULT_CONFIDENCE.to_string());

        let sources = self
            .sources_marker
            .splitn(report, 2)
            .nth(1)
            .map(|tail| self.parse_sources(tail))
            .unwrap_or_default();

        ReportFragment {
            status,
            confidence,
            sources,
            explanation: Explanation {
                summary: "AI Verification Complete".to_string(),
                points: vec![report.to_string()],
            },
        }
    }

    /// Parse the text after the `Sources:` marker, one citation per
    /// non-blank line. Lines that reduce to noise are omitted, so the
    /// output may be shorter than the input.
    fn parse_sources(&self, tail: &str) -> Vec<SourceCitation> {
        tail.lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| self.parse_citation(line))
            .collect()
    }

    fn parse_citation(&self, line: &str) -> Option<SourceCitation> {
        // Primary pattern: ordinal, source label, title, optional date
        if let Some(caps) = self.citation_line.captures(line) {
            return Some(SourceCitation {
                source: caps[1].trim().to_string(),
                title: caps[2].trim().to_string(),
                date: caps
                    .get(3)
                    .map(|m| m.as_str().trim().to_string())
                    .unwrap_or_else(|| "Recent".to_string()),
                url: None,
            });
        }

        // Fallback for less structured lines
        let stripped = self.ordinal_prefix.replace(line, "");
        let cleaned = stripped.trim();
        if cleaned.chars().count() < MIN_CITATION_LEN {
            return None;
        }

        Some(SourceCitation {
            source: FALLBACK_SOURCE_LABEL.to_string(),
            title: cleaned.to_string(),
            date: "N/A".to_string(),
            url: None,
        })
    }
}

impl Default for ReportParser {
    fn default() -> Self {
        Self::new()
    }
}
