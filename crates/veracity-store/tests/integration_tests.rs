//! Integration tests for the SQLite record store

use tempfile::TempDir;
use veracity_domain::traits::{RecordQuery, RecordStore};
use veracity_domain::{Explanation, SourceCitation, VerdictStatus, VerificationRecord};
use veracity_store::SqliteStore;

fn sample_record(timestamp: &str, claim: &str) -> VerificationRecord {
    VerificationRecord {
        status: VerdictStatus::Verified,
        confidence: "87%".to_string(),
        timestamp: timestamp.to_string(),
        sources: vec![SourceCitation {
            source: "AP".to_string(),
            title: "Wire report".to_string(),
            date: "Recent".to_string(),
            url: None,
        }],
        explanation: Explanation {
            summary: "AI Verification Complete".to_string(),
            points: vec!["Verdict: VERIFIED\nConfidence: 87%".to_string()],
        },
        claim_text: claim.to_string(),
        requester_id: Some("user-1".to_string()),
    }
}

#[test]
fn test_records_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("veracity.db");

    {
        let mut store = SqliteStore::new(&db_path).unwrap();
        store
            .create(&sample_record("2024-05-01T12:00:00.000Z", "durable claim"))
            .unwrap();
    }

    let store = SqliteStore::new(&db_path).unwrap();
    let found = store
        .find(&RecordQuery {
            requester_id: Some("user-1".to_string()),
            limit: None,
        })
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].record.claim_text, "durable claim");
    assert_eq!(found[0].record.status, VerdictStatus::Verified);
    assert_eq!(found[0].record.sources[0].source, "AP");
}

#[test]
fn test_append_only_accumulation() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("veracity.db");
    let mut store = SqliteStore::new(&db_path).unwrap();

    for day in 1..=3 {
        let timestamp = format!("2024-05-0{}T00:00:00.000Z", day);
        store.create(&sample_record(&timestamp, "claim")).unwrap();
    }

    let found = store
        .find(&RecordQuery {
            requester_id: Some("user-1".to_string()),
            limit: None,
        })
        .unwrap();

    assert_eq!(found.len(), 3);
    // Most recent first
    assert_eq!(found[0].created_at, "2024-05-03T00:00:00.000Z");
    assert_eq!(found[2].created_at, "2024-05-01T00:00:00.000Z");
}

#[test]
fn test_distinct_ids_assigned() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let id1 = store
        .create(&sample_record("2024-05-01T00:00:00.000Z", "claim"))
        .unwrap();
    let id2 = store
        .create(&sample_record("2024-05-01T00:00:00.000Z", "claim"))
        .unwrap();

    assert_ne!(id1, id2);
}
