use crate::model::{ReconSummary, UnmatchBucket, UnmatchedRecord};

/// Marker substring for seeded QA candidates that never exist in production.
const TEST_CANDIDATE_MARKER: &str = "Test Candidate";

/// Salesforce record ID key prefix for the legacy candidate object. A
/// candidate "name" starting with this is an ID that leaked into the name
/// field upstream.
const ID_PLACEHOLDER_PREFIX: &str = "a02";

/// Classify an unmatched candidate name into a bucket.
///
/// Checks run in a fixed order (test candidate, then ID placeholder, then
/// other) so the buckets form a true partition even though the predicates
/// are not mutually exclusive.
pub fn classify(candidate_name: &str) -> UnmatchBucket {
    if candidate_name.contains(TEST_CANDIDATE_MARKER) {
        UnmatchBucket::TestCandidate
    } else if candidate_name.starts_with(ID_PLACEHOLDER_PREFIX) {
        UnmatchBucket::IdPlaceholder
    } else {
        UnmatchBucket::Other
    }
}

/// Bucket counts over an unmatched sequence. Counts always sum to the
/// sequence length.
pub fn summarize(unmatched: &[UnmatchedRecord]) -> ReconSummary {
    let mut summary = ReconSummary {
        total_unmatched: unmatched.len(),
        test_candidates: 0,
        id_placeholders: 0,
        other: 0,
    };

    for record in unmatched {
        match classify(&record.candidate_name) {
            UnmatchBucket::TestCandidate => summary.test_candidates += 1,
            UnmatchBucket::IdPlaceholder => summary.id_placeholders += 1,
            UnmatchBucket::Other => summary.other += 1,
        }
    }

    summary
}
