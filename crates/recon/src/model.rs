use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One parsed row of the interview export.
///
/// All values stay opaque strings; nothing in the pipeline parses dates or
/// IDs. `row` is the 1-based data row number (header excluded), used only
/// for diagnostics.
#[derive(Debug, Clone)]
pub struct InterviewRecord {
    pub row: usize,
    pub name: String,
    pub candidate_id: String,
    pub interviewer: String,
    pub interview_type: String,
    pub date_completed: String,
    pub date_scheduled: String,
    pub status: String,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Projection of an unmatched interview, in report column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmatchedRecord {
    pub interview_name: String,
    pub candidate_name: String,
    pub old_candidate_id: String,
    pub interviewer: String,
    pub interview_type: String,
    pub date_completed: String,
    pub date_scheduled: String,
    pub status: String,
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Why an interview failed to match.
///
/// Precedence is fixed: the test-candidate check runs before the
/// ID-placeholder check, so a name matching both lands in `TestCandidate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchBucket {
    TestCandidate,
    IdPlaceholder,
    Other,
}

impl std::fmt::Display for UnmatchBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TestCandidate => write!(f, "test_candidate"),
            Self::IdPlaceholder => write!(f, "id_placeholder"),
            Self::Other => write!(f, "other"),
        }
    }
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ReconSummary {
    pub total_unmatched: usize,
    pub test_candidates: usize,
    pub id_placeholders: usize,
    pub other: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReconMeta {
    pub config_name: String,
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReconResult {
    pub meta: ReconMeta,
    pub summary: ReconSummary,
    pub unmatched: Vec<UnmatchedRecord>,
}
