use crate::classify::summarize;
use crate::config::{ColumnMapping, ReconConfig};
use crate::derived::derive_candidate_name;
use crate::error::ReconError;
use crate::model::{InterviewRecord, ReconMeta, ReconResult, UnmatchedRecord};

/// Reconcile loaded interviews against the config's known-name set.
///
/// Single pass in input order: derive a candidate name per record, drop
/// records whose derived name is in the known set, project the rest. The
/// unmatched sequence preserves input order; nothing here sorts or groups.
pub fn run(config: &ReconConfig, records: &[InterviewRecord]) -> ReconResult {
    let known = config.known_name_set();

    let mut unmatched = Vec::new();
    for record in records {
        let candidate_name = derive_candidate_name(&record.name);
        if known.contains(&candidate_name) {
            continue;
        }
        unmatched.push(UnmatchedRecord {
            interview_name: record.name.clone(),
            candidate_name,
            old_candidate_id: record.candidate_id.clone(),
            interviewer: record.interviewer.clone(),
            interview_type: record.interview_type.clone(),
            date_completed: record.date_completed.clone(),
            date_scheduled: record.date_scheduled.clone(),
            status: record.status.clone(),
        });
    }

    let summary = summarize(&unmatched);

    ReconResult {
        meta: ReconMeta {
            config_name: config.name.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        unmatched,
    }
}

/// Parse interview CSV text into records, applying the column mapping.
///
/// The full required column set is validated against the header before any
/// row is read, so a missing column fails fast with its name. Extra columns
/// are ignored and column order is irrelevant.
pub fn load_interviews(
    csv_data: &str,
    columns: &ColumnMapping,
) -> Result<Vec<InterviewRecord>, ReconError> {
    // Flexible so short rows reach the per-row field check and fail with
    // the row number and column name instead of a generic parse error.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ReconError::CsvParse(e.to_string()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let idx = |name: &str| -> Result<usize, ReconError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ReconError::MissingColumn {
                column: name.into(),
            })
    };

    let name_idx = idx(&columns.name)?;
    let candidate_id_idx = idx(&columns.candidate_id)?;
    let interviewer_idx = idx(&columns.interviewer)?;
    let interview_type_idx = idx(&columns.interview_type)?;
    let date_completed_idx = idx(&columns.date_completed)?;
    let date_scheduled_idx = idx(&columns.date_scheduled)?;
    let status_idx = idx(&columns.status)?;

    let mut records = Vec::new();

    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|e| ReconError::CsvParse(e.to_string()))?;
        let row = i + 1;

        let field = |idx: usize, column: &str| -> Result<String, ReconError> {
            record
                .get(idx)
                .map(|v| v.to_string())
                .ok_or_else(|| ReconError::MissingField {
                    row,
                    column: column.into(),
                })
        };

        records.push(InterviewRecord {
            row,
            name: field(name_idx, &columns.name)?,
            candidate_id: field(candidate_id_idx, &columns.candidate_id)?,
            interviewer: field(interviewer_idx, &columns.interviewer)?,
            interview_type: field(interview_type_idx, &columns.interview_type)?,
            date_completed: field(date_completed_idx, &columns.date_completed)?,
            date_scheduled: field(date_scheduled_idx, &columns.date_scheduled)?,
            status: field(status_idx, &columns.status)?,
        });
    }

    Ok(records)
}
