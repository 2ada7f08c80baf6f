use crate::error::ReconError;
use crate::model::UnmatchedRecord;

/// Output column order. Fixed; downstream tooling keys off these headers.
pub const OUTPUT_HEADERS: [&str; 8] = [
    "Interview_Name",
    "Candidate_Name",
    "Old_Candidate_ID",
    "Interviewer",
    "Interview_Type",
    "Date_Completed",
    "Date_Scheduled",
    "Status",
];

/// Serialize unmatched records to CSV text, header row included.
///
/// Pure string-building; the caller decides whether and where the file is
/// written (the CLI skips the write entirely when nothing is unmatched).
pub fn to_csv(unmatched: &[UnmatchedRecord]) -> Result<String, ReconError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(OUTPUT_HEADERS)
        .map_err(|e| ReconError::CsvWrite(e.to_string()))?;

    for record in unmatched {
        writer
            .write_record([
                &record.interview_name,
                &record.candidate_name,
                &record.old_candidate_id,
                &record.interviewer,
                &record.interview_type,
                &record.date_completed,
                &record.date_scheduled,
                &record.status,
            ])
            .map_err(|e| ReconError::CsvWrite(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ReconError::CsvWrite(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ReconError::CsvWrite(e.to_string()))
}
