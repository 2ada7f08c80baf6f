//! Fixed-width console report, byte-compatible with the legacy reporting
//! script this tool replaced.

use candrec_recon::model::ReconResult;

const BANNER_WIDTH: usize = 100;

/// Render the full console report: count line, banner-framed table of
/// unmatched interviews in input order, saved-to line, and the three-bucket
/// reasons block. The banners and table header print even when nothing is
/// unmatched; only data rows are conditional.
pub fn render_report(result: &ReconResult, output_path: &str) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut out = String::new();

    out.push_str(&format!(
        "Found {} unmatched interviews\n\n",
        result.summary.total_unmatched
    ));
    out.push_str(&banner);
    out.push('\n');
    out.push_str(&format!(
        "{:<50} {:<30} {:<15}\n",
        "Interview Name", "Candidate Name", "Type"
    ));
    out.push_str(&banner);
    out.push('\n');

    for record in &result.unmatched {
        out.push_str(&format!(
            "{:<50} {:<30} {:<15}\n",
            record.interview_name, record.candidate_name, record.interview_type
        ));
    }

    out.push_str(&banner);
    out.push('\n');
    out.push_str(&format!("\nDetailed information saved to: {output_path}\n"));
    out.push_str("\nReasons for unmatched:\n");
    out.push_str(&format!(
        "  - Test Candidates (don't exist in production): {}\n",
        result.summary.test_candidates
    ));
    out.push_str(&format!(
        "  - Candidates with ID as name (data corruption): {}\n",
        result.summary.id_placeholders
    ));
    out.push_str(&format!(
        "  - Other candidates (may have been deleted): {}\n",
        result.summary.other
    ));

    out
}
