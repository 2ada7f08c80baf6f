/// Candidate name derived from an interview name.
///
/// Interview names follow the `"<candidate> - <round>"` convention; the
/// separator is the literal `" - "`, so double-barrelled names containing a
/// plain hyphen survive intact. The first segment is trimmed of surrounding
/// whitespace. An empty or absent name derives the empty string.
pub fn derive_candidate_name(interview_name: &str) -> String {
    interview_name
        .split(" - ")
        .next()
        .unwrap_or("")
        .trim()
        .to_string()
}
