use std::collections::BTreeSet;

use serde::Deserialize;

use crate::error::ReconError;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ReconConfig {
    pub name: String,
    /// Candidate names already imported downstream. Entries are trimmed on
    /// load; membership is exact-string and case-sensitive. May be empty,
    /// in which case every interview is unmatched.
    pub known_names: Vec<String>,
    pub input: InputConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub columns: ColumnMapping,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub file: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub file: String,
}

// ---------------------------------------------------------------------------
// Column mapping
// ---------------------------------------------------------------------------

/// Input column names, keyed by logical field. Defaults match the Salesforce
/// interview export.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub name: String,
    pub candidate_id: String,
    pub interviewer: String,
    pub interview_type: String,
    pub date_completed: String,
    pub date_scheduled: String,
    pub status: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            name: "Name".into(),
            candidate_id: "Candidate__c".into(),
            interviewer: "Interviewer_s__c".into(),
            interview_type: "Interview_Type__c".into(),
            date_completed: "Date_Completed__c".into(),
            date_scheduled: "Date_Time_Scheduled__c".into(),
            status: "Interview_Status__c".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl ReconConfig {
    pub fn from_toml(input: &str) -> Result<Self, ReconError> {
        let config: ReconConfig =
            toml::from_str(input).map_err(|e| ReconError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ReconError> {
        if self.name.trim().is_empty() {
            return Err(ReconError::ConfigValidation("name must not be empty".into()));
        }
        if self.input.file.trim().is_empty() {
            return Err(ReconError::ConfigValidation(
                "input.file must not be empty".into(),
            ));
        }
        if self.output.file.trim().is_empty() {
            return Err(ReconError::ConfigValidation(
                "output.file must not be empty".into(),
            ));
        }

        // Duplicates after trimming indicate a copy/paste error in the list
        let mut seen = BTreeSet::new();
        for name in &self.known_names {
            if !seen.insert(name.trim()) {
                return Err(ReconError::ConfigValidation(format!(
                    "duplicate known name '{}'",
                    name.trim()
                )));
            }
        }

        Ok(())
    }

    /// The known-name set, trimmed. Built once per run.
    pub fn known_name_set(&self) -> BTreeSet<String> {
        self.known_names
            .iter()
            .map(|n| n.trim().to_string())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
name = "Interview import reconciliation"
known_names = ["Alice Smith", "Bob Jones"]

[input]
file = "all_interviews.csv"

[output]
file = "unmatched_interviews.csv"
"#;

    #[test]
    fn parse_valid() {
        let config = ReconConfig::from_toml(VALID).unwrap();
        assert_eq!(config.name, "Interview import reconciliation");
        assert_eq!(config.known_names.len(), 2);
        assert_eq!(config.input.file, "all_interviews.csv");
        assert_eq!(config.output.file, "unmatched_interviews.csv");
    }

    #[test]
    fn columns_default_to_salesforce_export() {
        let config = ReconConfig::from_toml(VALID).unwrap();
        assert_eq!(config.columns.name, "Name");
        assert_eq!(config.columns.candidate_id, "Candidate__c");
        assert_eq!(config.columns.date_scheduled, "Date_Time_Scheduled__c");
    }

    #[test]
    fn parse_custom_columns() {
        let input = format!(
            r#"{VALID}
[columns]
name = "InterviewName"
status = "Stage"
"#
        );
        let config = ReconConfig::from_toml(&input).unwrap();
        assert_eq!(config.columns.name, "InterviewName");
        assert_eq!(config.columns.status, "Stage");
        // Unset keys keep their defaults
        assert_eq!(config.columns.interviewer, "Interviewer_s__c");
    }

    #[test]
    fn empty_known_names_allowed() {
        let input = r#"
name = "Everything unmatched"
known_names = []

[input]
file = "a.csv"

[output]
file = "b.csv"
"#;
        let config = ReconConfig::from_toml(input).unwrap();
        assert!(config.known_name_set().is_empty());
    }

    #[test]
    fn known_name_set_trims_entries() {
        let input = r#"
name = "Trim"
known_names = ["  Alice Smith  "]

[input]
file = "a.csv"

[output]
file = "b.csv"
"#;
        let config = ReconConfig::from_toml(input).unwrap();
        assert!(config.known_name_set().contains("Alice Smith"));
    }

    #[test]
    fn reject_duplicate_known_name() {
        let input = r#"
name = "Dupes"
known_names = ["Alice Smith", " Alice Smith "]

[input]
file = "a.csv"

[output]
file = "b.csv"
"#;
        let err = ReconConfig::from_toml(input).unwrap_err();
        assert!(err.to_string().contains("duplicate known name"));
    }

    #[test]
    fn reject_empty_output_file() {
        let input = r#"
name = "Bad"
known_names = []

[input]
file = "a.csv"

[output]
file = ""
"#;
        let err = ReconConfig::from_toml(input).unwrap_err();
        assert!(err.to_string().contains("output.file"));
    }

    #[test]
    fn reject_missing_input_table() {
        let input = r#"
name = "Bad"
known_names = []

[output]
file = "b.csv"
"#;
        let err = ReconConfig::from_toml(input);
        assert!(err.is_err(), "missing [input] should fail deserialization");
    }
}
