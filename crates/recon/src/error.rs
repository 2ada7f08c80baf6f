use std::fmt;

#[derive(Debug)]
pub enum ReconError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (empty file path, duplicate known name, etc.).
    ConfigValidation(String),
    /// Malformed CSV input (bad quoting, inconsistent field count).
    CsvParse(String),
    /// Required column absent from the input header.
    MissingColumn { column: String },
    /// Required field absent from a parsed row (short record).
    MissingField { row: usize, column: String },
    /// CSV serialization error while building the report.
    CsvWrite(String),
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::CsvParse(msg) => write!(f, "CSV parse error: {msg}"),
            Self::MissingColumn { column } => {
                write!(f, "input is missing required column '{column}'")
            }
            Self::MissingField { row, column } => {
                write!(f, "row {row}: missing field '{column}'")
            }
            Self::CsvWrite(msg) => write!(f, "CSV write error: {msg}"),
        }
    }
}

impl std::error::Error for ReconError {}
