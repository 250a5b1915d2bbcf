use std::fmt;
use std::path::PathBuf;

use serde::{Serialize, Serializer};

use crate::error::ImportError;

/// Outcome of the final well-formedness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Ok,
    /// Parser message for the first error.
    Invalid(String),
}

impl Validation {
    pub fn is_ok(&self) -> bool {
        matches!(self, Validation::Ok)
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validation::Ok => f.write_str("ok"),
            Validation::Invalid(msg) => write!(f, "invalid: {msg}"),
        }
    }
}

impl Serialize for Validation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Summary of one import run, printed as a single JSON line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct Report {
    /// Where the pre-run copy of the dataset was written.
    pub backup: PathBuf,
    pub updated_count: usize,
    /// Suktas whose record text changed, in processing order.
    pub updated_suktas: Vec<u32>,
    pub validation: Validation,
}

impl Report {
    pub(crate) fn new(backup: PathBuf, updated_suktas: Vec<u32>, validation: Validation) -> Self {
        Self {
            backup,
            updated_count: updated_suktas.len(),
            updated_suktas,
            validation,
        }
    }

    /// The report as one line of JSON.
    pub fn to_json(&self) -> Result<String, ImportError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validation_display() {
        assert_eq!(Validation::Ok.to_string(), "ok");
        assert_eq!(
            Validation::Invalid("EOF while parsing".into()).to_string(),
            "invalid: EOF while parsing"
        );
    }

    #[test]
    fn test_report_json_line() {
        let report = Report::new(
            PathBuf::from("data/m1.json.20240101-000000.bak"),
            vec![1, 7],
            Validation::Ok,
        );
        assert_eq!(
            report.to_json().unwrap(),
            r#"{"backup":"data/m1.json.20240101-000000.bak","updated_count":2,"updated_suktas":[1,7],"validation":"ok"}"#
        );
    }

    #[test]
    fn test_report_invalid_status() {
        let report = Report::new(
            PathBuf::from("x.bak"),
            Vec::new(),
            Validation::Invalid("expected value at line 1 column 1".into()),
        );
        let json = report.to_json().unwrap();
        assert!(json.contains(r#""updated_count":0"#));
        assert!(json.contains(r#""validation":"invalid: expected value at line 1 column 1""#));
        assert!(!json.contains('\n'));
    }
}
