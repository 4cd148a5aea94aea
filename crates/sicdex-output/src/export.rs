//! CSV and JSON export of sector index results.

use serde::Serialize;
use sicdex_data::{CompanyRecord, SectorSummary};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV output was not valid UTF-8.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "pretty-json" | "pretty_json" => Ok(Self::PrettyJson),
            other => Err(ExportError::InvalidFormat(other.to_string())),
        }
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

fn to_csv<'a, T: Serialize + 'a>(
    records: impl IntoIterator<Item = &'a T>,
) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for record in records {
        wtr.serialize(record)?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

fn export<T: Serialize + ?Sized>(
    value: &T,
    csv: impl FnOnce() -> Result<String, ExportError>,
    format: ExportFormat,
) -> Result<String, ExportError> {
    match format {
        ExportFormat::Csv => csv(),
        ExportFormat::Json => Ok(serde_json::to_string(value)?),
        ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(value)?),
    }
}

impl Exporter for SectorSummary {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        export(self, || to_csv([self]), format)
    }
}

impl Exporter for Vec<SectorSummary> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        export(self, || to_csv(self), format)
    }
}

impl Exporter for CompanyRecord {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        export(self, || to_csv([self]), format)
    }
}

impl Exporter for Vec<CompanyRecord> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        export(self, || to_csv(self), format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use sicdex_data::SectorRecord;

    fn sample_sectors() -> Vec<SectorSummary> {
        vec![
            SectorSummary::new(&SectorRecord::new(100, "AGRICULTURAL PRODUCTION-CROPS"), 0),
            SectorSummary::new(
                &SectorRecord::new(3571, "ELECTRONIC COMPUTERS").with_office("Office of Technology"),
                1,
            ),
        ]
    }

    #[test]
    fn test_sectors_csv() {
        let csv = sample_sectors().export_to_string(ExportFormat::Csv).unwrap();
        let mut lines = csv.lines();

        assert_eq!(lines.next(), Some("sic_code,title,office,company_count"));
        assert_eq!(lines.next(), Some("100,AGRICULTURAL PRODUCTION-CROPS,,0"));
        assert_eq!(
            lines.next(),
            Some("3571,ELECTRONIC COMPUTERS,Office of Technology,1")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_sectors_json() {
        let json = sample_sectors().export_to_string(ExportFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed[1]["sic_code"], 3571);
        assert_eq!(parsed[1]["company_count"], 1);
        assert!(parsed[0]["office"].is_null());
    }

    #[test]
    fn test_company_csv_quotes_commas() {
        let company = CompanyRecord::new(1108524, "CRM", "Salesforce, Inc.", 7372);
        let csv = company.export_to_string(ExportFormat::Csv).unwrap();
        assert!(csv.contains("\"Salesforce, Inc.\""));
        assert!(csv.starts_with("cik,ticker,title,industry"));
    }

    #[test]
    fn test_company_pretty_json() {
        let company = CompanyRecord::new(320193, "AAPL", "Apple Inc.", 3571);
        let json = company.export_to_string(ExportFormat::PrettyJson).unwrap();
        assert!(json.contains("\"AAPL\""));
        assert!(json.contains("  ")); // Indentation indicates pretty format
    }

    #[test]
    fn test_companies_csv() {
        let companies = vec![
            CompanyRecord::new(320193, "AAPL", "Apple Inc.", 3571),
            CompanyRecord::new(789019, "MSFT", "MICROSOFT CORP", 7372),
        ];
        let csv = companies.export_to_string(ExportFormat::Csv).unwrap();
        assert_eq!(csv.lines().count(), 3);
        assert!(csv.contains("789019,MSFT,MICROSOFT CORP,7372"));
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(format!("sectors.{}", ExportFormat::Csv.extension()));

        sample_sectors()
            .export_to_file(&path, ExportFormat::Csv)
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("ELECTRONIC COMPUTERS"));
    }

    #[test]
    fn test_export_format_extension() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::PrettyJson.extension(), "json");
    }

    #[rstest]
    #[case("csv", ExportFormat::Csv)]
    #[case("JSON", ExportFormat::Json)]
    #[case("pretty-json", ExportFormat::PrettyJson)]
    #[case("pretty_json", ExportFormat::PrettyJson)]
    fn test_parse_format(#[case] raw: &str, #[case] expected: ExportFormat) {
        assert_eq!(raw.parse::<ExportFormat>().unwrap(), expected);
    }

    #[test]
    fn test_parse_invalid_format() {
        let err = "xml".parse::<ExportFormat>().unwrap_err();
        assert!(matches!(err, ExportError::InvalidFormat(ref f) if f == "xml"));
    }
}
