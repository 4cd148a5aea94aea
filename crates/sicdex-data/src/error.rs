//! Error types for sector index operations.

use crate::records::SicCode;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for sector index operations.
pub type Result<T> = std::result::Result<T, SectorError>;

/// Number of known SIC codes carried in an [`SectorError::UnknownSector`] preview.
pub const SECTOR_PREVIEW_LEN: usize = 10;

/// Errors that can occur while loading or querying the sector index.
#[derive(Debug, Error)]
pub enum SectorError {
    /// The requested SIC code is not in the sector table
    #[error("Sector ID {sic_code} not found. Available SIC codes: {preview:?}...")]
    UnknownSector {
        /// SIC code that was queried
        sic_code: SicCode,
        /// First known SIC codes, ascending
        preview: Vec<SicCode>,
    },

    /// Reference file could not be opened or read
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// CSV decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from a reference table
    #[error("Missing column `{column}` in {table} table")]
    MissingColumn {
        /// Table name
        table: &'static str,
        /// Column name after header normalization
        column: &'static str,
    },

    /// A cell could not be coerced to its column type
    #[error("Invalid {column} value `{value}` in {table} table at line {line}")]
    InvalidValue {
        /// Table name
        table: &'static str,
        /// Column name
        column: &'static str,
        /// 1-based line number in the source
        line: u64,
        /// Raw cell contents
        value: String,
    },

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}

impl SectorError {
    /// Build an [`SectorError::UnknownSector`] from the ascending list of known codes.
    pub fn unknown_sector(sic_code: SicCode, known: impl IntoIterator<Item = SicCode>) -> Self {
        Self::UnknownSector {
            sic_code,
            preview: known.into_iter().take(SECTOR_PREVIEW_LEN).collect(),
        }
    }

    /// Returns true if this error reports an unknown SIC code.
    pub const fn is_unknown_sector(&self) -> bool {
        matches!(self, Self::UnknownSector { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_sector_preview_is_bounded() {
        let err = SectorError::unknown_sector(99999, (100..200).step_by(5));
        match err {
            SectorError::UnknownSector { sic_code, preview } => {
                assert_eq!(sic_code, 99999);
                assert_eq!(preview.len(), SECTOR_PREVIEW_LEN);
                assert_eq!(preview[0], 100);
                assert_eq!(preview[9], 145);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_sector_display() {
        let err = SectorError::unknown_sector(99999, [100, 200]);
        assert!(err.is_unknown_sector());
        assert_eq!(
            err.to_string(),
            "Sector ID 99999 not found. Available SIC codes: [100, 200]..."
        );
    }

    #[test]
    fn test_invalid_value_display() {
        let err = SectorError::InvalidValue {
            table: "companies",
            column: "cik_str",
            line: 4,
            value: "abc".to_string(),
        };
        assert!(!err.is_unknown_sector());
        assert_eq!(
            err.to_string(),
            "Invalid cik_str value `abc` in companies table at line 4"
        );
    }
}
