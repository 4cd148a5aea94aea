//! Location of the reference tables.

use std::path::{Path, PathBuf};

/// Default directory holding the reference tables.
pub const DEFAULT_DATA_DIR: &str = "knowledge";

/// Default file name of the company directory table.
pub const DEFAULT_COMPANIES_FILE: &str = "companies_info.csv";

/// Default file name of the SIC code directory table.
pub const DEFAULT_SECTORS_FILE: &str = "sic_industry_code.csv";

/// Paths to the company and SIC code reference tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    data_dir: PathBuf,
    companies_file: String,
    sectors_file: String,
}

impl DataPaths {
    /// Reference tables with their default file names under `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            companies_file: DEFAULT_COMPANIES_FILE.to_string(),
            sectors_file: DEFAULT_SECTORS_FILE.to_string(),
        }
    }

    /// Override the company table file name.
    pub fn with_companies_file(mut self, file: impl Into<String>) -> Self {
        self.companies_file = file.into();
        self
    }

    /// Override the SIC code table file name.
    pub fn with_sectors_file(mut self, file: impl Into<String>) -> Self {
        self.sectors_file = file.into();
        self
    }

    /// Directory holding both tables.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of the company table.
    pub fn companies_path(&self) -> PathBuf {
        self.data_dir.join(&self.companies_file)
    }

    /// Full path of the SIC code table.
    pub fn sectors_path(&self) -> PathBuf {
        self.data_dir.join(&self.sectors_file)
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}
