//! Normalized rows of the company and SIC code reference tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// SEC Central Index Key.
pub type Cik = u64;

/// Standard Industrial Classification code.
pub type SicCode = u32;

/// A company from the company directory table.
///
/// Only rows carrying an industry code are ever materialized; rows without
/// one are dropped while loading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Central Index Key
    pub cik: Cik,
    /// Ticker symbol
    pub ticker: String,
    /// Company name
    pub title: String,
    /// SIC code of the company's industry
    pub industry: SicCode,
}

impl CompanyRecord {
    /// Create a new company record.
    pub fn new(
        cik: Cik,
        ticker: impl Into<String>,
        title: impl Into<String>,
        industry: SicCode,
    ) -> Self {
        Self {
            cik,
            ticker: ticker.into(),
            title: title.into(),
            industry,
        }
    }

    /// CIK zero-padded to the 10 digits EDGAR uses in URLs.
    pub fn padded_cik(&self) -> String {
        format!("{:0>10}", self.cik)
    }
}

impl fmt::Display for CompanyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) CIK {}", self.title, self.ticker, self.cik)
    }
}

/// An entry of the SIC code directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectorRecord {
    /// SIC code
    pub sic_code: SicCode,
    /// Industry title
    pub title: String,
    /// SEC office reviewing filers in this industry
    pub office: Option<String>,
}

impl SectorRecord {
    /// Create a new sector record without an office.
    pub fn new(sic_code: SicCode, title: impl Into<String>) -> Self {
        Self {
            sic_code,
            title: title.into(),
            office: None,
        }
    }

    /// Set the reviewing office.
    pub fn with_office(mut self, office: impl Into<String>) -> Self {
        self.office = Some(office.into());
        self
    }
}

impl fmt::Display for SectorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.sic_code, self.title)
    }
}

/// One row of the sector listing: a sector and how many loaded companies it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorSummary {
    /// SIC code
    pub sic_code: SicCode,
    /// Industry title
    pub title: String,
    /// SEC office reviewing filers in this industry
    pub office: Option<String>,
    /// Number of loaded companies classified under this code
    pub company_count: usize,
}

impl SectorSummary {
    /// Summarize a sector with the given member count.
    pub fn new(sector: &SectorRecord, company_count: usize) -> Self {
        Self {
            sic_code: sector.sic_code,
            title: sector.title.clone(),
            office: sector.office.clone(),
            company_count,
        }
    }
}
