//! CSV loading and normalization of the reference tables.
//!
//! Both tables arrive as loosely formatted CSV: the SIC directory header
//! may carry a byte-order mark, and the company directory stores CIK and
//! industry codes as integers or as integral floats (`3571.0`) depending
//! on how it was exported. Everything is coerced to typed records here so
//! the index can compare codes as integers.

use crate::config::DataPaths;
use crate::error::{Result, SectorError};
use crate::records::{Cik, CompanyRecord, SectorRecord, SicCode};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

const COMPANIES_TABLE: &str = "companies";
const SECTORS_TABLE: &str = "sectors";

const CIK_COLUMNS: &[&str] = &["cik_str", "cik"];
const TICKER_COLUMNS: &[&str] = &["ticker"];
const TITLE_COLUMNS: &[&str] = &["title"];
const INDUSTRY_COLUMNS: &[&str] = &["industry"];

const SIC_CODE_COLUMNS: &[&str] = &["SIC Code"];
const INDUSTRY_TITLE_COLUMNS: &[&str] = &["Industry Title"];
const OFFICE_COLUMNS: &[&str] = &["Office"];

/// A source of the two reference tables.
pub trait TableSource {
    /// Load the company directory, dropping rows without an industry code.
    fn companies(&self) -> Result<Vec<CompanyRecord>>;

    /// Load the SIC code directory.
    fn sectors(&self) -> Result<Vec<SectorRecord>>;
}

impl TableSource for DataPaths {
    fn companies(&self) -> Result<Vec<CompanyRecord>> {
        load_companies(self.companies_path())
    }

    fn sectors(&self) -> Result<Vec<SectorRecord>> {
        load_sectors(self.sectors_path())
    }
}

/// Load the company directory from a CSV file.
pub fn load_companies(path: impl AsRef<Path>) -> Result<Vec<CompanyRecord>> {
    let path = path.as_ref();
    let companies = read_companies(open(path)?)?;
    info!(path = %path.display(), rows = companies.len(), "loaded company table");
    Ok(companies)
}

/// Load the SIC code directory from a CSV file.
pub fn load_sectors(path: impl AsRef<Path>) -> Result<Vec<SectorRecord>> {
    let path = path.as_ref();
    let sectors = read_sectors(open(path)?)?;
    info!(path = %path.display(), rows = sectors.len(), "loaded SIC code table");
    Ok(sectors)
}

/// Read the company directory from any CSV reader.
///
/// Requires the columns `cik_str` (or `cik`), `ticker`, `title` and
/// `industry`. Rows whose industry cell is empty or `NaN` are skipped.
pub fn read_companies<R: Read>(rdr: R) -> Result<Vec<CompanyRecord>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(rdr);
    let headers = normalize_headers(reader.headers()?);

    let cik_idx = column_index(&headers, COMPANIES_TABLE, CIK_COLUMNS)?;
    let ticker_idx = column_index(&headers, COMPANIES_TABLE, TICKER_COLUMNS)?;
    let title_idx = column_index(&headers, COMPANIES_TABLE, TITLE_COLUMNS)?;
    let industry_idx = column_index(&headers, COMPANIES_TABLE, INDUSTRY_COLUMNS)?;

    let mut companies = Vec::new();
    let mut dropped = 0usize;

    for record in reader.records() {
        let record = record?;
        let line = line_of(&record);

        let raw_industry = cell(&record, industry_idx);
        if is_missing(raw_industry) {
            dropped += 1;
            continue;
        }

        let cik: Cik = parse_integer(cell(&record, cik_idx)).ok_or_else(|| {
            invalid(COMPANIES_TABLE, CIK_COLUMNS[0], line, cell(&record, cik_idx))
        })?;
        let industry = parse_integer(raw_industry)
            .and_then(|v| SicCode::try_from(v).ok())
            .ok_or_else(|| invalid(COMPANIES_TABLE, INDUSTRY_COLUMNS[0], line, raw_industry))?;

        companies.push(CompanyRecord {
            cik,
            ticker: cell(&record, ticker_idx).to_string(),
            title: cell(&record, title_idx).to_string(),
            industry,
        });
    }

    if dropped > 0 {
        debug!(dropped, "skipped companies without an industry code");
    }

    Ok(companies)
}

/// Read the SIC code directory from any CSV reader.
///
/// Requires the columns `SIC Code` and `Industry Title`; `Office` is
/// picked up when present.
pub fn read_sectors<R: Read>(rdr: R) -> Result<Vec<SectorRecord>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(rdr);
    let headers = normalize_headers(reader.headers()?);

    let code_idx = column_index(&headers, SECTORS_TABLE, SIC_CODE_COLUMNS)?;
    let title_idx = column_index(&headers, SECTORS_TABLE, INDUSTRY_TITLE_COLUMNS)?;
    let office_idx = column_index(&headers, SECTORS_TABLE, OFFICE_COLUMNS).ok();

    let mut sectors = Vec::new();

    for record in reader.records() {
        let record = record?;
        let raw_code = cell(&record, code_idx);
        let sic_code = parse_integer(raw_code)
            .and_then(|v| SicCode::try_from(v).ok())
            .ok_or_else(|| invalid(SECTORS_TABLE, SIC_CODE_COLUMNS[0], line_of(&record), raw_code))?;

        let office = office_idx
            .map(|idx| cell(&record, idx))
            .filter(|office| !office.is_empty())
            .map(str::to_string);

        sectors.push(SectorRecord {
            sic_code,
            title: cell(&record, title_idx).to_string(),
            office,
        });
    }

    Ok(sectors)
}

/// Strip surrounding whitespace and byte-order marks from a header cell.
pub fn normalize_header(raw: &str) -> String {
    raw.replace('\u{feff}', "").trim().to_string()
}

fn normalize_headers(headers: &StringRecord) -> Vec<String> {
    headers.iter().map(normalize_header).collect()
}

fn column_index(
    headers: &[String],
    table: &'static str,
    names: &[&'static str],
) -> Result<usize> {
    names
        .iter()
        .find_map(|name| headers.iter().position(|h| h == name))
        .ok_or(SectorError::MissingColumn {
            table,
            column: names[0],
        })
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| SectorError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn cell(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or_default().trim()
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |pos| pos.line())
}

fn is_missing(raw: &str) -> bool {
    raw.is_empty() || raw.eq_ignore_ascii_case("nan")
}

/// Parse a non-negative integer, accepting integral float renderings such as `3571.0`.
fn parse_integer(raw: &str) -> Option<u64> {
    raw.parse::<u64>().ok().or_else(|| {
        let value: f64 = raw.parse().ok()?;
        let integral = value.is_finite() && value >= 0.0 && value.fract() == 0.0;
        (integral && value <= u64::MAX as f64).then_some(value as u64)
    })
}

fn invalid(table: &'static str, column: &'static str, line: u64, value: &str) -> SectorError {
    SectorError::InvalidValue {
        table,
        column,
        line,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const COMPANIES_CSV: &str = "\
cik_str,ticker,title,industry
320193,AAPL,Apple Inc.,3571
789019,MSFT,MICROSOFT CORP,7372.0
1067983,BRK-B,BERKSHIRE HATHAWAY INC,
";

    const SECTORS_CSV: &str = "\
\u{feff}SIC Code , Office,Industry Title
3571,Office of Technology,ELECTRONIC COMPUTERS
7372,Office of Technology,SERVICES-PREPACKAGED SOFTWARE
";

    #[rstest]
    #[case("3571", Some(3571))]
    #[case("3571.0", Some(3571))]
    #[case("0", Some(0))]
    #[case("3571.5", None)]
    #[case("-1", None)]
    #[case("NaN", None)]
    #[case("abc", None)]
    #[case("", None)]
    fn test_parse_integer(#[case] raw: &str, #[case] expected: Option<u64>) {
        assert_eq!(parse_integer(raw), expected);
    }

    #[rstest]
    #[case("\u{feff}SIC Code", "SIC Code")]
    #[case("  Industry Title ", "Industry Title")]
    #[case("\u{feff} Office\t", "Office")]
    #[case("industry", "industry")]
    fn test_normalize_header(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_header(raw), expected);
    }

    #[test]
    fn test_read_companies_drops_missing_industry() {
        let companies = read_companies(COMPANIES_CSV.as_bytes()).unwrap();

        assert_eq!(companies.len(), 2);
        assert_eq!(
            companies[0],
            CompanyRecord::new(320193, "AAPL", "Apple Inc.", 3571)
        );
        assert_eq!(companies[1].industry, 7372);
        assert!(companies.iter().all(|c| c.cik != 1067983));
    }

    #[test]
    fn test_read_companies_nan_industry() {
        let csv = "cik_str,ticker,title,industry\n1,A,Alpha,NaN\n2,B,Beta,nan\n3,C,Gamma,100\n";
        let companies = read_companies(csv.as_bytes()).unwrap();
        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0].cik, 3);
    }

    #[test]
    fn test_read_companies_accepts_cik_alias() {
        let csv = "cik,ticker,title,industry\n320193,AAPL,Apple Inc.,3571\n";
        let companies = read_companies(csv.as_bytes()).unwrap();
        assert_eq!(companies[0].cik, 320193);
    }

    #[test]
    fn test_read_companies_invalid_cik() {
        let csv = "cik_str,ticker,title,industry\nnot-a-cik,AAPL,Apple Inc.,3571\n";
        let err = read_companies(csv.as_bytes()).unwrap_err();
        match err {
            SectorError::InvalidValue {
                table,
                column,
                line,
                value,
            } => {
                assert_eq!(table, "companies");
                assert_eq!(column, "cik_str");
                assert_eq!(line, 2);
                assert_eq!(value, "not-a-cik");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_companies_missing_column() {
        let csv = "cik_str,ticker,title\n320193,AAPL,Apple Inc.\n";
        let err = read_companies(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            SectorError::MissingColumn {
                table: "companies",
                column: "industry"
            }
        ));
    }

    #[test]
    fn test_read_sectors_strips_bom_and_whitespace() {
        let sectors = read_sectors(SECTORS_CSV.as_bytes()).unwrap();

        assert_eq!(sectors.len(), 2);
        assert_eq!(sectors[0].sic_code, 3571);
        assert_eq!(sectors[0].title, "ELECTRONIC COMPUTERS");
        assert_eq!(sectors[0].office.as_deref(), Some("Office of Technology"));
    }

    #[test]
    fn test_read_sectors_without_office() {
        let csv = "SIC Code,Industry Title\n100,AGRICULTURAL PRODUCTION-CROPS\n";
        let sectors = read_sectors(csv.as_bytes()).unwrap();
        assert_eq!(
            sectors,
            vec![SectorRecord::new(100, "AGRICULTURAL PRODUCTION-CROPS")]
        );
    }

    #[test]
    fn test_read_sectors_invalid_code() {
        let csv = "SIC Code,Industry Title\nxx,BROKEN\n";
        let err = read_sectors(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            SectorError::InvalidValue {
                column: "SIC Code",
                ..
            }
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let paths = DataPaths::new("/definitely/not/here");
        let err = paths.companies().unwrap_err();
        assert!(matches!(err, SectorError::Io { .. }));
    }
}
