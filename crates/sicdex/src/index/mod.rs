//! SIC sector classification index.
//!
//! [`SectorIndex`] owns the normalized company and SIC code tables and
//! answers classification queries over them. [`LazySectorIndex`] defers
//! building it until the first query and then keeps it for its lifetime.

mod frame;
pub mod lazy;

pub use lazy::LazySectorIndex;

use sicdex_data::{
    Cik, CompanyRecord, Result, SectorError, SectorRecord, SectorSummary, SicCode, TableSource,
    read_companies, read_sectors,
};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use tracing::{info, warn};

/// Immutable lookup structures over the company and SIC code tables.
///
/// Unknown SIC codes passed to [`ciks_for_sector`](Self::ciks_for_sector)
/// or [`sector_company_count`](Self::sector_company_count) are reported as
/// [`SectorError::UnknownSector`]. Unknown CIKs, titles and tickers are
/// returned as `None`.
#[derive(Debug, Clone, Default)]
pub struct SectorIndex {
    companies: BTreeMap<Cik, CompanyRecord>,
    sectors: BTreeMap<SicCode, SectorRecord>,
    /// Member CIKs per industry code, ascending
    members: HashMap<SicCode, Vec<Cik>>,
    /// Upper-cased ticker to CIK
    tickers: HashMap<String, Cik>,
}

impl SectorIndex {
    /// Build the index from already-normalized rows.
    ///
    /// Duplicate CIKs or SIC codes keep their first row.
    pub fn new(
        companies: impl IntoIterator<Item = CompanyRecord>,
        sectors: impl IntoIterator<Item = SectorRecord>,
    ) -> Self {
        let mut company_map = BTreeMap::new();
        for company in companies {
            match company_map.entry(company.cik) {
                Entry::Vacant(slot) => {
                    slot.insert(company);
                }
                Entry::Occupied(_) => {
                    warn!(cik = company.cik, "duplicate CIK in company table, keeping first row");
                }
            }
        }

        let mut sector_map = BTreeMap::new();
        for sector in sectors {
            match sector_map.entry(sector.sic_code) {
                Entry::Vacant(slot) => {
                    slot.insert(sector);
                }
                Entry::Occupied(_) => {
                    warn!(
                        sic_code = sector.sic_code,
                        "duplicate SIC code in sector table, keeping first row"
                    );
                }
            }
        }

        let mut members: HashMap<SicCode, Vec<Cik>> = HashMap::new();
        let mut tickers = HashMap::new();
        for company in company_map.values() {
            members.entry(company.industry).or_default().push(company.cik);
            if !company.ticker.is_empty() {
                tickers
                    .entry(company.ticker.to_uppercase())
                    .or_insert(company.cik);
            }
        }

        Self {
            companies: company_map,
            sectors: sector_map,
            members,
            tickers,
        }
    }

    /// Load both tables from a source and build the index.
    pub fn load<S: TableSource + ?Sized>(source: &S) -> Result<Self> {
        let companies = source.companies()?;
        let sectors = source.sectors()?;
        let index = Self::new(companies, sectors);
        info!(
            companies = index.company_count(),
            sectors = index.sector_count(),
            "built sector index"
        );
        Ok(index)
    }

    /// Build the index from two CSV readers.
    pub fn from_readers<C: Read, S: Read>(companies: C, sectors: S) -> Result<Self> {
        Ok(Self::new(read_companies(companies)?, read_sectors(sectors)?))
    }

    /// CIKs of every company classified under `sic_code`, ascending.
    ///
    /// # Errors
    /// Returns [`SectorError::UnknownSector`] if `sic_code` is not in the
    /// SIC code table.
    ///
    /// # Example
    /// ```
    /// use sicdex::{CompanyRecord, SectorIndex, SectorRecord};
    ///
    /// let index = SectorIndex::new(
    ///     [CompanyRecord::new(320193, "AAPL", "Apple Inc.", 3571)],
    ///     [SectorRecord::new(3571, "ELECTRONIC COMPUTERS")],
    /// );
    /// assert_eq!(index.ciks_for_sector(3571).unwrap(), vec![320193]);
    /// assert!(index.ciks_for_sector(99999).is_err());
    /// ```
    pub fn ciks_for_sector(&self, sic_code: SicCode) -> Result<Vec<Cik>> {
        self.sector_members(sic_code).map(<[Cik]>::to_vec)
    }

    /// Borrowing form of [`ciks_for_sector`](Self::ciks_for_sector).
    pub fn sector_members(&self, sic_code: SicCode) -> Result<&[Cik]> {
        if !self.sectors.contains_key(&sic_code) {
            return Err(SectorError::unknown_sector(
                sic_code,
                self.sectors.keys().copied(),
            ));
        }
        Ok(self
            .members
            .get(&sic_code)
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    /// Industry code of a company.
    pub fn sector_for_cik(&self, cik: Cik) -> Option<SicCode> {
        self.companies.get(&cik).map(|c| c.industry)
    }

    /// Industry title of a SIC code.
    pub fn sector_name(&self, sic_code: SicCode) -> Option<&str> {
        self.sectors.get(&sic_code).map(|s| s.title.as_str())
    }

    /// Number of companies classified under `sic_code`.
    ///
    /// # Errors
    /// Returns [`SectorError::UnknownSector`] if `sic_code` is not in the
    /// SIC code table.
    pub fn sector_company_count(&self, sic_code: SicCode) -> Result<usize> {
        self.sector_members(sic_code).map(<[Cik]>::len)
    }

    /// Every sector with its company count, ascending by SIC code.
    ///
    /// Sectors without companies are listed with a count of zero. Companies
    /// whose industry code has no sector entry are not counted anywhere.
    pub fn list_sectors(&self) -> Vec<SectorSummary> {
        self.sectors
            .values()
            .map(|sector| {
                let count = self.members.get(&sector.sic_code).map_or(0, Vec::len);
                SectorSummary::new(sector, count)
            })
            .collect()
    }

    /// Full record of a company.
    pub fn company_info(&self, cik: Cik) -> Option<&CompanyRecord> {
        self.companies.get(&cik)
    }

    /// Look up a CIK by ticker symbol (case-insensitive).
    pub fn cik_for_ticker(&self, ticker: &str) -> Option<Cik> {
        self.tickers.get(&ticker.trim().to_uppercase()).copied()
    }

    /// CIKs sharing the company's industry code, ascending and including
    /// the company itself.
    pub fn sector_peers(&self, cik: Cik) -> Option<Vec<Cik>> {
        let industry = self.sector_for_cik(cik)?;
        Some(self.members.get(&industry).cloned().unwrap_or_default())
    }

    /// Get the sector record for a SIC code.
    pub fn sector(&self, sic_code: SicCode) -> Option<&SectorRecord> {
        self.sectors.get(&sic_code)
    }

    /// All companies, ascending by CIK.
    pub fn companies(&self) -> impl Iterator<Item = &CompanyRecord> {
        self.companies.values()
    }

    /// All sectors, ascending by SIC code.
    pub fn sectors(&self) -> impl Iterator<Item = &SectorRecord> {
        self.sectors.values()
    }

    /// Number of loaded companies.
    pub fn company_count(&self) -> usize {
        self.companies.len()
    }

    /// Number of loaded sectors.
    pub fn sector_count(&self) -> usize {
        self.sectors.len()
    }

    /// Number of companies whose industry code has no sector entry.
    pub fn unmatched_company_count(&self) -> usize {
        self.companies
            .values()
            .filter(|c| !self.sectors.contains_key(&c.industry))
            .count()
    }
}
