//! Load-once wrapper around [`SectorIndex`].

use super::SectorIndex;
use once_cell::sync::OnceCell;
use sicdex_data::{Cik, CompanyRecord, DataPaths, Result, SectorSummary, SicCode, TableSource};
use tracing::debug;

/// A [`SectorIndex`] built from its source on first use.
///
/// Concurrent first callers block until the single load completes; after
/// that every query reads the cached index. A failed load is not cached,
/// so the next query tries again.
#[derive(Debug)]
pub struct LazySectorIndex<S = DataPaths> {
    source: S,
    index: OnceCell<SectorIndex>,
}

impl<S: TableSource> LazySectorIndex<S> {
    /// Wrap a table source without reading it.
    pub const fn new(source: S) -> Self {
        Self {
            source,
            index: OnceCell::new(),
        }
    }

    /// The loaded index, reading the tables if this is the first access.
    pub fn get(&self) -> Result<&SectorIndex> {
        self.index.get_or_try_init(|| {
            debug!("loading sector reference tables");
            SectorIndex::load(&self.source)
        })
    }

    /// Whether the tables have been loaded.
    pub fn is_loaded(&self) -> bool {
        self.index.get().is_some()
    }

    /// The underlying table source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Take the loaded index, if any.
    pub fn into_inner(self) -> Option<SectorIndex> {
        self.index.into_inner()
    }

    /// See [`SectorIndex::ciks_for_sector`].
    pub fn ciks_for_sector(&self, sic_code: SicCode) -> Result<Vec<Cik>> {
        self.get()?.ciks_for_sector(sic_code)
    }

    /// See [`SectorIndex::sector_for_cik`].
    pub fn sector_for_cik(&self, cik: Cik) -> Result<Option<SicCode>> {
        Ok(self.get()?.sector_for_cik(cik))
    }

    /// See [`SectorIndex::sector_name`].
    pub fn sector_name(&self, sic_code: SicCode) -> Result<Option<String>> {
        Ok(self.get()?.sector_name(sic_code).map(str::to_string))
    }

    /// See [`SectorIndex::sector_company_count`].
    pub fn sector_company_count(&self, sic_code: SicCode) -> Result<usize> {
        self.get()?.sector_company_count(sic_code)
    }

    /// See [`SectorIndex::list_sectors`].
    pub fn list_sectors(&self) -> Result<Vec<SectorSummary>> {
        Ok(self.get()?.list_sectors())
    }

    /// See [`SectorIndex::company_info`].
    pub fn company_info(&self, cik: Cik) -> Result<Option<CompanyRecord>> {
        Ok(self.get()?.company_info(cik).cloned())
    }

    /// See [`SectorIndex::cik_for_ticker`].
    pub fn cik_for_ticker(&self, ticker: &str) -> Result<Option<Cik>> {
        Ok(self.get()?.cik_for_ticker(ticker))
    }

    /// See [`SectorIndex::sector_peers`].
    pub fn sector_peers(&self, cik: Cik) -> Result<Option<Vec<Cik>>> {
        Ok(self.get()?.sector_peers(cik))
    }
}
