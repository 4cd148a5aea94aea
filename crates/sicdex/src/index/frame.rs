//! Polars views of the sector index.

use super::SectorIndex;
use polars::prelude::*;
use sicdex_data::Result;

impl SectorIndex {
    /// Sector listing as a DataFrame.
    ///
    /// Columns: `sic_code`, `industry_title`, `office`, `company_count`,
    /// one row per sector ascending by SIC code.
    pub fn sectors_frame(&self) -> Result<DataFrame> {
        let summaries = self.list_sectors();

        let codes: Vec<u32> = summaries.iter().map(|s| s.sic_code).collect();
        let titles: Vec<String> = summaries.iter().map(|s| s.title.clone()).collect();
        let offices: Vec<Option<String>> = summaries.iter().map(|s| s.office.clone()).collect();
        let counts: Vec<u64> = summaries.iter().map(|s| s.company_count as u64).collect();

        let df = DataFrame::new(vec![
            Column::new("sic_code".into(), codes),
            Column::new("industry_title".into(), titles),
            Column::new("office".into(), offices),
            Column::new("company_count".into(), counts),
        ])?;

        Ok(df)
    }

    /// Company table as a DataFrame.
    ///
    /// Columns: `cik`, `ticker`, `title`, `industry`, ascending by CIK.
    pub fn companies_frame(&self) -> Result<DataFrame> {
        let ciks: Vec<u64> = self.companies().map(|c| c.cik).collect();
        let tickers: Vec<String> = self.companies().map(|c| c.ticker.clone()).collect();
        let titles: Vec<String> = self.companies().map(|c| c.title.clone()).collect();
        let industries: Vec<u32> = self.companies().map(|c| c.industry).collect();

        let df = DataFrame::new(vec![
            Column::new("cik".into(), ciks),
            Column::new("ticker".into(), tickers),
            Column::new("title".into(), titles),
            Column::new("industry".into(), industries),
        ])?;

        Ok(df)
    }
}
