#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/sicdex/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod loader;
pub mod records;

pub use config::DataPaths;
pub use error::{Result, SECTOR_PREVIEW_LEN, SectorError};
pub use loader::{TableSource, load_companies, load_sectors, read_companies, read_sectors};
pub use records::{Cik, CompanyRecord, SectorRecord, SectorSummary, SicCode};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
