#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/sicdex/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod index;

// Re-export the data layer
pub use sicdex_data as data;
pub use sicdex_data::{
    Cik, CompanyRecord, DataPaths, Result, SectorError, SectorRecord, SectorSummary, SicCode,
    TableSource,
};

pub use index::{LazySectorIndex, SectorIndex};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
