//! Location of the reference tables.
//!
//! An explicit `--data-dir` always wins. Otherwise a `knowledge/` directory
//! in the working directory is used when present, falling back to the
//! platform data directory:
//! - Linux: `~/.local/share/sicdex/`
//! - macOS: `~/Library/Application Support/sicdex/`
//! - Windows: `%APPDATA%\sicdex\`

use sicdex::DataPaths;
use sicdex::data::config::DEFAULT_DATA_DIR;
use std::path::{Path, PathBuf};

/// Get the platform-specific default data directory.
pub(crate) fn default_data_dir() -> PathBuf {
    let local = Path::new(DEFAULT_DATA_DIR);
    if local.is_dir() {
        return local.to_path_buf();
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sicdex")
}

/// Build the table paths from command-line overrides.
pub(crate) fn resolve_paths(
    data_dir: Option<PathBuf>,
    companies_file: Option<String>,
    sectors_file: Option<String>,
) -> DataPaths {
    let mut paths = DataPaths::new(data_dir.unwrap_or_else(default_data_dir));
    if let Some(file) = companies_file {
        paths = paths.with_companies_file(file);
    }
    if let Some(file) = sectors_file {
        paths = paths.with_sectors_file(file);
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let paths = resolve_paths(Some(PathBuf::from("/srv/ref")), None, None);
        assert_eq!(paths.data_dir(), Path::new("/srv/ref"));
        assert_eq!(
            paths.companies_path(),
            Path::new("/srv/ref/companies_info.csv")
        );
    }

    #[test]
    fn test_file_overrides() {
        let paths = resolve_paths(
            Some(PathBuf::from("ref")),
            Some("tickers.csv".to_string()),
            Some("sic.csv".to_string()),
        );
        assert_eq!(paths.companies_path(), Path::new("ref/tickers.csv"));
        assert_eq!(paths.sectors_path(), Path::new("ref/sic.csv"));
    }

    #[test]
    fn test_default_dir_is_named() {
        let dir = default_data_dir();
        assert!(dir.ends_with("sicdex") || dir.ends_with(DEFAULT_DATA_DIR));
    }
}
