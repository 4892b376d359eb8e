use anyhow::{Context, Result};
use std::fmt;
use std::fs::File;
use tracing::warn;

use crate::config::{Config, SheetConfig};
use crate::quiz::RawTable;

pub mod cache;
pub mod sample;
pub mod sheets;

use self::cache::OfflineCache;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Origin {
    CsvFile(String),
    Spreadsheet(String),
    OfflineCache(String),
    Sample,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::CsvFile(path) => write!(f, "file {}", path),
            Origin::Spreadsheet(id) => write!(f, "spreadsheet {}", id),
            Origin::OfflineCache(path) => write!(f, "offline copy {}", path),
            Origin::Sample => write!(f, "built-in sample questions"),
        }
    }
}

fn load_offline_copy(cache: &OfflineCache) -> Option<(RawTable, Origin)> {
    match cache.load() {
        Ok(table) => {
            table.map(|table| (table, Origin::OfflineCache(cache.path().display().to_string())))
        }
        Err(e) => {
            warn!("Could not read offline copy: {:#}", e);
            None
        }
    }
}

fn load_spreadsheet(
    sheet: &SheetConfig,
    access_token: &str,
    cache: Option<&OfflineCache>,
) -> Result<(RawTable, Origin)> {
    match sheets::fetch(sheet, access_token) {
        Ok(table) => {
            if let Some(cache) = cache {
                if let Err(e) = cache.store(&table) {
                    warn!("Could not update offline copy: {:#}", e);
                }
            }
            Ok((table, Origin::Spreadsheet(sheet.sheet_id.clone())))
        }
        Err(fetch_error) => {
            warn!("Could not fetch spreadsheet: {:#}", fetch_error);
            cache.and_then(load_offline_copy).ok_or(fetch_error)
        }
    }
}

fn load_sheet_or_offline_copy(
    sheet: &SheetConfig,
    cache: Option<&OfflineCache>,
) -> Option<(RawTable, Origin)> {
    match &sheet.access_token {
        Some(token) => match load_spreadsheet(sheet, token, cache) {
            Ok(loaded) => Some(loaded),
            Err(e) => {
                warn!("Spreadsheet unavailable: {:#}", e);
                None
            }
        },
        None => {
            warn!("No access token configured for spreadsheet {}", sheet.sheet_id);
            cache.and_then(load_offline_copy)
        }
    }
}

/// Loads the raw question table from the configured source: a local CSV file first,
/// then the spreadsheet (falling back to its offline copy), then the built-in sample.
pub fn load_rows(config: &Config) -> Result<(RawTable, Origin)> {
    if let Some(path) = &config.csv_path {
        let file = File::open(path)
            .with_context(|| format!("could not open question table {}", path.display()))?;
        let table = RawTable::read_csv(file)?;
        return Ok((table, Origin::CsvFile(path.display().to_string())));
    }

    if let Some(sheet) = &config.sheet {
        let cache = if config.offline_cache {
            match OfflineCache::new() {
                Ok(cache) => Some(cache),
                Err(e) => {
                    warn!("Offline copy unavailable: {:#}", e);
                    None
                }
            }
        } else {
            None
        };
        if let Some(loaded) = load_sheet_or_offline_copy(sheet, cache.as_ref()) {
            return Ok(loaded);
        }
    }

    warn!("Using sample questions");
    Ok((sample::table(), Origin::Sample))
}
