use anyhow::{Context, Result};
use directories_next::BaseDirs;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::quiz::RawTable;

const CACHE_FILE_NAME: &str = "questions.csv";

fn get_cache_dir() -> Result<PathBuf> {
    let mut dir = BaseDirs::new()
        .context("could not locate system directories")?
        .cache_dir()
        .to_path_buf();
    dir.push("prep-quiz");
    Ok(dir)
}

/// Local copy of the last question table fetched from the network, so a quiz can be
/// taken without connectivity.
#[derive(Clone, Debug)]
pub struct OfflineCache {
    path: PathBuf,
}

impl OfflineCache {
    pub fn new() -> Result<OfflineCache> {
        let mut path = get_cache_dir()?;
        path.push(CACHE_FILE_NAME);
        Ok(OfflineCache { path })
    }

    #[cfg(test)]
    pub fn at(path: &Path) -> OfflineCache {
        OfflineCache {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self, table: &RawTable) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("could not create {}", dir.display()))?;
        }
        let file = File::create(&self.path)
            .with_context(|| format!("could not write {}", self.path.display()))?;
        table.write_csv(file)?;
        debug!("Stored question table in {}", self.path.display());
        Ok(())
    }

    pub fn load(&self) -> Result<Option<RawTable>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let file = File::open(&self.path)
            .with_context(|| format!("could not read {}", self.path.display()))?;
        let table = RawTable::read_csv(file)?;
        info!("Using cached question table from {}", self.path.display());
        Ok(Some(table))
    }
}
