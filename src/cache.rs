// Process-lifetime cache of the cleaned dataset. The base collection is
// loaded once and read-only afterwards; every interaction recomputes its
// views from the same slice.
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use crate::io::LoadError;
use crate::preprocess::{load_dataset, FightRecord};

#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    loaded: Option<LoadedDataset>,
}

#[derive(Debug)]
struct LoadedDataset {
    /// Source mtime captured at load time; `refresh` compares against it.
    modified: Option<SystemTime>,
    records: Vec<FightRecord>,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            loaded: None,
        }
    }

    /// Loads on first use; afterwards the cached records are returned without
    /// touching the file again.
    pub fn records(&mut self) -> Result<&[FightRecord], LoadError> {
        self.ensure_loaded()?;
        Ok(self.loaded.as_ref().map_or(&[], |l| l.records.as_slice()))
    }

    /// Drop the cached dataset; the next `records` call re-reads the file.
    #[allow(dead_code)] // Invalidation hook for serving sessions
    pub fn invalidate(&mut self) {
        self.loaded = None;
    }

    /// Reload only if the source file's modification time has moved since the
    /// cached load. Returns whether a reload happened.
    #[allow(dead_code)] // Invalidation hook for serving sessions
    pub fn refresh(&mut self) -> Result<bool, LoadError> {
        let current = source_mtime(&self.path);
        let stale = match &self.loaded {
            Some(loaded) => loaded.modified != current,
            None => true,
        };
        if stale {
            self.invalidate();
            self.ensure_loaded()?;
        }
        Ok(stale)
    }

    fn ensure_loaded(&mut self) -> Result<(), LoadError> {
        if self.loaded.is_none() {
            let records = load_dataset(&self.path)?;
            self.loaded = Some(LoadedDataset {
                modified: source_mtime(&self.path),
                records,
            });
        }
        Ok(())
    }
}

fn source_mtime(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}
