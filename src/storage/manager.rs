//! Record Store
//!
//! Reads and writes the two record files under the data directory.
//!
//! ## Responsibilities
//! - Load the working set (a missing file is an empty catalog)
//! - Replace a file atomically: write `<file>.tmp`, fsync, rename
//! - Keep the sorted view file derived; it is never read back into the catalog

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::catalog::Item;
use crate::config::Config;
use crate::error::Result;
use crate::view::SortedView;

use super::{format_record, parse_record};

/// File-backed persistence for the working set and the sorted view
#[derive(Debug, Clone)]
pub struct RecordStore {
    /// Working set (source of truth)
    catalog_path: PathBuf,

    /// Derived sorted view
    sorted_path: PathBuf,
}

impl RecordStore {
    /// Open the store described by `config`
    ///
    /// Creates the data directory if it doesn't exist. Files are only
    /// created on the first save.
    pub fn open(config: &Config) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)?;

        Ok(Self {
            catalog_path: config.catalog_path(),
            sorted_path: config.sorted_path(),
        })
    }

    /// Read every record of the working set, in file order
    pub fn load_catalog(&self) -> Result<Vec<Item>> {
        Self::read_records(&self.catalog_path)
    }

    /// Read every record of the sorted view file, in file order
    pub fn load_sorted(&self) -> Result<Vec<Item>> {
        Self::read_records(&self.sorted_path)
    }

    /// Replace the working set with `items`
    ///
    /// Returns the number of records written.
    pub fn save_catalog<'a, I>(&self, items: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        Self::write_records(&self.catalog_path, items)
    }

    /// Replace the sorted view file with `view`
    pub fn save_sorted(&self, view: &SortedView) -> Result<usize> {
        Self::write_records(&self.sorted_path, view)
    }

    /// Get the working set path
    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    /// Get the sorted view path
    pub fn sorted_path(&self) -> &Path {
        &self.sorted_path
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn read_records(path: &Path) -> Result<Vec<Item>> {
        if !path.exists() {
            warn!(path = %path.display(), "Record file not found, starting empty");
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(path)?);
        let mut items = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(item) = parse_record(&line, index + 1)? {
                items.push(item);
            }
        }

        info!(path = %path.display(), records = items.len(), "Loaded records");
        Ok(items)
    }

    fn write_records<'a, I>(path: &Path, items: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let tmp_path = Self::tmp_path(path);

        let count = match Self::replace_with(&tmp_path, path, items) {
            Ok(count) => count,
            Err(e) => {
                // Best effort; the write error is returned either way
                if let Err(cleanup) = fs::remove_file(&tmp_path) {
                    if cleanup.kind() != io::ErrorKind::NotFound {
                        warn!(path = %tmp_path.display(), error = %cleanup, "Failed to remove temp file");
                    }
                }
                return Err(e);
            }
        };

        debug!(path = %path.display(), records = count, "Saved records");
        Ok(count)
    }

    /// Write `items` to `tmp_path`, fsync, then rename over `path`
    fn replace_with<'a, I>(tmp_path: &Path, path: &Path, items: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(tmp_path)?;
        let mut writer = BufWriter::new(file);

        let mut count = 0;
        for item in items {
            writeln!(writer, "{}", format_record(item))?;
            count += 1;
        }

        // Flush everything, then make it durable before the rename
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        fs::rename(tmp_path, path)?;

        Ok(count)
    }

    /// "inventory.txt" → "inventory.txt.tmp"
    fn tmp_path(path: &Path) -> PathBuf {
        let mut name = OsString::from(path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}
