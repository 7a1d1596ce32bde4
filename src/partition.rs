// src/partition.rs
//! # Partition files
//!
//! Accepted rows are grouped by canonical key and written one file per key:
//!
//! ```text
//! <dir>/red_white_12.csv      rows whose key is "red, white"
//! <dir>/navy_old_gold_3.csv   rows whose key is "navy, old gold"
//! <dir>/manifest.json         exact key → (count, file) for every file above
//! ```
//!
//! The file name carries the sanitized key and the row count, so the catalog
//! can be rebuilt from a directory listing alone (`read_catalog`). That mapping
//! is lossy (commas are gone, spaces and underscores look alike), so the writer
//! also records the exact keys in `manifest.json` (`read_manifest`) and refuses
//! to write two keys that would share a file stem.
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::canon::{KEY_COLUMN, with_keys};
use crate::core::sanitize::{partition_file_name, partition_stem};
use crate::error::{Error, IoContext, Result};
use crate::store::DataSet;

pub const PARTITION_EXT: &str = "csv";
pub const MANIFEST_FILE: &str = "manifest.json";
const MANIFEST_VERSION: u32 = 1;

/// One row of the reconstructed distribution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboCount {
    pub combo: String,
    pub count: usize,
}

impl ComboCount {
    pub fn new(combo: impl Into<String>, count: usize) -> Self {
        Self { combo: combo.into(), count }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub key: String,
    pub count: usize,
    pub file: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub version: u32,
    pub partitions: Vec<ManifestEntry>,
}

impl Manifest {
    /// Exact `(key, count)` rows, in key order.
    pub fn catalog(&self) -> Vec<ComboCount> {
        self.partitions.iter().map(|e| ComboCount::new(e.key.clone(), e.count)).collect()
    }

    pub fn total(&self) -> usize {
        self.partitions.iter().map(|e| e.count).sum()
    }
}

/// What `write_partitions` produced.
#[derive(Clone, Debug)]
pub struct WriteReport {
    pub manifest: Manifest,
    pub files: Vec<PathBuf>,
    /// Accepted rows with no key (description had no tokens); not written anywhere.
    pub skipped: usize,
}

/* ---------------- Writing ---------------- */

/// Accepted rows grouped by key, with file stems already checked for collisions.
/// Nothing touches the disk until `commit`.
#[derive(Clone, Debug)]
pub struct PartitionPlan {
    headers: Vec<String>,
    groups: BTreeMap<String, Vec<Vec<String>>>,
    rows: usize,
    skipped: usize,
}

impl PartitionPlan {
    /// Group `accepted` by canonical key. Fails on a stem collision.
    /// If `accepted` has no key column, keys are assigned first.
    pub fn new(accepted: &DataSet) -> Result<Self> {
        let (ds, key_ix) = match accepted.column(KEY_COLUMN) {
            Some(ix) => (Cow::Borrowed(accepted), ix),
            None => {
                let keyed = with_keys(accepted);
                let ix = keyed.headers.len() - 1;
                (Cow::Owned(keyed), ix)
            }
        };

        let (groups, skipped) = group_by_key(&ds, key_ix);
        check_stems(groups.keys())?;

        Ok(Self { headers: ds.headers.clone(), groups, rows: ds.len(), skipped })
    }

    pub fn unique_keys(&self) -> usize { self.groups.len() }

    /// Write one CSV per group into `dir`, plus `manifest.json`.
    /// With `prune`, the files of the previous run's manifest are removed first.
    /// Existing files of the same name are overwritten. `dir` must already exist.
    pub fn commit(self, dir: &Path, prune: bool) -> Result<WriteReport> {
        if !dir.is_dir() {
            return Err(Error::MissingDirectory { path: dir.to_path_buf() });
        }
        if prune {
            prune_previous(dir)?;
        }

        log::info!("Number of unique colors: {}", self.groups.len());
        log::info!("Number of total rows: {}", self.rows);
        if self.skipped > 0 {
            log::info!("{} accepted rows have no color key; not partitioned", self.skipped);
        }

        let mut files = Vec::with_capacity(self.groups.len());
        let mut partitions = Vec::with_capacity(self.groups.len());
        for (key, rows) in self.groups {
            let name = partition_file_name(&key, rows.len());
            let path = dir.join(&name);
            let count = rows.len();
            DataSet::new(self.headers.clone(), rows).save(&path)?;
            log::debug!("wrote {count} rows for `{key}` to {}", path.display());

            partitions.push(ManifestEntry { key, count, file: name });
            files.push(path);
        }

        let manifest = Manifest { version: MANIFEST_VERSION, partitions };
        write_manifest(&manifest, dir)?;
        log::info!("Grouped CSV files saved to {}", dir.display());

        Ok(WriteReport { manifest, files, skipped: self.skipped })
    }
}

/// Group `accepted` by canonical key and write one CSV per group into `dir`,
/// plus `manifest.json`. Nothing is written if two keys share a file stem.
/// `dir` must already exist.
pub fn write_partitions(accepted: &DataSet, dir: &Path) -> Result<WriteReport> {
    if !dir.is_dir() {
        return Err(Error::MissingDirectory { path: dir.to_path_buf() });
    }
    PartitionPlan::new(accepted)?.commit(dir, false)
}

fn group_by_key(ds: &DataSet, key_ix: usize) -> (BTreeMap<String, Vec<Vec<String>>>, usize) {
    let mut groups: BTreeMap<String, Vec<Vec<String>>> = BTreeMap::new();
    let mut skipped = 0;
    for row in &ds.rows {
        match row.get(key_ix) {
            Some(key) if !key.is_empty() => groups.entry(key.clone()).or_default().push(row.clone()),
            _ => skipped += 1,
        }
    }
    (groups, skipped)
}

/// Distinct keys must not share a file stem.
fn check_stems<'a>(keys: impl Iterator<Item = &'a String>) -> Result<()> {
    let mut seen: HashMap<String, &String> = HashMap::new();
    for key in keys {
        let stem = partition_stem(key);
        if let Some(first) = seen.get(&stem) {
            return Err(Error::StemCollision {
                stem,
                first: (*first).clone(),
                second: key.clone(),
            });
        }
        seen.insert(stem, key);
    }
    Ok(())
}

fn write_manifest(manifest: &Manifest, dir: &Path) -> Result<()> {
    let path = dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(manifest)
        .map_err(|source| Error::Manifest { path: path.clone(), source })?;
    fs::write(&path, json).at(&path)
}

/// Remove the files a previous run listed in its manifest, and the manifest itself.
/// Returns how many partition files were removed. No manifest, nothing removed.
pub fn prune_previous(dir: &Path) -> Result<usize> {
    let path = dir.join(MANIFEST_FILE);
    if !path.is_file() {
        return Ok(0);
    }
    let manifest = read_manifest(dir)?;
    let mut removed = 0;
    for entry in &manifest.partitions {
        // Only bare file names are ours to delete.
        if Path::new(&entry.file).file_name() != Some(OsStr::new(&entry.file)) {
            log::warn!("manifest entry `{}` is not a plain file name; skipped", entry.file);
            continue;
        }
        let p = dir.join(&entry.file);
        match fs::remove_file(&p) {
            Ok(()) => removed += 1,
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(Error::io(&p, e)),
        }
    }
    fs::remove_file(&path).at(&path)?;
    log::debug!("pruned {removed} partition files from {}", dir.display());
    Ok(removed)
}

/* ---------------- Reading ---------------- */

/// Rebuild `(combo, count)` rows from the partition file names in `dir`.
///
/// The count is the suffix after the last `_`; the combo is the rest with
/// `_` turned back into spaces (`red_white_12.csv` → `("red white", 12)`).
/// Non-CSV files are ignored. Rows come back in directory order.
pub fn read_catalog(dir: &Path) -> Result<Vec<ComboCount>> {
    if !dir.is_dir() {
        return Err(Error::MissingDirectory { path: dir.to_path_buf() });
    }

    let mut out = Vec::new();
    for entry in fs::read_dir(dir).at(dir)? {
        let path = entry.at(dir)?.path();
        if !path.is_file() { continue; }
        if path.extension().and_then(|e| e.to_str()) != Some(PARTITION_EXT) { continue; }

        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        out.push(parse_file_name(&name)?);
    }
    Ok(out)
}

/// `navy_old_gold_3.csv` → `("navy old gold", 3)`
pub fn parse_file_name(name: &str) -> Result<ComboCount> {
    let bad = |reason: &str| Error::PartitionName { name: s!(name), reason: s!(reason) };

    let stem = name
        .strip_suffix(".csv")
        .ok_or_else(|| bad("missing .csv extension"))?;
    let (color_part, count_part) = stem
        .rsplit_once('_')
        .ok_or_else(|| bad("no `_` before the count"))?;
    let count = count_part
        .parse::<usize>()
        .map_err(|_| bad("count suffix is not an integer"))?;

    Ok(ComboCount::new(color_part.replace('_', " "), count))
}

/// Exact catalog from `manifest.json`.
pub fn read_manifest(dir: &Path) -> Result<Manifest> {
    if !dir.is_dir() {
        return Err(Error::MissingDirectory { path: dir.to_path_buf() });
    }
    let path = dir.join(MANIFEST_FILE);
    let text = fs::read_to_string(&path).at(&path)?;
    serde_json::from_str(&text).map_err(|source| Error::Manifest { path, source })
}
