//! Key-value persistence for drafts, keyed by [`DateKey`].
//!
//! The Draft Store never touches a concrete backend; it is handed something
//! implementing [`DraftStorage`]. [`FileStorage`] keeps one Markdown file per
//! day on disk, [`MemoryStorage`] keeps everything in a map.

use crate::DateKey;
use crate::paths::{day_path, key_from_path, scan_dir_for_md_files};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub trait DraftStorage {
    /// Returns the stored text for `key`, or `None` if nothing was ever saved.
    fn load(&self, key: &DateKey) -> Result<Option<String>>;

    /// Creates or overwrites the text stored for `key`.
    fn save(&mut self, key: &DateKey, content: &str) -> Result<()>;

    /// Every key that currently has a stored draft, in ascending order.
    fn keys(&self) -> Result<Vec<DateKey>>;
}

impl<S: DraftStorage + ?Sized> DraftStorage for Box<S> {
    fn load(&self, key: &DateKey) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&mut self, key: &DateKey, content: &str) -> Result<()> {
        (**self).save(key, content)
    }

    fn keys(&self) -> Result<Vec<DateKey>> {
        (**self).keys()
    }
}

/// In-memory storage. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    drafts: BTreeMap<DateKey, String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `save` has been called.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl DraftStorage for MemoryStorage {
    fn load(&self, key: &DateKey) -> Result<Option<String>> {
        Ok(self.drafts.get(key).cloned())
    }

    fn save(&mut self, key: &DateKey, content: &str) -> Result<()> {
        self.writes += 1;
        self.drafts.insert(key.clone(), content.to_string());
        Ok(())
    }

    fn keys(&self) -> Result<Vec<DateKey>> {
        Ok(self.drafts.keys().cloned().collect())
    }
}

/// One raw-text file per day at `{root}/YYYY/MM/YYYY-MM-DD.md`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, key: &DateKey) -> PathBuf {
        day_path(&self.root, key)
    }
}

impl DraftStorage for FileStorage {
    fn load(&self, key: &DateKey) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading {}", path.display())),
        }
    }

    fn save(&mut self, key: &DateKey, content: &str) -> Result<()> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating parent directory {}", parent.display()))?;
        }
        fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "draft file written");
        Ok(())
    }

    fn keys(&self) -> Result<Vec<DateKey>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        let files = scan_dir_for_md_files(&self.root)
            .with_context(|| format!("scanning {}", self.root.display()))?;
        let mut keys: Vec<DateKey> = files.iter().filter_map(|p| key_from_path(p)).collect();
        keys.sort();
        keys.dedup();
        Ok(keys)
    }
}
