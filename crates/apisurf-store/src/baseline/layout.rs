//! Baseline layout discovery

use crate::config::BaselineConfig;
use crate::errors::{io_error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// The baseline files of a program root, each group in sorted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaselineLayout {
    /// Frozen release files, `<dir>/<prefix>*.txt`.
    pub current: Vec<PathBuf>,
    /// In-progress additions, `<next_dir>/*.txt`.
    pub next: Vec<PathBuf>,
    /// Acknowledged removals. May not exist.
    pub exceptions: PathBuf,
}

impl BaselineLayout {
    /// Find the baseline files under `root`. Missing directories contribute
    /// no files.
    ///
    /// # Errors
    ///
    /// `Io` if a directory exists but cannot be listed.
    pub fn discover(root: &Path, config: &BaselineConfig) -> Result<Self> {
        let current = list_txt(&root.join(&config.dir), &config.current_prefix)?;
        let next = list_txt(&root.join(&config.next_dir), "")?;
        Ok(Self {
            current,
            next,
            exceptions: root.join(&config.exceptions),
        })
    }

    /// Current files followed by next files.
    pub fn required_files(&self) -> impl Iterator<Item = &PathBuf> {
        self.current.iter().chain(self.next.iter())
    }
}

fn list_txt(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(io_error("discover_baseline", dir, e)),
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| io_error("discover_baseline", dir, e))?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with(prefix) && name.ends_with(".txt") && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
