//! Corpus discovery: `<root>/<category>/<file>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};

use lda_gibbs::Tokenizer;

/// Every regular file one level below each subdirectory of `root`, sorted by path.
pub fn discover(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for dir in sorted_entries(root)? {
        if !dir.is_dir() {
            continue;
        }
        for path in sorted_entries(&dir)? {
            if path.is_file() {
                files.push(path);
            }
        }
    }
    Ok(files)
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)
        .with_context(|| format!("reading directory {}", dir.display()))?
        .map(|e| e.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("listing directory {}", dir.display()))?;
    entries.sort();
    Ok(entries)
}

/// Read and tokenize each file into a `(name, words)` pair.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn load<T: Tokenizer>(files: &[PathBuf], tokenizer: &T) -> Result<Vec<(String, Vec<String>)>> {
    let mut docs = Vec::with_capacity(files.len());
    for path in files {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let text = String::from_utf8_lossy(&bytes);
        let words = tokenizer.tokenize(&text);
        if words.is_empty() {
            warn!("{} has no tokens", path.display());
        }
        debug!("{}: {} tokens", path.display(), words.len());
        docs.push((path.display().to_string(), words));
    }
    Ok(docs)
}
