//! File scanning: decode repcode files line by line and tabulate codes.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use repcode_core::{parse, WordMap};
use tracing::info;

/// A repcode file on disk, decoded one line at a time.
pub struct RepFile {
    path: PathBuf,
}

impl RepFile {
    /// Wrap a path; the file is opened lazily by the accessors.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw lines with 1-based line numbers.
    pub fn lines(&self) -> Result<Vec<(usize, String)>> {
        let file = File::open(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;
        let mut lines = Vec::new();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line =
                line.with_context(|| format!("failed to read {}", self.path.display()))?;
            lines.push((idx + 1, line));
        }
        Ok(lines)
    }

    /// Decode every line, pairing each word map with its 1-based line number.
    ///
    /// The first parse error aborts the scan, tagged with file and line.
    pub fn codes(&self) -> Result<Vec<(usize, WordMap)>> {
        let mut codes = Vec::new();
        for (lineno, line) in self.lines()? {
            let words = parse(&line)
                .with_context(|| format!("{}:{}", self.path.display(), lineno))?;
            codes.push((lineno, words));
        }
        Ok(codes)
    }
}

/// Count `G<n>` / `M<n>` codes across files.
///
/// A line carrying both a `G` and an `M` word violates an invariant of the
/// dialect; this tool reports it as an error (the codec itself does not
/// care). Keys sort lexicographically, matching the report order.
pub fn tabulate_codes(paths: &[PathBuf]) -> Result<BTreeMap<String, u64>> {
    let mut seen_codes: BTreeMap<String, u64> = BTreeMap::new();
    for path in paths {
        let repfile = RepFile::new(path);
        info!(path = %repfile.path().display(), "scanning repcode file");
        for (lineno, words) in repfile.codes()? {
            if words.contains('G') && words.contains('M') {
                bail!(
                    "{}:{}: line carries both a G and an M word",
                    path.display(),
                    lineno
                );
            }
            for letter in ['G', 'M'] {
                if let Some(value) = words.get(letter) {
                    *seen_codes
                        .entry(format!("{}{}", letter, value))
                        .or_insert(0) += 1;
                }
            }
        }
    }
    Ok(seen_codes)
}
