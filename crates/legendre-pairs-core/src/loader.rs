//! Loading `label key` sources into collections.
//!
//! Each line holds at least two whitespace-separated fields: a label and a
//! comma-separated integer key. Fields after the second are ignored. Labels
//! are grouped by canonical vector, in order of first appearance.
//!
//! Loading is all-or-nothing: the first bad line aborts with an error and no
//! partial [`Collection`] is returned.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ScreenError, ScreenResult};
use crate::vector::VectorKey;

/// Distinct labels sharing one vector, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet(Vec<String>);

impl LabelSet {
    /// Append `label` unless it is already present.
    ///
    /// Returns `true` if the label was added.
    pub fn insert(&mut self, label: &str) -> bool {
        if self.0.iter().any(|l| l == label) {
            return false;
        }
        self.0.push(label.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a LabelSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Mapping from canonical vector to its labels for one input source.
///
/// Read-only once loaded. All vectors share one dimension.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    name: String,
    dimension: Option<usize>,
    entries: BTreeMap<VectorKey, LabelSet>,
}

impl Collection {
    /// Load a collection from a file path.
    ///
    /// # Errors
    ///
    /// - [`ScreenError::SourceUnreadable`] if the file cannot be opened or read
    /// - any error from [`Collection::from_reader`]
    pub fn load(path: impl AsRef<Path>) -> ScreenResult<Self> {
        let path = path.as_ref();
        debug!("Collection::load: path={}", path.display());
        let file = File::open(path).map_err(|e| ScreenError::SourceUnreadable {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_reader(&path.display().to_string(), BufReader::new(file))
    }

    /// Load a collection from any buffered reader.
    ///
    /// `name` identifies the source in error messages and logs.
    ///
    /// # Errors
    ///
    /// - [`ScreenError::SourceUnreadable`] on a read failure
    /// - [`ScreenError::MalformedLine`] for a line with fewer than two fields
    /// - [`ScreenError::MalformedInteger`] for a key token that is not an integer
    /// - [`ScreenError::DimensionMismatch`] if vector lengths differ
    pub fn from_reader<R: BufRead>(name: &str, reader: R) -> ScreenResult<Self> {
        let mut collection = Self {
            name: name.to_string(),
            ..Default::default()
        };
        let mut records = 0usize;

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|e| ScreenError::SourceUnreadable {
                path: PathBuf::from(name),
                source: e,
            })?;

            let mut fields = line.split_whitespace();
            let (label, raw_key) = match (fields.next(), fields.next()) {
                (Some(label), Some(raw_key)) => (label, raw_key),
                _ => {
                    return Err(ScreenError::MalformedLine {
                        source_name: name.to_string(),
                        line: line_no,
                        content: line.clone(),
                    })
                }
            };

            let key = VectorKey::parse(raw_key).map_err(|e| e.at_line(name, line_no))?;
            collection
                .insert(label, key)
                .map_err(|e| e.at_line(name, line_no))?;
            records += 1;
        }

        info!(
            "Loaded {}: records={}, vectors={}, labels={}, dimension={:?}",
            name,
            records,
            collection.len(),
            collection.label_count(),
            collection.dimension
        );
        Ok(collection)
    }

    fn insert(&mut self, label: &str, key: VectorKey) -> ScreenResult<()> {
        let actual = key.dimension();
        match self.dimension {
            Some(expected) if expected != actual => {
                return Err(ScreenError::DimensionMismatch {
                    expected,
                    actual,
                    context: self.name.clone(),
                });
            }
            Some(_) => {}
            None => self.dimension = Some(actual),
        }
        self.entries.entry(key).or_default().insert(label);
        Ok(())
    }

    /// Source name given at load time.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Common vector length, `None` for an empty collection.
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// Number of distinct vectors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total labels across all vectors.
    pub fn label_count(&self) -> usize {
        self.entries.values().map(LabelSet::len).sum()
    }

    /// Labels for `key`, if present.
    pub fn labels(&self, key: &VectorKey) -> Option<&LabelSet> {
        self.entries.get(key)
    }

    /// Distinct vectors in ascending lexicographic order.
    pub fn vectors(&self) -> impl Iterator<Item = &VectorKey> {
        self.entries.keys()
    }
}
