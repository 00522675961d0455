//! Full screening pipeline: load, sort, sweep, report.
//!
//! [`Screening`] owns both collections and their sorted vectors. It is built
//! only after both sources load cleanly and their dimensions agree, so once
//! it exists the report cannot fail for input reasons.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::config::ScreenConfig;
use crate::error::{ScreenError, ScreenResult};
use crate::loader::Collection;
use crate::matcher::{find_complementary_pairs, MatchedPair};
use crate::reporter::write_report;
use crate::sorter::SortedVectors;

/// Counts from one completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenSummary {
    pub vectors_a: usize,
    pub vectors_b: usize,
    pub pairs: usize,
    pub records: usize,
}

/// Loaded and sorted inputs for one screening run.
#[derive(Debug, Clone)]
pub struct Screening {
    config: ScreenConfig,
    a: Collection,
    b: Collection,
    sorted_a: SortedVectors,
    sorted_b: SortedVectors,
}

impl Screening {
    /// Load both sources from disk.
    ///
    /// # Errors
    ///
    /// Any loader error for either source, or
    /// [`ScreenError::DimensionMismatch`] if the sources disagree on length.
    pub fn load(
        a_path: impl AsRef<Path>,
        b_path: impl AsRef<Path>,
        config: ScreenConfig,
    ) -> ScreenResult<Self> {
        let a = Collection::load(a_path)?;
        let b = Collection::load(b_path)?;
        Self::from_collections(a, b, config)
    }

    /// Build from already loaded collections.
    ///
    /// # Errors
    ///
    /// [`ScreenError::DimensionMismatch`] if both are non-empty with
    /// different vector lengths.
    pub fn from_collections(
        a: Collection,
        b: Collection,
        config: ScreenConfig,
    ) -> ScreenResult<Self> {
        if let (Some(expected), Some(actual)) = (a.dimension(), b.dimension()) {
            if expected != actual {
                return Err(ScreenError::DimensionMismatch {
                    expected,
                    actual,
                    context: format!("{} vs {}", a.name(), b.name()),
                });
            }
        }
        let sorted_a = SortedVectors::from(&a);
        let sorted_b = SortedVectors::from(&b);
        Ok(Self {
            config,
            a,
            b,
            sorted_a,
            sorted_b,
        })
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn collection_a(&self) -> &Collection {
        &self.a
    }

    pub fn collection_b(&self) -> &Collection {
        &self.b
    }

    /// Complementary vector pairs, ascending by A-vector.
    pub fn pairs(&self) -> ScreenResult<Vec<MatchedPair<'_>>> {
        find_complementary_pairs(&self.sorted_a, &self.sorted_b, self.config.target)
    }

    /// Match and write the report in the configured format.
    pub fn write_report<W: Write>(&self, out: &mut W) -> ScreenResult<ScreenSummary> {
        let pairs = self.pairs()?;
        let records = write_report(&pairs, &self.a, &self.b, self.config.format, out)?;
        let summary = ScreenSummary {
            vectors_a: self.sorted_a.len(),
            vectors_b: self.sorted_b.len(),
            pairs: pairs.len(),
            records,
        };
        info!(
            "Screening complete: target={}, pairs={}, records={}",
            self.config.target, summary.pairs, summary.records
        );
        Ok(summary)
    }
}
