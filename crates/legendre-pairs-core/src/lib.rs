//! Complementary correlation screening for Legendre pair candidates
//!
//! Two collections of labelled integer vectors are searched for every pair
//! `(a, b)` with `a[k] + b[k] == -2` for all `k`. Both collections are sorted
//! lexicographically and swept with two pointers, one ascending through A and
//! one descending through B, so no pair is compared exhaustively.
//!
//! # Architecture
//!
//! - **vector**: canonical [`VectorKey`] parsing and ordering
//! - **loader**: `label key` sources into a [`Collection`]
//! - **sorter**: distinct vectors in lexicographic order
//! - **matcher**: the two-pointer sweep
//! - **reporter**: labelled text or JSON records
//! - **screen**: the full pipeline over two sources
//! - **correlation**: autocorrelation keys of {+1, i, -1, j} sequences, in
//!   the `label key` format the loader reads
//! - **config** / **error**: run configuration and [`ScreenError`]
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use legendre_pairs_core::{Collection, ScreenConfig, Screening};
//!
//! let a = Collection::from_reader("A", Cursor::new("a1 -1,-1\na2 0,-2\n")).unwrap();
//! let b = Collection::from_reader("B", Cursor::new("b1 -1,-1\nb2 -2,0\n")).unwrap();
//! let screening = Screening::from_collections(a, b, ScreenConfig::default()).unwrap();
//! assert_eq!(screening.pairs().unwrap().len(), 2);
//! ```

pub mod config;
pub mod correlation;
pub mod error;
pub mod loader;
pub mod matcher;
pub mod reporter;
pub mod screen;
pub mod sorter;
pub mod vector;

// Re-exports for convenience
pub use config::{OutputFormat, ScreenConfig, DEFAULT_TARGET, FIELD_WIDTH};
pub use correlation::{
    psd_within_bound, render_record, write_correlation_records, CorrelationFilter,
    CorrelationSummary, QuaternarySequence,
};
pub use error::{ScreenError, ScreenResult};
pub use loader::{Collection, LabelSet};
pub use matcher::{
    compare_sum, find_complementary_pairs, find_pairs_exhaustive, ComplementSweep, MatchedPair,
};
pub use reporter::{expand_records, render_vector, write_report, MatchRecord};
pub use screen::{ScreenSummary, Screening};
pub use sorter::SortedVectors;
pub use vector::VectorKey;
