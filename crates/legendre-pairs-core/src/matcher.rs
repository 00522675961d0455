//! Two-pointer sweep for complementary vector pairs.
//!
//! A is walked ascending from the front and B descending from the back. At
//! each step the sum `A[i] + B[j]` is compared with the target vector at the
//! first component where they differ:
//!
//! - sum below target: `A[i]` has no partner at or below `B[j]`, advance `i`
//! - sum above target: `B[j]` has no partner at or after `A[i]`, retreat `j`
//! - all components equal: record the pair, move both pointers
//!
//! `x -> target - x` reverses lexicographic order, so each A-vector's unique
//! complement lies on the side the sweep keeps. Every pair is found exactly
//! once in at most `|A| + |B|` steps.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{ScreenError, ScreenResult};
use crate::sorter::SortedVectors;
use crate::vector::VectorKey;

/// A vector from A and a vector from B whose sum is the target vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchedPair<'v> {
    pub a: &'v VectorKey,
    pub b: &'v VectorKey,
}

/// Compare `a + b` with the constant vector `target` lexicographically.
///
/// Sums are widened to `i64`. Components past the shorter vector are ignored.
#[inline]
pub fn compare_sum(a: &VectorKey, b: &VectorKey, target: i32) -> Ordering {
    let target = i64::from(target);
    a.components()
        .iter()
        .zip(b.components())
        .map(|(&x, &y)| (i64::from(x) + i64::from(y)).cmp(&target))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Lazy two-pointer sweep over two sorted vector sequences.
///
/// Yields matches in ascending A order. Construct with [`ComplementSweep::new`],
/// which rejects inputs of different dimension.
#[derive(Debug, Clone)]
pub struct ComplementSweep<'v> {
    a: &'v [VectorKey],
    b: &'v [VectorKey],
    target: i32,
    i: usize,
    /// One past the current B index, so 0 means B is exhausted.
    j_end: usize,
    comparisons: u64,
}

impl<'v> ComplementSweep<'v> {
    /// Start a sweep for pairs summing to `target` in every component.
    ///
    /// # Errors
    ///
    /// [`ScreenError::DimensionMismatch`] if both inputs are non-empty and
    /// their dimensions differ.
    pub fn new(a: &'v SortedVectors, b: &'v SortedVectors, target: i32) -> ScreenResult<Self> {
        if let (Some(expected), Some(actual)) = (a.dimension(), b.dimension()) {
            if expected != actual {
                return Err(ScreenError::DimensionMismatch {
                    expected,
                    actual,
                    context: "collection A vs collection B".to_string(),
                });
            }
        }
        Ok(Self {
            a: a.as_slice(),
            b: b.as_slice(),
            target,
            i: 0,
            j_end: b.len(),
            comparisons: 0,
        })
    }

    /// Vector comparisons performed so far.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }
}

impl<'v> Iterator for ComplementSweep<'v> {
    type Item = MatchedPair<'v>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.i < self.a.len() && self.j_end > 0 {
            let a = &self.a[self.i];
            let b = &self.b[self.j_end - 1];
            self.comparisons += 1;

            match compare_sum(a, b, self.target) {
                Ordering::Less => self.i += 1,
                Ordering::Greater => self.j_end -= 1,
                Ordering::Equal => {
                    self.i += 1;
                    self.j_end -= 1;
                    return Some(MatchedPair { a, b });
                }
            }
        }
        None
    }
}

/// Every complementary pair between `a` and `b`, in ascending A order.
///
/// # Errors
///
/// [`ScreenError::DimensionMismatch`] if the dimensions differ.
pub fn find_complementary_pairs<'v>(
    a: &'v SortedVectors,
    b: &'v SortedVectors,
    target: i32,
) -> ScreenResult<Vec<MatchedPair<'v>>> {
    let mut sweep = ComplementSweep::new(a, b, target)?;
    let mut pairs = Vec::new();
    for pair in sweep.by_ref() {
        debug!("match: a=[{}] b=[{}]", pair.a, pair.b);
        pairs.push(pair);
    }

    info!(
        "Sweep complete: |A|={}, |B|={}, comparisons={}, matches={}",
        a.len(),
        b.len(),
        sweep.comparisons(),
        pairs.len()
    );
    Ok(pairs)
}

/// Reference O(|A|·|B|) matcher comparing every pair.
///
/// Same output and order as [`find_complementary_pairs`]; used to verify the
/// sweep and as a benchmark baseline.
pub fn find_pairs_exhaustive<'v>(
    a: &'v SortedVectors,
    b: &'v SortedVectors,
    target: i32,
) -> Vec<MatchedPair<'v>> {
    a.iter()
        .flat_map(|x| {
            b.iter()
                .filter(move |y| x.is_complementary(y, target))
                .map(move |y| MatchedPair { a: x, b: y })
        })
        .collect()
}
