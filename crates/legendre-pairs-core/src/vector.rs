//! Canonical correlation vectors.
//!
//! A [`VectorKey`] is the integer form of a textual key such as `"-1,0,-3"`.
//! Keys that differ only in formatting (`"01"` vs `"1"`, `"+2"` vs `"2"`)
//! canonicalize to the same vector.
//!
//! Ordering is lexicographic with component 0 most significant, which is the
//! order the matcher's two-pointer sweep relies on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ScreenError, ScreenResult};

/// Separator between components in a textual key.
pub const KEY_SEPARATOR: char = ',';

/// Canonical integer form of a correlation vector.
///
/// Immutable once constructed. Derived `Ord` on the inner `Vec` compares the
/// first differing component, so for equal-length vectors it is exactly the
/// lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VectorKey(Vec<i32>);

impl VectorKey {
    /// Canonicalize a comma-separated key.
    ///
    /// # Errors
    ///
    /// [`ScreenError::MalformedInteger`] naming the first token that is not a
    /// valid `i32`. Empty tokens are malformed, so `""` and `"1,,2"` fail.
    pub fn parse(raw: &str) -> ScreenResult<Self> {
        raw.split(KEY_SEPARATOR)
            .map(|token| {
                token
                    .parse::<i32>()
                    .map_err(|_| ScreenError::MalformedInteger {
                        source_name: String::new(),
                        line: 0,
                        token: token.to_string(),
                    })
            })
            .collect::<ScreenResult<Vec<i32>>>()
            .map(Self)
    }

    /// Number of components (L).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    /// Components in order.
    #[inline]
    pub fn components(&self) -> &[i32] {
        &self.0
    }

    /// Whether every component of `self + other` equals `target`.
    ///
    /// Vectors of different dimension are never complementary.
    pub fn is_complementary(&self, other: &VectorKey, target: i32) -> bool {
        self.dimension() == other.dimension()
            && self
                .0
                .iter()
                .zip(&other.0)
                .all(|(&a, &b)| i64::from(a) + i64::from(b) == i64::from(target))
    }
}

impl From<Vec<i32>> for VectorKey {
    fn from(components: Vec<i32>) -> Self {
        Self(components)
    }
}

impl FromStr for VectorKey {
    type Err = ScreenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders the canonical textual key, e.g. `-1,0,-3`.
impl fmt::Display for VectorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, c) in self.0.iter().enumerate() {
            if k > 0 {
                write!(f, "{}", KEY_SEPARATOR)?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
