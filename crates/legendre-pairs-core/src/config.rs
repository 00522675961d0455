//! Configuration for a screening run.
//!
//! Defaults reproduce the classic Legendre pair screen: every component of
//! `a + b` must equal -2, and matches are printed as fixed-width text blocks.

use serde::{Deserialize, Serialize};

/// Component value every position of `a + b` must equal.
pub const DEFAULT_TARGET: i32 = -2;

/// Width of one rendered vector component in text output.
pub const FIELD_WIDTH: usize = 3;

/// Rendering of matched records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bracketed fixed-width blocks separated by blank lines
    #[default]
    Text,
    /// One JSON array of match records
    Json,
}

/// Screening run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Target component value (default: -2)
    pub target: i32,
    /// Output rendering (default: text)
    pub format: OutputFormat,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            format: OutputFormat::Text,
        }
    }
}

impl ScreenConfig {
    /// Builder: set target component value.
    #[must_use]
    pub fn target(mut self, target: i32) -> Self {
        self.target = target;
        self
    }

    /// Builder: set output format.
    #[must_use]
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
