//! Periodic autocorrelation keys for sequences over {+1, i, -1, j}.
//!
//! A sequence is written as a string of exponents of `i`: `0` is +1, `1` is
//! i, `2` is -1 and `3` is `j = -i`. The product `x[k] * conj(x[k + s])` has
//! exponent `(a[k] - a[k + s]) mod 4`, so the autocorrelation at shift `s` is
//! real exactly when the counts of exponents 1 and 3 agree, and then equals
//! `count(0) - count(2)`.
//!
//! The correlation key of a length-N sequence is its autocorrelations at
//! shifts `1..=N/2`. A record is the sequence followed by its key:
//!
//! ```text
//! 0022 0,-4
//! ```
//!
//! which is exactly the `label key` line the loader reads.

use std::f64::consts::PI;
use std::fmt;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, info};

use crate::error::{ScreenError, ScreenResult};
use crate::vector::VectorKey;

/// Number of letters in the alphabet {+1, i, -1, j}.
pub const ALPHABET_SIZE: u8 = 4;

/// Shortest sequence with a non-empty correlation key.
pub const MIN_SEQUENCE_LEN: usize = 2;

/// Tolerance for the spectral density bound.
const PSD_EPSILON: f64 = 1e-5;

/// Sequence over {+1, i, -1, j}, stored as exponents of `i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuaternarySequence(Vec<u8>);

impl QuaternarySequence {
    /// Parse a string of exponent digits `0..=3`.
    ///
    /// # Errors
    ///
    /// [`ScreenError::MalformedSequence`] for any other character or a
    /// sequence shorter than [`MIN_SEQUENCE_LEN`].
    pub fn parse(raw: &str) -> ScreenResult<Self> {
        let malformed = || ScreenError::MalformedSequence {
            source_name: String::new(),
            line: 0,
            content: raw.to_string(),
        };
        if raw.len() < MIN_SEQUENCE_LEN {
            return Err(malformed());
        }
        raw.bytes()
            .map(|b| match b {
                b'0'..=b'3' => Ok(b - b'0'),
                _ => Err(malformed()),
            })
            .collect::<ScreenResult<Vec<u8>>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn exponents(&self) -> &[u8] {
        &self.0
    }

    /// Periodic autocorrelation at `shift`, or `None` if it is not real.
    pub fn autocorrelation(&self, shift: usize) -> Option<i32> {
        let n = self.0.len();
        let mut counts = [0i32; ALPHABET_SIZE as usize];
        for k in 0..n {
            let a = self.0[k];
            let b = self.0[(k + shift) % n];
            counts[usize::from((a + ALPHABET_SIZE - b) % ALPHABET_SIZE)] += 1;
        }
        (counts[1] == counts[3]).then_some(counts[0] - counts[2])
    }

    /// Autocorrelations at shifts `1..=N/2`, or `None` if any is not real.
    pub fn correlation_key(&self) -> Option<VectorKey> {
        (1..=self.0.len() / 2)
            .map(|shift| self.autocorrelation(shift))
            .collect::<Option<Vec<i32>>>()
            .map(VectorKey::from)
    }
}

impl FromStr for QuaternarySequence {
    type Err = ScreenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for QuaternarySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.0 {
            write!(f, "{}", e)?;
        }
        Ok(())
    }
}

/// Whether every nonprincipal power spectral density is at most `2N + 2`.
///
/// `key` holds the autocorrelations at shifts `1..=N/2` of a length-`n`
/// sequence. For even `n` the middle shift is its own mirror and is counted
/// once, every other shift twice.
pub fn psd_within_bound(key: &VectorKey, n: usize) -> bool {
    let bound = (2 * n + 2) as f64;
    let half = n / 2;
    (1..=half).all(|freq| {
        let psd = n as f64
            + key
                .components()
                .iter()
                .enumerate()
                .map(|(idx, &c)| {
                    let shift = idx + 1;
                    let weight = if n % 2 == 0 && shift == half { 1.0 } else { 2.0 };
                    let angle = 2.0 * PI * (freq * shift) as f64 / n as f64;
                    weight * f64::from(c) * angle.cos()
                })
                .sum::<f64>();
        psd - bound <= PSD_EPSILON
    })
}

/// Which sequences produce a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CorrelationFilter {
    /// Also require [`psd_within_bound`]
    pub psd: bool,
}

/// Counts from one correlation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CorrelationSummary {
    pub sequences: usize,
    pub nonreal: usize,
    pub psd_rejected: usize,
    pub records: usize,
}

/// `label key` record for `sequence`, or `None` if its key is not real.
pub fn render_record(sequence: &QuaternarySequence) -> Option<String> {
    sequence
        .correlation_key()
        .map(|key| format!("{} {}", sequence, key))
}

/// Read one sequence per line (first whitespace field) and write the records
/// of those passing `filter`.
///
/// Nothing is written unless every line parses.
///
/// # Errors
///
/// - [`ScreenError::SourceUnreadable`] on a read failure
/// - [`ScreenError::MalformedLine`] for a blank line
/// - [`ScreenError::MalformedSequence`] for an invalid sequence
/// - [`ScreenError::Output`] if writing fails
pub fn write_correlation_records<R: BufRead, W: Write>(
    name: &str,
    reader: R,
    filter: CorrelationFilter,
    out: &mut W,
) -> ScreenResult<CorrelationSummary> {
    let mut summary = CorrelationSummary::default();
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| ScreenError::SourceUnreadable {
            path: PathBuf::from(name),
            source: e,
        })?;
        let Some(raw) = line.split_whitespace().next() else {
            return Err(ScreenError::MalformedLine {
                source_name: name.to_string(),
                line: line_no,
                content: line.clone(),
            });
        };

        let sequence = QuaternarySequence::parse(raw).map_err(|e| e.at_line(name, line_no))?;
        summary.sequences += 1;

        let Some(key) = sequence.correlation_key() else {
            debug!("skip {}: nonreal autocorrelation", sequence);
            summary.nonreal += 1;
            continue;
        };
        if filter.psd && !psd_within_bound(&key, sequence.len()) {
            debug!("skip {}: spectral density above bound", sequence);
            summary.psd_rejected += 1;
            continue;
        }
        records.push(format!("{} {}", sequence, key));
    }

    for record in &records {
        writeln!(out, "{}", record)?;
    }
    out.flush()?;
    summary.records = records.len();

    info!(
        "Correlated {}: sequences={}, nonreal={}, psd_rejected={}, records={}",
        name, summary.sequences, summary.nonreal, summary.psd_rejected, summary.records
    );
    Ok(summary)
}
