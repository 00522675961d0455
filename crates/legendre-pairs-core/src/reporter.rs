//! Rendering matched pairs as labelled records.
//!
//! A matched vector pair expands into the cartesian product of its labels:
//! outer loop over A's labels, inner loop over B's, both in stored order.
//!
//! # Text format
//!
//! ```text
//! a1	[ -1 -1 ]
//! b1	[ -1 -1 ]
//!
//! ```
//!
//! Label, a tab, then each component right-aligned in a
//! [`FIELD_WIDTH`]-character field inside brackets. Records are separated by
//! a blank line.

use std::io::Write;

use serde::Serialize;
use tracing::debug;

use crate::config::{OutputFormat, FIELD_WIDTH};
use crate::error::ScreenResult;
use crate::loader::Collection;
use crate::matcher::MatchedPair;
use crate::vector::VectorKey;

/// One labelled match: a label from A and a label from B.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord<'v> {
    pub a_label: &'v str,
    pub a_vector: &'v VectorKey,
    pub b_label: &'v str,
    pub b_vector: &'v VectorKey,
}

/// Expand matched pairs into records using each collection's labels.
///
/// Pairs must come from sorting `a` and `b`. A pair whose vector is missing
/// from either collection has no labels; it is skipped and logged.
pub fn expand_records<'v>(
    pairs: &[MatchedPair<'v>],
    a: &'v Collection,
    b: &'v Collection,
) -> Vec<MatchRecord<'v>> {
    let mut records = Vec::new();
    for pair in pairs {
        let (Some(a_labels), Some(b_labels)) = (a.labels(pair.a), b.labels(pair.b)) else {
            debug!(
                "expand_records: skip pair a=[{}] b=[{}], not in {} / {}",
                pair.a,
                pair.b,
                a.name(),
                b.name()
            );
            continue;
        };
        for a_label in a_labels.iter() {
            for b_label in b_labels.iter() {
                records.push(MatchRecord {
                    a_label,
                    a_vector: pair.a,
                    b_label,
                    b_vector: pair.b,
                });
            }
        }
    }
    records
}

/// Bracketed fixed-width rendering, e.g. `[ -1  0 12 ]`.
pub fn render_vector(vector: &VectorKey) -> String {
    let mut out = String::with_capacity(vector.dimension() * FIELD_WIDTH + 3);
    out.push('[');
    for c in vector.components() {
        out.push_str(&format!("{:>width$}", c, width = FIELD_WIDTH));
    }
    out.push_str(" ]");
    out
}

/// Write records as text blocks.
pub fn write_text<W: Write>(records: &[MatchRecord<'_>], out: &mut W) -> ScreenResult<()> {
    for r in records {
        writeln!(out, "{}\t{}", r.a_label, render_vector(r.a_vector))?;
        writeln!(out, "{}\t{}", r.b_label, render_vector(r.b_vector))?;
        writeln!(out)?;
    }
    Ok(())
}

/// Write records as one pretty-printed JSON array.
pub fn write_json<W: Write>(records: &[MatchRecord<'_>], out: &mut W) -> ScreenResult<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)?;
    Ok(())
}

/// Expand and write all matches in `format`. Returns the record count.
pub fn write_report<W: Write>(
    pairs: &[MatchedPair<'_>],
    a: &Collection,
    b: &Collection,
    format: OutputFormat,
    out: &mut W,
) -> ScreenResult<usize> {
    let records = expand_records(pairs, a, b);
    debug!(
        "write_report: pairs={}, records={}, format={:?}",
        pairs.len(),
        records.len(),
        format
    );
    match format {
        OutputFormat::Text => write_text(&records, out)?,
        OutputFormat::Json => write_json(&records, out)?,
    }
    out.flush()?;
    Ok(records.len())
}
