#![forbid(unsafe_code)]
//! # Character Correspondence Analysis
//!
//! Ranks the characters of one writing system by how unevenly their
//! correspondences in another writing system are distributed.
//!
//! The dataset is a table of correspondence records, one row per attested
//! pairing of a Japanese romanized reading, a Korean Hangul block and a
//! Mandarin romanization (with and without tone marks). Grouping the rows by
//! one column and counting the distinct values of another yields a frequency
//! distribution per source character; a concentration metric condenses each
//! distribution into a single score.
//!
//! ## Example
//! ```
//! use char_analysis::{rank, Column, Metric, Record};
//!
//! let row = |r: &str, h: &str| Record {
//!     katakana_romaji: r.to_string(),
//!     hangul: h.to_string(),
//!     toneless_pinyin: "gan".to_string(),
//!     mandarin: "gān".to_string(),
//! };
//! let records = vec![row("ka", "가"), row("ka", "가"), row("ka", "간")];
//!
//! let rows = rank(
//!     &records,
//!     Column::KatakanaRomaji,
//!     Column::Hangul,
//!     Metric::MaxProportion,
//! )
//! .unwrap();
//!
//! assert_eq!(rows[0].character, "ka");
//! assert_eq!(rows[0].score, 0.67);
//! assert_eq!(rows[0].distribution, vec!["가 (2)", "간 (1)"]);
//! ```

pub mod dataset;
pub mod export;
pub mod metrics;

pub use dataset::{Column, Record, load_dataset};
pub use export::{ExportFormat, csv_safe_cell, export_table, render_summary};
pub use metrics::Metric;

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

/// One row of the ranked result table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRow {
    /// The source-column value this group was built from.
    pub character: String,
    /// Metric score, rounded to 2 decimal places.
    pub score: f64,
    /// Target values with counts, rendered `"<value> (<count>)"`,
    /// most frequent first; ties keep encounter order.
    pub distribution: Vec<String>,
}

/// Rank all distinct `source`-column values by how unevenly their
/// `target`-column correspondences are distributed.
///
/// Records with an empty value in either selected column are skipped; an
/// empty (or fully skipped) table yields an empty result, not an error.
/// Selecting the same column twice is rejected before any grouping happens.
///
/// The result is sorted by score descending. The sort is stable and groups
/// are built in first-appearance order, so equal scores keep the order in
/// which their source values first occur in the dataset.
pub fn rank(
    records: &[Record],
    source: Column,
    target: Column,
    metric: Metric,
) -> Result<Vec<RankedRow>, String> {
    if source == target {
        return Err("Please select two different languages.".to_string());
    }

    //partition by source value, keeping first-appearance order
    let mut group_index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<&Record>)> = Vec::new();
    for record in records {
        let key = record.value(source);
        if key.is_empty() || record.value(target).is_empty() {
            continue;
        }
        match group_index.get(key) {
            Some(&i) => groups[i].1.push(record),
            None => {
                group_index.insert(key.to_string(), groups.len());
                groups.push((key.to_string(), vec![record]));
            }
        }
    }

    let mut rows: Vec<RankedRow> = Vec::with_capacity(groups.len());
    for (character, members) in groups {
        //count target values, keeping encounter order for tie-breaking
        let mut count_index: HashMap<&str, usize> = HashMap::new();
        let mut distribution: Vec<(&str, u64)> = Vec::new();
        for record in &members {
            let value = record.value(target);
            match count_index.get(value) {
                Some(&i) => distribution[i].1 += 1,
                None => {
                    count_index.insert(value, distribution.len());
                    distribution.push((value, 1));
                }
            }
        }

        let counts: Vec<u64> = distribution.iter().map(|&(_, count)| count).collect();
        let score = metric.score(&counts);

        //stable sort: equal counts keep encounter order
        distribution.sort_by(|a, b| b.1.cmp(&a.1));
        let rendered = distribution
            .iter()
            .map(|(value, count)| format!("{value} ({count})"))
            .collect();

        rows.push(RankedRow {
            character,
            score,
            distribution: rendered,
        });
    }

    //scores are finite by construction; stable sort keeps
    //first-appearance order among equal scores
    rows.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    //presentation rounding; the unrounded score is not retained
    for row in &mut rows {
        row.score = round2(row.score);
    }

    Ok(rows)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
