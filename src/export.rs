use std::fs;
use std::path::{Path, PathBuf};

use chrono::prelude::*;
use clap::ValueEnum;
use csv::WriterBuilder;

use crate::dataset::Column;
use crate::metrics::Metric;
use crate::RankedRow;

/// Output formats for the full ranking table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Txt,
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }
}

///Render the human-readable summary printed to stdout: a header line naming
///the selection, then up to `top` rows as `<character>\t<score>\t<distribution>`.
pub fn render_summary(
    rows: &[RankedRow],
    source: Column,
    target: Column,
    metric: Metric,
    top: usize,
) -> String {
    let shown = top.min(rows.len());
    let mut out = format!(
        "Ranking {} -> {} by {}\nTop {} of {} characters:\n",
        source.label(),
        target.label(),
        metric.label(),
        shown,
        rows.len()
    );
    for row in rows.iter().take(top) {
        out.push_str(&format!(
            "  {}\t{:.2}\t{}\n",
            row.character,
            row.score,
            row.distribution.join(", ")
        ));
    }
    out
}

///Write the full ranking table into `dir` as
///`<stem>_<%Y%m%d_%H%M%S>_ranking.<ext>`. Returns the path written.
pub fn export_table(
    rows: &[RankedRow],
    dir: &Path,
    stem: &str,
    format: ExportFormat,
    source: Column,
    target: Column,
    metric: Metric,
) -> Result<PathBuf, String> {
    let local: DateTime<Local> = Local::now();
    let filename = format!(
        "{stem}_{}_ranking.{}",
        local.format("%Y%m%d_%H%M%S"),
        format.extension()
    );
    let path = dir.join(filename);

    match format {
        ExportFormat::Txt => {
            let text = render_summary(rows, source, target, metric, rows.len());
            fs::write(&path, text).map_err(|e| format!("Write {} failed: {e}", path.display()))?;
        }
        ExportFormat::Csv => write_delimited(rows, &path, b',')?,
        ExportFormat::Tsv => write_delimited(rows, &path, b'\t')?,
        ExportFormat::Json => {
            let json = serde_json::to_string_pretty(rows)
                .map_err(|e| format!("Serialize ranking failed: {e}"))?;
            fs::write(&path, json).map_err(|e| format!("Write {} failed: {e}", path.display()))?;
        }
    }
    Ok(path)
}

fn write_delimited(rows: &[RankedRow], path: &Path, delimiter: u8) -> Result<(), String> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|e| format!("Open {} failed: {e}", path.display()))?;
    writer
        .write_record(["character", "score", "distribution"])
        .map_err(|e| format!("Write {} failed: {e}", path.display()))?;
    for row in rows {
        writer
            .write_record([
                csv_safe_cell(row.character.clone()),
                format!("{:.2}", row.score),
                csv_safe_cell(row.distribution.join("; ")),
            ])
            .map_err(|e| format!("Write {} failed: {e}", path.display()))?;
    }
    writer
        .flush()
        .map_err(|e| format!("Write {} failed: {e}", path.display()))
}

///Neutralize cells that spreadsheet applications would interpret as
///formulas: a leading `=`, `+`, `-`, `@`, tab or CR gets a `'` prefix.
///Cells already starting with `'` are left untouched.
pub fn csv_safe_cell(cell: String) -> String {
    match cell.bytes().next() {
        Some(b'=') | Some(b'+') | Some(b'-') | Some(b'@') | Some(b'\t') | Some(b'\r') => {
            format!("'{cell}")
        }
        _ => cell,
    }
}
