#![forbid(unsafe_code)]
//! # Character Correspondence CLI
//!
//! Command-line interface for the `char_analysis` crate. It loads a
//! pre-built correspondence dataset, ranks the characters of one writing
//! system by how unevenly their counterparts in another writing system are
//! distributed, prints a top-N summary and exports the full table.
//!
//! ## Example
//! ```bash
//! cargo run --release -- triolingo.csv \
//!     --source katakana-romaji --target hangul \
//!     --metric inequality-score --export-format csv
//! ```
//!
//! See `--help` for the available columns and metrics.

use clap::Parser;
use log::error;
use std::path::{Path, PathBuf};
use std::process;

use char_analysis::{
    Column, ExportFormat, Metric, export_table, load_dataset, rank, render_summary,
};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Correspondence dataset to analyze (.csv or .tsv)
    dataset: PathBuf,

    /// Writing system used as the grouping key
    #[arg(long, value_enum)]
    source: Column,

    /// Writing system whose distribution is analyzed within each group
    #[arg(long, value_enum)]
    target: Column,

    /// Concentration metric to rank by
    #[arg(long, value_enum, default_value = "inequality-score")]
    metric: Metric,

    /// Output format for export (txt, csv, tsv, json)
    #[arg(long, value_enum, default_value = "txt")]
    export_format: ExportFormat,

    /// Number of rows shown in the stdout summary
    #[arg(long, default_value_t = 20)]
    top: usize,

    /// Print the summary only, without writing an export file
    #[arg(long, default_value_t = false)]
    no_export: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let records = match load_dataset(&cli.dataset) {
        Ok(records) => records,
        Err(e) => {
            error!("Error: {e}");
            process::exit(1);
        }
    };

    let rows = match rank(&records, cli.source, cli.target, cli.metric) {
        Ok(rows) => rows,
        Err(e) => {
            error!("Error: {e}");
            process::exit(1);
        }
    };

    print!(
        "{}",
        render_summary(&rows, cli.source, cli.target, cli.metric, cli.top)
    );

    if !cli.no_export {
        // Exports land next to the dataset file.
        let dir = match cli.dataset.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let stem = cli
            .dataset
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("dataset");
        match export_table(
            &rows,
            dir,
            stem,
            cli.export_format,
            cli.source,
            cli.target,
            cli.metric,
        ) {
            Ok(path) => println!("Results written to {}", path.display()),
            Err(e) => {
                error!("Error: {e}");
                process::exit(1);
            }
        }
    }
}
