use std::fmt;
use std::fs::File;
use std::path::Path;

use clap::ValueEnum;
use csv::ReaderBuilder;
use serde::Deserialize;

/// One row of the pre-built correspondence dataset.
///
/// Every field holds one character (or one romanized reading) of the same
/// underlying correspondence in a distinct writing-system representation.
/// Repeated values across rows encode the real-world one-to-many and
/// many-to-one mappings between the scripts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    /// Romanized Japanese syllabary reading
    pub katakana_romaji: String,
    /// Korean syllabic block (Unihan `kHangul`)
    #[serde(rename = "kHangul")]
    pub hangul: String,
    /// Mandarin romanization with tone marks stripped
    pub toneless_pinyin: String,
    /// Mandarin romanization with tone marks (Unihan `kMandarin`)
    #[serde(rename = "kMandarin")]
    pub mandarin: String,
}

impl Record {
    /// Value of the given column in this record.
    pub fn value(&self, column: Column) -> &str {
        match column {
            Column::KatakanaRomaji => &self.katakana_romaji,
            Column::Hangul => &self.hangul,
            Column::TonelessPinyin => &self.toneless_pinyin,
            Column::Mandarin => &self.mandarin,
        }
    }
}

/// The writing-system representations available as grouping key or
/// counted target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Column {
    KatakanaRomaji,
    Hangul,
    TonelessPinyin,
    Mandarin,
}

impl Column {
    /// Human-readable label, as shown in summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Column::KatakanaRomaji => "Japanese (Romaji)",
            Column::Hangul => "Korean (Hangul)",
            Column::TonelessPinyin => "Chinese (tone-less Pinyin)",
            Column::Mandarin => "Chinese (Pinyin)",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Load the full correspondence table from a delimited file.
///
/// `.tsv` files are read tab-separated, everything else comma-separated.
/// Expects the headers `katakana_romaji`, `kHangul`,
/// `toneless_pinyin`, `kMandarin`. The table is read wholly into memory;
/// queries never mutate it.
pub fn load_dataset(path: &Path) -> Result<Vec<Record>, String> {
    let delimiter = match path.extension().and_then(|e| e.to_str()) {
        Some("tsv") => b'\t',
        _ => b',',
    };
    let file = File::open(path).map_err(|e| format!("Open {} failed: {e}", path.display()))?;
    let mut reader = ReaderBuilder::new().delimiter(delimiter).from_reader(file);
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: Record = row.map_err(|e| format!("Parse {} failed: {e}", path.display()))?;
        records.push(record);
    }
    Ok(records)
}
