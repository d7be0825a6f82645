use crate::domain::model::{PlotSnapshot, StemLeafMap};
use crate::utils::error::{PlotError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const TITLE: &str = "Stem and Leaf Plot - Prime Numbers";
pub const PLOT_HEADING: &str = "Stem and Leaf Plot:";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub primes_separator: String,
    pub leaf_separator: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            primes_separator: ", ".to_string(),
            leaf_separator: " ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    /// Entry name inside the output bundle.
    pub fn file_name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "plot.txt",
            OutputFormat::Csv => "stem_leaf.csv",
            OutputFormat::Tsv => "stem_leaf.tsv",
            OutputFormat::Json => "plot.json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            other => Err(PlotError::InvalidConfigValueError {
                field: "output_formats".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: text, csv, tsv, json".to_string(),
            }),
        }
    }
}

pub fn format_primes(primes: &[u64], separator: &str) -> String {
    primes
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

fn join_leaves(leaves: &[u64], separator: &str) -> String {
    leaves
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// One `"{stem} | {leaves}"` line per stem, stems and leaves ascending.
pub fn format_rows(map: &StemLeafMap, leaf_separator: &str) -> Vec<String> {
    map.sorted_rows()
        .into_iter()
        .map(|(stem, leaves)| {
            format!("{} | {}", stem, join_leaves(&leaves, leaf_separator))
        })
        .collect()
}

/// The plot screen as plain text.
pub fn render_text(snapshot: &PlotSnapshot, options: &RenderOptions) -> String {
    let mut lines = vec![
        TITLE.to_string(),
        String::new(),
        format!("Prime numbers up to {}:", snapshot.limit),
        format_primes(&snapshot.primes, &options.primes_separator),
        String::new(),
        PLOT_HEADING.to_string(),
    ];
    lines.extend(format_rows(&snapshot.stem_leaf, &options.leaf_separator));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// `stem,leaves` table, one record per stem. Leaves are space separated.
pub fn render_delimited(map: &StemLeafMap, delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(["stem", "leaves"])?;
    for (stem, leaves) in map.sorted_rows() {
        writer.write_record([stem.to_string(), join_leaves(&leaves, " ")])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| PlotError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| PlotError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

#[derive(Debug, Serialize)]
struct StemRow {
    stem: u64,
    leaves: Vec<u64>,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    limit: i64,
    prime_count: usize,
    primes: &'a [u64],
    rows: Vec<StemRow>,
}

pub fn render_json(snapshot: &PlotSnapshot) -> Result<String> {
    let report = JsonReport {
        generated_at: Utc::now(),
        limit: snapshot.limit,
        prime_count: snapshot.primes.len(),
        primes: &snapshot.primes,
        rows: snapshot
            .stem_leaf
            .sorted_rows()
            .into_iter()
            .map(|(stem, leaves)| StemRow { stem, leaves })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn render(
    format: OutputFormat,
    snapshot: &PlotSnapshot,
    options: &RenderOptions,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(snapshot, options)),
        OutputFormat::Csv => render_delimited(&snapshot.stem_leaf, b','),
        OutputFormat::Tsv => render_delimited(&snapshot.stem_leaf, b'\t'),
        OutputFormat::Json => render_json(snapshot),
    }
}
