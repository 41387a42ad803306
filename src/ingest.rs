//! Edge-record ingestion from tabular CSV text.
//!
//! The expected header carries `Order`, `Destination` and `Distance`
//! columns (the upstream export's schema); column order is free and extra
//! columns are ignored. Rows that fail validation are reported with their
//! line number and never reach the graph layer.

use serde::{Deserialize, Serialize};

/// One validated edge row: a directed connection and its distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// Errors produced while parsing tabular edge data
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum IngestError {
    #[error("header must contain the Order, Destination and Distance columns")]
    MissingColumns,

    #[error("line {line}: expected at least {expected} fields, found {found}")]
    RowTooShort {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: empty {column} label")]
    EmptyLabel { line: usize, column: &'static str },

    #[error("line {line}: cannot parse distance {value:?}")]
    BadWeight { line: usize, value: String },
}

const SOURCE_COLUMN: &str = "Order";
const TARGET_COLUMN: &str = "Destination";
const WEIGHT_COLUMN: &str = "Distance";

/// Parses CSV text into edge records.
///
/// The first non-empty line is the header; blank lines are skipped. Line
/// numbers in errors are 1-based positions in the original text.
pub fn parse_csv(content: &str) -> Result<Vec<EdgeRecord>, IngestError> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let header = match lines.next() {
        Some((_, header)) => header,
        None => return Err(IngestError::MissingColumns),
    };

    let columns: Vec<&str> = header.split(',').map(str::trim).collect();
    let source_idx = column_index(&columns, SOURCE_COLUMN)?;
    let target_idx = column_index(&columns, TARGET_COLUMN)?;
    let weight_idx = column_index(&columns, WEIGHT_COLUMN)?;
    let expected = source_idx.max(target_idx).max(weight_idx) + 1;

    let mut records = Vec::new();

    for (line, row) in lines {
        let fields: Vec<&str> = row.split(',').map(str::trim).collect();
        if fields.len() < expected {
            return Err(IngestError::RowTooShort {
                line,
                expected,
                found: fields.len(),
            });
        }

        let source = fields[source_idx];
        if source.is_empty() {
            return Err(IngestError::EmptyLabel {
                line,
                column: SOURCE_COLUMN,
            });
        }

        let target = fields[target_idx];
        if target.is_empty() {
            return Err(IngestError::EmptyLabel {
                line,
                column: TARGET_COLUMN,
            });
        }

        let weight: f64 = fields[weight_idx].parse().map_err(|_| IngestError::BadWeight {
            line,
            value: fields[weight_idx].to_string(),
        })?;

        records.push(EdgeRecord {
            source: source.to_string(),
            target: target.to_string(),
            weight,
        });
    }

    Ok(records)
}

fn column_index(columns: &[&str], name: &str) -> Result<usize, IngestError> {
    columns
        .iter()
        .position(|&column| column == name)
        .ok_or(IngestError::MissingColumns)
}
