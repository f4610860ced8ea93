//! CSV Loader - restaurant table ingestion
//!
//! Reads a headered CSV, maps the configured columns by name and cleans each
//! row into a [`RestaurantRow`]. Malformed rows are skipped, never fatal:
//!
//! - short rows (a mapped column is missing)
//! - any mapped field longer than `max_field_bytes`
//! - empty names
//! - cost / rating / votes that do not parse, or non-finite numbers
//!
//! Only a missing header column or an unreadable file is an error.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use super::models::{LoadOutcome, RestaurantRow};
use crate::errors::{DinegraphError, Result};

/// Header names of the columns the loader reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnMapping {
    pub name: String,
    pub cuisines: String,
    pub cost: String,
    pub rating: String,

    /// Optional; rows get 0 votes when unmapped
    pub votes: Option<String>,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            name: "name".to_string(),
            cuisines: "cuisines".to_string(),
            cost: "approx_cost(for two people)".to_string(),
            rating: "rate".to_string(),
            votes: Some("votes".to_string()),
        }
    }
}

/// Loader configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderSettings {
    /// Longest accepted field, in bytes (review dumps in the source data run large)
    pub max_field_bytes: usize,

    /// Column mapping
    pub columns: ColumnMapping,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            max_field_bytes: 10_000_000,
            columns: ColumnMapping::default(),
        }
    }
}

/// Resolved header positions
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    name: usize,
    cuisines: usize,
    cost: usize,
    rating: usize,
    votes: Option<usize>,
}

/// Why a data row was skipped
#[derive(Debug, Error)]
enum RowRejection {
    #[error("row has {0} fields, mapped column missing")]
    ShortRow(usize),

    #[error("field '{column}' is {len} bytes")]
    OversizedField { column: &'static str, len: usize },

    #[error("empty name")]
    EmptyName,

    #[error("cannot parse {column} from '{raw}'")]
    InvalidNumber { column: &'static str, raw: String },

    #[error("unreadable row: {0}")]
    Malformed(#[from] csv::Error),
}

/// Restaurant CSV loader
///
/// # Example
/// ```ignore
/// let loader = CsvRestaurantLoader::new(&LoaderSettings::default());
/// let outcome = loader.load_path("zomato.csv")?;
/// println!("{} rows, {} skipped", outcome.rows.len(), outcome.skipped);
/// ```
#[derive(Debug, Clone)]
pub struct CsvRestaurantLoader {
    settings: LoaderSettings,
}

impl CsvRestaurantLoader {
    pub fn new(settings: &LoaderSettings) -> Self {
        Self {
            settings: settings.clone(),
        }
    }

    /// Load a CSV file from disk
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<LoadOutcome> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!("load_path: reading {}", path.display());
        self.load_reader(file)
    }

    /// Load CSV data from any reader
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<LoadOutcome> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let columns = self.resolve_columns(&headers)?;

        let mut outcome = LoadOutcome::default();
        for (offset, result) in reader.records().enumerate() {
            // Header is line 1
            let line = offset + 2;
            let parsed = result
                .map_err(RowRejection::from)
                .and_then(|record| self.parse_row(&record, columns));

            match parsed {
                Ok(row) => outcome.rows.push(row),
                Err(rejection) => {
                    debug!("skipping line {}: {}", line, rejection);
                    outcome.skipped += 1;
                }
            }
        }

        info!(
            "Loaded {} restaurants ({} rows skipped)",
            outcome.rows.len(),
            outcome.skipped
        );

        Ok(outcome)
    }

    fn resolve_columns(&self, headers: &csv::StringRecord) -> Result<ColumnIndex> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h.trim() == column)
                .ok_or_else(|| DinegraphError::missing_column(column, headers))
        };

        let mapping = &self.settings.columns;
        Ok(ColumnIndex {
            name: find(&mapping.name)?,
            cuisines: find(&mapping.cuisines)?,
            cost: find(&mapping.cost)?,
            rating: find(&mapping.rating)?,
            votes: mapping.votes.as_deref().map(find).transpose()?,
        })
    }

    fn parse_row(
        &self,
        record: &csv::StringRecord,
        columns: ColumnIndex,
    ) -> std::result::Result<RestaurantRow, RowRejection> {
        let name = self.field(record, columns.name, "name")?.trim();
        if name.is_empty() {
            return Err(RowRejection::EmptyName);
        }

        let cuisines = self.field(record, columns.cuisines, "cuisines")?;
        let cost = parse_cost(self.field(record, columns.cost, "cost")?)?;
        let rating = parse_rating(self.field(record, columns.rating, "rating")?)?;
        let votes = match columns.votes {
            Some(idx) => parse_votes(self.field(record, idx, "votes")?)?,
            None => 0,
        };

        Ok(RestaurantRow {
            name: name.to_string(),
            cuisines: cuisines.to_string(),
            cost,
            rating,
            votes,
        })
    }

    fn field<'r>(
        &self,
        record: &'r csv::StringRecord,
        idx: usize,
        column: &'static str,
    ) -> std::result::Result<&'r str, RowRejection> {
        let value = record
            .get(idx)
            .ok_or(RowRejection::ShortRow(record.len()))?;

        if value.len() > self.settings.max_field_bytes {
            return Err(RowRejection::OversizedField {
                column,
                len: value.len(),
            });
        }

        Ok(value)
    }
}

/// "1,200" → 1200.0; negative or non-finite costs are rejected
fn parse_cost(raw: &str) -> std::result::Result<f64, RowRejection> {
    let cleaned = raw.replace(',', "");
    parse_finite(cleaned.trim(), "cost").and_then(|cost| {
        if cost < 0.0 {
            Err(RowRejection::InvalidNumber {
                column: "cost",
                raw: raw.to_string(),
            })
        } else {
            Ok(cost)
        }
    })
}

/// "4.1" and "4.1/5" → 4.1
fn parse_rating(raw: &str) -> std::result::Result<f64, RowRejection> {
    let value = raw.split('/').next().unwrap_or(raw);
    parse_finite(value.trim(), "rating")
}

fn parse_votes(raw: &str) -> std::result::Result<u64, RowRejection> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| RowRejection::InvalidNumber {
            column: "votes",
            raw: raw.to_string(),
        })
}

fn parse_finite(raw: &str, column: &'static str) -> std::result::Result<f64, RowRejection> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RowRejection::InvalidNumber {
            column,
            raw: raw.to_string(),
        }),
    }
}
