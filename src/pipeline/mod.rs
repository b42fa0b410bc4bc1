//! Batch pipeline: reformat the amount column of every uploaded CSV.
//!
//! One run performs four sequential steps per file: list the input prefix,
//! read the object, reformat the `valor` column as currency text, write the
//! result under the output prefix. Files are handled one at a time in listing
//! order; the first failure aborts the remainder of the run, and outputs
//! already written stay in place.

pub mod currency;
pub mod table;

use anyhow::{Context, Result};
use csv::StringRecord;
use tracing::info;

use crate::storage::ObjectStore;
use crate::types::{AppError, AppResult};

use currency::format_amount;
use table::Table;

/// Prefix input objects are listed from.
pub const SOURCE_PREFIX: &str = "uploads/";
/// Prefix transformed objects are written to.
pub const DEST_PREFIX: &str = "processed/";
/// Column holding the amounts to reformat.
pub const VALOR_COLUMN: &str = "valor";

/// Outcome of a pipeline run: the bare filenames written under
/// [`DEST_PREFIX`], in processing order.
#[derive(Debug, Default)]
pub struct PipelineReport {
    pub processed: Vec<String>,
}

/// Run the full pipeline against `store`.
///
/// A run over an empty input prefix is a no-op. Output keys reuse the input
/// filename, so rerunning over the same inputs overwrites previous outputs.
pub async fn run(store: &dyn ObjectStore) -> Result<PipelineReport> {
    let keys = list_csv_keys(store).await?;
    if keys.is_empty() {
        info!("no CSV files found under {SOURCE_PREFIX}");
        return Ok(PipelineReport::default());
    }

    let mut report = PipelineReport::default();
    for key in keys {
        let filename = process_file(store, &key)
            .await
            .with_context(|| format!("processing {key}"))?;
        report.processed.push(filename);
    }

    info!(files = report.processed.len(), "pipeline run complete");
    Ok(report)
}

/// List input keys ending in `.csv`.
async fn list_csv_keys(store: &dyn ObjectStore) -> Result<Vec<String>> {
    let keys = store.list(SOURCE_PREFIX).await?;
    Ok(keys.into_iter().filter(|k| k.ends_with(".csv")).collect())
}

/// Fetch, transform, and store a single file. Returns the bare filename used
/// for the output key.
async fn process_file(store: &dyn ObjectStore, key: &str) -> Result<String> {
    let content = store.get(key).await?;
    let mut table = table::decode(&content)?;
    info!(key, rows = table.rows.len(), "extracted");

    reformat_valor(&mut table)?;

    let filename = key.rsplit('/').next().unwrap_or(key).to_string();
    let dest_key = format!("{DEST_PREFIX}{filename}");
    let encoded = table::encode(&table)?;
    store.put(&dest_key, &encoded).await?;
    info!(key = %dest_key, "stored");

    Ok(filename)
}

/// Reformat every value of the `valor` column as currency text. Fails with
/// [`AppError::Schema`] when the column is absent or a value does not parse
/// as a number.
pub fn reformat_valor(table: &mut Table) -> AppResult<()> {
    let idx = table
        .headers
        .iter()
        .position(|h| h == VALOR_COLUMN)
        .ok_or_else(|| AppError::Schema(format!("column '{VALOR_COLUMN}' not found")))?;

    for row in &mut table.rows {
        let raw = row.get(idx).unwrap_or("").trim();
        let amount: f64 = raw.parse().map_err(|_| {
            AppError::Schema(format!(
                "column '{VALOR_COLUMN}' has non-numeric value '{raw}'"
            ))
        })?;
        let formatted = format_amount(amount);

        let mut updated = StringRecord::new();
        for (i, field) in row.iter().enumerate() {
            if i == idx {
                updated.push_field(&formatted);
            } else {
                updated.push_field(field);
            }
        }
        *row = updated;
    }

    Ok(())
}
