use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::error::{Result, ToolError};
use crate::io::{csv_read, csv_write};
use crate::model::{HANZI_COLUMN, PINYIN_COLUMN, Record, WordTable, is_missing};
use crate::tone;
use crate::variant::{Variant, parse_integer};

/// Row counts reported for one cleaned word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CleanSummary {
    /// Rows in the input table.
    pub original: usize,
    /// Rows written to the output table.
    pub kept: usize,
    /// Rows dropped as repeats of an earlier (characters, reading) pair.
    pub duplicates: usize,
}

/// Cleans the word list at `input` and writes the result to `output`.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display(), variant = %variant)
)]
pub fn clean(input: &Path, output: &Path, variant: &Variant) -> Result<CleanSummary> {
    let table = csv_read::read_table(input)?;
    info!(row_count = table.len(), "loaded word list");

    let (cleaned, summary) = clean_table(table, variant)?;
    csv_write::write_table(output, &cleaned)?;
    info!(
        kept = summary.kept,
        duplicates = summary.duplicates,
        "cleaned word list written"
    );
    Ok(summary)
}

/// Runs the in-memory part of the pipeline: column checks, deduplication,
/// defaults, integer coercion, tone completion and category derivation.
pub fn clean_table(table: WordTable, variant: &Variant) -> Result<(WordTable, CleanSummary)> {
    require_columns(&table, variant)?;
    let key = KeyColumns::locate(&table, variant)?;

    let original = table.len();
    let mut table = deduplicate(table, key);
    let kept = table.len();
    debug!(original, kept, "removed duplicate entries");

    fill_defaults(&mut table, variant);
    coerce_integers(&mut table, variant)?;
    annotate_readings(&mut table, key);
    assign_categories(&mut table, variant);

    let summary = CleanSummary {
        original,
        kept,
        duplicates: original - kept,
    };
    Ok((table, summary))
}

fn require_columns(table: &WordTable, variant: &Variant) -> Result<()> {
    for column in variant.required {
        column_position(table, variant, column)?;
    }
    Ok(())
}

fn column_position(table: &WordTable, variant: &Variant, column: &str) -> Result<usize> {
    table
        .column_index(column)
        .ok_or_else(|| ToolError::MissingColumn {
            dataset: variant.label.to_string(),
            column: column.to_string(),
        })
}

/// Positions of the identity columns. Columns are only ever appended, so the
/// positions stay valid for the whole pipeline.
#[derive(Debug, Clone, Copy)]
struct KeyColumns {
    hanzi: usize,
    pinyin: usize,
}

impl KeyColumns {
    fn locate(table: &WordTable, variant: &Variant) -> Result<Self> {
        Ok(Self {
            hanzi: column_position(table, variant, HANZI_COLUMN)?,
            pinyin: column_position(table, variant, PINYIN_COLUMN)?,
        })
    }
}

/// Keeps the first row of every (characters, reading) pair, preserving order.
fn deduplicate(table: WordTable, key: KeyColumns) -> WordTable {
    let WordTable { columns, rows } = table;

    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(rows.len());
    let rows = rows
        .into_iter()
        .filter(|row| seen.insert((row[key.hanzi].clone(), row[key.pinyin].clone())))
        .collect();

    WordTable { columns, rows }
}

fn fill_defaults(table: &mut WordTable, variant: &Variant) {
    for default in variant.defaults {
        let index = table.ensure_column(default.column);
        for row in &mut table.rows {
            if is_missing(&row[index]) {
                row[index] = default.value.to_string();
            }
        }
    }
}

fn coerce_integers(table: &mut WordTable, variant: &Variant) -> Result<()> {
    for column in variant.integer_columns {
        let Some(index) = table.column_index(column) else {
            continue;
        };
        for (row_number, row) in table.rows.iter_mut().enumerate() {
            let value = parse_integer(&row[index]).ok_or_else(|| ToolError::InvalidInteger {
                column: column.to_string(),
                row: row_number + 1,
                value: row[index].clone(),
            })?;
            row[index] = value.to_string();
        }
    }
    Ok(())
}

fn annotate_readings(table: &mut WordTable, key: KeyColumns) {
    let readings: Vec<String> = table
        .rows
        .iter()
        .map(|row| tone::annotate(&row[key.hanzi], &row[key.pinyin]))
        .collect();

    for (row, reading) in table.rows.iter_mut().zip(readings) {
        row[key.pinyin] = reading;
    }
}

fn assign_categories(table: &mut WordTable, variant: &Variant) {
    let index = table.ensure_column(variant.category_column());
    let categories: Vec<String> = table
        .rows
        .iter()
        .map(|values| (variant.category)(&Record::new(&table.columns, values)))
        .collect();

    for (row, category) in table.rows.iter_mut().zip(categories) {
        row[index] = category;
    }
}
