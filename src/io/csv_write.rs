use std::path::Path;

use csv::WriterBuilder;

use crate::error::Result;
use crate::model::WordTable;

/// Writes the table as UTF-8 CSV, header row first, columns in table order.
pub fn write_table(path: &Path, table: &WordTable) -> Result<()> {
    let mut writer = WriterBuilder::new().from_path(path)?;
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
