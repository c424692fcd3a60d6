use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::Result;
use crate::model::WordTable;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Reads a UTF-8 CSV word list whose first row holds the column headers.
///
/// Rows with a different number of fields than the header are rejected, as is
/// any content that is not valid UTF-8.
pub fn read_table(path: &Path) -> Result<WordTable> {
    let reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    collect_table(reader)
}

/// Same as [`read_table`] but reads from an arbitrary source.
pub fn read_table_from<R: Read>(source: R) -> Result<WordTable> {
    let reader = ReaderBuilder::new().has_headers(true).from_reader(source);
    collect_table(reader)
}

fn collect_table<R: Read>(mut reader: csv::Reader<R>) -> Result<WordTable> {
    let columns = reader
        .headers()?
        .iter()
        .map(|header| header.trim_start_matches(BYTE_ORDER_MARK).to_string())
        .collect();
    let mut table = WordTable::new(columns);

    for record in reader.records() {
        let record = record?;
        table.push_row(record.iter().map(str::to_string).collect());
    }

    Ok(table)
}
