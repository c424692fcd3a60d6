/// Header of the column holding the Chinese characters of an entry.
pub const HANZI_COLUMN: &str = "汉字";
/// Header of the column holding the romanised reading of an entry.
pub const PINYIN_COLUMN: &str = "拼音";
/// Header of the English translation column.
pub const GLOSS_COLUMN: &str = "英文释义";
/// Header of the business scene label column.
pub const SCENE_COLUMN: &str = "场景标签";
/// Header of the example sentence column.
pub const EXAMPLE_COLUMN: &str = "例句";
/// Header of the graded word frequency column.
pub const FREQUENCY_COLUMN: &str = "词频";
/// Header of the graded level column.
pub const LEVEL_COLUMN: &str = "等级";
/// Header of the derived category column.
pub const CATEGORY_COLUMN: &str = "category";

/// A word list held in memory: one header row and any number of data rows.
///
/// Every cell is kept as text so columns the cleaner does not know about
/// survive untouched. Rows always have exactly `columns.len()` cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WordTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl WordTable {
    /// Creates a table with the given headers and no rows.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row, padding or truncating it to the table width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Returns the position of the named column, appending it with empty
    /// cells when the table does not have it yet.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(index) = self.column_index(name) {
            return index;
        }
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.columns.len() - 1
    }

    /// Iterates over the rows as named-field records.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(|values| Record {
            columns: &self.columns,
            values,
        })
    }
}

/// Borrowed view over a single row that resolves cells by column name.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    columns: &'a [String],
    values: &'a [String],
}

impl<'a> Record<'a> {
    pub fn new(columns: &'a [String], values: &'a [String]) -> Self {
        Self { columns, values }
    }

    /// Returns the cell stored under `column`, or `None` if the table has no
    /// such column.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.columns
            .iter()
            .position(|name| name == column)
            .and_then(|index| self.values.get(index))
            .map(String::as_str)
    }
}

/// A cell counts as missing when it holds nothing but whitespace.
pub fn is_missing(cell: &str) -> bool {
    cell.trim().is_empty()
}
