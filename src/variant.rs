//! Dataset configurations sharing the cleaning pipeline in [`crate::clean`].

use std::fmt;

use crate::model::{
    CATEGORY_COLUMN, EXAMPLE_COLUMN, FREQUENCY_COLUMN, GLOSS_COLUMN, HANZI_COLUMN, LEVEL_COLUMN,
    PINYIN_COLUMN, Record, SCENE_COLUMN,
};

/// Placeholder written into empty translation cells ("not available").
pub const GLOSS_PLACEHOLDER: &str = "暂无";
/// Scene label written into empty business scene cells ("general").
pub const GENERAL_SCENE: &str = "通用";
/// Category assigned to every business vocabulary row.
pub const BUSINESS_CATEGORY: &str = "business";
/// Prefix of graded vocabulary categories (`hsk1` .. `hsk6`).
pub const GRADED_CATEGORY_PREFIX: &str = "hsk";

/// Value substituted into an optional column when a cell is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefault {
    pub column: &'static str,
    pub value: &'static str,
}

/// Everything that distinguishes one word list from another.
#[derive(Debug, Clone, Copy)]
pub struct Variant {
    /// Short machine name used in logs.
    pub name: &'static str,
    /// Human-readable dataset name used in diagnostics and the summary.
    pub label: &'static str,
    /// Columns whose absence makes the table unusable.
    pub required: &'static [&'static str],
    /// Optional columns and the value used for missing cells.
    pub defaults: &'static [FieldDefault],
    /// Columns whose values are rewritten as plain integers.
    pub integer_columns: &'static [&'static str],
    /// Derives the `category` of a fully defaulted row.
    pub category: fn(&Record<'_>) -> String,
}

impl Variant {
    /// Business Chinese vocabulary.
    pub const BUSINESS: Variant = Variant {
        name: "business",
        label: "Business vocabulary",
        required: &[HANZI_COLUMN, PINYIN_COLUMN],
        defaults: &[
            FieldDefault {
                column: GLOSS_COLUMN,
                value: GLOSS_PLACEHOLDER,
            },
            FieldDefault {
                column: SCENE_COLUMN,
                value: GENERAL_SCENE,
            },
            FieldDefault {
                column: EXAMPLE_COLUMN,
                value: "",
            },
        ],
        integer_columns: &[],
        category: business_category,
    };

    /// HSK graded vocabulary.
    pub const GRADED: Variant = Variant {
        name: "graded",
        label: "HSK vocabulary",
        required: &[HANZI_COLUMN, PINYIN_COLUMN],
        defaults: &[
            FieldDefault {
                column: GLOSS_COLUMN,
                value: GLOSS_PLACEHOLDER,
            },
            FieldDefault {
                column: FREQUENCY_COLUMN,
                value: "3",
            },
            FieldDefault {
                column: LEVEL_COLUMN,
                value: "1",
            },
        ],
        integer_columns: &[LEVEL_COLUMN],
        category: graded_category,
    };

    /// Column every output row's category is written to.
    pub fn category_column(&self) -> &'static str {
        CATEGORY_COLUMN
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn business_category(_record: &Record<'_>) -> String {
    BUSINESS_CATEGORY.to_string()
}

// Levels are coerced before categories are derived, so the cell is already a
// plain integer here.
fn graded_category(record: &Record<'_>) -> String {
    let level = record.get(LEVEL_COLUMN).unwrap_or_default().trim();
    format!("{GRADED_CATEGORY_PREFIX}{level}")
}

/// Parses an integer cell. Float spellings such as `3.0` are accepted and
/// truncated toward zero.
pub fn parse_integer(cell: &str) -> Option<i64> {
    let cell = cell.trim();
    if let Ok(value) = cell.parse::<i64>() {
        return Some(value);
    }
    let value = cell.parse::<f64>().ok()?;
    value.is_finite().then(|| value.trunc() as i64)
}
