use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tracing::{error, warn};

use crate::clean::{self, CleanSummary};
use crate::error::{Result, ToolError};
use crate::variant::Variant;

/// File name of the raw business vocabulary list.
pub const BUSINESS_INPUT: &str = "business_words.csv";
/// File name the cleaned business vocabulary is written to.
pub const BUSINESS_OUTPUT: &str = "business_words_clean.csv";
/// File name of the raw HSK vocabulary list.
pub const GRADED_INPUT: &str = "hsk_words.csv";
/// File name the cleaned HSK vocabulary is written to.
pub const GRADED_OUTPUT: &str = "hsk_words_clean.csv";

/// One word list to clean: its configuration and where it lives.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub variant: Variant,
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Locations of both word lists below a project root.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    pub business: Dataset,
    pub graded: Dataset,
}

impl ProjectPaths {
    pub fn new(root: &Path) -> Self {
        Self {
            business: Dataset {
                variant: Variant::BUSINESS,
                input: root.join(BUSINESS_INPUT),
                output: root.join(BUSINESS_OUTPUT),
            },
            graded: Dataset {
                variant: Variant::GRADED,
                input: root.join(GRADED_INPUT),
                output: root.join(GRADED_OUTPUT),
            },
        }
    }

    /// Datasets in processing order.
    pub fn datasets(&self) -> [&Dataset; 2] {
        [&self.business, &self.graded]
    }
}

/// Resolves the project root from the running executable, see
/// [`project_root_for`].
pub fn project_root_from_exe() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    project_root_for(&exe).ok_or_else(|| {
        ToolError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("no project root above {}", exe.display()),
        ))
    })
}

/// The project root is the directory above the one holding the executable,
/// e.g. `<root>/bin/wordlist-clean` resolves to `<root>`. A binary built by
/// cargo lives under `<root>/target/<profile>/`, so the parent of the nearest
/// `target` directory wins when there is one.
pub fn project_root_for(exe: &Path) -> Option<PathBuf> {
    let install_dir = exe.parent()?;
    let cargo_root = install_dir
        .ancestors()
        .find(|dir| dir.file_name().is_some_and(|name| name == "target"))
        .and_then(Path::parent);
    cargo_root
        .or_else(|| install_dir.parent())
        .map(Path::to_path_buf)
}

/// What happened to a single dataset during a run.
#[derive(Debug)]
pub enum DatasetOutcome {
    Cleaned(CleanSummary),
    /// The input table does not exist; nothing was written.
    Skipped(ToolError),
    Failed(ToolError),
}

/// Outcome of every dataset, in processing order.
#[derive(Debug)]
pub struct RunReport {
    pub entries: Vec<(Variant, DatasetOutcome)>,
}

impl RunReport {
    /// Kept row count of the given dataset, zero unless it was cleaned.
    pub fn kept(&self, variant_name: &str) -> usize {
        self.entries
            .iter()
            .find(|(variant, _)| variant.name == variant_name)
            .map(|(_, outcome)| match outcome {
                DatasetOutcome::Cleaned(summary) => summary.kept,
                _ => 0,
            })
            .unwrap_or_default()
    }

    /// Duplicates dropped across all cleaned datasets.
    pub fn total_duplicates(&self) -> usize {
        self.entries
            .iter()
            .filter_map(|(_, outcome)| match outcome {
                DatasetOutcome::Cleaned(summary) => Some(summary.duplicates),
                _ => None,
            })
            .sum()
    }

    pub fn has_failures(&self) -> bool {
        self.entries
            .iter()
            .any(|(_, outcome)| matches!(outcome, DatasetOutcome::Failed(_)))
    }

    /// One-line summary: kept rows per dataset and total duplicates skipped.
    pub fn summary_line(&self) -> String {
        let mut line = String::from("Word list cleaning finished.");
        for (variant, _) in &self.entries {
            let _ = write!(line, " {}: {} rows,", variant.label, self.kept(variant.name));
        }
        let _ = write!(line, " duplicates skipped: {}", self.total_duplicates());
        line
    }
}

/// Cleans every dataset independently. A missing input or a failing dataset
/// is reported once through `tracing` and does not stop the remaining
/// datasets.
pub fn run(paths: &ProjectPaths) -> RunReport {
    let entries = paths
        .datasets()
        .into_iter()
        .map(|dataset| (dataset.variant, run_dataset(dataset)))
        .collect();
    RunReport { entries }
}

fn run_dataset(dataset: &Dataset) -> DatasetOutcome {
    let label = dataset.variant.label;
    if !dataset.input.exists() {
        warn!(dataset = label, path = %dataset.input.display(), "input file not found, skipping");
        return DatasetOutcome::Skipped(ToolError::MissingInput(dataset.input.clone()));
    }

    match clean::clean(&dataset.input, &dataset.output, &dataset.variant) {
        Ok(summary) => DatasetOutcome::Cleaned(summary),
        Err(err) => {
            error!(dataset = label, error = %err, "cleaning failed");
            DatasetOutcome::Failed(err)
        }
    }
}
