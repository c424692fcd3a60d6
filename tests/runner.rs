use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tempfile::tempdir;
use wordlist_clean::ToolError;
use wordlist_clean::runner::{self, DatasetOutcome, ProjectPaths};

/// Log sink shared between a test and the subscriber it installs.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().expect("log buffer").clone()).expect("UTF-8 logs")
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn run_capturing_logs(paths: &ProjectPaths) -> (runner::RunReport, String) {
    let logs = CapturedLogs::default();
    let sink = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || sink.clone())
        .with_ansi(false)
        .finish();
    let report = tracing::subscriber::with_default(subscriber, || runner::run(paths));
    (report, logs.contents())
}

const GRADED_CSV: &str = "汉字,拼音,英文释义,词频,等级\n你,ni,you,1,1\n你,ni,you,1,1\n好,hao,good,1,1\n";
const BUSINESS_CSV: &str = "汉字,拼音,英文释义,场景标签,例句\n合同,hetong,contract,签约,\n";

#[test]
fn missing_input_skips_only_that_dataset() {
    let temp_dir = tempdir().expect("temporary directory");
    let paths = ProjectPaths::new(temp_dir.path());
    fs::write(&paths.graded.input, GRADED_CSV).expect("graded input written");

    let report = runner::run(&paths);

    assert!(matches!(
        report.entries[0].1,
        DatasetOutcome::Skipped(ToolError::MissingInput(_))
    ));
    assert!(matches!(report.entries[1].1, DatasetOutcome::Cleaned(_)));
    assert!(!paths.business.output.exists());
    assert!(paths.graded.output.exists());
    assert!(!report.has_failures());
    assert_eq!(report.kept("business"), 0);
    assert_eq!(report.kept("graded"), 2);
    assert_eq!(report.total_duplicates(), 1);
}

#[test]
fn failing_dataset_does_not_block_the_other() {
    let temp_dir = tempdir().expect("temporary directory");
    let paths = ProjectPaths::new(temp_dir.path());
    fs::write(&paths.business.input, "汉字,英文释义\n合同,contract\n").expect("business input");
    fs::write(&paths.graded.input, GRADED_CSV).expect("graded input written");

    let report = runner::run(&paths);

    assert!(matches!(
        report.entries[0].1,
        DatasetOutcome::Failed(ToolError::MissingColumn { .. })
    ));
    assert!(report.has_failures());
    assert!(paths.graded.output.exists());
}

#[test]
fn summary_reports_kept_rows_and_total_duplicates() {
    let temp_dir = tempdir().expect("temporary directory");
    let paths = ProjectPaths::new(temp_dir.path());
    fs::write(&paths.business.input, BUSINESS_CSV).expect("business input written");
    fs::write(&paths.graded.input, GRADED_CSV).expect("graded input written");

    let report = runner::run(&paths);
    let summary = report.summary_line();

    assert!(summary.contains("Business vocabulary: 1 rows"), "{summary}");
    assert!(summary.contains("HSK vocabulary: 2 rows"), "{summary}");
    assert!(summary.ends_with("duplicates skipped: 1"), "{summary}");

    let written = fs::read_to_string(&paths.business.output).expect("business output");
    assert_eq!(
        written,
        "汉字,拼音,英文释义,场景标签,例句,category\n合同,hétóng,contract,签约,,business\n"
    );
}

#[test]
fn skipped_and_failed_datasets_are_reported_once() {
    let temp_dir = tempdir().expect("temporary directory");
    let paths = ProjectPaths::new(temp_dir.path());
    fs::write(&paths.graded.input, "汉字,英文释义\n你,you\n").expect("graded input written");

    let (report, logs) = run_capturing_logs(&paths);

    assert!(report.has_failures());
    assert_eq!(logs.matches("input file not found").count(), 1, "{logs}");
    assert_eq!(logs.matches("cleaning failed").count(), 1, "{logs}");
    assert!(logs.contains(&paths.business.input.display().to_string()), "{logs}");
    assert!(logs.contains("HSK vocabulary"), "{logs}");
}

#[test]
fn project_root_sits_above_the_executable_directory() {
    assert_eq!(
        runner::project_root_for(Path::new("/opt/words/bin/wordlist-clean")),
        Some(PathBuf::from("/opt/words"))
    );
}

#[test]
fn cargo_built_binary_resolves_to_the_crate_root() {
    assert_eq!(
        runner::project_root_for(Path::new("/work/words/target/release/wordlist-clean")),
        Some(PathBuf::from("/work/words"))
    );
    assert_eq!(
        runner::project_root_for(Path::new("/work/words/target/debug/deps/runner-1a2b")),
        Some(PathBuf::from("/work/words"))
    );
}
