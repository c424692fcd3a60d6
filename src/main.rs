use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordlist_clean::runner::{self, ProjectPaths};
use wordlist_clean::{Result, ToolError};

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when at least one dataset failed to clean.
fn run(cli: Cli) -> Result<bool> {
    init_logging()?;

    let root = match cli.root {
        Some(root) => root,
        None => runner::project_root_from_exe()?,
    };
    let report = runner::run(&ProjectPaths::new(&root));

    let rule = "=".repeat(50);
    println!("\n{rule}");
    println!("{}", report.summary_line());
    println!("{rule}");

    Ok(!report.has_failures())
}

fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wordlist_clean=info")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| ToolError::Logging(err.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Deduplicate and tone-annotate the business and HSK word lists."
)]
struct Cli {
    /// Project root holding the word lists. Defaults to the directory above
    /// the one containing this executable, or the crate root for a binary
    /// under cargo's `target/`.
    //
    // Only flag accepted; a bare invocation uses the derived root.
    #[arg(long)]
    root: Option<PathBuf>,
}
