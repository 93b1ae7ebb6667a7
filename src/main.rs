use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tally_cli::config::TallyPaths;
use tally_cli::shell::Shell;
use tally_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Interactive personal finance tracker",
    long_about = "Tally keeps a running balance and a categorized transaction log \
                  in plain files, and reports spending by category and against \
                  your budget limit."
)]
struct Cli {
    /// Directory holding balance, transactions and settings
    #[arg(long, env = "TALLY_DATA_DIR", value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so they never mix with the menu
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let paths = TallyPaths::resolve(cli.data_dir)?;
    debug!(data_dir = %paths.data_dir().display(), "resolved data directory");
    let storage = Storage::new(paths)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&storage, stdin.lock(), stdout.lock()).run()?;

    Ok(())
}
