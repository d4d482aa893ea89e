use anyhow::Context;
use bank_ledger::{console::Console, run::run, telemetry};
use clap::Parser;
use std::{fs::File, io, path::PathBuf};

/// Manage checking and savings accounts from a text menu.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV script of operations to replay instead of showing the menu.
    /// Results are written to stdout as CSV.
    script: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set (logs go to stderr).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level);

    match cli.script {
        Some(path) => {
            let input = File::open(&path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            run(input, io::stdout().lock()).context("failed to write results")?;
        }
        None => {
            let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
            console.run().context("console input/output failed")?;
        }
    }

    Ok(())
}
