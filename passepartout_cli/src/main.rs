mod args;

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use passepartout::batch::{self, Outcome};

use crate::args::Cli;

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    let _logger = common::setup_logging(&cli.log_level, cli.log_dir.as_deref())
        .context("Failed to initialize logging")?;

    if cli.interactive {
        cli.prompt(&mut io::stdin().lock(), &mut io::stdout())
            .context("Failed to read answers from stdin")?;
    }

    let config = cli.to_config();
    log::debug!("{:?}", config);

    let report = batch::process_directory_with(&config, |path, outcome| {
        if let Some(line) = progress_line(path, outcome, config.dry_run) {
            println!("{}", line);
        }
    })
    .with_context(|| format!("Failed to process {}", config.directory.display()))?;

    for (path, error) in &report.failed {
        eprintln!("Skipped {}: {}", path.display(), error);
    }
    for line in report.summary_lines() {
        println!("{}", line);
    }

    Ok(())
}

/// Stdout line for a handled file. Only bordered files are announced; a dry run reports
/// them as needing a border since nothing was written.
fn progress_line(path: &Path, outcome: Outcome, dry_run: bool) -> Option<String> {
    if outcome != Outcome::Bordered {
        return None;
    }

    let name = path
        .file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy();
    if dry_run {
        Some(format!("Needs border: {}", name))
    } else {
        Some(format!("Processed: {}", name))
    }
}
