//! Classify command - report the detected layout of certificate files.

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::warn;

use ebupot_core::classify;

use super::config::load_config;
use super::input::load_text;

/// Arguments for the classify command.
#[derive(Args)]
pub struct ClassifyArgs {
    /// Input files (PDF or plain text)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

pub async fn run(args: ClassifyArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let mut failures = 0;

    for path in &args.inputs {
        match load_text(path, &config) {
            Ok(text) => println!("{}\t{}", path.display(), classify(&text)),
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
                eprintln!("{} {}: {}", style("✗").red(), path.display(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} files could not be read", failures, args.inputs.len());
    }

    Ok(())
}
