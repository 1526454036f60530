//! Process command - extract fields from a single certificate file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use ebupot_core::{EbupotParser, FormatTag};

use super::config::load_config;
use super::input::load_text;
use super::output::{OutputFormat, format_result};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Skip classification and use this layout code (A-F, U, Z)
    #[arg(short = 't', long)]
    format_tag: Option<FormatTag>,

    /// Print data-quality warnings to stderr
    #[arg(long)]
    show_warnings: bool,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );

    pb.set_message("Loading text...");
    let text = load_text(&args.input, &config)?;

    pb.set_message("Extracting certificate fields...");
    let mut parser = EbupotParser::from_config(&config.extraction);
    if args.format_tag.is_some() {
        parser = parser.with_forced_format(args.format_tag);
    }
    let result = parser.parse(&text);

    pb.finish_and_clear();

    let output = format_result(&result, args.format, config.output.pretty_json)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_warnings && !result.warnings.is_empty() {
        eprintln!("{}", style("Warnings:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
