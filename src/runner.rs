// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{fs, path::Path};

use log::{info, warn};

use clap::Parser;

use crate::config::{find_config, AlignerConfig, OutputFormat};
use crate::errors::AlignError;
use crate::report::{stats_text, AlignmentReport, ErrorReport};
use crate::request::{align_seq_file, handle_request, AlignmentRequest};
use crate::seq::fasta::{read_fasta_file, read_fasta_stdin};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// FastA file; '-' reads standard input
    input: Option<String>,

    /// Alignment request file ({"fileUrl": ..., "userId": ...}), instead of INPUT
    #[arg(short, long, conflicts_with = "input")]
    request: Option<String>,

    /// Output format
    #[arg(short, long = "format",
        help = "Output format [text|json] (or just t|j); default: from config, else text",
        hide_possible_values = true,
    )]
    format: Option<OutputFormat>,

    /// User id, for the log (requests carry their own)
    #[arg(short, long = "user-id")]
    user_id: Option<String>,

    /// Maximum number of score matrix cells; 0 means no limit
    #[arg(short, long = "max-cells")]
    max_cells: Option<u64>,

    /// Config file (default: ~/.nwalignconfig, then ./.nwalignconfig)
    #[arg(short, long)]
    config: Option<String>,

    /// Append match/gap/identity statistics to text output
    #[arg(short, long)]
    stats: bool,
}

fn load_config(cli: &Cli) -> Result<AlignerConfig, AlignError> {
    let mut config = match &cli.config {
        Some(path) => AlignerConfig::from_file(Path::new(path))?,
        None => match find_config() {
            Some(path) => match AlignerConfig::from_file(&path) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warn!("Error reading {}: {}; using defaults", path.display(), e);
                    AlignerConfig::default()
                }
            },
            None => AlignerConfig::default(),
        },
    };
    if let Some(max) = cli.max_cells {
        config.max_cells = if max == 0 { None } else { Some(max) };
    }
    if let Some(fmt) = cli.format {
        config.output = fmt;
    }
    Ok(config)
}

fn compute_report(cli: &Cli, config: &AlignerConfig) -> Result<AlignmentReport, AlignError> {
    if let Some(request_fname) = &cli.request {
        let text = fs::read_to_string(request_fname)?;
        let request = AlignmentRequest::from_json(&text)?;
        return handle_request(&request, config);
    }
    let Some(input) = &cli.input else {
        return Err(AlignError::MissingParameter("input"));
    };
    if let Some(user) = &cli.user_id {
        info!("Alignment requested by user {}", user);
    }
    let seq_file = if input == "-" {
        read_fasta_stdin()?
    } else {
        read_fasta_file(input)?
    };
    align_seq_file(&seq_file, config)
}

fn print_report(
    report: &AlignmentReport,
    config: &AlignerConfig,
    stats: bool,
) -> Result<(), AlignError> {
    match config.output {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => {
            println!("{}", report.alignment_result);
            if stats {
                let aln = report.to_alignment();
                println!("{}", stats_text(&aln));
            }
        }
    }
    Ok(())
}

// JSON error document for `e`, if JSON output was asked for.
fn error_document(e: &AlignError, output: OutputFormat) -> Result<Option<String>, AlignError> {
    match output {
        OutputFormat::Json => Ok(Some(ErrorReport::from(e).to_json()?)),
        OutputFormat::Text => Ok(None),
    }
}

fn fail(e: AlignError, output: OutputFormat) -> Result<(), AlignError> {
    if let Some(doc) = error_document(&e, output)? {
        println!("{}", doc);
    }
    Err(e)
}

pub fn run() -> Result<(), AlignError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    let config = match load_config(&cli) {
        Ok(config) => config,
        // No config to take the format from, so only -f counts.
        Err(e) => return fail(e, cli.format.unwrap_or(OutputFormat::Text)),
    };
    info!("Output format: {}", config.output);

    match compute_report(&cli, &config) {
        Ok(report) => print_report(&report, &config, cli.stats),
        Err(e) => fail(e, config.output),
    }
}
