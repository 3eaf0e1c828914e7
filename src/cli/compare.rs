
use anyhow::ensure;
use clap::Args;
use itertools::Itertools;
use log::{info, warn};
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::core::{check_required_filename, AFTER_HELP, FULL_VERSION};
use crate::parsing::sample_table::sample_name_from_path;

#[derive(Args, Clone, Default, Serialize)]
#[clap(author, about,
    after_help = &**AFTER_HELP
)]
pub struct CompareSettings {
    #[clap(default_value = "")]
    #[clap(hide = true)]
    snp_matcher_version: String,

    /// Reference SNP panel, one per line: rs123456<tab>A
    #[clap(required = true)]
    #[clap(short = 'r')]
    #[clap(long = "reference")]
    #[clap(value_name = "TSV")]
    #[clap(help_heading = Some("Input/Output"))]
    pub reference_fn: PathBuf,

    /// One or more exported sample tables to compare
    #[clap(required = true)]
    #[clap(short = 's')]
    #[clap(long = "samples")]
    #[clap(value_name = "TABLE")]
    #[clap(num_args = 1..)]
    #[clap(help_heading = Some("Input/Output"))]
    pub sample_fns: Vec<PathBuf>,

    /// Output directory for the report files
    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output-dir")]
    #[clap(value_name = "DIR")]
    #[clap(help_heading = Some("Input/Output"))]
    pub output_folder: PathBuf,

    /// Prefix for all report files in the output directory
    #[clap(long = "output-prefix")]
    #[clap(value_name = "PREFIX")]
    #[clap(help_heading = Some("Input/Output"))]
    #[clap(default_value = "report")]
    pub output_prefix: String,

    /// Compares samples with different call counts over their shared loci instead of failing
    #[clap(long = "legacy-truncation")]
    #[clap(help_heading = Some("Compare parameters"))]
    #[clap(hide = true)]
    pub legacy_truncation: bool,

    /// Number of threads to use for parsing and comparing
    #[clap(long = "threads")]
    #[clap(value_name = "THREADS")]
    #[clap(default_value = "1")]
    pub threads: usize,

    /// Enable verbose output.
    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

pub fn check_compare_settings(mut settings: CompareSettings) -> anyhow::Result<CompareSettings> {
    // hard code the version in
    settings.snp_matcher_version = FULL_VERSION.clone();
    info!("snp-matcher version: {:?}", &settings.snp_matcher_version);
    info!("Sub-command: compare");
    info!("Inputs:");

    check_required_filename(&settings.reference_fn, "Reference panel")?;
    info!("\tReference panel: {:?}", &settings.reference_fn);

    ensure!(!settings.sample_fns.is_empty(), "at least one sample table is required");
    for sample_fn in settings.sample_fns.iter() {
        check_required_filename(sample_fn, "Sample table")?;
        info!("\tSample table: {sample_fn:?}");
    }

    // duplicate names are legal, but they make the report hard to read
    let duplicates: Vec<String> = settings.sample_fns.iter()
        .map(|f| sample_name_from_path(f))
        .duplicates()
        .collect();
    if !duplicates.is_empty() {
        warn!("Multiple sample tables share a name: {}", duplicates.iter().join(", "));
    }

    info!("Outputs:");
    ensure!(!settings.output_prefix.is_empty(), "--output-prefix must not be empty");
    ensure!(
        !settings.output_prefix.contains(std::path::MAIN_SEPARATOR),
        "--output-prefix must not contain a path separator: {:?}", settings.output_prefix
    );
    info!("\tOutput folder: {:?}", &settings.output_folder);
    info!("\tOutput prefix: {:?}", &settings.output_prefix);

    if settings.legacy_truncation {
        info!("Compare parameters:");
        warn!("\tLegacy truncation: ENABLED, samples with different call counts are compared over shared loci only");
    }

    if settings.threads == 0 {
        settings.threads = 1;
    }
    info!("Processing threads: {}", settings.threads);

    Ok(settings)
}
